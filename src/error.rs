//! Error types for RapidHarness to E3.series conversion.
//!
//! Only fatal conditions travel through [`ConvertError`]; recoverable
//! per-row findings are accumulated in the issue log instead and never
//! interrupt the batch.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the converter.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Not a workbook (no [Sheet] headers found): {path}")]
    NotAWorkbook { path: PathBuf },

    #[error("Missing '{name}' sheet in workbook")]
    SheetNotFound { name: String },

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Line break in cell text: {value:?}")]
    MultilineCell { value: String },

    #[error("Invalid lookup table {path}: {message}")]
    LookupTable { path: PathBuf, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
