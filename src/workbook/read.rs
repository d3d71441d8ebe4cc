//! Reader for the sectioned workbook format.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ConvertError, Result};

use super::{Sheet, Workbook};

/// Read a workbook from a sectioned text file.
///
/// Each sheet opens with a `[Sheet Name]` header line and every line after
/// it is one row, encoded as a CSV record. Line position is row position:
/// the first line after a header is row 1 of that sheet, so an empty line
/// still advances the row counter. Empty fields and empty lines read back
/// as blank cells, and every line counts toward the sheet's row extent,
/// trailing blank lines included. Lines before the first header are
/// ignored.
pub fn read_file(path: &Path) -> Result<Workbook> {
    if !path.exists() {
        return Err(ConvertError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(ConvertError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let workbook = parse(&content)?;
    if workbook.sheets().is_empty() {
        return Err(ConvertError::NotAWorkbook {
            path: path.to_path_buf(),
        });
    }

    debug!(
        "read workbook from {}: sheets {:?}",
        path.display(),
        workbook.sheet_names()
    );
    Ok(workbook)
}

/// Parse workbook content already held in memory.
pub fn parse(content: &str) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    // Sheet under construction and the row number its next line maps to.
    let mut current: Option<(Sheet, u32)> = None;

    for (index, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            if let Some((mut sheet, next_row)) = current.take() {
                sheet.extend_to_row(next_row - 1);
                workbook.push_sheet(sheet);
            }
            let name = trimmed[1..trimmed.len() - 1].to_string();
            current = Some((Sheet::new(name), 1));
            continue;
        }

        let Some((sheet, next_row)) = current.as_mut() else {
            continue;
        };

        let row = *next_row;
        *next_row += 1;

        for (col, field) in parse_record(line, index + 1)?.into_iter().enumerate() {
            if !field.is_empty() {
                sheet.set_cell(row, col as u32 + 1, field);
            }
        }
    }

    if let Some((mut sheet, next_row)) = current {
        sheet.extend_to_row(next_row - 1);
        workbook.push_sheet(sheet);
    }

    Ok(workbook)
}

/// Decode one line as a single CSV record.
fn parse_record(line: &str, line_number: usize) -> Result<Vec<String>> {
    if line.is_empty() {
        return Ok(Vec::new());
    }

    // The line splitter has already consumed LF and CRLF terminators. A
    // carriage return left inside the line would act as a second record
    // terminator (or smuggle a line break into cell text), so the row is
    // rejected instead.
    if line.contains('\r') {
        return Err(ConvertError::ParseError {
            line: line_number,
            message: "stray carriage return".to_string(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(Ok(record)) => Ok(record.iter().map(str::to_string).collect()),
        // Flexible in-memory reads have no failing path left; kept so a
        // csv error never loses its line number.
        Some(Err(e)) => Err(ConvertError::ParseError {
            line: line_number,
            message: e.to_string(),
        }),
        None => Ok(Vec::new()),
    }
}

// ==================== tests ====================

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    // ==================== parse tests ====================

    #[test]
    fn test_parse_single_sheet() {
        let workbook = parse("[Connections]\na,b,c\n").unwrap();
        let sheet = workbook.sheet("Connections").unwrap();
        assert_eq!(sheet.cell(1, 1), Some("a"));
        assert_eq!(sheet.cell(1, 2), Some("b"));
        assert_eq!(sheet.cell(1, 3), Some("c"));
        assert_eq!(sheet.max_row(), 1);
    }

    #[test]
    fn test_parse_multiple_sheets() {
        let workbook = parse("[One]\nx\n[Two]\ny\n").unwrap();
        assert_eq!(workbook.sheet_names(), vec!["One", "Two"]);
        assert_eq!(workbook.sheet("One").unwrap().cell(1, 1), Some("x"));
        assert_eq!(workbook.sheet("Two").unwrap().cell(1, 1), Some("y"));
    }

    #[test]
    fn test_empty_line_advances_row_counter() {
        let workbook = parse("[Connections]\nfirst\n\nthird\n").unwrap();
        let sheet = workbook.sheet("Connections").unwrap();
        assert_eq!(sheet.cell(1, 1), Some("first"));
        assert_eq!(sheet.cell(2, 1), None);
        assert_eq!(sheet.cell(3, 1), Some("third"));
    }

    #[test]
    fn test_empty_field_reads_as_blank_cell() {
        let workbook = parse("[Connections]\na,,c\n").unwrap();
        let sheet = workbook.sheet("Connections").unwrap();
        assert_eq!(sheet.cell(1, 1), Some("a"));
        assert_eq!(sheet.cell(1, 2), None);
        assert_eq!(sheet.cell(1, 3), Some("c"));
    }

    #[test]
    fn test_quoted_field_with_comma() {
        let workbook = parse("[Connections]\n\"Generic, 14AWG\",red\n").unwrap();
        let sheet = workbook.sheet("Connections").unwrap();
        assert_eq!(sheet.cell(1, 1), Some("Generic, 14AWG"));
        assert_eq!(sheet.cell(1, 2), Some("red"));
    }

    #[test]
    fn test_quoted_header_lookalike_is_data() {
        let workbook = parse("[Connections]\n\"[Notes]\"\nafter\n").unwrap();
        let sheet = workbook.sheet("Connections").unwrap();
        assert_eq!(workbook.sheet_names(), vec!["Connections"]);
        assert_eq!(sheet.cell(1, 1), Some("[Notes]"));
        assert_eq!(sheet.cell(2, 1), Some("after"));
    }

    #[test]
    fn test_preamble_before_first_header_is_ignored() {
        let workbook = parse("junk line\n[Connections]\ndata\n").unwrap();
        let sheet = workbook.sheet("Connections").unwrap();
        assert_eq!(sheet.cell(1, 1), Some("data"));
    }

    #[test]
    fn test_duplicate_sheet_names_resolve_to_first() {
        let workbook = parse("[Connections]\nfirst\n[Connections]\nsecond\n").unwrap();
        assert_eq!(workbook.sheets().len(), 2);
        assert_eq!(
            workbook.sheet("Connections").unwrap().cell(1, 1),
            Some("first")
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let workbook = parse("[Connections]\r\na,b\r\n").unwrap();
        let sheet = workbook.sheet("Connections").unwrap();
        assert_eq!(sheet.cell(1, 1), Some("a"));
        assert_eq!(sheet.cell(1, 2), Some("b"));
    }

    #[test]
    fn test_trailing_blank_lines_extend_the_sheet() {
        let workbook = parse("[Connections]\nfirst\n\n\n").unwrap();
        let sheet = workbook.sheet("Connections").unwrap();

        assert_eq!(sheet.max_row(), 3);
        assert_eq!(sheet.cell(1, 1), Some("first"));
        assert_eq!(sheet.last_col(2), 0);
        assert_eq!(sheet.last_col(3), 0);
    }

    #[test]
    fn test_blank_lines_before_next_header_extend_the_sheet() {
        let workbook = parse("[One]\nx\n\n[Two]\ny\n").unwrap();
        assert_eq!(workbook.sheet("One").unwrap().max_row(), 2);
        assert_eq!(workbook.sheet("Two").unwrap().max_row(), 1);
    }

    #[test]
    fn test_stray_carriage_return_is_a_parse_error() {
        let result = parse("[Connections]\nW19.Black,\rGND\n");
        assert!(matches!(
            result,
            Err(ConvertError::ParseError { line: 2, .. })
        ));
    }

    // ==================== read_file tests ====================

    #[test]
    fn test_read_file_missing_path() {
        let result = read_file(Path::new("/nonexistent/input.wbk"));
        assert!(matches!(result, Err(ConvertError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_file_empty_file() {
        let file = write_temp("   \n  \n");
        let result = read_file(file.path());
        assert!(matches!(result, Err(ConvertError::EmptyFile { .. })));
    }

    #[test]
    fn test_read_file_without_sheet_headers() {
        let file = write_temp("just,plain,csv\nno,headers,here\n");
        let result = read_file(file.path());
        assert!(matches!(result, Err(ConvertError::NotAWorkbook { .. })));
    }

    #[test]
    fn test_read_file_roundtrips_content() {
        let file = write_temp("[Connections]\nJ4.3,S12,\"W19.Black\"\n");
        let workbook = read_file(file.path()).unwrap();
        let sheet = workbook.sheet("Connections").unwrap();
        assert_eq!(sheet.cell(1, 1), Some("J4.3"));
        assert_eq!(sheet.cell(1, 3), Some("W19.Black"));
    }
}
