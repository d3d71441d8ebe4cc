//! Writer for the sectioned workbook format.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ConvertError, Result};

use super::{Sheet, Workbook};

/// Render a workbook to its sectioned text form.
///
/// Sheets are emitted in workbook order, each as a `[Sheet Name]` header
/// followed by one CSV record per row up to the sheet's `max_row`. Blank
/// cells inside a row render as empty fields; rows with no set cells
/// render as empty lines so row positions survive a read back. Cell text
/// containing a line break fails the whole render with
/// [`ConvertError::MultilineCell`].
pub fn render(workbook: &Workbook) -> Result<String> {
    let mut output = String::new();
    for sheet in workbook.sheets() {
        output.push('[');
        output.push_str(sheet.name());
        output.push_str("]\n");
        for row in 1..=sheet.max_row() {
            output.push_str(&render_row(sheet, row)?);
            output.push('\n');
        }
    }
    Ok(output)
}

/// Render a workbook and write it to `path` in a single filesystem call.
///
/// The content is built completely in memory first; nothing is written
/// until rendering has succeeded.
pub fn write_file(workbook: &Workbook, path: &Path) -> Result<()> {
    let content = render(workbook)?;
    fs::write(path, content)?;
    debug!("wrote workbook to {}", path.display());
    Ok(())
}

fn render_row(sheet: &Sheet, row: u32) -> Result<String> {
    let last_col = sheet.last_col(row);
    if last_col == 0 {
        return Ok(String::new());
    }

    let fields: Vec<&str> = (1..=last_col)
        .map(|col| sheet.cell(row, col).unwrap_or(""))
        .collect();

    // Cell text is line-oriented. A quoted line break would span physical
    // lines and shift every row after it on the next read.
    for field in &fields {
        if field.contains('\n') || field.contains('\r') {
            return Err(ConvertError::MultilineCell {
                value: (*field).to_string(),
            });
        }
    }

    let line = render_record(&fields, csv::QuoteStyle::Necessary)?;
    // A row that happens to render like a sheet header gets force-quoted
    // so the reader cannot mistake it for one.
    let trimmed = line.trim();
    if trimmed.starts_with('[') && trimmed.ends_with(']') {
        return render_record(&fields, csv::QuoteStyle::Always);
    }
    Ok(line)
}

/// Encode one row as a CSV record without a trailing line terminator.
fn render_record(fields: &[&str], quote_style: csv::QuoteStyle) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::WriterBuilder::new()
            .quote_style(quote_style)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(&mut buf);
        writer.write_record(fields)?;
        writer.flush()?;
    }

    let mut line = String::from_utf8_lossy(&buf).into_owned();
    while line.ends_with('\n') {
        line.pop();
    }
    Ok(line)
}

// ==================== tests ====================
