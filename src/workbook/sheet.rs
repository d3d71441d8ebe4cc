//! In-memory workbook model: named sheets of sparsely populated cells.

use std::collections::BTreeMap;

/// One sheet of tabular data, addressed by 1-based `(row, column)`.
///
/// Cells hold text and are either set or absent; an absent cell is a blank
/// cell, which downstream tooling treats differently from an empty string.
/// Storage is sparse, so setting cell (11, 15) does not materialize the
/// cells before it. A sheet separately tracks its row extent, so a row can
/// exist with every cell blank; see [`Sheet::extend_to_row`].
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    name: String,
    cells: BTreeMap<(u32, u32), String>,
    row_extent: u32,
}

impl Sheet {
    /// Create an empty sheet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: BTreeMap::new(),
            row_extent: 0,
        }
    }

    /// Sheet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get a cell value. `None` means the cell is blank.
    pub fn cell(&self, row: u32, col: u32) -> Option<&str> {
        self.cells.get(&(row, col)).map(String::as_str)
    }

    /// Set a cell value. Rows and columns are 1-based.
    pub fn set_cell(&mut self, row: u32, col: u32, value: impl Into<String>) {
        debug_assert!(row >= 1 && col >= 1, "cell addresses are 1-based");
        self.cells.insert((row, col), value.into());
    }

    /// Highest row the sheet reaches, or 0 for an empty sheet.
    ///
    /// Covers both rows with at least one set cell and rows declared via
    /// [`Sheet::extend_to_row`].
    pub fn max_row(&self) -> u32 {
        let populated = self
            .cells
            .keys()
            .next_back()
            .map(|(row, _)| *row)
            .unwrap_or(0);
        populated.max(self.row_extent)
    }

    /// Declare that the sheet extends through `row`, even if no cell in
    /// that range is ever set. Never shrinks the sheet.
    ///
    /// A row with no set cells is still a row: it renders as an empty line
    /// and keeps the rows after it in place.
    pub fn extend_to_row(&mut self, row: u32) {
        self.row_extent = self.row_extent.max(row);
    }

    /// Highest set column in a row, or 0 if the row has no set cells.
    pub fn last_col(&self, row: u32) -> u32 {
        self.cells
            .range((row, 1)..=(row, u32::MAX))
            .next_back()
            .map(|((_, col), _)| *col)
            .unwrap_or(0)
    }

    /// Number of set cells across the sheet.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

/// An ordered collection of named sheets.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Create an empty workbook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new empty sheet and return a handle to fill it.
    pub fn add_sheet(&mut self, name: impl Into<String>) -> &mut Sheet {
        self.sheets.push(Sheet::new(name));
        let last = self.sheets.len() - 1;
        &mut self.sheets[last]
    }

    /// Append an existing sheet.
    pub fn push_sheet(&mut self, sheet: Sheet) {
        self.sheets.push(sheet);
    }

    /// Find a sheet by name. Returns the first match.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    /// All sheets, in workbook order.
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Sheet names, in workbook order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(Sheet::name).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_roundtrip() {
        let mut sheet = Sheet::new("Connections");
        sheet.set_cell(11, 2, "J4.3");
        assert_eq!(sheet.cell(11, 2), Some("J4.3"));
        assert_eq!(sheet.cell(11, 3), None);
    }

    #[test]
    fn test_empty_sheet_has_no_rows() {
        let sheet = Sheet::new("Connections");
        assert_eq!(sheet.max_row(), 0);
        assert_eq!(sheet.last_col(1), 0);
        assert_eq!(sheet.cell_count(), 0);
    }

    #[test]
    fn test_max_row_tracks_sparse_cells() {
        let mut sheet = Sheet::new("Connections");
        sheet.set_cell(3, 1, "a");
        sheet.set_cell(42, 7, "b");
        assert_eq!(sheet.max_row(), 42);
    }

    #[test]
    fn test_extend_to_row_raises_max_row() {
        let mut sheet = Sheet::new("Connections");
        sheet.set_cell(2, 1, "a");
        sheet.extend_to_row(5);

        assert_eq!(sheet.max_row(), 5);
        assert_eq!(sheet.last_col(5), 0);
        assert_eq!(sheet.cell_count(), 1);
    }

    #[test]
    fn test_extend_to_row_never_shrinks() {
        let mut sheet = Sheet::new("Connections");
        sheet.extend_to_row(5);
        sheet.extend_to_row(3);
        assert_eq!(sheet.max_row(), 5);

        sheet.set_cell(8, 1, "a");
        sheet.extend_to_row(4);
        assert_eq!(sheet.max_row(), 8);
    }

    #[test]
    fn test_last_col_is_per_row() {
        let mut sheet = Sheet::new("Connections");
        sheet.set_cell(1, 5, "x");
        sheet.set_cell(2, 2, "y");
        assert_eq!(sheet.last_col(1), 5);
        assert_eq!(sheet.last_col(2), 2);
        assert_eq!(sheet.last_col(3), 0);
    }

    #[test]
    fn test_overwriting_a_cell_keeps_last_value() {
        let mut sheet = Sheet::new("Connections");
        sheet.set_cell(1, 1, "old");
        sheet.set_cell(1, 1, "new");
        assert_eq!(sheet.cell(1, 1), Some("new"));
        assert_eq!(sheet.cell_count(), 1);
    }

    #[test]
    fn test_workbook_finds_sheet_by_name() {
        let mut workbook = Workbook::new();
        workbook.add_sheet("Connections");
        workbook.add_sheet("Notes");

        assert!(workbook.sheet("Connections").is_some());
        assert!(workbook.sheet("Missing").is_none());
        assert_eq!(workbook.sheet_names(), vec!["Connections", "Notes"]);
    }

    #[test]
    fn test_add_sheet_returns_writable_handle() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_sheet("From-To List");
        sheet.set_cell(1, 1, "From Assignment");
        assert_eq!(
            workbook.sheet("From-To List").and_then(|s| s.cell(1, 1)),
            Some("From Assignment")
        );
    }
}
