use super::DecodedTable;
use crate::error::TableError;
use tracing::debug;

/// Header row plus data rows of a single markdown table.
///
/// Mutators do not keep rows and headers consistent with each other. Shape is only
/// checked by [`MarkdownTable::push_row`] and again when the table is rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl MarkdownTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// True when rendering would succeed: at least one header and one row with cells.
    pub fn is_renderable(&self) -> bool {
        !self.headers.is_empty() && self.rows.iter().any(|row| !row.is_empty())
    }

    pub fn push_header(&mut self, header: impl Into<String>) {
        self.headers.push(header.into());
    }

    /// Replaces all headers. Existing rows are left untouched.
    pub fn set_headers(&mut self, headers: Vec<String>) {
        self.headers = headers;
    }

    pub fn clear_headers(&mut self) {
        self.headers.clear();
    }

    /// Appends one cell to the row at `row_index`.
    pub fn push_row_item(
        &mut self,
        item: impl Into<String>,
        row_index: usize,
    ) -> Result<(), TableError> {
        let rows = self.rows.len();
        let row = self
            .rows
            .get_mut(row_index)
            .ok_or(TableError::RowIndexOutOfRange {
                index: row_index,
                rows,
            })?;
        row.push(item.into());
        Ok(())
    }

    /// Appends a full row. The row must have exactly one cell per header.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<(), TableError> {
        if row.len() != self.headers.len() {
            return Err(TableError::ShapeMismatch {
                row_len: row.len(),
                header_len: self.headers.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Replaces all rows without any shape validation.
    pub fn set_rows(&mut self, rows: Vec<Vec<String>>) {
        self.rows = rows;
    }

    pub fn clear_rows(&mut self) {
        self.rows.clear();
    }

    /// Loads a record matrix whose first row holds the headers.
    ///
    /// Rows without cells are skipped. The remaining rows go through [`Self::push_row`],
    /// so the first row with the wrong length aborts the load. Rows appended before
    /// the failing one stay in the table.
    pub fn load_matrix(&mut self, matrix: Vec<Vec<String>>) -> Result<(), TableError> {
        if matrix.is_empty() {
            return Err(TableError::EmptyInput);
        }
        if matrix.len() < 2 {
            return Err(TableError::InsufficientRows { rows: matrix.len() });
        }

        let mut records = matrix.into_iter();
        if let Some(headers) = records.next() {
            self.set_headers(headers);
        }

        let mut empty_rows = 0;
        for row in records {
            if row.is_empty() {
                empty_rows += 1;
                continue;
            }
            self.push_row(row)?;
        }
        if empty_rows > 0 {
            debug!("Skipped {} empty rows while loading table", empty_rows);
        }
        Ok(())
    }

    /// Replaces headers and rows wholesale. Validation is left to rendering.
    pub fn load_decoded(&mut self, decoded: DecodedTable) {
        self.set_headers(decoded.headers);
        self.set_rows(decoded.rows);
    }

    /// Builds a new table from a record matrix, see [`Self::load_matrix`].
    pub fn from_matrix(matrix: Vec<Vec<String>>) -> Result<Self, TableError> {
        let mut table = Self::new();
        table.load_matrix(matrix)?;
        Ok(table)
    }
}

impl From<DecodedTable> for MarkdownTable {
    fn from(decoded: DecodedTable) -> Self {
        let mut table = Self::new();
        table.load_decoded(decoded);
        table
    }
}
