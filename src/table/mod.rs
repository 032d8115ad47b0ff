mod errors;
mod reader;

use crate::types::Cell;

pub use errors::TableError;
pub use reader::read_table;

/// An ordered, loosely-typed table as produced by a file reader.
///
/// Rows are always padded to the header width so that column lookups by index
/// never go out of bounds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new()
        }
    }

    /// Appends a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.headers.len(), Cell::Empty);
        self.rows.push(row);
    }

    /// Strips surrounding whitespace from every column name.
    pub fn trim_headers(&mut self) {
        for header in self.headers.iter_mut() {
            let trimmed = header.trim();

            if trimmed.len() != header.len() {
                *header = trimmed.to_string();
            }
        }
    }

    /// Index of the first column whose trimmed name equals `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header.trim() == name)
    }

    /// Number of data rows, excluding the header.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
