// File: crates/coolplot-core/src/table.rs
// Summary: Whitespace-delimited numeric table loading with typed parse errors.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("line {line}: cannot parse '{token}' as a number")]
    Parse { line: usize, token: String },
    #[error("line {line}: expected {expected} columns, found {found}")]
    Ragged { line: usize, expected: usize, found: usize },
    #[error("column {col} out of range for a table {width} columns wide")]
    ColumnOutOfRange { col: usize, width: usize },
    #[error("table has no rows")]
    Empty,
}

/// Parsed contents of one whitespace-delimited numeric file.
/// Invariant: every row has the same length. Row 0 is the header/sentinel row
/// written by the analysis dump and is skipped by [`DataTable::xy`].
#[derive(Clone, Debug)]
pub struct DataTable {
    rows: Vec<Vec<f64>>,
}

impl DataTable {
    /// Read and parse a table from `path`. The first read or parse failure
    /// aborts the load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse table text: one row per line, whitespace-separated floats.
    /// Blank lines and '#' comment lines are skipped; a row whose length
    /// differs from the first row's is fatal.
    pub fn parse(text: &str) -> Result<Self, TableError> {
        let mut rows: Vec<Vec<f64>> = Vec::new();
        let mut width: Option<usize> = None;
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut row = Vec::new();
            for token in line.split_whitespace() {
                let value: f64 = token.parse().map_err(|_| TableError::Parse {
                    line: idx + 1,
                    token: token.to_string(),
                })?;
                row.push(value);
            }
            match width {
                None => width = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(TableError::Ragged { line: idx + 1, expected, found: row.len() });
                }
                Some(_) => {}
            }
            rows.push(row);
        }
        if rows.is_empty() {
            return Err(TableError::Empty);
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<f64>] { &self.rows }

    pub fn n_rows(&self) -> usize { self.rows.len() }

    pub fn n_cols(&self) -> usize { self.rows.first().map(Vec::len).unwrap_or(0) }

    /// All values of one column, including the sentinel row.
    pub fn column(&self, col: usize) -> Result<Vec<f64>, TableError> {
        let width = self.n_cols();
        if col >= width {
            return Err(TableError::ColumnOutOfRange { col, width });
        }
        Ok(self.rows.iter().map(|r| r[col]).collect())
    }

    /// Pair column `x_col` against column `y_col`, skipping row 0.
    /// A table with N rows yields N-1 points.
    pub fn xy(&self, x_col: usize, y_col: usize) -> Result<Vec<(f64, f64)>, TableError> {
        let width = self.n_cols();
        let need = x_col.max(y_col);
        if need >= width {
            return Err(TableError::ColumnOutOfRange { col: need, width });
        }
        Ok(self.rows.iter().skip(1).map(|r| (r[x_col], r[y_col])).collect())
    }
}
