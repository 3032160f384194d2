// File: crates/coolplot-core/src/legend.rs
// Summary: Legend configuration and column-grid layout arithmetic.

/// Legend box configuration. Placement is fixed to the upper-right corner of
/// the plot rectangle; entries fill column by column.
#[derive(Clone, Debug)]
pub struct LegendSpec {
    pub title: Option<String>,
    pub columns: usize,
    /// Opacity of the legend box fill.
    pub alpha: f32,
}

impl LegendSpec {
    pub fn new() -> Self {
        Self { title: None, columns: 1, alpha: 0.8 }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }
}

impl Default for LegendSpec {
    fn default() -> Self {
        Self::new()
    }
}

/// Rows needed to lay `entries` out in `columns` columns.
pub fn grid_rows(entries: usize, columns: usize) -> usize {
    let columns = columns.max(1);
    entries.div_ceil(columns)
}

/// (row, column) of entry `i` in a column-major grid with `rows` rows.
pub fn grid_position(i: usize, rows: usize) -> (usize, usize) {
    let rows = rows.max(1);
    (i % rows, i / rows)
}
