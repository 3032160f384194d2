// File: crates/coolplot-core/src/series.rs
// Summary: Series model: one plotted line's points, color, and legend label.

use skia_safe as skia;

use crate::table::{DataTable, TableError};

/// One plotted line. When `color` is `None` the figure assigns the palette
/// color for the series' slot at render time.
#[derive(Clone, Debug)]
pub struct SeriesSpec {
    pub points: Vec<(f64, f64)>,
    pub label: Option<String>,
    pub color: Option<skia::Color>,
}

impl SeriesSpec {
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points, label: None, color: None }
    }

    /// Build a series from two columns of a table, skipping the sentinel row.
    pub fn from_table(table: &DataTable, x_col: usize, y_col: usize) -> Result<Self, TableError> {
        Ok(Self::new(table.xy(x_col, y_col)?))
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }
}
