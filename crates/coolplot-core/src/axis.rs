// File: crates/coolplot-core/src/axis.rs
// Summary: Axis model with label, scale kind, and optional explicit bounds.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub kind: ScaleKind,
    /// Explicit (min, max); `None` autoscales to the plotted data.
    pub bounds: Option<(f64, f64)>,
}

impl Axis {
    pub fn linear(label: impl Into<String>) -> Self {
        Self { label: label.into(), kind: ScaleKind::Linear, bounds: None }
    }

    pub fn log10(label: impl Into<String>) -> Self {
        Self { label: label.into(), kind: ScaleKind::Log10, bounds: None }
    }

    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = Some((min, max));
        self
    }

    pub fn default_x() -> Self {
        Self::log10("Temperature [K]")
    }

    pub fn default_y() -> Self {
        Self::log10("Λ [erg cm³ s⁻¹]")
    }
}
