// File: crates/figures/src/main.rs
// Summary: Renders the cooling-function and metallicity-sweep figures to PNGs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use coolplot_core::{palette, Axis, DataTable, Figure, LegendSpec, RenderOptions, SeriesSpec, StyleConfig};
use log::info;

/// One figure, spelled out: inputs, columns, axes, legend, output path.
struct FigureDef {
    /// (table path, optional legend label) per series, in palette order.
    inputs: Vec<(PathBuf, Option<String>)>,
    x_col: usize,
    y_col: usize,
    x_axis: Axis,
    y_axis: Axis,
    legend: Option<LegendSpec>,
    /// Palette slot override for single-series figures.
    pinned_slot: Option<usize>,
    output: PathBuf,
}

/// The cooling function Λ(T) from one analysis dump.
fn cooling_function(data_dir: &Path) -> FigureDef {
    FigureDef {
        inputs: vec![(data_dir.join("analysis.dat"), None)],
        x_col: 1,
        y_col: 3,
        x_axis: Axis::log10("Temperature [K]"),
        y_axis: Axis::log10("Λ = -ė/n_H² [erg cm³ s⁻¹]"),
        legend: None,
        pinned_slot: Some(1), // steelblue
        output: PathBuf::from("cooling-function.png"),
    }
}

/// Λ(T) for four metallicities overlaid, with a two-column legend.
fn metallicity_sweep(data_dir: &Path) -> FigureDef {
    let metals = [0.3f64, 0.5, 1.0, 3.0];
    FigureDef {
        inputs: metals
            .iter()
            .map(|z| {
                (
                    data_dir.join(format!("analysis_Z{z:.1}.dat")),
                    Some(format!("{z:.1}")),
                )
            })
            .collect(),
        x_col: 1,
        y_col: 3,
        x_axis: Axis::log10("Temperature [K]").with_bounds(1e4, 1e8),
        y_axis: Axis::log10("Λ = -ė/n_H² [erg cm³ s⁻¹]").with_bounds(1e-24, 1e-20),
        legend: Some(LegendSpec::new().with_title("Z/Z☉").with_columns(2).with_alpha(0.8)),
        pinned_slot: None,
        output: PathBuf::from("cooling-metallicity.png"),
    }
}

fn render(def: &FigureDef, style: &StyleConfig) -> Result<()> {
    let mut figure = Figure::new();
    figure.x_axis = def.x_axis.clone();
    figure.y_axis = def.y_axis.clone();
    figure.legend = def.legend.clone();

    for (path, label) in &def.inputs {
        let table = DataTable::load(path)
            .with_context(|| format!("failed to load table '{}'", path.display()))?;
        let mut series = SeriesSpec::from_table(&table, def.x_col, def.y_col)
            .with_context(|| format!("extracting columns from '{}'", path.display()))?;
        info!("loaded {} ({} rows, {} points)", path.display(), table.n_rows(), series.len());
        if let Some(label) = label {
            series = series.with_label(label);
        }
        if let Some(slot) = def.pinned_slot {
            series = series.with_color(palette::color(slot));
        }
        figure.add_series(series);
    }

    figure.render_to_png(style, &RenderOptions::default(), &def.output)?;
    info!("wrote {}", def.output.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    // Accept the data directory from the CLI or fall back to the analysis
    // dump location.
    let data_dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| "outputs".to_string()));
    if !data_dir.is_dir() {
        anyhow::bail!("data directory not found: {}", data_dir.display());
    }

    let style = StyleConfig::light();
    render(&cooling_function(&data_dir), &style)?;
    render(&metallicity_sweep(&data_dir), &style)?;
    Ok(())
}
