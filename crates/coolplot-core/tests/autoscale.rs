// File: crates/coolplot-core/tests/autoscale.rs
// Purpose: Validate autoscaled log-log bounds and explicit bound overrides.

use coolplot_core::{Axis, Figure, SeriesSpec};

#[test]
fn autoscale_log_log_two_point_series() {
    // Two-point descending cooling curve.
    let mut fig = Figure::new();
    fig.x_axis = Axis::log10("Temperature [K]");
    fig.y_axis = Axis::log10("Λ [erg cm³ s⁻¹]");
    fig.add_series(SeriesSpec::new(vec![(1e4, 5e-22), (2e4, 4e-22)]));

    let ((x0, x1), (y0, y1)) = fig.resolved_bounds();

    // Bounds cover the data with a small log-space pad on each side.
    assert!(x0 <= 1e4 && x0 > 1e3);
    assert!(x1 >= 2e4 && x1 < 2e5);
    assert!(y0 <= 4e-22 && y0 > 4e-23);
    assert!(y1 >= 5e-22 && y1 < 5e-21);

    // And the series itself is descending.
    let points = &fig.series[0].points;
    assert!(points[1].0 > points[0].0);
    assert!(points[1].1 < points[0].1);
}

#[test]
fn explicit_bounds_override_autoscale() {
    let mut fig = Figure::new();
    fig.x_axis = Axis::log10("T").with_bounds(1e4, 1e8);
    fig.y_axis = Axis::log10("L").with_bounds(1e-24, 1e-20);
    fig.add_series(SeriesSpec::new(vec![(1e5, 5e-22), (1e6, 4e-22)]));

    let (x, y) = fig.resolved_bounds();
    assert_eq!(x, (1e4, 1e8));
    assert_eq!(y, (1e-24, 1e-20));
}

#[test]
fn log_axis_ignores_nonpositive_values() {
    // The sentinel row of a table is all zeros; a zero must never drag a
    // log axis down to the epsilon floor.
    let mut fig = Figure::new();
    fig.x_axis = Axis::log10("T");
    fig.y_axis = Axis::log10("L");
    fig.add_series(SeriesSpec::new(vec![(0.0, 0.0), (1e4, 5e-22), (2e4, 4e-22)]));

    let ((x0, _), (y0, _)) = fig.resolved_bounds();
    assert!(x0 > 1e3);
    assert!(y0 > 4e-23);
}

#[test]
fn empty_figure_falls_back_to_a_decade() {
    let fig = Figure::new();
    let ((x0, x1), _) = fig.resolved_bounds();
    assert!(x0 > 0.0);
    assert!(x1 > x0);
}
