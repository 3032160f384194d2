// File: crates/coolplot-core/benches/render_bench.rs
// Purpose: Benchmark PNG rendering of cooling curves at a few series lengths.

use anyhow::Result;
use coolplot_core::{Axis, Figure, RenderOptions, SeriesSpec, StyleConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_figure(n: usize) -> Figure {
    let mut fig = Figure::new();
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let t = 1.0e4 * 10f64.powf(4.0 * i as f64 / (n - 1).max(1) as f64);
        let lambda = 1.0e-22 * (1.0 + (i as f64 * 0.01).sin().abs());
        points.push((t, lambda));
    }
    fig.x_axis = Axis::log10("Temperature [K]");
    fig.y_axis = Axis::log10("Λ [erg cm³ s⁻¹]");
    fig.add_series(SeriesSpec::new(points));
    fig
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("curve_{n}"), |b| {
            let fig = build_figure(n);
            let style = StyleConfig::light();
            let mut opts = RenderOptions::default();
            opts.width = Some(800);
            opts.height = Some(500);
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = fig.render_to_png_bytes(&style, &opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
