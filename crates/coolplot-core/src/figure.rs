// File: crates/coolplot-core/src/figure.rs
// Summary: Figure model and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{Axis, ScaleKind};
use crate::legend::{grid_position, grid_rows, LegendSpec};
use crate::palette;
use crate::scale::PixelScale;
use crate::series::SeriesSpec;
use crate::style::StyleConfig;
use crate::text::TextPainter;
use crate::ticks::{linear_minor, linear_ticks, log_decades, log_minor, pow10_label, tick_label};
use crate::types::Insets;

pub struct RenderOptions {
    /// Surface size override in pixels; `None` takes the style's figure size.
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub insets: Insets,
    /// Disable to render without any text or legend. Text shaping varies
    /// across platforms, so deterministic tests turn this off.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: None, height: None, insets: Insets::default(), draw_labels: true }
    }
}

pub struct Figure {
    pub series: Vec<SeriesSpec>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Option<LegendSpec>,
}

impl Figure {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            legend: None,
        }
    }

    pub fn add_series(&mut self, series: SeriesSpec) {
        self.series.push(series);
    }

    /// Color the series at `slot` renders with: its pinned color, or the
    /// palette color for that slot (wrapping past the palette length).
    pub fn series_color(&self, slot: usize) -> skia::Color {
        self.series[slot].color.unwrap_or_else(|| palette::color(slot))
    }

    /// Labeled series in plot order; unlabeled series stay out of the legend.
    pub fn legend_entries(&self) -> Vec<(skia::Color, String)> {
        self.series
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.label.clone().map(|label| (self.series_color(i), label)))
            .collect()
    }

    /// Axis ranges used for rendering: explicit bounds win, otherwise the
    /// data extent padded by 2% of the span (log axes pad in log space).
    pub fn resolved_bounds(&self) -> ((f64, f64), (f64, f64)) {
        (
            resolve_axis(&self.x_axis, self.data_extent(true)),
            resolve_axis(&self.y_axis, self.data_extent(false)),
        )
    }

    fn data_extent(&self, along_x: bool) -> Option<(f64, f64)> {
        let kind = if along_x { self.x_axis.kind } else { self.y_axis.kind };
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for s in &self.series {
            for &(x, y) in &s.points {
                let v = if along_x { x } else { y };
                if !v.is_finite() {
                    continue;
                }
                // Non-positive values cannot land on a log axis.
                if kind == ScaleKind::Log10 && v <= 0.0 {
                    continue;
                }
                lo = lo.min(v);
                hi = hi.max(v);
            }
        }
        (lo.is_finite() && hi.is_finite()).then_some((lo, hi))
    }

    /// Render to an RGBA8 buffer with a fully transparent background.
    /// Returns (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(
        &self,
        style: &StyleConfig,
        opts: &RenderOptions,
    ) -> Result<(Vec<u8>, i32, i32, usize)> {
        let (style_w, style_h) = style.surface_size();
        let w = opts.width.unwrap_or(style_w);
        let h = opts.height.unwrap_or(style_h);

        let plot_left = opts.insets.left as i32;
        let plot_right = w - opts.insets.right as i32;
        let plot_top = opts.insets.top as i32;
        let plot_bottom = h - opts.insets.bottom as i32;
        if plot_right <= plot_left || plot_bottom <= plot_top {
            anyhow::bail!("surface {}x{} too small for insets", w, h);
        }

        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(skia::Color::TRANSPARENT);

        let ((x_min, x_max), (y_min, y_max)) = self.resolved_bounds();
        let xs = PixelScale::horizontal(self.x_axis.kind, x_min, x_max, plot_left as f32, plot_right as f32);
        let ys = PixelScale::vertical(self.y_axis.kind, y_min, y_max, plot_top as f32, plot_bottom as f32);

        let x_major = major_ticks(self.x_axis.kind, xs.vmin(), xs.vmax());
        let y_major = major_ticks(self.y_axis.kind, ys.vmin(), ys.vmax());
        let x_minor = minor_ticks(self.x_axis.kind, xs.vmin(), xs.vmax(), &x_major);
        let y_minor = minor_ticks(self.y_axis.kind, ys.vmin(), ys.vmax(), &y_major);

        let rect = PlotRect {
            l: plot_left as f32,
            t: plot_top as f32,
            r: plot_right as f32,
            b: plot_bottom as f32,
        };

        if style.grid && style.axis_below {
            draw_grid(canvas, style, &rect, &xs, &ys, &x_major, &y_major);
        }
        draw_series(canvas, style, &rect, &xs, &ys, &self.series);
        if style.grid && !style.axis_below {
            draw_grid(canvas, style, &rect, &xs, &ys, &x_major, &y_major);
        }
        draw_frame(canvas, style, &rect);
        draw_tick_marks(canvas, style, &rect, &xs, &ys, &x_major, &x_minor, &y_major, &y_minor);

        if opts.draw_labels {
            let text = TextPainter::new();
            draw_x_labels(canvas, style, &text, &rect, &xs, &self.x_axis, &x_major);
            draw_y_labels(canvas, style, &text, &rect, &ys, &self.y_axis, &y_major);
            if let Some(spec) = &self.legend {
                draw_legend(canvas, style, &text, spec, &self.legend_entries(), &rect);
            }
        }

        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("reading back surface pixels failed");
        }
        Ok((pixels, w, h, stride))
    }

    /// Render, crop the transparent border down to the content plus the
    /// style's trim pad, and encode as PNG.
    pub fn render_to_png_bytes(&self, style: &StyleConfig, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pixels, w, h, _stride) = self.render_to_rgba8(style, opts)?;
        let (cropped, cw, ch) = trim_transparent(&pixels, w, h, style.trim_pad);
        let img = image::RgbaImage::from_raw(cw, ch, cropped)
            .ok_or_else(|| anyhow::anyhow!("pixel buffer does not match trimmed dimensions"))?;
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render the figure to a PNG at `path`, overwriting any existing file.
    pub fn render_to_png(
        &self,
        style: &StyleConfig,
        opts: &RenderOptions,
        path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(style, opts)?;
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

struct PlotRect {
    l: f32,
    t: f32,
    r: f32,
    b: f32,
}

fn resolve_axis(axis: &Axis, data: Option<(f64, f64)>) -> (f64, f64) {
    if let Some(bounds) = axis.bounds {
        return bounds;
    }
    let (lo, hi) = match data {
        Some(extent) => extent,
        None => match axis.kind {
            ScaleKind::Linear => (0.0, 1.0),
            ScaleKind::Log10 => (1.0, 10.0),
        },
    };
    match axis.kind {
        ScaleKind::Linear => {
            let (lo, mut hi) = (lo, hi);
            if (hi - lo).abs() < 1e-9 {
                hi = lo + 1.0;
            }
            let m = (hi - lo) * 0.02;
            (lo - m, hi + m)
        }
        ScaleKind::Log10 => {
            let llo = lo.max(1e-300).log10();
            let mut lhi = hi.max(1e-300).log10();
            if (lhi - llo).abs() < 1e-9 {
                lhi = llo + 1.0;
            }
            let m = (lhi - llo) * 0.02;
            (10f64.powf(llo - m), 10f64.powf(lhi + m))
        }
    }
}

fn major_ticks(kind: ScaleKind, vmin: f64, vmax: f64) -> Vec<f64> {
    match kind {
        ScaleKind::Linear => linear_ticks(vmin, vmax, 6),
        ScaleKind::Log10 => log_decades(vmin, vmax),
    }
}

fn minor_ticks(kind: ScaleKind, vmin: f64, vmax: f64, majors: &[f64]) -> Vec<f64> {
    match kind {
        ScaleKind::Linear => linear_minor(majors, vmin, vmax),
        ScaleKind::Log10 => log_minor(vmin, vmax),
    }
}

fn value_label(kind: ScaleKind, v: f64) -> String {
    match kind {
        ScaleKind::Linear => tick_label(v),
        ScaleKind::Log10 => pow10_label(v.max(1e-300).log10().round() as i32),
    }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn draw_grid(
    canvas: &skia::Canvas,
    style: &StyleConfig,
    rect: &PlotRect,
    xs: &PixelScale,
    ys: &PixelScale,
    x_major: &[f64],
    y_major: &[f64],
) {
    let mut paint = stroke_paint(style.grid_color(), style.grid_width);
    paint.set_stroke_cap(skia::paint::Cap::Round);
    if let Some(dash) = skia::dash_path_effect::new(&[style.grid_dash.0, style.grid_dash.1], 0.0) {
        paint.set_path_effect(dash);
    }
    for &v in x_major {
        let x = xs.to_px(v);
        canvas.draw_line((x, rect.t), (x, rect.b), &paint);
    }
    for &v in y_major {
        let y = ys.to_px(v);
        canvas.draw_line((rect.l, y), (rect.r, y), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, style: &StyleConfig, rect: &PlotRect) {
    let paint = stroke_paint(style.foreground(), style.axis_width);
    canvas.draw_rect(skia::Rect::from_ltrb(rect.l, rect.t, rect.r, rect.b), &paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_marks(
    canvas: &skia::Canvas,
    style: &StyleConfig,
    rect: &PlotRect,
    xs: &PixelScale,
    ys: &PixelScale,
    x_major: &[f64],
    x_minor: &[f64],
    y_major: &[f64],
    y_minor: &[f64],
) {
    // "in" puts ticks inside the plot rectangle.
    let dir = if style.ticks_in { 1.0f32 } else { -1.0f32 };
    let paint = stroke_paint(style.foreground(), style.major_tick_width);

    let x_ticks = |values: &[f64], len: f32, paint: &skia::Paint| {
        for &v in values {
            let x = xs.to_px(v);
            canvas.draw_line((x, rect.b), (x, rect.b - dir * len), paint);
            if style.ticks_top {
                canvas.draw_line((x, rect.t), (x, rect.t + dir * len), paint);
            }
        }
    };
    x_ticks(x_major, style.major_tick_size, &paint);
    if style.minor_ticks {
        let minor = stroke_paint(style.foreground(), style.minor_tick_width);
        x_ticks(x_minor, style.minor_tick_size, &minor);
    }

    let y_ticks = |values: &[f64], len: f32, paint: &skia::Paint| {
        for &v in values {
            let y = ys.to_px(v);
            canvas.draw_line((rect.l, y), (rect.l + dir * len, y), paint);
            if style.ticks_right {
                canvas.draw_line((rect.r, y), (rect.r - dir * len, y), paint);
            }
        }
    };
    y_ticks(y_major, style.major_tick_size, &paint);
    if style.minor_ticks {
        let minor = stroke_paint(style.foreground(), style.minor_tick_width);
        y_ticks(y_minor, style.minor_tick_size, &minor);
    }
}

fn draw_series(
    canvas: &skia::Canvas,
    style: &StyleConfig,
    rect: &PlotRect,
    xs: &PixelScale,
    ys: &PixelScale,
    series: &[SeriesSpec],
) {
    canvas.save();
    canvas.clip_rect(skia::Rect::from_ltrb(rect.l, rect.t, rect.r, rect.b), None, true);
    for (i, s) in series.iter().enumerate() {
        if s.points.len() < 2 {
            continue;
        }
        let mut builder = skia::PathBuilder::new();
        let (x0, y0) = s.points[0];
        builder.move_to((xs.to_px(x0), ys.to_px(y0)));
        for &(x, y) in s.points.iter().skip(1) {
            builder.line_to((xs.to_px(x), ys.to_px(y)));
        }
        let path = builder.detach();
        let mut stroke = stroke_paint(s.color.unwrap_or_else(|| palette::color(i)), style.line_width);
        stroke.set_stroke_cap(skia::paint::Cap::Round);
        stroke.set_stroke_join(skia::paint::Join::Round);
        canvas.draw_path(&path, &stroke);
    }
    canvas.restore();
}

fn draw_x_labels(
    canvas: &skia::Canvas,
    style: &StyleConfig,
    text: &TextPainter,
    rect: &PlotRect,
    xs: &PixelScale,
    axis: &Axis,
    majors: &[f64],
) {
    let fg = style.foreground();
    let size = style.tick_label_size;
    let base_y = rect.b + style.x_tick_pad + size;
    for &v in majors {
        text.draw_centered(canvas, &value_label(axis.kind, v), xs.to_px(v), base_y, size, fg);
    }
    let label_y = base_y + style.label_pad + style.label_size;
    text.draw_centered(canvas, &axis.label, (rect.l + rect.r) * 0.5, label_y, style.label_size, fg);
}

fn draw_y_labels(
    canvas: &skia::Canvas,
    style: &StyleConfig,
    text: &TextPainter,
    rect: &PlotRect,
    ys: &PixelScale,
    axis: &Axis,
    majors: &[f64],
) {
    let fg = style.foreground();
    let size = style.tick_label_size;
    let mut max_w = 0f32;
    for &v in majors {
        let label = value_label(axis.kind, v);
        let w = text.width(&label, size);
        max_w = max_w.max(w);
        text.draw_right(canvas, &label, rect.l - style.y_tick_pad, ys.to_px(v) + size * 0.35, size, fg);
    }
    let label_x = rect.l - style.y_tick_pad - max_w - style.label_pad - style.label_size * 0.3;
    let cy = (rect.t + rect.b) * 0.5;
    canvas.save();
    canvas.rotate(-90.0, Some(skia::Point::new(label_x, cy)));
    text.draw_centered(canvas, &axis.label, label_x, cy, style.label_size, fg);
    canvas.restore();
}

fn with_alpha(color: skia::Color, alpha: f32) -> skia::Color {
    skia::Color::from_argb(
        (alpha.clamp(0.0, 1.0) * 255.0) as u8,
        color.r(),
        color.g(),
        color.b(),
    )
}

fn draw_legend(
    canvas: &skia::Canvas,
    style: &StyleConfig,
    text: &TextPainter,
    spec: &LegendSpec,
    entries: &[(skia::Color, String)],
    rect: &PlotRect,
) {
    if entries.is_empty() {
        return;
    }
    let fg = style.foreground();
    let em = style.font_size;
    let handle = style.legend_handle_len * em;
    let text_pad = style.legend_text_pad * em;
    let row_h = 1.4 * em;
    let col_gap = 1.5 * em;
    let pad = 0.8 * em;

    let cols = spec.columns.max(1);
    let rows = grid_rows(entries.len(), cols);

    let mut col_w = vec![0f32; cols];
    for (i, (_, label)) in entries.iter().enumerate() {
        let (_, c) = grid_position(i, rows);
        col_w[c] = col_w[c].max(handle + text_pad + text.width(label, em));
    }
    let body_w: f32 = col_w.iter().sum::<f32>() + col_gap * cols.saturating_sub(1) as f32;
    let title_w = spec
        .title
        .as_ref()
        .map(|t| text.width(t, style.title_size))
        .unwrap_or(0.0);
    let title_h = if spec.title.is_some() { 1.4 * style.title_size } else { 0.0 };
    let box_w = body_w.max(title_w) + 2.0 * pad;
    let box_h = title_h + rows as f32 * row_h + 2.0 * pad;

    let margin = 0.6 * em;
    let bx = rect.r - margin - box_w;
    let by = rect.t + margin;
    let box_rect = skia::Rect::from_xywh(bx, by, box_w, box_h);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(with_alpha(style.legend_fill(), spec.alpha));
    canvas.draw_round_rect(box_rect, 6.0, 6.0, &fill);
    let border = stroke_paint(with_alpha(fg, 0.8), 1.0);
    canvas.draw_round_rect(box_rect, 6.0, 6.0, &border);

    if let Some(title) = &spec.title {
        text.draw_centered(
            canvas,
            title,
            bx + box_w * 0.5,
            by + pad + style.title_size * 0.8,
            style.title_size,
            fg,
        );
    }

    for (i, (color, label)) in entries.iter().enumerate() {
        let (r, c) = grid_position(i, rows);
        let x0 = bx + pad + col_w[..c].iter().sum::<f32>() + col_gap * c as f32;
        let cy = by + pad + title_h + r as f32 * row_h + row_h * 0.5;
        let mut sample = stroke_paint(*color, style.line_width);
        sample.set_stroke_cap(skia::paint::Cap::Round);
        canvas.draw_line((x0, cy), (x0 + handle, cy), &sample);
        text.draw(canvas, label, x0 + handle + text_pad, cy + em * 0.35, em, fg);
    }
}

/// Crop an RGBA8 buffer down to its non-transparent bounding box plus `pad`
/// pixels on every side. A fully transparent buffer is returned untouched.
fn trim_transparent(pixels: &[u8], w: i32, h: i32, pad: u32) -> (Vec<u8>, u32, u32) {
    let (w, h) = (w as usize, h as usize);
    let stride = w * 4;
    let mut min_x = w;
    let mut min_y = h;
    let mut max_x = 0usize;
    let mut max_y = 0usize;
    let mut any = false;
    for y in 0..h {
        let row = &pixels[y * stride..(y + 1) * stride];
        for x in 0..w {
            if row[x * 4 + 3] != 0 {
                if x < min_x { min_x = x; }
                if x > max_x { max_x = x; }
                if y < min_y { min_y = y; }
                if y > max_y { max_y = y; }
                any = true;
            }
        }
    }
    if !any {
        return (pixels.to_vec(), w as u32, h as u32);
    }
    let pad = pad as usize;
    let x0 = min_x.saturating_sub(pad);
    let y0 = min_y.saturating_sub(pad);
    let x1 = (max_x + 1 + pad).min(w);
    let y1 = (max_y + 1 + pad).min(h);
    let (cw, ch) = (x1 - x0, y1 - y0);
    let mut out = Vec::with_capacity(cw * ch * 4);
    for y in y0..y1 {
        out.extend_from_slice(&pixels[y * stride + x0 * 4..y * stride + x1 * 4]);
    }
    (out, cw as u32, ch as u32)
}
