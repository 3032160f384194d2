// File: crates/coolplot-core/src/style.rs
// Summary: Immutable rendering style passed to the figure at render time.

use skia_safe as skia;

/// The shared visual defaults every figure renders with. Built once at
/// process start and passed by reference to the render call; nothing here is
/// process-global or mutated mid-plot.
#[derive(Clone, Debug)]
pub struct StyleConfig {
    /// Dark theme flips the foreground (text, ticks, frame) to white.
    /// The saved image background stays transparent either way.
    pub dark: bool,

    /// Ticks point into the plot rectangle.
    pub ticks_in: bool,
    /// Mirror x ticks on the top edge.
    pub ticks_top: bool,
    /// Mirror y ticks on the right edge.
    pub ticks_right: bool,
    /// Draw minor ticks between the major ones.
    pub minor_ticks: bool,

    pub grid: bool,
    /// Dotted grid stroke: (on, off) dash intervals in pixels.
    pub grid_dash: (f32, f32),
    pub grid_width: f32,
    pub grid_alpha: f32,
    /// Grid renders under the data, not over it.
    pub axis_below: bool,

    pub axis_width: f32,
    pub line_width: f32,

    pub major_tick_size: f32,
    pub major_tick_width: f32,
    pub minor_tick_size: f32,
    pub minor_tick_width: f32,
    pub x_tick_pad: f32,
    pub y_tick_pad: f32,

    pub tick_label_size: f32,
    pub label_size: f32,
    pub label_pad: f32,
    pub title_size: f32,
    pub font_size: f32,

    /// Legend line-sample length and sample-to-text gap, in em units.
    pub legend_handle_len: f32,
    pub legend_text_pad: f32,

    /// Figure size in inches and raster density; the surface is their product.
    pub figure_size_in: (f32, f32),
    pub dpi: f32,
    /// Margin kept around the content when the transparent border is cropped.
    pub trim_pad: u32,
}

impl StyleConfig {
    pub fn light() -> Self {
        Self {
            dark: false,
            ticks_in: true,
            ticks_top: false,
            ticks_right: true,
            minor_ticks: true,
            grid: true,
            grid_dash: (1.5, 4.0),
            grid_width: 0.8,
            grid_alpha: 0.3,
            axis_below: true,
            axis_width: 1.0,
            line_width: 3.5,
            major_tick_size: 11.0,
            major_tick_width: 1.2,
            minor_tick_size: 5.0,
            minor_tick_width: 1.0,
            x_tick_pad: 10.0,
            y_tick_pad: 6.0,
            tick_label_size: 26.0,
            label_size: 28.0,
            label_pad: 8.0,
            title_size: 24.0,
            font_size: 28.0,
            legend_handle_len: 2.0,
            legend_text_pad: 0.4,
            figure_size_in: (13.0, 10.0),
            dpi: 100.0,
            trim_pad: 10,
        }
    }

    pub fn dark() -> Self {
        Self { dark: true, ..Self::light() }
    }

    /// Raster surface size in pixels.
    pub fn surface_size(&self) -> (i32, i32) {
        (
            (self.figure_size_in.0 * self.dpi).round() as i32,
            (self.figure_size_in.1 * self.dpi).round() as i32,
        )
    }

    /// Foreground color for the frame, ticks, and text.
    pub fn foreground(&self) -> skia::Color {
        if self.dark {
            skia::Color::from_argb(255, 255, 255, 255)
        } else {
            skia::Color::from_argb(255, 0, 0, 0)
        }
    }

    /// Gray grid stroke with the configured alpha.
    pub fn grid_color(&self) -> skia::Color {
        let alpha = (self.grid_alpha.clamp(0.0, 1.0) * 255.0) as u8;
        skia::Color::from_argb(alpha, 128, 128, 128)
    }

    /// Legend box fill before its alpha is applied (tracks the theme).
    pub fn legend_fill(&self) -> skia::Color {
        if self.dark {
            skia::Color::from_argb(255, 18, 18, 20)
        } else {
            skia::Color::from_argb(255, 255, 255, 255)
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::light()
    }
}
