// File: crates/coolplot-core/src/text.rs
// Summary: Simple text measurement and drawing over a system sans typeface.

use skia_safe as skia;

pub struct TextPainter {
    typeface: Option<skia::Typeface>,
}

impl TextPainter {
    pub fn new() -> Self {
        let mgr = skia::FontMgr::default();
        // First sans family the host knows about; greek letters in the axis
        // labels need a real typeface, not Skia's empty default.
        let typeface = ["DejaVu Sans", "Arial", "Helvetica", "Liberation Sans", "Roboto"]
            .iter()
            .find_map(|family| mgr.match_family_style(family, skia::FontStyle::normal()));
        Self { typeface }
    }

    fn font(&self, size: f32) -> skia::Font {
        match &self.typeface {
            Some(tf) => skia::Font::new(tf.clone(), Some(size.max(1.0))),
            None => {
                let mut font = skia::Font::default();
                font.set_size(size.max(1.0));
                font
            }
        }
    }

    /// Advance width of `text` at `size`.
    pub fn width(&self, text: &str, size: f32) -> f32 {
        self.font(size).measure_str(text, None).0
    }

    /// Draw with the baseline's left end at (x, y).
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(color);
        canvas.draw_str(text, (x, y), &self.font(size), &paint);
    }

    /// Draw horizontally centered on `x`, baseline at `y`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let w = self.width(text, size);
        self.draw(canvas, text, x - w * 0.5, y, size, color);
    }

    /// Draw with the baseline's right end at (x, y).
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let w = self.width(text, size);
        self.draw(canvas, text, x - w, y, size, color);
    }
}

impl Default for TextPainter {
    fn default() -> Self {
        Self::new()
    }
}
