// File: crates/coolplot-core/src/palette.rs
// Summary: Fixed ordered series palette (the house style's named colors).

use skia_safe as skia;

/// Ordered (name, rgb) entries; series take colors by position.
pub const SERIES_PALETTE: [(&str, (u8, u8, u8)); 6] = [
    ("yellowgreen", (154, 205, 50)),
    ("steelblue", (70, 130, 180)),
    ("darkorchid", (153, 50, 204)),
    ("plum", (221, 160, 221)),
    ("goldenrod", (218, 165, 32)),
    ("crimson", (220, 20, 60)),
];

pub fn len() -> usize { SERIES_PALETTE.len() }

/// Color for series slot `i`. Slots past the end wrap back to the start, so
/// a figure with more series than palette entries reuses colors from index 0.
pub fn color(i: usize) -> skia::Color {
    let (_, (r, g, b)) = SERIES_PALETTE[i % SERIES_PALETTE.len()];
    skia::Color::from_argb(255, r, g, b)
}

/// Name of the color at slot `i`, with the same wrap-around as [`color`].
pub fn name(i: usize) -> &'static str {
    SERIES_PALETTE[i % SERIES_PALETTE.len()].0
}
