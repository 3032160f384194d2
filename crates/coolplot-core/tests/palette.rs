// File: crates/coolplot-core/tests/palette.rs
// Purpose: Palette order, distinctness, and wrap-around slot assignment.

use coolplot_core::{palette, Figure, SeriesSpec};

#[test]
fn six_distinct_colors() {
    assert_eq!(palette::len(), 6);
    for i in 0..palette::len() {
        for j in 0..i {
            assert_ne!(palette::color(i), palette::color(j), "slots {i} and {j} collide");
        }
    }
}

#[test]
fn named_order_matches_house_style() {
    assert_eq!(palette::name(0), "yellowgreen");
    assert_eq!(palette::name(1), "steelblue");
    assert_eq!(palette::name(2), "darkorchid");
    assert_eq!(palette::name(3), "plum");
    assert_eq!(palette::name(4), "goldenrod");
    assert_eq!(palette::name(5), "crimson");
}

#[test]
fn slots_wrap_past_the_end() {
    assert_eq!(palette::color(6), palette::color(0));
    assert_eq!(palette::color(13), palette::color(1));
}

#[test]
fn figure_assigns_colors_by_slot() {
    let mut fig = Figure::new();
    for _ in 0..8 {
        fig.add_series(SeriesSpec::new(vec![(1e4, 1e-22), (2e4, 2e-22)]));
    }
    for slot in 0..6 {
        assert_eq!(fig.series_color(slot), palette::color(slot));
    }
    // The seventh and eighth series reuse colors from the start.
    assert_eq!(fig.series_color(6), palette::color(0));
    assert_eq!(fig.series_color(7), palette::color(1));
}

#[test]
fn pinned_color_beats_the_slot() {
    let mut fig = Figure::new();
    fig.add_series(SeriesSpec::new(vec![(1e4, 1e-22), (2e4, 2e-22)]).with_color(palette::color(1)));
    assert_eq!(fig.series_color(0), palette::color(1));
}
