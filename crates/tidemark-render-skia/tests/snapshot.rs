// File: crates/tidemark-render-skia/tests/snapshot.rs
// Purpose: Pixel checks on a deterministic zoomed scene rendered with labels off.

use chrono::{TimeDelta, TimeZone, Utc};
use tidemark_core::{build_scales, render_path, render_x_axis, render_y_axis, rescale_x, Dataset, Point, Scene, Viewport, ZoomTransform};
use tidemark_render_skia::{RenderOptions, SkiaRenderer, Theme};

fn render_bytes() -> Vec<u8> {
    let start = Utc.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
    let points = (0..216)
        .map(|i| Point::new(start + TimeDelta::hours(i), ((i as f64) * 0.2).sin() * 40.0 + 50.0))
        .collect();
    let data = Dataset::new(points).unwrap();
    let viewport = Viewport::default();
    let (x_base, y) = build_scales(&data, &viewport).unwrap();
    let transform = ZoomTransform { scale_factor: 2.0, translate_x: -360.0 };
    let x = rescale_x(&x_base, &transform);
    let scene = Scene {
        viewport,
        x_axis: render_x_axis(&x),
        y_axis: render_y_axis(&y),
        path: render_path(&data, &x, &y),
        transform,
        revision: 1,
    };
    let renderer = SkiaRenderer::new(RenderOptions { theme: Theme::classic(), draw_labels: false });
    renderer.render_png_bytes(&scene).expect("render")
}

#[test]
fn clipped_line_never_reaches_margins() {
    let img = image::load_from_memory(&render_bytes()).expect("decode").to_rgba8();
    // Right margin column, away from the axes: pure background.
    for y in 0..400 {
        assert_eq!(img.get_pixel(790, y).0, [255, 255, 255, 255], "row {y}");
    }
}

#[test]
fn rendering_is_deterministic_and_draws_the_series() {
    let bytes = render_bytes();
    let got = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    let again = image::load_from_memory(&render_bytes()).expect("decode").to_rgba8();
    assert_eq!(got.as_raw(), again.as_raw());

    // Some pixel inside the plot area carries the steelblue stroke hue.
    let steelblue = got
        .enumerate_pixels()
        .filter(|(x, y, _)| (51..769).contains(x) && (21..369).contains(y))
        .any(|(_, _, p)| p.0[2] > 150 && p.0[0] < 130 && p.0[1] > 100 && p.0[1] < 170);
    assert!(steelblue, "series stroke not found inside the plot area");
}
