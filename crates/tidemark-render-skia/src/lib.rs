// File: crates/tidemark-render-skia/src/lib.rs
// Summary: Headless PNG rendering of a tidemark Scene on a Skia CPU raster surface.

use anyhow::Result;
use skia_safe as skia;
use tidemark_core::{AxisOrient, AxisVisual, PathGeometry, Scene};

pub mod theme;

pub use theme::Theme;

/// Stroke width of the series line, in pixels.
pub const LINE_WIDTH: f32 = 1.5;
const FONT_SIZE: f32 = 10.0;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    /// Tick labels depend on the platform default font; snapshot tests turn them off.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::classic(), draw_labels: true }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SkiaRenderer {
    pub opts: RenderOptions,
}

impl SkiaRenderer {
    pub fn new(opts: RenderOptions) -> Self { Self { opts } }

    pub fn with_theme(theme: Theme) -> Self {
        Self::new(RenderOptions { theme, ..RenderOptions::default() })
    }

    /// Encode `scene` as PNG bytes.
    pub fn render_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let vp = scene.viewport;
        let w = i32::try_from(vp.width)?;
        let h = i32::try_from(vp.height)?;
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create {w}x{h} raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(self.opts.theme.background);

        let inner = scene.inner_rect();
        canvas.save();
        canvas.translate((inner.left as f32, inner.top as f32));
        let (iw, ih) = (inner.width() as f32, inner.height() as f32);

        canvas.save();
        canvas.translate((0.0, ih));
        self.draw_axis(canvas, &scene.x_axis);
        canvas.restore();
        self.draw_axis(canvas, &scene.y_axis);

        canvas.save();
        canvas.clip_rect(skia::Rect::from_wh(iw, ih), None, Some(true));
        self.draw_line(canvas, &scene.path);
        canvas.restore();
        canvas.restore();

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render and write a PNG file, creating parent directories.
    pub fn render_to_png(&self, scene: &Scene, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_png_bytes(scene)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    // ---- helpers ------------------------------------------------------------

    fn draw_axis(&self, canvas: &skia::Canvas, axis: &AxisVisual) {
        let mut stroke = skia::Paint::default();
        stroke.set_color(self.opts.theme.axis_line);
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);

        let (r0, r1) = (axis.range.0 as f32, axis.range.1 as f32);
        let outer = axis.tick_size_outer as f32;
        let inner = axis.tick_size_inner as f32;
        let spacing = inner.max(0.0) + axis.tick_padding as f32;

        let mut domain = skia::Path::new();
        match axis.orient {
            AxisOrient::Bottom => {
                domain.move_to((r0, outer));
                domain.line_to((r0, 0.0));
                domain.line_to((r1, 0.0));
                domain.line_to((r1, outer));
            }
            AxisOrient::Left => {
                domain.move_to((-outer, r0));
                domain.line_to((0.0, r0));
                domain.line_to((0.0, r1));
                domain.line_to((-outer, r1));
            }
        }
        canvas.draw_path(&domain, &stroke);

        let mut text = skia::Paint::default();
        text.set_color(self.opts.theme.axis_label);
        text.set_anti_alias(true);
        let mut font = skia::Font::default();
        font.set_size(FONT_SIZE);

        for tick in &axis.ticks {
            let o = tick.offset as f32;
            match axis.orient {
                AxisOrient::Bottom => {
                    canvas.draw_line((o, 0.0), (o, inner), &stroke);
                    if self.opts.draw_labels {
                        let (width, _) = font.measure_str(&tick.label, Some(&text));
                        canvas.draw_str(&tick.label, (o - width * 0.5, spacing + FONT_SIZE), &font, &text);
                    }
                }
                AxisOrient::Left => {
                    canvas.draw_line((0.0, o), (-inner, o), &stroke);
                    if self.opts.draw_labels {
                        let (width, _) = font.measure_str(&tick.label, Some(&text));
                        canvas.draw_str(&tick.label, (-spacing - width, o + FONT_SIZE * 0.32), &font, &text);
                    }
                }
            }
        }
    }

    fn draw_line(&self, canvas: &skia::Canvas, geometry: &PathGeometry) {
        if geometry.is_degenerate() {
            return;
        }
        let mut path = skia::Path::new();
        let mut points = geometry.points.iter().map(|&(x, y)| (x as f32, y as f32));
        if let Some(first) = points.next() {
            path.move_to(first);
        }
        for p in points {
            path.line_to(p);
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(LINE_WIDTH);
        stroke.set_color(self.opts.theme.line_stroke);
        canvas.draw_path(&path, &stroke);
    }
}
