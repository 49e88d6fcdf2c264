// File: crates/tidemark-core/src/svg.rs
// Summary: Serialise a Scene as a standalone SVG document.

use std::fmt::Write as _;

use crate::axis::{AxisOrient, AxisVisual};
use crate::chart::Scene;

/// Line stroke used for the series.
pub const STROKE: &str = "steelblue";
pub const STROKE_WIDTH: f64 = 1.5;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn write_axis(out: &mut String, axis: &AxisVisual, class: &str, transform: Option<String>) {
    let (r0, r1) = axis.range;
    let outer = axis.tick_size_outer;
    let _ = match transform {
        Some(t) => write!(out, r#"<g class="{class}" transform="{t}" font-size="10" font-family="sans-serif">"#),
        None => write!(out, r#"<g class="{class}" font-size="10" font-family="sans-serif">"#),
    };
    let domain = match axis.orient {
        AxisOrient::Bottom => format!("M{r0},{outer}V0H{r1}V{outer}"),
        AxisOrient::Left => format!("M{},{r0}H0V{r1}H{}", -outer, -outer),
    };
    let _ = write!(out, r#"<path class="domain" stroke="currentColor" fill="none" d="{domain}"/>"#);
    let spacing = axis.tick_size_inner.max(0.0) + axis.tick_padding;
    for tick in &axis.ticks {
        let label = escape(&tick.label);
        let _ = match axis.orient {
            AxisOrient::Bottom => write!(
                out,
                r#"<g class="tick" transform="translate({},0)"><line stroke="currentColor" y2="{}"/><text fill="currentColor" y="{spacing}" dy="0.71em" text-anchor="middle">{label}</text></g>"#,
                tick.offset, axis.tick_size_inner
            ),
            AxisOrient::Left => write!(
                out,
                r#"<g class="tick" transform="translate(0,{})"><line stroke="currentColor" x2="{}"/><text fill="currentColor" x="{}" dy="0.32em" text-anchor="end">{label}</text></g>"#,
                tick.offset, -axis.tick_size_inner, -spacing
            ),
        };
    }
    out.push_str("</g>");
}

/// SVG with the plot group translated by the margins; the path is clipped to
/// the inner rectangle and a transparent `rect.zoom` marks the gesture region.
pub fn render_svg(scene: &Scene) -> String {
    let vp = &scene.viewport;
    let (iw, ih) = (vp.inner_width(), vp.inner_height());
    let mut out = String::with_capacity(4096 + scene.path.len() * 24);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
        vp.width, vp.height
    );
    let _ = write!(
        out,
        r#"<defs><clipPath id="plot-clip"><rect width="{iw}" height="{ih}"/></clipPath></defs>"#
    );
    let _ = write!(out, r#"<g transform="translate({},{})">"#, vp.insets.left, vp.insets.top);
    write_axis(&mut out, &scene.x_axis, "x-axis", Some(format!("translate(0,{ih})")));
    write_axis(&mut out, &scene.y_axis, "y-axis", None);
    let _ = write!(
        out,
        r#"<path class="line" clip-path="url(#plot-clip)" fill="none" stroke="{STROKE}" stroke-width="{STROKE_WIDTH}" d="{}"/>"#,
        scene.path.to_svg_data()
    );
    let _ = write!(
        out,
        r#"<rect class="zoom" width="{iw}" height="{ih}" fill="none" pointer-events="all"/>"#
    );
    out.push_str("</g></svg>");
    out
}
