// File: crates/tidemark-core/src/axis.rs
// Summary: Axis visuals (tick offsets + labels) derived purely from a scale.

use crate::scale::{LinearScale, Scale, TimeScale, DEFAULT_TICKS};

/// Side of the plot the axis is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    /// Pixel offset along the axis, in inner-rectangle coordinates.
    pub offset: f64,
    pub label: String,
}

/// Renderer-agnostic description of one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisVisual {
    pub orient: AxisOrient,
    /// Pixel extent of the axis line (the scale's range).
    pub range: (f64, f64),
    pub ticks: Vec<AxisTick>,
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
}

impl AxisVisual {
    pub fn tick_offsets(&self) -> impl Iterator<Item = f64> + '_ {
        self.ticks.iter().map(|t| t.offset)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.ticks.iter().map(|t| t.label.as_str())
    }
}

/// Build an axis for any scale. Pure: equal scales give equal visuals.
pub fn render_axis<S: Scale>(scale: &S, orient: AxisOrient, count: usize) -> AxisVisual {
    let ticks = scale
        .ticks(count)
        .into_iter()
        .map(|v| AxisTick { offset: scale.map(v), label: scale.format_tick(v, count) })
        .collect();
    AxisVisual {
        orient,
        range: scale.range(),
        ticks,
        tick_size_inner: 6.0,
        tick_size_outer: 6.0,
        tick_padding: 3.0,
    }
}

pub fn render_x_axis(x: &TimeScale) -> AxisVisual {
    render_axis(x, AxisOrient::Bottom, DEFAULT_TICKS)
}

pub fn render_y_axis(y: &LinearScale) -> AxisVisual {
    render_axis(y, AxisOrient::Left, DEFAULT_TICKS)
}
