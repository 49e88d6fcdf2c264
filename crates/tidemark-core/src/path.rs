// File: crates/tidemark-core/src/path.rs
// Summary: Polyline geometry for the series, mapped through the current scales.

use std::fmt::Write as _;

use crate::scale::{LinearScale, Scale, TimeScale};
use crate::series::Dataset;

/// Screen-space polyline in inner-rectangle coordinates, in dataset order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathGeometry {
    pub points: Vec<(f64, f64)>,
}

impl PathGeometry {
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn first(&self) -> Option<(f64, f64)> { self.points.first().copied() }
    pub fn last(&self) -> Option<(f64, f64)> { self.points.last().copied() }

    /// Fewer than two vertices: nothing to stroke.
    pub fn is_degenerate(&self) -> bool { self.points.len() < 2 }

    /// Sum of segment lengths in pixels.
    pub fn stroke_length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|w| (w[1].0 - w[0].0).hypot(w[1].1 - w[0].1))
            .sum()
    }

    /// SVG path data: `M x,yL x,y...`; a lone vertex closes onto itself (`M x,yZ`).
    pub fn to_svg_data(&self) -> String {
        let mut d = String::with_capacity(self.points.len() * 16);
        for (i, (x, y)) in self.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{cmd}{x},{y}");
        }
        if self.points.len() == 1 {
            d.push('Z');
        }
        d
    }
}

/// Map every point to `(x(timestamp), y(value))`. The dataset is not re-sorted.
pub fn render_path(dataset: &Dataset, x: &TimeScale, y: &LinearScale) -> PathGeometry {
    let points = dataset
        .iter()
        .map(|p| (x.map(p.timestamp), y.map(p.value)))
        .collect();
    PathGeometry { points }
}
