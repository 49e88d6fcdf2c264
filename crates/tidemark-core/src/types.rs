// File: crates/tidemark-core/src/types.rs
// Summary: Shared layout types (surface size, margins, inner plot rectangle).

use serde::{Deserialize, Serialize};

/// Default surface width in pixels.
pub const WIDTH: u32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 400;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right), widened so it cannot overflow.
    pub const fn hsum(&self) -> u64 { self.left as u64 + self.right as u64 }
    /// Total vertical inset (top + bottom), widened so it cannot overflow.
    pub const fn vsum(&self) -> u64 { self.top as u64 + self.bottom as u64 }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(50, 30, 20, 30)
    }
}

/// Axis-aligned rectangle in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }

    /// Edges are inclusive so a pointer resting on the border still counts.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

/// Fixed drawing surface: total size plus margins around the plot area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
}

impl Viewport {
    pub const fn new(width: u32, height: u32, insets: Insets) -> Self {
        Self { width, height, insets }
    }

    /// Plot width after margins; negative when the margins do not fit.
    pub fn inner_width(&self) -> f64 {
        self.width as f64 - self.insets.hsum() as f64
    }

    /// Plot height after margins; negative when the margins do not fit.
    pub fn inner_height(&self) -> f64 {
        self.height as f64 - self.insets.vsum() as f64
    }

    /// Inner rectangle in surface coordinates.
    pub fn inner_rect(&self) -> Rect {
        Rect::from_ltwh(
            self.insets.left as f64,
            self.insets.top as f64,
            self.inner_width(),
            self.inner_height(),
        )
    }

    /// True when the inner rectangle has positive area.
    pub fn has_area(&self) -> bool {
        self.inner_width() > 0.0 && self.inner_height() > 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }
}
