// File: crates/tidemark-core/src/zoom.rs
// Summary: Zoom/pan state machine that turns transform events into rescaled x-scales.
// Notes:
// - The base x-scale is never mutated; every event yields a fresh `TimeScale`.
// - Only the horizontal component exists: the y-scale is not affected by zoom.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::scale::{Scale, TimeScale};

/// Requested zoom state, as produced by a pointer/gesture handler.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformEvent {
    pub scale_factor: f64,
    pub translate_x: f64,
}

impl TransformEvent {
    pub const fn new(scale_factor: f64, translate_x: f64) -> Self {
        Self { scale_factor, translate_x }
    }
}

/// Applied (already constrained) transform: `x' = x * k + tx`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    pub scale_factor: f64,
    pub translate_x: f64,
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self { scale_factor: 1.0, translate_x: 0.0 };

    #[inline]
    pub fn apply_x(&self, x: f64) -> f64 { x * self.scale_factor + self.translate_x }
    #[inline]
    pub fn invert_x(&self, px: f64) -> f64 { (px - self.translate_x) / self.scale_factor }

    pub fn is_identity(&self) -> bool { *self == Self::IDENTITY }
}

impl Default for ZoomTransform {
    fn default() -> Self { Self::IDENTITY }
}

/// Allowed scale factors, inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScaleExtent {
    pub min: f64,
    pub max: f64,
}

impl Default for ScaleExtent {
    fn default() -> Self { Self { min: 1.0, max: 10.0 } }
}

impl ScaleExtent {
    /// Finite, positive and ordered.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min > 0.0 && self.min <= self.max
    }

    /// Swapped bounds are reordered; anything else invalid falls back to the default.
    pub fn normalized(self) -> Self {
        let swapped = Self { min: self.max, max: self.min };
        if self.is_valid() {
            self
        } else if swapped.is_valid() {
            swapped
        } else {
            Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomState {
    Idle,
    Transformed(ZoomTransform),
}

/// Pointer input over the inner rectangle. Coordinates are inner-rectangle pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Scroll wheel; positive `delta_y` zooms out.
    Wheel { x: f64, y: f64, delta_y: f64 },
    /// Horizontal pan by `dx` pixels.
    Drag { x: f64, y: f64, dx: f64 },
    /// Two-finger pinch; `ratio > 1` zooms in.
    Pinch { x: f64, y: f64, ratio: f64 },
    /// Zoom in 2x, or out 2x with shift held.
    DoubleClick { x: f64, y: f64, shift: bool },
}

impl Gesture {
    pub fn position(&self) -> (f64, f64) {
        match *self {
            Gesture::Wheel { x, y, .. }
            | Gesture::Drag { x, y, .. }
            | Gesture::Pinch { x, y, .. }
            | Gesture::DoubleClick { x, y, .. } => (x, y),
        }
    }

    /// Same gesture with its position shifted by `(-dx, -dy)`.
    pub fn offset_by(self, dx: f64, dy: f64) -> Self {
        match self {
            Gesture::Wheel { x, y, delta_y } => Gesture::Wheel { x: x - dx, y: y - dy, delta_y },
            Gesture::Drag { x, y, dx: d } => Gesture::Drag { x: x - dx, y: y - dy, dx: d },
            Gesture::Pinch { x, y, ratio } => Gesture::Pinch { x: x - dx, y: y - dy, ratio },
            Gesture::DoubleClick { x, y, shift } => Gesture::DoubleClick { x: x - dx, y: y - dy, shift },
        }
    }
}

/// Rescale only the x-domain: the visible window is `base.invert(t.invert(range))`.
pub fn rescale_x(base: &TimeScale, t: &ZoomTransform) -> TimeScale {
    let (r0, r1) = base.range();
    let d0 = base.invert_millis(t.invert_x(r0));
    let d1 = base.invert_millis(t.invert_x(r1));
    base.with_domain_millis(d0, d1)
}

pub struct ZoomController {
    extent: ScaleExtent,
    width: f64,
    wheel_step: f64,
    state: ZoomState,
}

impl ZoomController {
    /// Default wheel sensitivity: factor `2^(-delta_y * step)` per wheel event.
    pub const WHEEL_STEP: f64 = 0.002;

    /// `width` is the inner-rectangle width; it is both the viewport extent
    /// and the translate extent. An invalid `extent` is normalized.
    pub fn new(width: f64, extent: ScaleExtent) -> Self {
        let normalized = extent.normalized();
        if normalized != extent {
            warn!(min = extent.min, max = extent.max, "invalid scale extent; using [{}, {}]", normalized.min, normalized.max);
        }
        Self { extent: normalized, width, wheel_step: Self::WHEEL_STEP, state: ZoomState::Idle }
    }

    pub fn extent(&self) -> ScaleExtent { self.extent }

    pub fn with_wheel_step(mut self, wheel_step: f64) -> Self {
        self.wheel_step = wheel_step;
        self
    }

    pub fn state(&self) -> ZoomState { self.state }

    pub fn transform(&self) -> ZoomTransform {
        match self.state {
            ZoomState::Idle => ZoomTransform::IDENTITY,
            ZoomState::Transformed(t) => t,
        }
    }

    fn clamp_scale(&self, k: f64) -> f64 {
        k.clamp(self.extent.min, self.extent.max)
    }

    /// Clamp scale into the extent, then shift so `[0, width]` stays covered.
    /// Non-finite components fall back to the current transform.
    pub fn constrain(&self, event: TransformEvent) -> ZoomTransform {
        let current = self.transform();
        let k_in = if event.scale_factor.is_finite() { event.scale_factor } else { current.scale_factor };
        let tx_in = if event.translate_x.is_finite() { event.translate_x } else { current.translate_x };
        let k = self.clamp_scale(k_in);

        // Viewport extent and translate extent are both [0, width]: a zoomed-in
        // window may slide within [w(1-k), 0]; a zoomed-out one is centred.
        let lo = self.width * (1.0 - k);
        let tx = if lo > 0.0 { lo * 0.5 } else { tx_in.clamp(lo, 0.0) };
        let out = ZoomTransform { scale_factor: k, translate_x: tx };
        if out.scale_factor != event.scale_factor || out.translate_x != event.translate_x {
            trace!(
                requested_k = event.scale_factor,
                requested_tx = event.translate_x,
                scale_factor = out.scale_factor,
                translate_x = out.translate_x,
                "zoom clamped"
            );
        }
        out
    }

    /// Apply an event and return the rescaled x-scale for `base`.
    pub fn on_zoom(&mut self, event: TransformEvent, base: &TimeScale) -> TimeScale {
        let t = self.constrain(event);
        self.state = if t.is_identity() { ZoomState::Idle } else { ZoomState::Transformed(t) };
        rescale_x(base, &t)
    }

    pub fn reset(&mut self) {
        self.state = ZoomState::Idle;
    }

    /// Translate a gesture into the transform event it requests, relative to
    /// the current state. Zooms keep the domain point under the pointer fixed.
    pub fn gesture_event(&self, gesture: &Gesture) -> TransformEvent {
        let t = self.transform();
        let anchored = |k_target: f64, px: f64| {
            let k = self.clamp_scale(k_target);
            let world = t.invert_x(px);
            TransformEvent::new(k, px - world * k)
        };
        match *gesture {
            Gesture::Wheel { x, delta_y, .. } => {
                anchored(t.scale_factor * 2f64.powf(-delta_y * self.wheel_step), x)
            }
            Gesture::Pinch { x, ratio, .. } => anchored(t.scale_factor * ratio, x),
            Gesture::DoubleClick { x, shift, .. } => {
                anchored(t.scale_factor * if shift { 0.5 } else { 2.0 }, x)
            }
            Gesture::Drag { dx, .. } => TransformEvent::new(t.scale_factor, t.translate_x + dx),
        }
    }
}
