// File: crates/tidemark-core/src/scale.rs
// Summary: Time (X) and linear (Y) scales plus derivation from a dataset's extent.

use chrono::{DateTime, Utc};

use crate::error::ChartError;
use crate::series::Dataset;
use crate::ticks;
use crate::types::Viewport;

/// Default tick count requested by axes and `nice`.
pub const DEFAULT_TICKS: usize = 10;

/// Total time span given to a single-point dataset, centred on that point.
pub const DEGENERATE_SPAN_MS: f64 = 3_600_000.0;

/// Monotonic mapping from a domain interval to a pixel range.
pub trait Scale {
    type Domain: Copy;
    fn map(&self, value: Self::Domain) -> f64;
    fn invert(&self, px: f64) -> Self::Domain;
    fn domain(&self) -> (Self::Domain, Self::Domain);
    fn range(&self) -> (f64, f64);
    fn ticks(&self, count: usize) -> Vec<Self::Domain>;
    fn format_tick(&self, value: Self::Domain, count: usize) -> String;
}

#[inline]
fn interpolate(v: f64, d0: f64, d1: f64, r0: f64, r1: f64) -> f64 {
    let span = d1 - d0;
    if span == 0.0 {
        return (r0 + r1) * 0.5;
    }
    r0 + (v - d0) / span * (r1 - r0)
}

/// Time scale; the domain is kept in epoch milliseconds so rescaled domains
/// keep sub-millisecond precision.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl TimeScale {
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f64, f64)) -> Self {
        Self::from_millis(
            (domain.0.timestamp_millis() as f64, domain.1.timestamp_millis() as f64),
            range,
        )
    }

    pub const fn from_millis(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    pub fn domain_millis(&self) -> (f64, f64) { (self.d0, self.d1) }

    pub fn domain_width_millis(&self) -> f64 { (self.d1 - self.d0).abs() }

    #[inline]
    pub fn map_millis(&self, ms: f64) -> f64 {
        interpolate(ms, self.d0, self.d1, self.r0, self.r1)
    }

    #[inline]
    pub fn invert_millis(&self, px: f64) -> f64 {
        interpolate(px, self.r0, self.r1, self.d0, self.d1)
    }

    /// Same range, new domain.
    pub fn with_domain_millis(&self, d0: f64, d1: f64) -> Self {
        Self { d0, d1, ..*self }
    }
}

impl Scale for TimeScale {
    type Domain = DateTime<Utc>;

    fn map(&self, value: DateTime<Utc>) -> f64 {
        self.map_millis(value.timestamp_millis() as f64)
    }
    fn invert(&self, px: f64) -> DateTime<Utc> {
        ticks::millis_to_datetime(self.invert_millis(px))
    }
    fn domain(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (ticks::millis_to_datetime(self.d0), ticks::millis_to_datetime(self.d1))
    }
    fn range(&self) -> (f64, f64) { (self.r0, self.r1) }
    fn ticks(&self, count: usize) -> Vec<DateTime<Utc>> {
        ticks::time_ticks(self.d0, self.d1, count)
    }
    fn format_tick(&self, value: DateTime<Utc>, _count: usize) -> String {
        ticks::format_time(value)
    }
}

/// Linear numeric scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    /// Round the domain outward to tick-friendly bounds.
    pub fn nice(self, count: usize) -> Self {
        let (d0, d1) = ticks::nice(self.d0, self.d1, count);
        Self { d0, d1, ..self }
    }
}

impl Scale for LinearScale {
    type Domain = f64;

    fn map(&self, value: f64) -> f64 { interpolate(value, self.d0, self.d1, self.r0, self.r1) }
    fn invert(&self, px: f64) -> f64 { interpolate(px, self.r0, self.r1, self.d0, self.d1) }
    fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
    fn range(&self) -> (f64, f64) { (self.r0, self.r1) }
    fn ticks(&self, count: usize) -> Vec<f64> { ticks::ticks(self.d0, self.d1, count) }
    fn format_tick(&self, value: f64, count: usize) -> String {
        ticks::format_number(value, ticks::tick_step(self.d0, self.d1, count))
    }
}

/// Derive the x (time) and y (value) scales for a dataset drawn in `viewport`.
///
/// - x: `[min(timestamp), max(timestamp)] -> [0, inner_width]`
/// - y: `[0, max(value)]`, niced, `-> [inner_height, 0]`
pub fn build_scales(dataset: &Dataset, viewport: &Viewport) -> Result<(TimeScale, LinearScale), ChartError> {
    let (t0, t1) = dataset.time_extent().ok_or(ChartError::DegenerateDataset)?;
    let vmax = dataset.max_value().ok_or(ChartError::DegenerateDataset)?;
    if !viewport.has_area() {
        return Err(ChartError::InvalidViewport { width: viewport.width, height: viewport.height });
    }
    let (iw, ih) = (viewport.inner_width(), viewport.inner_height());

    let (mut d0, mut d1) = (t0.timestamp_millis() as f64, t1.timestamp_millis() as f64);
    if d0 == d1 {
        d0 -= DEGENERATE_SPAN_MS * 0.5;
        d1 += DEGENERATE_SPAN_MS * 0.5;
    }
    let x = TimeScale::from_millis((d0, d1), (0.0, iw));

    // An all-zero series still needs a non-empty value span.
    let top = if vmax == 0.0 { 1.0 } else { vmax };
    let y = LinearScale::new((0.0, top), (ih, 0.0)).nice(DEFAULT_TICKS);
    Ok((x, y))
}
