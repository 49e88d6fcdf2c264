// File: crates/tidemark-core/src/series.rs
// Summary: Time-series data model: timestamped points and the ordered dataset.
// Notes:
// - A `Dataset` is always ascending by timestamp with finite values. It may be
//   empty; emptiness is rejected where scales are derived.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(alias = "date")]
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl Point {
    pub const fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Ascending-by-timestamp sequence of points.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point>", into = "Vec<Point>")]
pub struct Dataset {
    points: Vec<Point>,
}

impl Dataset {
    /// Validate ordering and finiteness. Equal timestamps are accepted.
    pub fn new(points: Vec<Point>) -> Result<Self, ChartError> {
        for (index, p) in points.iter().enumerate() {
            if !p.value.is_finite() {
                return Err(ChartError::NonFinite { index });
            }
            if index > 0 && p.timestamp < points[index - 1].timestamp {
                return Err(ChartError::Unordered { index });
            }
        }
        Ok(Self { points })
    }

    /// Sort by timestamp first, then validate. Useful for sources with no ordering guarantee.
    pub fn from_unsorted(mut points: Vec<Point>) -> Result<Self, ChartError> {
        points.sort_by_key(|p| p.timestamp);
        Self::new(points)
    }

    pub fn points(&self) -> &[Point] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn first(&self) -> Option<&Point> { self.points.first() }
    pub fn last(&self) -> Option<&Point> { self.points.last() }
    pub fn iter(&self) -> std::slice::Iter<'_, Point> { self.points.iter() }

    /// `(min, max)` timestamp. Ordering makes this the first and last point.
    pub fn time_extent(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        Some((self.first()?.timestamp, self.last()?.timestamp))
    }

    /// Largest value, or `None` for an empty dataset.
    pub fn max_value(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::max)
    }

    pub fn into_points(self) -> Vec<Point> { self.points }
}

impl TryFrom<Vec<Point>> for Dataset {
    type Error = ChartError;
    fn try_from(points: Vec<Point>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<Dataset> for Vec<Point> {
    fn from(d: Dataset) -> Self { d.points }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter { self.points.iter() }
}
