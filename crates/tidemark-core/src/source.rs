// File: crates/tidemark-core/src/source.rs
// Summary: Built-in DataSource implementations (synthetic hourly series, fixed dataset).

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use rand::Rng;

use crate::error::SourceError;
use crate::loader::DataSource;
use crate::series::{Dataset, Point};

/// Synthetic series: one point per `step` over `[start, end)`, values uniform
/// in `[0, max_value)`. Every call draws fresh values.
#[derive(Clone, Debug)]
pub struct SimulatedSource {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub step: TimeDelta,
    pub max_value: f64,
}

impl SimulatedSource {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, step: TimeDelta) -> Self {
        Self { start, end, step, max_value: 100.0 }
    }

    /// Timestamps the source will emit, in order.
    pub fn timestamps(&self) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        let step = self.step;
        let end = self.end;
        std::iter::successors(Some(self.start), move |t| t.checked_add_signed(step))
            .take_while(move |t| *t < end)
    }
}

impl Default for SimulatedSource {
    /// Hourly over 2022-01-01 .. 2022-01-10 (216 points).
    fn default() -> Self {
        let day = |d| {
            NaiveDate::from_ymd_opt(2022, 1, d)
                .and_then(|n| n.and_hms_opt(0, 0, 0))
                .map(|n| n.and_utc())
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        };
        Self::new(day(1), day(10), TimeDelta::hours(1))
    }
}

impl DataSource for SimulatedSource {
    async fn fetch(&self) -> Result<Dataset, SourceError> {
        if self.step <= TimeDelta::zero() {
            return Err(SourceError::Unavailable("simulated step must be positive".into()));
        }
        if !(self.max_value.is_finite() && self.max_value > 0.0) {
            return Err(SourceError::Unavailable("simulated max_value must be positive".into()));
        }
        let mut rng = rand::rng();
        let points = self
            .timestamps()
            .map(|t| Point::new(t, rng.random_range(0.0..self.max_value)))
            .collect();
        Dataset::new(points).map_err(|e| SourceError::Decode(e.to_string()))
    }
}

/// Always returns the same dataset.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    dataset: Dataset,
}

impl StaticSource {
    pub fn new(dataset: Dataset) -> Self { Self { dataset } }
}

impl DataSource for StaticSource {
    async fn fetch(&self) -> Result<Dataset, SourceError> {
        Ok(self.dataset.clone())
    }
}
