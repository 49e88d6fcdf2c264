// File: crates/tidemark-demo/src/csv_source.rs
// Summary: DataSource that reads `timestamp,value` rows from a CSV file.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use tidemark_core::{DataSource, Dataset, Point, SourceError};
use tracing::{debug, warn};

#[derive(Debug, Deserialize)]
struct Row {
    #[serde(alias = "date", alias = "time", alias = "datetime")]
    timestamp: String,
    #[serde(alias = "close", alias = "price")]
    value: f64,
}

pub struct CsvSource {
    path: PathBuf,
}

impl CsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// RFC 3339, `YYYY-MM-DD[ HH:MM:SS]`, or epoch seconds/milliseconds.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    if let Ok(t) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(t.and_utc());
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0).map(|t| t.and_utc());
    }
    let n = s.parse::<i64>().ok()?;
    if n > 10_i64.pow(12) {
        DateTime::from_timestamp_millis(n)
    } else {
        DateTime::from_timestamp(n, 0)
    }
}

impl DataSource for CsvSource {
    async fn fetch(&self) -> Result<Dataset, SourceError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|e| SourceError::Unavailable(format!("opening {}: {e}", self.path.display())))?;

        let mut points = Vec::new();
        for (line, rec) in rdr.deserialize::<Row>().enumerate() {
            let row = rec.map_err(|e| SourceError::Decode(e.to_string()))?;
            match parse_timestamp(&row.timestamp) {
                Some(t) if row.value.is_finite() => points.push(Point::new(t, row.value)),
                _ => warn!(line = line + 2, timestamp = %row.timestamp, "skipping unparseable row"),
            }
        }
        debug!(rows = points.len(), path = %self.path.display(), "csv loaded");
        Dataset::from_unsorted(points).map_err(|e| SourceError::Decode(e.to_string()))
    }
}
