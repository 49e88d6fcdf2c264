// File: crates/tidemark-core/tests/common/mod.rs
// Purpose: Shared fixtures: datasets and instrumented cache/source doubles.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use chrono::{DateTime, TimeZone, Utc};
use tidemark_core::{CacheError, ChartHandle, DataSource, Dataset, MemoryCache, PersistentCache, Point, SourceError};

pub fn ts(d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 1, d, h, 0, 0).unwrap()
}

/// `n` hourly points from 2022-01-01 00:00 with the given value pattern.
pub fn hourly(n: usize, value: impl Fn(usize) -> f64) -> Dataset {
    let start = ts(1, 0);
    let points = (0..n)
        .map(|i| Point::new(start + chrono::TimeDelta::hours(i as i64), value(i)))
        .collect();
    Dataset::new(points).expect("valid dataset")
}

/// 216 hourly points (Jan 1 .. Jan 10 2022), deterministic values peaking at 97.3.
pub fn nine_days() -> Dataset {
    hourly(216, |i| if i == 100 { 97.3 } else { (i % 50) as f64 })
}

pub struct CountingSource<S> {
    pub inner: S,
    pub calls: Cell<usize>,
}

impl<S> CountingSource<S> {
    pub fn new(inner: S) -> Self { Self { inner, calls: Cell::new(0) } }
    pub fn calls(&self) -> usize { self.calls.get() }
}

impl<S: DataSource> DataSource for CountingSource<S> {
    async fn fetch(&self) -> Result<Dataset, SourceError> {
        self.calls.set(self.calls.get() + 1);
        self.inner.fetch().await
    }
}

pub struct FailingSource;

impl DataSource for FailingSource {
    async fn fetch(&self) -> Result<Dataset, SourceError> {
        Err(SourceError::Unavailable("offline".into()))
    }
}

/// Memory cache that records every `set` key.
#[derive(Default)]
pub struct RecordingCache {
    pub inner: MemoryCache,
    pub sets: RefCell<Vec<String>>,
}

impl PersistentCache for RecordingCache {
    async fn get(&self, key: &str) -> Result<Option<Dataset>, CacheError> {
        self.inner.get(key).await
    }
    async fn set(&self, key: &str, value: &Dataset) -> Result<(), CacheError> {
        self.sets.borrow_mut().push(key.to_owned());
        self.inner.set(key, value).await
    }
}

/// Cold cache whose writes always fail.
pub struct ReadOnlyCache;

impl PersistentCache for ReadOnlyCache {
    async fn get(&self, _key: &str) -> Result<Option<Dataset>, CacheError> {
        Ok(None)
    }
    async fn set(&self, _key: &str, _value: &Dataset) -> Result<(), CacheError> {
        Err(CacheError::Backend("quota exceeded".into()))
    }
}

/// Cache whose reads fail.
pub struct BrokenCache;

impl PersistentCache for BrokenCache {
    async fn get(&self, _key: &str) -> Result<Option<Dataset>, CacheError> {
        Err(CacheError::Backend("corrupt store".into()))
    }
    async fn set(&self, _key: &str, _value: &Dataset) -> Result<(), CacheError> {
        Ok(())
    }
}

/// Cache that unmounts the chart from inside `get`, i.e. while the mount is suspended.
#[derive(Default)]
pub struct UnmountingCache {
    pub handle: RefCell<Option<ChartHandle>>,
}

impl PersistentCache for UnmountingCache {
    async fn get(&self, _key: &str) -> Result<Option<Dataset>, CacheError> {
        if let Some(h) = self.handle.borrow().as_ref() {
            h.unmount();
        }
        Ok(None)
    }
    async fn set(&self, _key: &str, _value: &Dataset) -> Result<(), CacheError> {
        Ok(())
    }
}
