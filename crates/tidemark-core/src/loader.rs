// File: crates/tidemark-core/src/loader.rs
// Summary: Cache-then-fetch loading: read the cache, fall back to the source,
//          write the fresh data back on a best-effort basis.

use tracing::{debug, warn};

use crate::error::{CacheError, ChartError, SourceError};
use crate::series::Dataset;

/// Logical key under which the time series is cached.
pub const CACHE_KEY: &str = "timeSeriesData";

/// Provider of fresh time-series data. Every call must yield a valid dataset
/// (ascending, finite), though the values themselves may differ between calls.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    async fn fetch(&self) -> Result<Dataset, SourceError>;
}

/// Opaque async key-value store. `get` yields `None` on a cold start.
#[allow(async_fn_in_trait)]
pub trait PersistentCache {
    async fn get(&self, key: &str) -> Result<Option<Dataset>, CacheError>;
    async fn set(&self, key: &str, value: &Dataset) -> Result<(), CacheError>;
}

impl<T: DataSource> DataSource for &T {
    async fn fetch(&self) -> Result<Dataset, SourceError> {
        (**self).fetch().await
    }
}

impl<T: PersistentCache> PersistentCache for &T {
    async fn get(&self, key: &str) -> Result<Option<Dataset>, CacheError> {
        (**self).get(key).await
    }
    async fn set(&self, key: &str, value: &Dataset) -> Result<(), CacheError> {
        (**self).set(key, value).await
    }
}

/// Where a loaded dataset came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOrigin {
    Cache,
    Source,
}

/// Loader holds no data between calls; the dataset is handed to the caller.
pub struct DataLoader<C, S> {
    cache: C,
    source: S,
    key: String,
}

impl<C: PersistentCache, S: DataSource> DataLoader<C, S> {
    pub fn new(cache: C, source: S) -> Self {
        Self::with_key(cache, source, CACHE_KEY)
    }

    pub fn with_key(cache: C, source: S, key: impl Into<String>) -> Self {
        Self { cache, source, key: key.into() }
    }

    pub fn key(&self) -> &str { &self.key }
    pub fn cache(&self) -> &C { &self.cache }
    pub fn source(&self) -> &S { &self.source }

    pub async fn load(&self) -> Result<Dataset, ChartError> {
        self.load_with_origin().await.map(|(d, _)| d)
    }

    /// Like [`load`](Self::load), also reporting whether the cache was hit.
    ///
    /// A non-empty cached entry is returned as is. Otherwise the source is
    /// fetched once and the result written back; a failed write is logged and
    /// ignored. Empty data from the source is `DegenerateDataset` and is not cached.
    pub async fn load_with_origin(&self) -> Result<(Dataset, LoadOrigin), ChartError> {
        match self.cache.get(&self.key).await {
            Ok(Some(cached)) if !cached.is_empty() => {
                debug!(key = %self.key, points = cached.len(), "cache hit");
                return Ok((cached, LoadOrigin::Cache));
            }
            Ok(Some(_)) => debug!(key = %self.key, "cached entry is empty; refetching"),
            Ok(None) => debug!(key = %self.key, "cache miss"),
            Err(err) => warn!(key = %self.key, error = %err, "cache read failed; treating as miss"),
        }

        let fresh = self.source.fetch().await?;
        if fresh.is_empty() {
            return Err(ChartError::DegenerateDataset);
        }
        debug!(key = %self.key, points = fresh.len(), "fetched from source");

        if let Err(err) = self.cache.set(&self.key, &fresh).await {
            warn!(key = %self.key, error = %err, "cache write failed; continuing with fresh data");
        }
        Ok((fresh, LoadOrigin::Source))
    }
}
