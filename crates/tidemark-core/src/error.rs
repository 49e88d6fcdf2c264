// File: crates/tidemark-core/src/error.rs
// Summary: Error taxonomy for loading, caching, configuration and mounting.

use thiserror::Error;

/// Failure reported by a [`DataSource`](crate::loader::DataSource).
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("data source I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("data source returned malformed records: {0}")]
    Decode(String),
    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

/// Failure reported by a [`PersistentCache`](crate::loader::PersistentCache).
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("cache entry could not be encoded or decoded: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("cache backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Errors surfaced to the caller of [`ChartEngine::mount`](crate::chart::ChartEngine::mount).
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to load time series: {0}")]
    Load(#[from] SourceError),
    #[error("dataset is empty; cannot derive scale extents")]
    DegenerateDataset,
    #[error("point {index} is earlier than its predecessor")]
    Unordered { index: usize },
    #[error("point {index} has a non-finite value")]
    NonFinite { index: usize },
    #[error("viewport {width}x{height} leaves no room for the plot area")]
    InvalidViewport { width: u32, height: u32 },
    #[error(transparent)]
    Config(#[from] ConfigError),
}
