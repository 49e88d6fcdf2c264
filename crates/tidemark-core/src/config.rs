// File: crates/tidemark-core/src/config.rs
// Summary: Chart configuration (viewport, cache key, zoom limits), loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::loader::CACHE_KEY;
use crate::scale::DEFAULT_TICKS;
use crate::types::Viewport;
use crate::zoom::{ScaleExtent, ZoomController};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub viewport: Viewport,
    pub cache_key: String,
    pub scale_extent: ScaleExtent,
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub wheel_step: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            cache_key: CACHE_KEY.to_owned(),
            scale_extent: ScaleExtent::default(),
            x_ticks: DEFAULT_TICKS,
            y_ticks: DEFAULT_TICKS,
            wheel_step: ZoomController::WHEEL_STEP,
        }
    }
}

impl ChartConfig {
    /// Parse and validate. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let vp = &self.viewport;
        if !vp.has_area() {
            return Err(ConfigError::Invalid(format!(
                "viewport {}x{} is smaller than its margins",
                vp.width, vp.height
            )));
        }
        if self.cache_key.is_empty() {
            return Err(ConfigError::Invalid("cache_key must not be empty".into()));
        }
        let ScaleExtent { min, max } = self.scale_extent;
        if !self.scale_extent.is_valid() {
            return Err(ConfigError::Invalid(format!("scale_extent [{min}, {max}] is not a valid range")));
        }
        if self.x_ticks == 0 || self.y_ticks == 0 {
            return Err(ConfigError::Invalid("tick counts must be positive".into()));
        }
        if !(self.wheel_step.is_finite() && self.wheel_step > 0.0) {
            return Err(ConfigError::Invalid("wheel_step must be positive".into()));
        }
        Ok(())
    }
}
