// File: crates/tidemark-core/src/lib.rs
// Summary: Core library entry point; scales, axes, paths, zoom and cache-then-fetch loading.

pub mod axis;
pub mod cache;
pub mod chart;
pub mod config;
pub mod error;
pub mod loader;
pub mod path;
pub mod scale;
pub mod series;
pub mod source;
pub mod svg;
pub mod ticks;
pub mod types;
pub mod zoom;

pub use axis::{render_axis, render_x_axis, render_y_axis, AxisOrient, AxisTick, AxisVisual};
pub use cache::{JsonFileCache, MemoryCache};
pub use chart::{ChartEngine, ChartHandle, MountOutcome, Scene};
pub use config::ChartConfig;
pub use error::{CacheError, ChartError, ConfigError, SourceError};
pub use loader::{DataLoader, DataSource, LoadOrigin, PersistentCache, CACHE_KEY};
pub use path::{render_path, PathGeometry};
pub use scale::{build_scales, LinearScale, Scale, TimeScale};
pub use series::{Dataset, Point};
pub use source::{SimulatedSource, StaticSource};
pub use svg::render_svg;
pub use types::{Insets, Rect, Viewport};
pub use zoom::{rescale_x, Gesture, ScaleExtent, TransformEvent, ZoomController, ZoomState, ZoomTransform};
