// File: crates/tidemark-core/src/chart.rs
// Summary: ChartEngine: mount (load -> scales -> axes + path), zoom re-render loop, unmount.

use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, info, trace};

use crate::axis::{render_axis, AxisOrient, AxisVisual};
use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::loader::{DataLoader, DataSource, LoadOrigin, PersistentCache};
use crate::path::{render_path, PathGeometry};
use crate::scale::{build_scales, LinearScale, TimeScale};
use crate::series::Dataset;
use crate::types::{Rect, Viewport};
use crate::zoom::{Gesture, TransformEvent, ZoomController, ZoomState, ZoomTransform};

/// Everything a backend needs to draw one frame. Axis and path coordinates are
/// relative to the inner rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub viewport: Viewport,
    pub x_axis: AxisVisual,
    pub y_axis: AxisVisual,
    pub path: PathGeometry,
    pub transform: ZoomTransform,
    /// Incremented on every re-render of a mounted chart.
    pub revision: u64,
}

impl Scene {
    pub fn inner_rect(&self) -> Rect { self.viewport.inner_rect() }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountOutcome {
    Mounted { origin: LoadOrigin },
    /// The chart was unmounted while data was loading; nothing was rendered.
    Cancelled,
}

/// Cloneable liveness token. Unmounting through any clone invalidates the
/// chart instance, including a mount still waiting on its data.
#[derive(Clone, Debug, Default)]
pub struct ChartHandle {
    generation: Rc<Cell<u64>>,
}

impl ChartHandle {
    pub fn unmount(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }

    fn generation(&self) -> u64 { self.generation.get() }
}

struct MountedChart {
    generation: u64,
    dataset: Dataset,
    x_base: TimeScale,
    x: TimeScale,
    y: LinearScale,
    zoom: ZoomController,
    scene: Scene,
}

impl MountedChart {
    /// Replace x-axis and path together so both reflect the same x-scale.
    fn rerender(&mut self, x: TimeScale, x_ticks: usize) {
        let x_axis = render_axis(&x, AxisOrient::Bottom, x_ticks);
        let path = render_path(&self.dataset, &x, &self.y);
        self.x = x;
        self.scene.x_axis = x_axis;
        self.scene.path = path;
        self.scene.transform = self.zoom.transform();
        self.scene.revision += 1;
    }
}

pub struct ChartEngine<C, S> {
    loader: DataLoader<C, S>,
    config: ChartConfig,
    handle: ChartHandle,
    mounted: Option<MountedChart>,
}

impl<C: PersistentCache, S: DataSource> ChartEngine<C, S> {
    pub fn new(cache: C, source: S) -> Self {
        Self::with_config(cache, source, ChartConfig::default())
    }

    pub fn with_config(cache: C, source: S, config: ChartConfig) -> Self {
        let loader = DataLoader::with_key(cache, source, config.cache_key.clone());
        Self { loader, config, handle: ChartHandle::default(), mounted: None }
    }

    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn loader(&self) -> &DataLoader<C, S> { &self.loader }
    pub fn handle(&self) -> ChartHandle { self.handle.clone() }

    fn live(&self) -> Option<&MountedChart> {
        let generation = self.handle.generation();
        self.mounted.as_ref().filter(|m| m.generation == generation)
    }

    fn live_mut(&mut self) -> Option<&mut MountedChart> {
        let generation = self.handle.generation();
        if self.mounted.as_ref().is_some_and(|m| m.generation != generation) {
            debug!("releasing chart unmounted through a handle");
            self.mounted = None;
        }
        self.mounted.as_mut()
    }

    pub fn is_mounted(&self) -> bool { self.live().is_some() }

    /// Load data, derive scales and render once. The config is validated and
    /// any previous instance is unmounted first. Rendering only happens once loading has resolved and
    /// the chart is still live.
    pub async fn mount(&mut self, viewport: Viewport) -> Result<MountOutcome, ChartError> {
        self.config.validate()?;
        if !viewport.has_area() {
            return Err(ChartError::InvalidViewport { width: viewport.width, height: viewport.height });
        }
        self.unmount();
        let generation = self.handle.generation();

        let loaded = self.loader.load_with_origin().await;
        if self.handle.generation() != generation {
            debug!(ok = loaded.is_ok(), "chart unmounted during load; discarding result");
            return Ok(MountOutcome::Cancelled);
        }
        let (dataset, origin) = loaded?;

        let (x, y) = build_scales(&dataset, &viewport)?;
        let zoom = ZoomController::new(viewport.inner_width(), self.config.scale_extent)
            .with_wheel_step(self.config.wheel_step);
        let scene = Scene {
            viewport,
            x_axis: render_axis(&x, AxisOrient::Bottom, self.config.x_ticks),
            y_axis: render_axis(&y, AxisOrient::Left, self.config.y_ticks),
            path: render_path(&dataset, &x, &y),
            transform: ZoomTransform::IDENTITY,
            revision: 0,
        };
        info!(points = dataset.len(), ?origin, width = viewport.width, height = viewport.height, "chart mounted");
        self.mounted = Some(MountedChart { generation, dataset, x_base: x, x, y, zoom, scene });
        Ok(MountOutcome::Mounted { origin })
    }

    /// Release dataset, scales and zoom state, and detach input handling.
    pub fn unmount(&mut self) {
        self.handle.unmount();
        if self.mounted.take().is_some() {
            info!("chart unmounted");
        }
    }

    pub fn scene(&self) -> Option<&Scene> { self.live().map(|m| &m.scene) }
    pub fn dataset(&self) -> Option<&Dataset> { self.live().map(|m| &m.dataset) }
    /// Current (possibly rescaled) x-scale.
    pub fn x_scale(&self) -> Option<&TimeScale> { self.live().map(|m| &m.x) }
    /// X-scale derived at mount time, before any zoom.
    pub fn base_x_scale(&self) -> Option<&TimeScale> { self.live().map(|m| &m.x_base) }
    pub fn y_scale(&self) -> Option<&LinearScale> { self.live().map(|m| &m.y) }
    pub fn zoom_state(&self) -> Option<ZoomState> { self.live().map(|m| m.zoom.state()) }

    /// Surface-space rectangle that accepts gestures.
    pub fn interactive_region(&self) -> Option<Rect> { self.live().map(|m| m.scene.inner_rect()) }

    /// Apply a transform event and re-render the x-axis and path.
    /// Returns `None` when no chart is mounted.
    pub fn on_transform(&mut self, event: TransformEvent) -> Option<&Scene> {
        let x_ticks = self.config.x_ticks;
        let m = self.live_mut()?;
        let x = m.zoom.on_zoom(event, &m.x_base);
        m.rerender(x, x_ticks);
        trace!(
            scale_factor = m.scene.transform.scale_factor,
            translate_x = m.scene.transform.translate_x,
            revision = m.scene.revision,
            "zoom re-render"
        );
        Some(&m.scene)
    }

    /// Route a gesture given in surface coordinates. Gestures outside the
    /// inner rectangle are ignored and return `None`.
    pub fn on_gesture(&mut self, gesture: Gesture) -> Option<&Scene> {
        let m = self.live_mut()?;
        let region = m.scene.inner_rect();
        let (px, py) = gesture.position();
        if !region.contains(px, py) {
            trace!(x = px, y = py, "gesture outside interactive region");
            return None;
        }
        let event = m.zoom.gesture_event(&gesture.offset_by(region.left, region.top));
        self.on_transform(event)
    }

    /// Back to the identity transform.
    pub fn reset_zoom(&mut self) -> Option<&Scene> {
        let x_ticks = self.config.x_ticks;
        let m = self.live_mut()?;
        m.zoom.reset();
        let base = m.x_base;
        m.rerender(base, x_ticks);
        Some(&m.scene)
    }
}
