// File: crates/tidemark-demo/src/main.rs
// Summary: Demo mounts a chart (cache-then-fetch), replays scripted gestures and writes PNG/SVG frames.

mod csv_source;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tidemark_core::{
    render_svg, ChartConfig, ChartEngine, DataSource, Gesture, JsonFileCache, MountOutcome, Scene, SimulatedSource,
};
use tidemark_render_skia::{theme, SkiaRenderer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::csv_source::CsvSource;

struct Args {
    config: Option<PathBuf>,
    csv: Option<PathBuf>,
    cache_dir: PathBuf,
    out: PathBuf,
    theme: String,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        config: None,
        csv: None,
        cache_dir: PathBuf::from("target/cache"),
        out: PathBuf::from("target/out"),
        theme: "classic".to_string(),
    };
    let mut it = std::env::args().skip(1);
    while let Some(flag) = it.next() {
        let mut value = || it.next().with_context(|| format!("{flag} needs a value"));
        match flag.as_str() {
            "--config" => args.config = Some(value()?.into()),
            "--csv" => args.csv = Some(value()?.into()),
            "--cache-dir" => args.cache_dir = value()?.into(),
            "--out" => args.out = value()?.into(),
            "--theme" => args.theme = value()?,
            other => anyhow::bail!("unknown argument '{other}' (expected --config, --csv, --cache-dir, --out, --theme)"),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => ChartConfig::from_path(path).with_context(|| format!("loading config '{}'", path.display()))?,
        None => ChartConfig::default(),
    };
    let cache = JsonFileCache::new(&args.cache_dir);

    match &args.csv {
        Some(path) => run(ChartEngine::with_config(cache, CsvSource::new(path), config), &args),
        None => run(ChartEngine::with_config(cache, SimulatedSource::default(), config), &args),
    }
}

fn run<S: DataSource>(mut engine: ChartEngine<JsonFileCache, S>, args: &Args) -> Result<()> {
    let viewport = engine.config().viewport;
    let outcome = pollster::block_on(engine.mount(viewport)).context("mounting chart")?;
    let MountOutcome::Mounted { origin } = outcome else {
        anyhow::bail!("chart was unmounted before data arrived");
    };
    info!(?origin, cache = %engine.loader().cache().dir().display(), "data ready");

    let renderer = SkiaRenderer::with_theme(theme::find(&args.theme));
    let scene = engine.scene().context("no scene after mount")?;
    write_frame(&renderer, scene, &args.out, "00_mount")?;

    // Gestures are in surface coordinates: the inner rectangle starts at the margins.
    let inner = engine.interactive_region().context("chart not interactive")?;
    let cx = inner.left + inner.width() * 0.5;
    let cy = inner.top + inner.height() * 0.5;
    let script = [
        ("01_wheel_in", Gesture::Wheel { x: cx, y: cy, delta_y: -600.0 }),
        ("02_drag_left", Gesture::Drag { x: cx, y: cy, dx: -250.0 }),
        ("03_double_click", Gesture::DoubleClick { x: inner.left + 40.0, y: cy, shift: false }),
        ("04_pinch_out", Gesture::Pinch { x: cx, y: cy, ratio: 0.5 }),
    ];
    for (name, gesture) in script {
        if let Some(scene) = engine.on_gesture(gesture) {
            info!(frame = name, k = scene.transform.scale_factor, tx = scene.transform.translate_x, "gesture applied");
            write_frame(&renderer, scene, &args.out, name)?;
        }
    }
    if let Some(scene) = engine.reset_zoom() {
        write_frame(&renderer, scene, &args.out, "05_reset")?;
    }

    engine.unmount();
    Ok(())
}

fn write_frame(renderer: &SkiaRenderer, scene: &Scene, dir: &Path, name: &str) -> Result<()> {
    let png = dir.join(format!("chart_{name}.png"));
    renderer.render_to_png(scene, &png).with_context(|| format!("writing {}", png.display()))?;
    let svg = png.with_extension("svg");
    std::fs::write(&svg, render_svg(scene)).with_context(|| format!("writing {}", svg.display()))?;
    info!(png = %png.display(), revision = scene.revision, "wrote frame");
    Ok(())
}
