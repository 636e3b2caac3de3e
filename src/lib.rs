//! # svgraster
//!
//! Converts a subset of SVG into PNG images:
//! - `ellipse`, `circle`, `polyline`, `line`, `polygon` and `rect` shapes
//! - `g` groups, `defs` and `use` references by id
//! - one `translate`, `rotate` or `scale` transform per element
//!
//! ## Architecture
//!
//! svgraster is organized as a workspace with multiple crates:
//!
//! 1. **svgraster-core** - Points, colors and error types
//! 2. **svgraster-scene** - Scene graph, transforms, id registry, SVG import
//! 3. **svgraster-raster** - tiny-skia canvas and PNG export
//! 4. **svgraster-settings** - Render and logging configuration
//! 5. **svgraster** - This facade plus the `svgraster` binary

use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

pub use svgraster_core::{Color, Error, Point, Result, SceneError};
pub use svgraster_raster::{PixmapCanvas, RenderOptions};
pub use svgraster_scene::{ImportedScene, Scene, SceneShape, Shape, SvgImporter};
pub use svgraster_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Summary of a finished conversion.
#[derive(Debug, Clone)]
pub struct ConvertReport {
    pub width: u32,
    pub height: u32,
    pub shapes: usize,
    /// Elements that were skipped, in document order
    pub diagnostics: Vec<SceneError>,
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - stderr output, so stdout stays free for `--dump-json`
/// - `level` as the default filter
/// - RUST_LOG environment variable support (takes precedence)
pub fn init_logging(level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("Invalid log level {:?}", level))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Logging was already initialized")?;

    Ok(())
}

/// Imports an SVG file and applies the configured output scale.
pub fn load_scene(input: &Path, config: &Config) -> anyhow::Result<ImportedScene> {
    let mut imported = SvgImporter::new()
        .import_file(input)
        .with_context(|| format!("Failed to import {}", input.display()))?;

    for diagnostic in &imported.diagnostics {
        warn!("{}: {}", input.display(), diagnostic);
    }

    imported.scene.upscale(config.render.scale);
    Ok(imported)
}

/// Converts `input` (SVG) to `output` (PNG).
///
/// Elements that fail to build are skipped and reported in the returned
/// [`ConvertReport`]; only unreadable documents and output failures are
/// errors.
pub fn convert(input: &Path, output: &Path, config: &Config) -> anyhow::Result<ConvertReport> {
    config.validate().context("Invalid configuration")?;
    let options = RenderOptions {
        background: config.render.background_color()?,
        anti_alias: config.render.anti_alias,
    };

    let imported = load_scene(input, config)?;
    let scene = &imported.scene;

    let canvas = PixmapCanvas::render(scene, &options)
        .with_context(|| format!("Failed to render {}", input.display()))?;
    canvas
        .save_png(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    info!(
        "Converted {} -> {} ({}x{}, {} shapes, {} skipped)",
        input.display(),
        output.display(),
        scene.width,
        scene.height,
        scene.len(),
        imported.diagnostics.len()
    );

    Ok(ConvertReport {
        width: scene.width,
        height: scene.height,
        shapes: scene.len(),
        diagnostics: imported.diagnostics,
    })
}
