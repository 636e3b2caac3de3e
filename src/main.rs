use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use svgraster::{convert, init_logging, load_scene, Config};
use tracing::debug;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

/// Render SVG shapes, groups and `use` references to PNG
#[derive(Parser, Debug)]
#[command(name = "svgraster", version, long_version = LONG_VERSION)]
struct Cli {
    /// Input SVG file
    input: PathBuf,

    /// Output PNG file
    #[arg(required_unless_present = "dump_json")]
    output: Option<PathBuf>,

    /// Config file (.toml or .json); defaults to the platform config directory
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Integer upscale factor
    #[arg(long, value_name = "N")]
    scale: Option<u32>,

    /// Background color, e.g. "white" or "#202020"
    #[arg(long, value_name = "COLOR")]
    background: Option<String>,

    /// Smooth shape edges
    #[arg(long)]
    anti_alias: bool,

    /// Print the built scene as JSON instead of rendering
    #[arg(long)]
    dump_json: bool,
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => Config::load_or_default().context("Failed to load default config")?,
        };

        if let Some(scale) = self.scale {
            config.render.scale = scale;
        }
        if let Some(background) = &self.background {
            config.render.background = background.clone();
        }
        if self.anti_alias {
            config.render.anti_alias = true;
        }

        config.validate().context("Invalid settings")?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    init_logging(&config.logging.level)?;
    debug!("Using {:?}", config);

    if cli.dump_json {
        let imported = load_scene(&cli.input, &config)?;
        println!("{}", imported.scene.to_json()?);
        return Ok(());
    }

    let output = cli
        .output
        .as_deref()
        .context("An output path is required")?;
    let report = convert(&cli.input, output, &config)?;
    if !report.diagnostics.is_empty() {
        eprintln!(
            "{} element(s) were skipped; see warnings above",
            report.diagnostics.len()
        );
    }

    Ok(())
}
