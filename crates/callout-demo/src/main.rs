//! Popover demo
//!
//! Usage:
//!   callout-demo                      # Defaults from the platform config dir
//!   callout-demo --config demo.toml   # Explicit settings file
//!   callout-demo --directions up,down --no-animate

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use callout_config::CalloutSettings;
use callout_demo::{parse_directions, DemoOptions};
use callout_ui::{ArrowDirections, PopoverDefaults};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "callout-demo")]
#[command(about = "Terminal playground for popover placement")]
struct Cli {
    /// Settings file to load instead of the platform default
    #[arg(long)]
    config: Option<PathBuf>,

    /// Fade duration in milliseconds, overriding the settings file
    #[arg(long)]
    fade_ms: Option<u64>,

    /// Show and dismiss popovers without fading
    #[arg(long)]
    no_animate: bool,

    /// Directions popovers may open in: bits (1-15) or names (up,down,left,right,any)
    #[arg(long, default_value = "any", value_parser = parse_directions)]
    directions: ArrowDirections,

    /// Log file; the terminal itself is taken over by the demo
    #[arg(long, default_value = "callout-demo.log")]
    log_file: PathBuf,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let default_level = "info";

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let mut settings = match &cli.config {
        Some(path) => CalloutSettings::load_from(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => CalloutSettings::load().context("failed to load settings")?,
    };
    if let Some(fade_ms) = cli.fade_ms {
        settings.popover.fade_ms = fade_ms;
    }
    PopoverDefaults::install(PopoverDefaults::from_settings(&settings));

    let options = DemoOptions {
        directions: cli.directions,
        animate: !cli.no_animate,
    };
    info!(?options, "Starting demo");

    callout_demo::run_demo(options).context("demo terminated with an error")?;
    Ok(())
}
