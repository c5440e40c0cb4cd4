//! Command-line argument parsing for the diagram tools.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, ConfigError};

/// Cube map diagram command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(
    name = "scube-diagrams",
    about = "Draw and measure linear vs. spherical cube maps"
)]
pub struct CliArgs {
    /// Directory the SVG files are written to.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Cells per side of the face grid diagrams.
    #[arg(long)]
    pub grid_resolution: Option<u32>,

    /// Deepest cube subdivision to draw.
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Cells per side of the face measured by the distortion report.
    #[arg(long)]
    pub report_resolution: Option<u32>,

    /// Skip the distortion report.
    #[arg(long)]
    pub no_report: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(ref dir) = args.output_dir {
            self.diagrams.output_dir = dir.clone();
        }
        if let Some(n) = args.grid_resolution {
            self.diagrams.grid_resolution = n;
        }
        if let Some(depth) = args.max_depth {
            self.diagrams.max_depth = depth;
        }
        if let Some(n) = args.report_resolution {
            self.report.resolution = n;
        }
        if args.no_report {
            self.report.enabled = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

/// `--config` if given, else `<platform config dir>/scube`.
pub fn resolve_config_dir(args: &CliArgs) -> Result<PathBuf, ConfigError> {
    match &args.config {
        Some(dir) => Ok(dir.clone()),
        None => dirs::config_dir()
            .map(|base| base.join("scube"))
            .ok_or(ConfigError::NoConfigDir),
    }
}
