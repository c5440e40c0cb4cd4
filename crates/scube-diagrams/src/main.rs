//! Draws the linear and spherical cube map diagrams and prints their
//! distortion report.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p scube-diagrams` to write the SVGs into the current directory.
//! Run with `cargo run -p scube-diagrams -- --output-dir out --max-depth 6` to override.

mod diagrams;

use std::error::Error;

use clap::Parser;
use scube_config::{CliArgs, Config, resolve_config_dir};
use tracing::{error, info};

fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let out_dir = &config.diagrams.output_dir;
    std::fs::create_dir_all(out_dir)?;
    info!(out_dir = %out_dir.display(), "writing diagrams");

    let faces = diagrams::write_face_diagrams(config, out_dir)?;
    let cubes = diagrams::write_cube_diagrams(config, out_dir)?;
    info!(files = faces.len() + cubes.len(), "diagrams written");

    if config.report.enabled {
        let reports = diagrams::measure_both(config.report.resolution)?;
        for line in diagrams::report_lines(&reports) {
            println!("{line}");
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = CliArgs::parse();

    let config_dir = resolve_config_dir(&args)?;

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);
    config.validate()?;

    let log_dir = config_dir.join("logs");
    scube_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    if let Err(e) = run(&config) {
        error!("{e}");
        return Err(e);
    }
    Ok(())
}
