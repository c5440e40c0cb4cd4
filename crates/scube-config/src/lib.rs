//! Configuration for the cube map diagram tools.
//!
//! Cameras, output locations, and report settings persist to disk as a RON
//! file. Supports CLI overrides via clap and forward/backward compatible
//! serialization; partial camera sections fall back to their own preset.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, resolve_config_dir};
pub use config::{
    CameraConfig, Config, DebugConfig, DiagramConfig, FrustumConfig, MAX_SUBDIVISION_DEPTH,
    OrbitConfig, ProjectionKind, ReportConfig, ViewportConfig,
};
pub use error::ConfigError;
