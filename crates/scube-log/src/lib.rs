//! Structured logging for the cube map diagram tools.
//!
//! Provides structured, filterable logging via the `tracing` ecosystem.
//! Console output carries uptime timestamps and module paths; debug builds
//! can additionally write JSON lines to a file. The level comes from
//! `RUST_LOG`, then the config's `debug.log_level`, then `info`.

use std::path::Path;
use std::sync::Mutex;

use scube_config::Config;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config names a level.
pub const DEFAULT_FILTER: &str = "info";

/// File name of the JSON log inside the log directory.
pub const LOG_FILE_NAME: &str = "scube.log";

/// The filter directive implied by `config`, ignoring `RUST_LOG`.
#[must_use]
pub fn filter_directive(config: Option<&Config>) -> String {
    match config {
        Some(config) if !config.debug.log_level.is_empty() => config.debug.log_level.clone(),
        _ => DEFAULT_FILTER.to_string(),
    }
}

/// Initialize the global tracing subscriber.
///
/// Sets up:
/// - Console output with uptime, module paths, and severity levels
/// - JSON file logging to `log_dir/scube.log` when `debug_build` is set
/// - `RUST_LOG` filtering, falling back to [`filter_directive`]
///
/// `log` records from dependencies are bridged into the same subscriber.
///
/// # Examples
///
/// ```no_run
/// use scube_log::init_logging;
/// use scube_config::Config;
///
/// // Basic initialization
/// init_logging(None, false, None);
///
/// // With config override
/// let config = Config::default();
/// init_logging(None, false, Some(&config));
/// ```
pub fn init_logging(log_dir: Option<&Path>, debug_build: bool, config: Option<&Config>) {
    let filter_str = filter_directive(config);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter_str));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if debug_build
        && let Some(log_dir) = log_dir
        && std::fs::create_dir_all(log_dir).is_ok()
        && let Ok(log_file) = std::fs::File::create(log_dir.join(LOG_FILE_NAME))
    {
        let file_layer = fmt::layer()
            .with_writer(Mutex::new(log_file))
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::uptime())
            .json();

        subscriber.with(file_layer).init();
        return;
    }

    subscriber.init();
}

/// An `EnvFilter` for [`DEFAULT_FILTER`].
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_FILTER)
}
