//! Logging setup for binaries and tests that embed the engine
//!
//! The engine itself only emits `tracing` events; installing a subscriber
//! is left to the caller.

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::ReportConfig;

/// Filter directive for a `-v` style verbosity count
pub fn log_filter_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install a fmt subscriber filtered at `level`
///
/// `RUST_LOG`, when set, wins over `level`. Returns `false` if a global
/// subscriber was already installed.
pub fn init_logging(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        debug!("rollup logging initialized at level {}", level);
    }
    installed
}

/// Install a subscriber using the level from `config`
pub fn init_logging_from_config(config: &ReportConfig) -> bool {
    init_logging(&config.log_level)
}
