//! Leveled logging on stderr through `tracing-subscriber`.
//!
//! The filter is resolved from, highest priority first:
//! 1. `--verbose` (debug)
//! 2. `MANIFEST_LOG`, a full `EnvFilter` directive such as `manifest_manager=trace`
//! 3. `LOGLEVEL`, one of `fatal`, `error`, `warn`, `info`, `debug`; unknown
//!    values are ignored
//! 4. `[log] level` from the config file
//! 5. `info`

use crate::config::LogLevel;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a full filter directive
pub const LOG_ENV: &str = "MANIFEST_LOG";

/// Environment variable holding a plain level name
pub const LEVEL_ENV: &str = "LOGLEVEL";

/// Pick the filter directive from the flag, the environment and the config
#[must_use]
pub fn resolve_directive(
    verbose: bool,
    log_env: Option<&str>,
    level_env: Option<&str>,
    configured: LogLevel,
) -> String {
    if verbose {
        return LogLevel::Debug.as_directive().to_string();
    }

    if let Some(directive) = log_env.map(str::trim).filter(|d| !d.is_empty()) {
        return directive.to_string();
    }

    level_env
        .and_then(|level| level.parse::<LogLevel>().ok())
        .unwrap_or(configured)
        .as_directive()
        .to_string()
}

/// Same as [`resolve_directive`], reading the process environment
#[must_use]
pub fn directive_from_env(verbose: bool, configured: LogLevel) -> String {
    let log_env = std::env::var(LOG_ENV).ok();
    let level_env = std::env::var(LEVEL_ENV).ok();
    resolve_directive(verbose, log_env.as_deref(), level_env.as_deref(), configured)
}

/// Install the global subscriber.
///
/// Returns `false` if a subscriber was already installed. An invalid
/// directive falls back to `info`.
pub fn init(directive: &str) -> bool {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init()
        .is_ok()
}
