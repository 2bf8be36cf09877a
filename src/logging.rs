// src/logging.rs

//! Logging setup for `coalescer` using `tracing` + `tracing-subscriber`.
//!
//! The level is resolved once at process start, in priority order:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `COALESCER_LOG` environment variable (e.g. "info", "debug")
//! 3. `DEBUG` environment flag (`1`, `yes` or `true` selects debug)
//! 4. default to `info`
//!
//! Logs are sent to STDERR so that command stdout stays readable.

use anyhow::{Result, anyhow};
use tracing_subscriber::fmt;

use crate::cli::LogLevel;

/// Initialise the global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let level = resolve_level(
        cli_level,
        std::env::var("COALESCER_LOG").ok().as_deref(),
        std::env::var("DEBUG").ok().as_deref(),
    );

    fmt()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))
}

/// Pick the effective level from the CLI flag and the raw environment values.
pub fn resolve_level(
    cli_level: Option<LogLevel>,
    log_env: Option<&str>,
    debug_env: Option<&str>,
) -> tracing::Level {
    if let Some(lvl) = cli_level {
        return level_from_log_level(lvl);
    }
    if let Some(lvl) = log_env.and_then(parse_level_str) {
        return lvl;
    }
    if debug_env.is_some_and(debug_flag_enabled) {
        return tracing::Level::DEBUG;
    }
    tracing::Level::INFO
}

fn level_from_log_level(lvl: LogLevel) -> tracing::Level {
    match lvl {
        LogLevel::Error => tracing::Level::ERROR,
        LogLevel::Warn => tracing::Level::WARN,
        LogLevel::Info => tracing::Level::INFO,
        LogLevel::Debug => tracing::Level::DEBUG,
        LogLevel::Trace => tracing::Level::TRACE,
    }
}

fn parse_level_str(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}

/// `DEBUG=1`, `DEBUG=yes` and `DEBUG=true` (any case) turn on debug output.
/// Any other number, including `2`, does not.
fn debug_flag_enabled(s: &str) -> bool {
    let s = s.trim();
    match s.parse::<i64>() {
        Ok(n) => n == 1,
        Err(_) => matches!(s.to_uppercase().as_str(), "YES" | "TRUE"),
    }
}
