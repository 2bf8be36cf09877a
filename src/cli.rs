// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `coalescer`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "coalescer",
    version,
    about = "Run a command once per burst of file changes.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Coalescer.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Coalescer.toml")]
    pub config: String,

    /// Run the command once and exit, without watching.
    #[arg(long)]
    pub once: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `COALESCER_LOG`, then the `DEBUG` flag, then `info` is used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the effective settings, but don't run anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = CliArgs::try_parse_from(["coalescer"]).unwrap();
        assert_eq!(args.config, "Coalescer.toml");
        assert!(!args.once);
        assert!(!args.dry_run);
        assert_eq!(args.log_level, None);
    }

    #[test]
    fn flags_are_parsed() {
        let args = CliArgs::try_parse_from([
            "coalescer",
            "--config",
            "configs/app.toml",
            "--log-level",
            "debug",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(args.config, "configs/app.toml");
        assert_eq!(args.log_level, Some(LogLevel::Debug));
        assert!(args.dry_run);
    }
}
