// src/config/validate.rs

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{CoalescerError, Result};
use crate::watch::WatchFilter;

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = CoalescerError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.trigger, raw.watch, raw.command))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    validate_command(cfg)?;
    validate_watch_patterns(cfg)?;
    Ok(())
}

fn validate_command(cfg: &RawConfigFile) -> Result<()> {
    if cfg.command.cmd.trim().is_empty() {
        return Err(CoalescerError::ConfigError(
            "[command].cmd must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_watch_patterns(cfg: &RawConfigFile) -> Result<()> {
    // Compiling the filter is the validation; the result is rebuilt at startup.
    WatchFilter::new(&cfg.watch.include, &cfg.watch.exclude)?;
    Ok(())
}
