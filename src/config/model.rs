// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

use crate::trigger::{TriggerOptions, Window};

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [trigger]
/// pre_run_delay = true
/// pre_run_delay_secs = 1
/// quiet_period = true
/// quiet_period_secs = 3
///
/// [watch]
/// include = ["src/**/*.rs"]
/// exclude = ["target/**"]
///
/// [command]
/// cmd = "cargo build"
/// ```
///
/// Only `[command]` is required. This is the unvalidated form; convert it
/// with `ConfigFile::try_from`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub trigger: TriggerSection,

    #[serde(default)]
    pub watch: WatchSection,

    pub command: CommandSection,
}

/// Validated configuration.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    trigger: TriggerSection,
    watch: WatchSection,
    command: CommandSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        trigger: TriggerSection,
        watch: WatchSection,
        command: CommandSection,
    ) -> Self {
        Self {
            trigger,
            watch,
            command,
        }
    }

    pub fn trigger(&self) -> &TriggerSection {
        &self.trigger
    }

    pub fn watch(&self) -> &WatchSection {
        &self.watch
    }

    pub fn command(&self) -> &CommandSection {
        &self.command
    }
}

/// `[trigger]` section. Durations are whole seconds; an enabled window with
/// zero seconds means "no wait".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TriggerSection {
    #[serde(default)]
    pub pre_run_delay: bool,

    #[serde(default)]
    pub pre_run_delay_secs: u64,

    #[serde(default)]
    pub quiet_period: bool,

    #[serde(default)]
    pub quiet_period_secs: u64,
}

impl TriggerSection {
    pub fn options(&self) -> TriggerOptions {
        TriggerOptions {
            pre_run_delay: Window::from_secs(self.pre_run_delay, self.pre_run_delay_secs),
            quiet_period: Window::from_secs(self.quiet_period, self.quiet_period_secs),
        }
    }
}

/// `[watch]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WatchSection {
    /// Directory to watch recursively. Relative paths are resolved against the
    /// config file's directory; `None` means that directory itself.
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Glob patterns (relative to `root`) that count as a change. Empty means
    /// every path.
    #[serde(default)]
    pub include: Vec<String>,

    /// Glob patterns that never count as a change, even if included.
    #[serde(default)]
    pub exclude: Vec<String>,
}

/// `[command]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommandSection {
    /// Shell command to run on each trigger run.
    pub cmd: String,

    /// Working directory for the command; relative paths are resolved against
    /// the config file's directory.
    #[serde(default)]
    pub workdir: Option<PathBuf>,
}
