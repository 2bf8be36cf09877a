// src/trigger/options.rs

use std::time::Duration;

/// An optional wait window (pre-run delay or quiet period).
///
/// A window that is enabled with a zero duration is legal and means
/// "no wait".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Window {
    pub enabled: bool,
    pub duration: Duration,
}

impl Window {
    pub const DISABLED: Window = Window {
        enabled: false,
        duration: Duration::ZERO,
    };

    pub fn new(duration: Duration) -> Self {
        Self {
            enabled: true,
            duration,
        }
    }

    /// Build a window from the whole-second form used in config files.
    pub fn from_secs(enabled: bool, secs: u64) -> Self {
        Self {
            enabled,
            duration: Duration::from_secs(secs),
        }
    }

    /// The duration to wait, if the window is enabled.
    pub fn wait(&self) -> Option<Duration> {
        self.enabled.then_some(self.duration)
    }
}

/// Immutable trigger configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TriggerOptions {
    /// Wait before invoking the processor so near-simultaneous signals fold
    /// into one run. Skipped on quiet-period re-fires.
    pub pre_run_delay: Window,
    /// Wait after the processor returns; signals arriving meanwhile produce
    /// one re-fire when it closes.
    pub quiet_period: Window,
}

impl TriggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pre_run_delay(mut self, duration: Duration) -> Self {
        self.pre_run_delay = Window::new(duration);
        self
    }

    pub fn with_quiet_period(mut self, duration: Duration) -> Self {
        self.quiet_period = Window::new(duration);
        self
    }
}
