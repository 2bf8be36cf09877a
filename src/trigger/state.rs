// src/trigger/state.rs

//! Lock-protected run-cycle flags shared by the listener and run tasks.
//!
//! Single-flag reads and writes go through [`SyncState::get`] and
//! [`SyncState::set`]. Transitions that must read and write together (claiming
//! a run, leaving the quiet period) have their own methods so they happen
//! under one write lock.

use parking_lot::RwLock;

/// One of the three run-cycle flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flag {
    /// The post-run quiet window is open.
    QuietPeriod,
    /// A run has been claimed and its callback has not returned yet.
    Running,
    /// A signal arrived since the last check.
    ChangeSinceCheck,
}

/// Point-in-time copy of all flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct StateSnapshot {
    pub quiet_period: bool,
    pub running: bool,
    pub change_since_check: bool,
}

impl StateSnapshot {
    fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::QuietPeriod => self.quiet_period,
            Flag::Running => self.running,
            Flag::ChangeSinceCheck => self.change_since_check,
        }
    }

    fn flag_mut(&mut self, flag: Flag) -> &mut bool {
        match flag {
            Flag::QuietPeriod => &mut self.quiet_period,
            Flag::Running => &mut self.running,
            Flag::ChangeSinceCheck => &mut self.change_since_check,
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.quiet_period && !self.running
    }
}

#[derive(Debug, Default)]
pub(crate) struct SyncState {
    inner: RwLock<StateSnapshot>,
}

impl SyncState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, flag: Flag) -> bool {
        self.inner.read().flag(flag)
    }

    pub fn set(&self, flag: Flag, value: bool) {
        *self.inner.write().flag_mut(flag) = value;
    }

    pub fn snapshot(&self) -> StateSnapshot {
        *self.inner.read()
    }

    /// Claim the run slot if no run is in progress and no quiet period is
    /// active. Returns whether the caller now owns the run.
    pub fn try_begin_run(&self) -> bool {
        let mut state = self.inner.write();
        if !state.is_idle() {
            return false;
        }
        state.running = true;
        true
    }

    /// The callback is about to observe every change recorded so far.
    pub fn begin_callback(&self) {
        self.inner.write().change_since_check = false;
    }

    /// Release the run slot, optionally opening the quiet window in the same
    /// critical section so no signal can slip in between.
    pub fn finish_run(&self, enter_quiet: bool) {
        let mut state = self.inner.write();
        state.running = false;
        state.quiet_period = enter_quiet;
    }

    /// Close the quiet window. If a change was recorded while it was open, the
    /// change is consumed and the run slot is claimed for the re-fire.
    pub fn finish_quiet_period(&self) -> bool {
        let mut state = self.inner.write();
        state.quiet_period = false;
        if !state.change_since_check {
            return false;
        }
        state.change_since_check = false;
        state.running = true;
        true
    }
}
