// src/trigger/mod.rs

//! Change-coalescing trigger.
//!
//! Producers call [`Trigger::signal`] whenever something changed. A background
//! listener folds those signals into runs of a [`ChangeProcessor`]:
//!
//! - at most one processor call is in flight at any time;
//! - an optional pre-run delay absorbs near-simultaneous signals;
//! - an optional quiet period after each run coalesces every signal that
//!   arrives meanwhile into a single re-fire, which skips the pre-run delay
//!   and opens no quiet period of its own.
//!
//! Per cycle the trigger moves `Idle -> Running -> (Quiet) -> Idle`, with
//! `Quiet -> Running` when a change was recorded during the quiet window.
//!
//! [`ChangeProcessor`]: crate::exec::ChangeProcessor

mod handle;
mod listener;
mod options;
mod run;
mod state;

pub use handle::{Trigger, TriggerBuilder};
pub use options::{TriggerOptions, Window};
