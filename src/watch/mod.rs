// src/watch/mod.rs

//! File watching.
//!
//! Turns filesystem changes under a root directory into trigger signals:
//! - [`filter`] compiles `include` / `exclude` glob patterns.
//! - [`watcher`] wires up a cross-platform watcher (`notify`) and forwards
//!   matching events to [`Trigger::signal`](crate::trigger::Trigger::signal).

pub mod filter;
pub mod watcher;

pub use filter::WatchFilter;
pub use watcher::{WatcherHandle, spawn_watcher};
