// src/exec/mod.rs

//! Change processors: the work a trigger performs once a burst of changes
//! settles.
//!
//! - [`processor`] defines the [`ChangeProcessor`] trait and a closure
//!   adapter.
//! - [`command`] provides [`CommandProcessor`], which runs a shell command
//!   through `tokio::process::Command`.

pub mod command;
pub mod processor;

pub use command::CommandProcessor;
pub use processor::{ChangeProcessor, FnProcessor, ProcessFuture, processor_fn};
