// src/config/mod.rs

//! Configuration loading and validation for coalescer.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate the command and glob patterns (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{config_base_dir, load_and_validate, load_from_path};
pub use model::{CommandSection, ConfigFile, RawConfigFile, TriggerSection, WatchSection};
