// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod trigger;
pub mod watch;

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::loader::resolve_path;
use crate::config::{ConfigFile, config_base_dir, load_and_validate};
use crate::exec::CommandProcessor;
use crate::watch::{WatchFilter, spawn_watcher};

pub use crate::errors::CoalescerError;
pub use crate::exec::{ChangeProcessor, processor_fn};
pub use crate::trigger::{Trigger, TriggerBuilder, TriggerOptions, Window};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the command processor
/// - the trigger
/// - the file watcher
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_and_validate(&config_path)?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(());
    }

    let base_dir = config_base_dir(&config_path);
    let workdir = resolve_path(&base_dir, cfg.command().workdir.as_deref());
    let processor = CommandProcessor::new(cfg.command().cmd.clone()).with_workdir(workdir);

    if args.once {
        return processor.run().await;
    }

    let options = cfg.trigger().options();
    info!(?options, "starting trigger");
    let trigger = Trigger::new(options, processor);

    let root = resolve_path(&base_dir, cfg.watch().root.as_deref());
    let filter = WatchFilter::from_section(cfg.watch())?;
    let _watcher = spawn_watcher(root, filter, trigger.clone())?;

    // Run once at startup so the output reflects the current state.
    trigger.signal()?;

    tokio::signal::ctrl_c().await?;
    info!("Ctrl-C received; shutting down");
    Ok(())
}

/// Simple dry-run output: print the effective settings.
fn print_dry_run(cfg: &ConfigFile) {
    let trigger = cfg.trigger();
    println!("coalescer dry-run");
    println!(
        "  trigger.pre_run_delay = {} ({}s)",
        trigger.pre_run_delay, trigger.pre_run_delay_secs
    );
    println!(
        "  trigger.quiet_period = {} ({}s)",
        trigger.quiet_period, trigger.quiet_period_secs
    );

    let watch = cfg.watch();
    match &watch.root {
        Some(root) => println!("  watch.root = {}", root.display()),
        None => println!("  watch.root = <config directory>"),
    }
    if watch.include.is_empty() {
        println!("  watch.include = <everything>");
    } else {
        println!("  watch.include = {:?}", watch.include);
    }
    if !watch.exclude.is_empty() {
        println!("  watch.exclude = {:?}", watch.exclude);
    }

    println!("  command.cmd = {}", cfg.command().cmd);
    if let Some(dir) = &cfg.command().workdir {
        println!("  command.workdir = {}", dir.display());
    }
}
