// src/trigger/run.rs

//! A single run cycle: pre-run delay, processor call, quiet period, and
//! the optional re-fire when changes arrived during the quiet window.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use futures::FutureExt;
use tokio::time::sleep;
use tracing::{Dispatch, debug, error, info, warn};

use crate::exec::ChangeProcessor;

use super::options::TriggerOptions;
use super::state::SyncState;

/// Everything a run task needs, shared between the listener and every run.
pub(crate) struct RunContext {
    pub options: TriggerOptions,
    pub processor: Arc<dyn ChangeProcessor>,
    pub state: SyncState,
    pub dispatch: Dispatch,
    cycles: AtomicU64,
}

impl RunContext {
    pub fn new(
        options: TriggerOptions,
        processor: Arc<dyn ChangeProcessor>,
        dispatch: Dispatch,
    ) -> Self {
        Self {
            options,
            processor,
            state: SyncState::new(),
            dispatch,
            cycles: AtomicU64::new(0),
        }
    }
}

/// Drive one run cycle to completion.
///
/// The caller must already have claimed the run slot
/// (see [`SyncState::try_begin_run`]).
pub(crate) async fn run_cycle(ctx: Arc<RunContext>) {
    let cycle = ctx.cycles.fetch_add(1, Ordering::Relaxed) + 1;
    let mut refire = false;

    loop {
        info!(cycle, refire, "starting change run");

        if !refire {
            if let Some(delay) = ctx.options.pre_run_delay.wait() {
                debug!(cycle, ?delay, "pre-run delay; waiting for more changes");
                sleep(delay).await;
            }
        }

        ctx.state.begin_callback();
        invoke(ctx.processor.as_ref(), cycle).await;

        let enter_quiet = ctx.options.quiet_period.enabled && !refire;
        ctx.state.finish_run(enter_quiet);
        debug!(cycle, "cleared running state");

        if !enter_quiet {
            info!(cycle, "change run complete");
            return;
        }

        let quiet = ctx.options.quiet_period.duration;
        debug!(cycle, ?quiet, "entering quiet period");
        sleep(quiet).await;

        if !ctx.state.finish_quiet_period() {
            debug!(cycle, "exiting quiet period");
            info!(cycle, "change run complete");
            return;
        }

        info!(cycle, "changes arrived during quiet period; running again");
        refire = true;
    }
}

/// Await the processor, logging any failure. Errors and panics are contained
/// here so the cycle always releases its state.
async fn invoke(processor: &dyn ChangeProcessor, cycle: u64) {
    match AssertUnwindSafe(processor.process()).catch_unwind().await {
        Ok(Ok(())) => debug!(cycle, "change processor finished"),
        Ok(Err(err)) => warn!(
            cycle,
            error = %format_args!("{err:#}"),
            "change processor returned an error"
        ),
        Err(_) => error!(cycle, "change processor panicked"),
    }
}
