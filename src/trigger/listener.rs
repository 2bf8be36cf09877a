// src/trigger/listener.rs

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};
use tracing::instrument::WithSubscriber;

use super::run::{RunContext, run_cycle};
use super::state::Flag;

/// Background listener: records every signal and launches a run whenever the
/// trigger is idle. Runs until every [`Trigger`](super::Trigger) handle has
/// been dropped.
pub(crate) async fn listen(mut signals: mpsc::UnboundedReceiver<()>, ctx: Arc<RunContext>) {
    info!("change listener started");

    while signals.recv().await.is_some() {
        debug!("received change signal");
        ctx.state.set(Flag::ChangeSinceCheck, true);

        if ctx.state.try_begin_run() {
            debug!("trigger idle; launching change run");
            let run = run_cycle(Arc::clone(&ctx)).with_subscriber(ctx.dispatch.clone());
            // Fire and forget: the run releases its own state when done.
            tokio::spawn(run);
            continue;
        }

        if ctx.state.get(Flag::QuietPeriod) {
            debug!("quiet period active; change coalesced");
        }
        if ctx.state.get(Flag::Running) {
            debug!("change run already in progress; change coalesced");
        }
    }

    let state = ctx.state.snapshot();
    info!(?state, "signal intake closed; change listener exiting");
}
