// src/trigger/handle.rs

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::Dispatch;
use tracing::instrument::WithSubscriber;

use crate::errors::{CoalescerError, Result};
use crate::exec::ChangeProcessor;

use super::listener::listen;
use super::options::TriggerOptions;
use super::run::RunContext;

/// Handle to a running change-coalescing trigger.
///
/// Cloning is cheap; every clone feeds the same listener. When the last clone
/// is dropped the listener exits (runs already in flight still finish).
#[derive(Clone)]
pub struct Trigger {
    signals: mpsc::UnboundedSender<()>,
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger")
            .field("closed", &self.signals.is_closed())
            .finish()
    }
}

impl Trigger {
    /// Start a trigger with the current default `tracing` dispatcher.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new<P: ChangeProcessor>(options: TriggerOptions, processor: P) -> Self {
        TriggerBuilder::new(options).build(processor)
    }

    pub fn builder(options: TriggerOptions) -> TriggerBuilder {
        TriggerBuilder::new(options)
    }

    /// Report that something changed. Never blocks.
    ///
    /// Processor failures are never reported here; the only error is
    /// [`CoalescerError::TriggerClosed`], returned when the listener task is
    /// gone (e.g. its runtime has shut down).
    pub fn signal(&self) -> Result<()> {
        self.signals
            .send(())
            .map_err(|_| CoalescerError::TriggerClosed)
    }
}

/// Builder for [`Trigger`], used when the log sink needs to be injected.
#[derive(Debug)]
pub struct TriggerBuilder {
    options: TriggerOptions,
    dispatch: Option<Dispatch>,
}

impl TriggerBuilder {
    pub fn new(options: TriggerOptions) -> Self {
        Self {
            options,
            dispatch: None,
        }
    }

    /// Send the trigger's log events to `dispatch` instead of the dispatcher
    /// that is current when [`build`](Self::build) is called.
    pub fn dispatch(mut self, dispatch: impl Into<Dispatch>) -> Self {
        self.dispatch = Some(dispatch.into());
        self
    }

    pub fn build<P: ChangeProcessor>(self, processor: P) -> Trigger {
        self.build_shared(Arc::new(processor))
    }

    /// Like [`build`](Self::build), for a processor that is already shared.
    pub fn build_shared(self, processor: Arc<dyn ChangeProcessor>) -> Trigger {
        let dispatch = self
            .dispatch
            .unwrap_or_else(|| tracing::dispatcher::get_default(Dispatch::clone));

        let (tx, rx) = mpsc::unbounded_channel::<()>();
        let ctx = Arc::new(RunContext::new(self.options, processor, dispatch.clone()));

        tokio::spawn(listen(rx, ctx).with_subscriber(dispatch));

        Trigger { signals: tx }
    }
}
