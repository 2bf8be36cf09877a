// src/exec/processor.rs

//! The callback a [`Trigger`](crate::trigger::Trigger) invokes once per run.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Future returned by [`ChangeProcessor::process`].
pub type ProcessFuture<'a> = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'a>>;

/// Work to perform when a burst of changes settles.
///
/// The trigger awaits the returned future before it opens the quiet period,
/// and never runs two calls concurrently. An `Err` is logged by the trigger
/// and otherwise ignored.
pub trait ChangeProcessor: Send + Sync + 'static {
    fn process(&self) -> ProcessFuture<'_>;
}

/// Adapter turning a synchronous closure into a [`ChangeProcessor`].
pub struct FnProcessor<F> {
    f: F,
}

impl<F> fmt::Debug for FnProcessor<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProcessor").finish_non_exhaustive()
    }
}

impl<F> ChangeProcessor for FnProcessor<F>
where
    F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
{
    fn process(&self) -> ProcessFuture<'_> {
        Box::pin(async move { (self.f)() })
    }
}

/// Wrap a closure as a [`ChangeProcessor`].
///
/// The closure runs on the trigger's run task, so it should not block for
/// long; use an async [`ChangeProcessor`] implementation for slow work.
pub fn processor_fn<F>(f: F) -> FnProcessor<F>
where
    F: Fn() -> anyhow::Result<()> + Send + Sync + 'static,
{
    FnProcessor { f }
}
