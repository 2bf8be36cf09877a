use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use coalescer::exec::{ChangeProcessor, ProcessFuture};
use tokio::sync::mpsc;
use tokio::time::Instant;

/// A processor that:
/// - records the (Tokio clock) start time of every call
/// - optionally spends `work` of simulated time inside each call
/// - optionally fails (or panics) on every call
/// - flags any call that starts while another is still in flight.
///
/// Clones share the same records, so keep one clone for assertions and hand
/// another to the trigger.
#[derive(Clone, Default)]
pub struct RecordingProcessor {
    inner: Arc<Inner>,
    work: Duration,
    fail_with: Option<String>,
    panic: bool,
    notify: Option<mpsc::UnboundedSender<()>>,
}

#[derive(Default)]
struct Inner {
    calls: Mutex<Vec<Instant>>,
    in_flight: AtomicBool,
    overlapped: AtomicBool,
}

impl RecordingProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_work(mut self, work: Duration) -> Self {
        self.work = work;
        self
    }

    pub fn failing(mut self, message: &str) -> Self {
        self.fail_with = Some(message.to_string());
        self
    }

    pub fn panicking(mut self) -> Self {
        self.panic = true;
        self
    }

    /// Receive one `()` per call, sent as the call starts.
    pub fn notify_calls(mut self) -> (Self, mpsc::UnboundedReceiver<()>) {
        let (tx, rx) = mpsc::unbounded_channel();
        self.notify = Some(tx);
        (self, rx)
    }

    pub fn count(&self) -> usize {
        self.inner.calls.lock().unwrap().len()
    }

    pub fn call_times(&self) -> Vec<Instant> {
        self.inner.calls.lock().unwrap().clone()
    }

    pub fn overlapped(&self) -> bool {
        self.inner.overlapped.load(Ordering::SeqCst)
    }
}

impl ChangeProcessor for RecordingProcessor {
    fn process(&self) -> ProcessFuture<'_> {
        Box::pin(async move {
            if self.inner.in_flight.swap(true, Ordering::SeqCst) {
                self.inner.overlapped.store(true, Ordering::SeqCst);
            }
            self.inner.calls.lock().unwrap().push(Instant::now());
            if let Some(tx) = &self.notify {
                let _ = tx.send(());
            }

            if !self.work.is_zero() {
                tokio::time::sleep(self.work).await;
            }
            self.inner.in_flight.store(false, Ordering::SeqCst);

            if self.panic {
                panic!("recording processor asked to panic");
            }
            match &self.fail_with {
                Some(msg) => Err(anyhow::anyhow!("{msg}")),
                None => Ok(()),
            }
        })
    }
}
