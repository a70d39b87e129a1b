//! Refresh scheduler driving periodic telemetry regeneration
//!
//! The scheduler splits into a handle (`RefreshScheduler`) kept by the
//! shell and a task (`SchedulerTask`) run to completion on the worker
//! runtime. The handle owns the cancellation state; cancelling is
//! idempotent and guarantees that no tick fires afterwards.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use cloud_insights_types::RangeSelection;

use crate::telemetry::{BoxedProvider, TelemetryHub};

/// Commands accepted by the scheduler task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SchedulerCommand {
    /// Rebuild both series for a new range selection
    SetRange(RangeSelection),
    /// Stop the interval loop for good
    Shutdown,
}

/// Handle to a running scheduler task
pub struct RefreshScheduler {
    tx: UnboundedSender<SchedulerCommand>,
    cancelled: Arc<AtomicBool>,
}

/// The scheduler's run loop state, consumed by `run()`
pub struct SchedulerTask {
    provider: BoxedProvider,
    hub: Arc<TelemetryHub>,
    rng: StdRng,
    period: Duration,
    initial_range: RangeSelection,
    rx: UnboundedReceiver<SchedulerCommand>,
}

impl RefreshScheduler {
    /// Create a scheduler handle and its task
    ///
    /// The task must be driven on a tokio runtime (`task.run().await`);
    /// the handle is cheap to clone into UI callbacks via `Arc`.
    pub fn new(
        provider: BoxedProvider,
        hub: Arc<TelemetryHub>,
        rng: StdRng,
        period: Duration,
        initial_range: RangeSelection,
    ) -> (Self, SchedulerTask) {
        let (tx, rx) = mpsc::unbounded_channel();
        let scheduler = Self {
            tx,
            cancelled: Arc::new(AtomicBool::new(false)),
        };
        let task = SchedulerTask {
            provider,
            hub,
            rng,
            period,
            initial_range,
            rx,
        };
        (scheduler, task)
    }

    /// Switch the range selection, triggering a full series rebuild
    pub fn set_range(&self, range: RangeSelection) {
        if self.is_cancelled() {
            warn!("Ignoring range change on cancelled scheduler");
            return;
        }
        if self.tx.send(SchedulerCommand::SetRange(range)).is_err() {
            warn!("Scheduler task is gone; range change dropped");
        }
    }

    /// Stop the refresh loop
    ///
    /// Idempotent: the first call shuts the task down, later calls are
    /// no-ops. After this returns no further tick can be published.
    pub fn cancel(&self) {
        if self.cancelled.swap(true, Ordering::SeqCst) {
            debug!("Scheduler already cancelled");
            return;
        }
        // The task may already have exited; a closed channel is fine.
        let _ = self.tx.send(SchedulerCommand::Shutdown);
        info!("Refresh scheduler cancelled");
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl SchedulerTask {
    /// Run until shutdown
    ///
    /// Publishes an initial generation immediately, then one per tick.
    /// Range changes rebuild labels and values; ticks replace values
    /// only, so the label sequence stays positionally identical.
    pub async fn run(mut self) {
        self.provider.rebuild(self.initial_range, &mut self.rng);
        self.hub.publish(self.provider.snapshot());

        let mut ticker = interval_at(Instant::now() + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.provider.refresh_values(&mut self.rng);
                    self.hub.publish(self.provider.snapshot());
                }
                cmd = self.rx.recv() => match cmd {
                    Some(SchedulerCommand::SetRange(range)) => {
                        debug!("Rebuilding series for {:?}", range);
                        self.provider.rebuild(range, &mut self.rng);
                        self.hub.publish(self.provider.snapshot());
                    }
                    Some(SchedulerCommand::Shutdown) | None => break,
                }
            }
        }
        info!("Refresh scheduler task exiting");
    }
}
