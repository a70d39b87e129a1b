//! Telemetry provider trait and snapshot hub

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use arc_swap::ArcSwap;
use rand::rngs::StdRng;
use uuid::Uuid;

use cloud_insights_types::{RangeSelection, TelemetrySnapshot};

/// Trait for the mock telemetry backing the dashboard
///
/// Providers own the current series and shares and know how to
/// regenerate them. Randomness is always injected so tests can supply a
/// seeded generator and assert exact outputs.
pub trait TelemetryProvider: Send {
    /// Replace sample values in place, keeping every label (timer tick)
    fn refresh_values(&mut self, rng: &mut StdRng);

    /// Rebuild both series, labels and values, for a new range selection
    fn rebuild(&mut self, range: RangeSelection, rng: &mut StdRng);

    /// Current data as an immutable snapshot
    fn snapshot(&self) -> TelemetrySnapshot;
}

/// Type-erased provider for the scheduler task
pub type BoxedProvider = Box<dyn TelemetryProvider>;

/// Publishes telemetry snapshots from the scheduler thread to the UI
///
/// Readers load the latest snapshot lock-free; the generation counter
/// lets a polling UI cheaply detect that anything changed. Change
/// callbacks are keyed by UUID so they can be removed again, matching
/// their registration site's lifetime.
pub struct TelemetryHub {
    snapshot: ArcSwap<TelemetrySnapshot>,
    generation: AtomicU64,
    change_callbacks: Mutex<HashMap<String, Box<dyn Fn() + Send + Sync>>>,
}

impl TelemetryHub {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            snapshot: ArcSwap::from_pointee(TelemetrySnapshot::default()),
            generation: AtomicU64::new(0),
            change_callbacks: Mutex::new(HashMap::new()),
        })
    }

    /// Latest published snapshot
    pub fn snapshot(&self) -> Arc<TelemetrySnapshot> {
        self.snapshot.load_full()
    }

    /// Monotonic counter incremented on every publish
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Store a new snapshot and notify observers
    pub fn publish(&self, snapshot: TelemetrySnapshot) {
        self.snapshot.store(Arc::new(snapshot));
        self.generation.fetch_add(1, Ordering::AcqRel);
        self.notify_change();
    }

    /// Register a callback fired after every publish
    ///
    /// Returns a callback id; callers must call `remove_callback` when
    /// the observing widget goes away.
    pub fn on_change<F>(&self, callback: F) -> String
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = Uuid::new_v4().to_string();
        if let Ok(mut callbacks) = self.change_callbacks.lock() {
            callbacks.insert(id.clone(), Box::new(callback));
        }
        id
    }

    /// Remove a previously registered callback by its id
    pub fn remove_callback(&self, callback_id: &str) -> bool {
        self.change_callbacks
            .lock()
            .map(|mut callbacks| callbacks.remove(callback_id).is_some())
            .unwrap_or(false)
    }

    fn notify_change(&self) {
        if let Ok(callbacks) = self.change_callbacks.lock() {
            for callback in callbacks.values() {
                callback();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_publish_bumps_generation() {
        let hub = TelemetryHub::new();
        assert_eq!(hub.generation(), 0);
        hub.publish(TelemetrySnapshot::default());
        hub.publish(TelemetrySnapshot::default());
        assert_eq!(hub.generation(), 2);
    }

    #[test]
    fn test_change_callbacks() {
        let hub = TelemetryHub::new();
        let fired = Arc::new(AtomicUsize::new(0));

        let fired_clone = fired.clone();
        let id = hub.on_change(move || {
            fired_clone.fetch_add(1, Ordering::SeqCst);
        });

        hub.publish(TelemetrySnapshot::default());
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        assert!(hub.remove_callback(&id));
        assert!(!hub.remove_callback(&id));
        hub.publish(TelemetrySnapshot::default());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }
}
