//! Notification center backing the toast overlay
//!
//! Entries queue FIFO and each expires independently a fixed delay
//! after it was posted. The shell arms one one-shot timer per toast and
//! calls `dismiss`; `expire_due` is the time-injected equivalent used
//! for sweeping and for tests.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use log::debug;
use uuid::Uuid;

use cloud_insights_types::Notification;

use crate::constants::NOTIFICATION_TTL;

struct PendingToast {
    notification: Notification,
    expires_at: Instant,
}

/// FIFO queue of live toasts
pub struct NotificationCenter {
    entries: Mutex<Vec<PendingToast>>,
    ttl: Duration,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::with_ttl(NOTIFICATION_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            ttl,
        }
    }

    /// Delay after which a posted toast expires
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Queue a toast, expiring `ttl` from now
    pub fn post(&self, message: impl Into<String>) -> Notification {
        self.post_at(message, Instant::now())
    }

    /// Queue a toast with an explicit posting time
    pub fn post_at(&self, message: impl Into<String>, now: Instant) -> Notification {
        let notification = Notification::new(message);
        debug!("Posting notification {}", notification.id);
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(PendingToast {
                notification: notification.clone(),
                expires_at: now + self.ttl,
            });
        }
        notification
    }

    /// Currently live toasts, oldest first
    pub fn active(&self) -> Vec<Notification> {
        self.entries
            .lock()
            .map(|entries| entries.iter().map(|e| e.notification.clone()).collect())
            .unwrap_or_default()
    }

    /// Remove one toast early (timer fired or user closed it)
    pub fn dismiss(&self, id: Uuid) -> bool {
        let Ok(mut entries) = self.entries.lock() else {
            return false;
        };
        let before = entries.len();
        entries.retain(|e| e.notification.id != id);
        entries.len() != before
    }

    /// Remove every toast due at `now`, returning them oldest first
    pub fn expire_due(&self, now: Instant) -> Vec<Notification> {
        let Ok(mut entries) = self.entries.lock() else {
            return Vec::new();
        };
        let mut expired = Vec::new();
        entries.retain(|e| {
            if e.expires_at <= now {
                expired.push(e.notification.clone());
                false
            } else {
                true
            }
        });
        expired
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_and_dismiss() {
        let center = NotificationCenter::new();
        let note = center.post("Data exported");
        assert_eq!(center.active().len(), 1);

        assert!(center.dismiss(note.id));
        assert!(!center.dismiss(note.id));
        assert!(center.active().is_empty());
    }

    #[test]
    fn test_independent_fifo_expiry() {
        let center = NotificationCenter::with_ttl(Duration::from_secs(5));
        let start = Instant::now();
        let first = center.post_at("first", start);
        let second = center.post_at("second", start + Duration::from_secs(2));

        // Neither is due before the first TTL elapses
        assert!(center.expire_due(start + Duration::from_secs(4)).is_empty());

        let expired = center.expire_due(start + Duration::from_secs(5));
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].id, first.id);
        assert_eq!(center.active().len(), 1);

        let expired = center.expire_due(start + Duration::from_secs(7));
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].id, second.id);
        assert!(center.active().is_empty());
    }

    #[test]
    fn test_simultaneous_posts_expire_oldest_first() {
        let center = NotificationCenter::with_ttl(Duration::from_secs(5));
        let start = Instant::now();
        let a = center.post_at("a", start);
        let b = center.post_at("b", start);

        let expired = center.expire_due(start + Duration::from_secs(5));
        assert_eq!(
            expired.iter().map(|n| n.id).collect::<Vec<_>>(),
            vec![a.id, b.id]
        );
    }
}
