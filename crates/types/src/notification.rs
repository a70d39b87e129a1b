//! Transient notification entries

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A short-lived toast message
///
/// Notifications are queued FIFO and expire independently a fixed delay
/// after posting; the id ties the on-screen toast to its queue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
        }
    }
}
