//! Transient confirmations ("Session created !" and the like)

use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::info;

/// Label of the dismiss action
pub const CLOSE_ACTION: &str = "Close";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub action: String,
    pub duration: Duration,
}

impl Notification {
    pub fn new(message: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            message: message.into(),
            action: CLOSE_ACTION.to_string(),
            duration: Duration::from_millis(duration_ms),
        }
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes notifications to the log
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        info!(
            "{} [{}, {}ms]",
            notification.message,
            notification.action,
            notification.duration.as_millis()
        );
    }
}

/// Keeps every notification in memory
#[derive(Default)]
pub struct MemoryNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications shown so far, oldest first
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last_message(&self) -> Option<String> {
        self.notifications().last().map(|n| n.message.clone())
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
    }
}
