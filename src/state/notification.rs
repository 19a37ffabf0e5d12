//! Transient notification banners

use std::time::{Duration, Instant};

/// Default time-to-live for banners (matches the site's auto-dismiss)
pub const DEFAULT_TTL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Request to show one banner; consumed by the queue
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationRequest {
    pub message: String,
    pub severity: Severity,
    pub ttl: Duration,
}

impl NotificationRequest {
    pub fn new(message: impl Into<String>, severity: Severity, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            severity,
            // a banner must live long enough to be removable
            ttl: ttl.max(Duration::from_millis(1)),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success, DEFAULT_TTL)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error, DEFAULT_TTL)
    }
}

/// A banner currently on screen
#[derive(Debug)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    ttl: Duration,
    created_at: Instant,
}

impl Notification {
    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) >= self.ttl
    }
}

/// Fixed-position stack of auto-dismissing banners
#[derive(Debug, Default)]
pub struct NotificationQueue {
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, request: NotificationRequest) {
        self.items.push(Notification {
            message: request.message,
            severity: request.severity,
            ttl: request.ttl,
            created_at: Instant::now(),
        });
    }

    /// Drop banners whose ttl has elapsed
    pub fn tick(&mut self, now: Instant) {
        self.items.retain(|n| !n.is_expired(now));
    }

    /// Explicit close affordance: dismiss the oldest banner early
    pub fn dismiss_oldest(&mut self) {
        if !self.items.is_empty() {
            self.items.remove(0);
        }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
