use log::{error, info, warn};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub raised_at: Instant,
}

/// Single-slot toast. A newer notification replaces the current one and each
/// one expires `ttl` after it was raised.
#[derive(Debug)]
pub struct NotificationCenter {
    current: Option<Notification>,
    ttl: Duration,
    next_id: u64,
}

impl NotificationCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            current: None,
            ttl,
            next_id: 1,
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity, now: Instant) -> u64 {
        let message = message.into();
        match severity {
            Severity::Error => error!("notify: {}", message),
            Severity::Warning => warn!("notify: {}", message),
            Severity::Info | Severity::Success => info!("notify: {}", message),
        }

        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(Notification {
            id,
            message,
            severity,
            raised_at: now,
        });
        id
    }

    /// The toast still on screen at `now`, if any.
    pub fn active(&self, now: Instant) -> Option<&Notification> {
        self.current
            .as_ref()
            .filter(|n| now.saturating_duration_since(n.raised_at) < self.ttl)
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.current.as_ref().map(|n| n.raised_at + self.ttl)
    }

    /// Drops the toast once it has expired.
    pub fn prune(&mut self, now: Instant) {
        if self.active(now).is_none() {
            self.current = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_after_ttl() {
        let mut center = NotificationCenter::new(Duration::from_millis(3000));
        let t0 = Instant::now();
        center.notify("Chat cleared", Severity::Success, t0);

        let shown = center.active(t0 + Duration::from_millis(2999)).unwrap();
        assert_eq!(shown.message, "Chat cleared");
        assert_eq!(shown.severity, Severity::Success);
        assert!(center.active(t0 + Duration::from_millis(3000)).is_none());

        center.prune(t0 + Duration::from_millis(3000));
        assert!(center.expires_at().is_none());
    }

    #[test]
    fn newer_toast_replaces_older() {
        let mut center = NotificationCenter::new(Duration::from_millis(3000));
        let t0 = Instant::now();
        let first = center.notify("one", Severity::Info, t0);
        let second = center.notify("two", Severity::Warning, t0 + Duration::from_millis(10));

        assert!(second > first);
        let shown = center.active(t0 + Duration::from_millis(20)).unwrap();
        assert_eq!(shown.id, second);
        assert_eq!(shown.message, "two");
    }
}
