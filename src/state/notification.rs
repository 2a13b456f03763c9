//! Transient toast notifications

use super::schema::Message;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Destructive,
    Info,
}

/// A dismissable message that expires on its own
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
    shown_at: Instant,
    ttl: Duration,
}

impl Toast {
    pub const DEFAULT_TTL: Duration = Duration::from_millis(5000);

    pub fn new(kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind,
            shown_at: Instant::now(),
            ttl: Self::DEFAULT_TTL,
        }
    }

    pub fn from_message(kind: ToastKind, message: Message) -> Self {
        Self::new(kind, message.title, message.description)
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.ttl
    }
}

/// Holds at most one toast; a new one replaces the old
#[derive(Debug, Default)]
pub struct Notifier {
    current: Option<Toast>,
    ttl: Option<Duration>,
}

impl Notifier {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            current: None,
            ttl: Some(ttl),
        }
    }

    pub fn notify(&mut self, toast: Toast) {
        let toast = match self.ttl {
            Some(ttl) => toast.with_ttl(ttl),
            None => toast,
        };
        self.current = Some(toast);
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Returns true if a toast was dismissed
    pub fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Drop the current toast once it has expired
    pub fn prune(&mut self) {
        if self.current.as_ref().is_some_and(Toast::is_expired) {
            self.current = None;
        }
    }
}
