// Transient notifications
// Toast queue for clipboard acknowledgments, keyed on egui frame time

use std::collections::VecDeque;

/// Toasts kept at once; older ones are dropped first
const MAX_TOASTS: usize = 4;

/// Outcome a toast reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Failure,
}

/// A single notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    /// Frame time (seconds) after which the toast is gone
    pub expires_at: f64,
}

/// Bounded queue of live toasts
#[derive(Debug, Clone)]
pub struct Notifications {
    toasts: VecDeque<Toast>,
    /// How long a toast stays visible, in seconds
    lifetime: f64,
}

impl Notifications {
    pub fn new(lifetime: f64) -> Self {
        Self {
            toasts: VecDeque::new(),
            lifetime,
        }
    }

    /// Queue a toast shown from `now` for the configured lifetime
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>, now: f64) {
        self.toasts.push_back(Toast {
            kind,
            message: message.into(),
            expires_at: now + self.lifetime,
        });
        while self.toasts.len() > MAX_TOASTS {
            self.toasts.pop_front();
        }
    }

    /// Drop toasts whose time is up
    pub fn prune(&mut self, now: f64) {
        self.toasts.retain(|toast| toast.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[allow(dead_code)] // Used by tests and diagnostics
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
