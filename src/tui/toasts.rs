use std::time::{Duration, Instant};

use crate::ops::notice::Notice;

/// A notice on screen until `expires_at`
#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    pub expires_at: Instant,
}

/// Auto-dismissing notices, oldest first
#[derive(Debug, Clone)]
pub struct Toasts {
    items: Vec<Toast>,
    timeout: Duration,
}

impl Toasts {
    pub fn new(timeout: Duration) -> Self {
        Toasts {
            items: Vec::new(),
            timeout,
        }
    }

    pub fn push(&mut self, notice: Notice, now: Instant) {
        self.items.push(Toast {
            notice,
            expires_at: now + self.timeout,
        });
    }

    /// Drop expired toasts. Returns true if any were removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.expires_at > now);
        self.items.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
