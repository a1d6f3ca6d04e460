//! Page scroll lock
//!
//! The page keeps a single "scroll enabled" flag. Overlays acquire a
//! [`ScrollGuard`] which disables scrolling and puts back whatever value was
//! there before when it is dropped, on every exit path.

use parking_lot::Mutex;
use std::sync::Arc;

/// Shared handle to the page scroll flag
#[derive(Debug, Clone)]
pub struct PageScroll {
    enabled: Arc<Mutex<bool>>,
}

impl PageScroll {
    pub fn new() -> Self {
        Self {
            enabled: Arc::new(Mutex::new(true)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        *self.enabled.lock()
    }

    /// Disable scrolling until the returned guard is dropped
    pub fn lock(&self) -> ScrollGuard {
        let mut enabled = self.enabled.lock();
        let previous = *enabled;
        *enabled = false;
        tracing::trace!("Page scroll locked");
        ScrollGuard {
            enabled: Arc::clone(&self.enabled),
            previous,
        }
    }
}

impl Default for PageScroll {
    fn default() -> Self {
        Self::new()
    }
}

/// Restores the previous scroll state on drop
#[derive(Debug)]
#[must_use = "scrolling is restored as soon as the guard is dropped"]
pub struct ScrollGuard {
    enabled: Arc<Mutex<bool>>,
    previous: bool,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        *self.enabled.lock() = self.previous;
        tracing::trace!(enabled = self.previous, "Page scroll restored");
    }
}
