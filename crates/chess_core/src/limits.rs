//! Search limits and cooperative cancellation.
//!
//! Searches run to a fixed ply depth. A [`StopSignal`] can be raised from any
//! thread; the engine polls it between sibling moves and falls back to the
//! last fully completed iteration.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Depth searched when the caller doesn't pick one.
pub const DEFAULT_DEPTH: u8 = 6;

#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies (half-moves)
    pub depth: u8,
    pub stop: StopSignal,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            stop: StopSignal::new(),
        }
    }

    /// Depth limit plus a signal shared with whoever may cancel the search.
    pub fn with_stop(depth: u8, stop: StopSignal) -> Self {
        Self { depth, stop }
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.stop.is_stopped()
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(DEFAULT_DEPTH)
    }
}

/// Shared stop flag. Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct StopSignal {
    stopped: Arc<AtomicBool>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    /// Clear the flag so the signal can be reused for the next search.
    pub fn reset(&self) {
        self.stopped.store(false, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
#[path = "limits_tests.rs"]
mod limits_tests;
