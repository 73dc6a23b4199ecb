//! Cooperative cancellation flag for navigation runs.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "keep going" flag checked once per loop iteration.
///
/// Clones share the same flag, so a host thread can hold one clone and call
/// [`cancel`][Self::cancel] while the navigation loop runs on another.  A
/// move already in progress always completes; the loop notices the flag at
/// the top of its next iteration.
#[derive(Clone, Debug)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A fresh token in the active (not cancelled) state.
    pub fn new() -> Self {
        CancelToken(Arc::new(AtomicBool::new(true)))
    }

    /// Request a stop.  Idempotent.
    #[inline]
    pub fn cancel(&self) {
        self.0.store(false, Ordering::Release);
    }

    /// Re-arm the token at the start of a run.
    #[inline]
    pub fn arm(&self) {
        self.0.store(true, Ordering::Release);
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        !self.is_active()
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
