//! Run observer trait for progress reporting.

use mz_core::{Heading, Position};

use crate::RunSummary;

/// Callbacks invoked by [`navigate`][crate::navigate] as a run progresses.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — stop after a step budget
///
/// ```rust,ignore
/// struct Budget { limit: u64, token: CancelToken }
///
/// impl RunObserver for Budget {
///     fn on_step(&mut self, step: u64, _from: Position, _h: Heading, _to: Position) {
///         if step >= self.limit {
///             self.token.cancel();
///         }
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called after every completed move.  `step` counts from 1.
    fn on_step(&mut self, _step: u64, _from: Position, _heading: Heading, _to: Position) {}

    /// Called once when the loop stops, for either reason.
    fn on_run_end(&mut self, _summary: &RunSummary) {}
}

/// A [`RunObserver`] that does nothing.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}
