//! The navigation loop shared by both controllers.
//!
//! ```text
//! loop:
//!   position == target  → Stopped (reached)
//!   token cancelled     → Stopped (cancelled)
//!   heading = strategy(robot)
//!   face(heading); advance()
//!   sleep(delay) if delay > 0
//! ```

use std::time::Duration;

use tracing::{debug, info};

use mz_core::{CancelToken, Heading};
use mz_host::Robot;

use crate::RunObserver;

/// How a run ended.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct RunSummary {
    /// Moves made during this run.
    pub steps: u64,
    /// The robot stood on the target when the loop stopped.
    pub reached: bool,
    /// The loop stopped because the token was cancelled.
    pub cancelled: bool,
}

/// Drive `robot` until it stands on its target or `cancel` is cancelled.
///
/// `strategy` chooses each heading.  It must only return headings whose
/// adjacent cell is open; the loop faces and advances without re-checking.
/// The target check comes first, so a robot that starts on its target makes
/// no moves even if the token is already cancelled.
pub fn navigate<Rb, F>(
    robot:    &mut Rb,
    cancel:   &CancelToken,
    delay:    Duration,
    observer: &mut dyn RunObserver,
    mut strategy: F,
) -> RunSummary
where
    Rb: Robot + ?Sized,
    F:  FnMut(&mut Rb) -> Heading,
{
    let mut summary = RunSummary::default();

    loop {
        if robot.position() == robot.target() {
            summary.reached = true;
            break;
        }
        if cancel.is_cancelled() {
            summary.cancelled = true;
            break;
        }

        let from = robot.position();
        let heading = strategy(robot);
        robot.face(heading);
        robot.advance();
        summary.steps += 1;

        let to = robot.position();
        debug!(step = summary.steps, %from, %heading, %to, "advanced");
        observer.on_step(summary.steps, from, heading, to);

        if !delay.is_zero() {
            robot.sleep(delay);
        }
    }

    info!(
        steps     = summary.steps,
        reached   = summary.reached,
        cancelled = summary.cancelled,
        position  = %robot.position(),
        "navigation stopped"
    );
    observer.on_run_end(&summary);
    summary
}
