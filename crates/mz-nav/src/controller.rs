//! The `Controller` trait — the contract both navigation agents share.

use std::time::Duration;

use mz_core::{CancelToken, NavRng};
use mz_host::Robot;

use crate::{NavError, NavResult, NoopObserver, RunObserver, RunSummary};

/// A navigation agent that can be bound to a robot and run to its target.
///
/// # Lifecycle
///
/// ```text
/// new / from_config ─► bind(robot) ─► [set_delay] ─► start ─► start ─► …
/// ```
///
/// `start` blocks until the robot reaches its target or the controller's
/// [`CancelToken`] is cancelled (via [`reset`][Self::reset] or a clone from
/// [`cancel_token`][Self::cancel_token]).  It can be called again after it
/// returns, e.g. once the host has moved the target.  Taking `&mut self`
/// rules out two concurrent runs on one controller.
///
/// The trait is object safe, so hosts can hold a
/// `Box<dyn Controller<Robot = MazeRobot>>` and switch agents at runtime.
pub trait Controller {
    /// The robot type this controller drives.
    type Robot: Robot;

    /// Static human-readable label.
    fn description(&self) -> &'static str;

    /// Attach the robot to drive, replacing any previous one.
    fn bind(&mut self, robot: Self::Robot);

    /// Detach and return the robot.
    fn unbind(&mut self) -> Option<Self::Robot>;

    fn robot(&self) -> Option<&Self::Robot>;

    fn robot_mut(&mut self) -> Option<&mut Self::Robot>;

    /// Pause after every step.  `Duration::ZERO` disables pacing.
    fn set_delay(&mut self, delay: Duration);

    fn delay(&self) -> Duration;

    /// Handle on the controller's own active flag.  Clones may be moved to
    /// another thread; cancelling any of them stops the current run.
    fn cancel_token(&self) -> CancelToken;

    /// Summary of the most recent run, if any.
    fn last_run(&self) -> Option<RunSummary>;

    /// Run against an external token without re-arming it.
    ///
    /// A token that is already cancelled stops the run before the first
    /// move.
    fn run(
        &mut self,
        cancel:   &CancelToken,
        observer: &mut dyn RunObserver,
    ) -> NavResult<RunSummary>;

    /// Arm the controller's own token and run until the target is reached
    /// or the run is cancelled.
    fn start(&mut self) -> NavResult<RunSummary> {
        self.start_observed(&mut NoopObserver)
    }

    /// [`start`][Self::start] with progress callbacks.
    fn start_observed(&mut self, observer: &mut dyn RunObserver) -> NavResult<RunSummary> {
        let token = self.cancel_token();
        token.arm();
        self.run(&token, observer)
    }

    /// Request a cooperative stop: clears the active flag.
    fn reset(&mut self) {
        self.cancel_token().cancel();
    }
}

// ── Shared controller state ───────────────────────────────────────────────────

/// State common to every controller: binding, active flag, pacing, RNG.
pub(crate) struct ControllerState<Rb: Robot> {
    pub robot:    Option<Rb>,
    pub active:   CancelToken,
    pub delay:    Duration,
    pub rng:      NavRng,
    pub last_run: Option<RunSummary>,
}

impl<Rb: Robot> ControllerState<Rb> {
    pub fn new(rng: NavRng, delay: Duration) -> Self {
        Self {
            robot:    None,
            active:   CancelToken::new(),
            delay,
            rng,
            last_run: None,
        }
    }

    /// Split borrow of the bound robot and the RNG.
    pub fn parts(&mut self) -> NavResult<(&mut Rb, &mut NavRng)> {
        let robot = self.robot.as_mut().ok_or(NavError::Unbound)?;
        Ok((robot, &mut self.rng))
    }
}

/// Implements the bookkeeping half of [`Controller`] by delegating to a
/// `state: ControllerState<Rb>` field.
macro_rules! delegate_controller_state {
    () => {
        fn bind(&mut self, robot: Rb) {
            self.state.robot = Some(robot);
        }

        fn unbind(&mut self) -> Option<Rb> {
            self.state.robot.take()
        }

        fn robot(&self) -> Option<&Rb> {
            self.state.robot.as_ref()
        }

        fn robot_mut(&mut self) -> Option<&mut Rb> {
            self.state.robot.as_mut()
        }

        fn set_delay(&mut self, delay: std::time::Duration) {
            self.state.delay = delay;
        }

        fn delay(&self) -> std::time::Duration {
            self.state.delay
        }

        fn cancel_token(&self) -> mz_core::CancelToken {
            self.state.active.clone()
        }

        fn last_run(&self) -> Option<crate::RunSummary> {
            self.state.last_run
        }
    };
}

pub(crate) use delegate_controller_state;
