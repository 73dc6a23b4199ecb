//! `HomingController` — steers toward the target along whichever axis is open.

use mz_core::{AxisStatus, CancelToken, Heading, NavConfig, NavRng};
use mz_host::Robot;

use crate::controller::{ControllerState, delegate_controller_state};
use crate::{Controller, NavError, NavResult, RunObserver, RunSummary, evaluator, navigate, selector};

const DESCRIPTION: &str = "A controller which homes in on the target";

/// RNG stream reserved for homing decisions (see [`NavRng::stream`]).
const HOMING_STREAM: u64 = 1;

/// Moves toward the target one cell at a time using the
/// [`determine_heading`][crate::determine_heading] table.
///
/// Homing is fast in open or loopy mazes but can oscillate forever when the
/// only path leads away from the target for several cells (e.g. around a
/// long wall); the cancel token is the way out of such runs.
pub struct HomingController<Rb: Robot> {
    state: ControllerState<Rb>,
}

impl<Rb: Robot> HomingController<Rb> {
    /// Unbound controller with no delay and a seeded RNG.
    pub fn new(seed: u64) -> Self {
        Self {
            state: ControllerState::new(NavRng::stream(seed, HOMING_STREAM), Default::default()),
        }
    }

    /// Unbound controller configured from `config`.
    pub fn from_config(config: &NavConfig) -> NavResult<Self> {
        config.validate()?;
        Ok(Self {
            state: ControllerState::new(NavRng::stream(config.seed, HOMING_STREAM), config.delay()),
        })
    }

    /// Replace the decision RNG, e.g. to replay a run from a fixed seed.
    pub fn with_rng(mut self, rng: NavRng) -> Self {
        self.state.rng = rng;
        self
    }

    /// Vertical and horizontal [`AxisStatus`] from the bound robot's
    /// current position.
    pub fn axis_statuses(&self) -> NavResult<(AxisStatus, AxisStatus)> {
        let robot = self.state.robot.as_ref().ok_or(NavError::Unbound)?;
        Ok(evaluator::axis_statuses(robot))
    }

    /// The heading the next step would take, without moving.
    pub fn determine_heading(&mut self) -> NavResult<Heading> {
        let (robot, rng) = self.state.parts()?;
        Ok(selector::next_heading(&*robot, rng))
    }
}

impl<Rb: Robot> Controller for HomingController<Rb> {
    type Robot = Rb;

    fn description(&self) -> &'static str {
        DESCRIPTION
    }

    delegate_controller_state!();

    fn run(
        &mut self,
        cancel:   &CancelToken,
        observer: &mut dyn RunObserver,
    ) -> NavResult<RunSummary> {
        let delay = self.state.delay;
        let (robot, rng) = self.state.parts()?;
        let summary = navigate(robot, cancel, delay, observer, |robot| {
            selector::next_heading(&*robot, rng)
        });
        self.state.last_run = Some(summary);
        Ok(summary)
    }
}
