//! `RandomController` — a biased random walk that logs every move.

use mz_core::{CancelToken, Heading, NavConfig, NavRng, config::DEFAULT_TURN_PROBABILITY};
use mz_host::Robot;

use crate::controller::{ControllerState, delegate_controller_state};
use crate::{Controller, NavResult, RunObserver, RunSummary, navigate, walker};

const DESCRIPTION: &str = "A controller which randomly chooses where to go";

/// RNG stream reserved for random-walk decisions (see [`NavRng::stream`]).
const RANDOM_STREAM: u64 = 2;

/// Keeps going straight until the way ahead is a wall, and also turns at
/// random with probability `turn_probability` per step.  A turn picks
/// uniformly among the open directions relative to the current facing
/// (ahead, left, right, behind).
///
/// In any maze where the target is reachable the walk gets there with
/// probability 1, though it may take a long time.  Each move is reported
/// through [`Robot::log_move`] before it is made.
pub struct RandomController<Rb: Robot> {
    state:            ControllerState<Rb>,
    turn_probability: f64,
}

impl<Rb: Robot> RandomController<Rb> {
    /// Unbound controller with no delay, the default turn probability and a
    /// seeded RNG.
    pub fn new(seed: u64) -> Self {
        Self {
            state:            ControllerState::new(NavRng::stream(seed, RANDOM_STREAM), Default::default()),
            turn_probability: DEFAULT_TURN_PROBABILITY,
        }
    }

    /// Unbound controller configured from `config`.
    pub fn from_config(config: &NavConfig) -> NavResult<Self> {
        config.validate()?;
        Ok(Self {
            state:            ControllerState::new(NavRng::stream(config.seed, RANDOM_STREAM), config.delay()),
            turn_probability: config.turn_probability,
        })
    }

    pub fn with_rng(mut self, rng: NavRng) -> Self {
        self.state.rng = rng;
        self
    }

    pub fn turn_probability(&self) -> f64 {
        self.turn_probability
    }
}

impl<Rb: Robot> Controller for RandomController<Rb> {
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
        let turn_probability = self.turn_probability;
        let (robot, rng) = self.state.parts()?;

        let summary = navigate(robot, cancel, delay, observer, |robot| {
            let heading = step_heading(&*robot, rng, turn_probability);
            robot.log_move(heading);
            heading
        });
        self.state.last_run = Some(summary);
        Ok(summary)
    }
}

/// One random-walk decision: keep the current facing unless the way ahead is
/// a wall or a `turn_probability` draw fires, then pick an open relative
/// direction (which may still be ahead).
pub(crate) fn step_heading<Rb: Robot + ?Sized>(
    robot:            &Rb,
    rng:              &mut NavRng,
    turn_probability: f64,
) -> Heading {
    let facing = robot.facing();
    if robot.probe(facing).is_wall() || rng.chance(turn_probability) {
        let (_, heading) = walker::pick_open_relative(facing, |h| robot.probe(h), rng);
        heading
    } else {
        facing
    }
}
