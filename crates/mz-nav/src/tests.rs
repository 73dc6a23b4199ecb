//! Unit and scenario tests for mz-nav.

use mz_core::{AxisStatus, CellProbe, Heading, NavConfig, NavRng, Position};
use mz_host::{Cell, GridMaze, GridMazeBuilder, MazeRobot, Robot};

use crate::{Controller, HomingController, RandomController, RunObserver, RunSummary};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 5×5 all-passage maze, start (2,2), target (0,0).
fn open_maze() -> GridMaze {
    GridMazeBuilder::new(5, 5)
        .start(Position::new(2, 2))
        .target(Position::new(0, 0))
        .build()
        .unwrap()
}

/// A connected 9×9 maze with corridors, dead ends, and a detour to the target.
const WINDING: &str = "
    #########
    #S..#...#
    #.#.#.#.#
    #.#...#.#
    #.#####.#
    #...#...#
    ###.#.#.#
    #.....#T#
    #########
";

fn homing_on(maze: GridMaze, seed: u64) -> HomingController<MazeRobot> {
    let mut c = HomingController::new(seed);
    c.bind(MazeRobot::new(maze));
    c
}

fn random_on(maze: GridMaze, seed: u64) -> RandomController<MazeRobot> {
    let mut c = RandomController::new(seed);
    c.bind(MazeRobot::new(maze));
    c
}

fn set_cell<C: Controller<Robot = MazeRobot>>(c: &mut C, x: i32, y: i32, cell: Cell) {
    c.robot_mut().unwrap().maze_mut().set_cell(Position::new(x, y), cell).unwrap();
}

fn set_target<C: Controller<Robot = MazeRobot>>(c: &mut C, x: i32, y: i32) {
    c.robot_mut().unwrap().set_target(Position::new(x, y)).unwrap();
}

fn probe_panics(_: Heading) -> CellProbe {
    panic!("probe must not be called")
}

/// Records every heading the loop takes.
#[derive(Default)]
struct Trail {
    headings: Vec<Heading>,
    ended:    Option<RunSummary>,
}

impl RunObserver for Trail {
    fn on_step(&mut self, _step: u64, _from: Position, heading: Heading, _to: Position) {
        self.headings.push(heading);
    }

    fn on_run_end(&mut self, summary: &RunSummary) {
        self.ended = Some(*summary);
    }
}

/// Read-only robot that can be placed anywhere in a maze.
struct Placed<'a> {
    maze:   &'a GridMaze,
    pos:    Position,
    target: Position,
}

impl Robot for Placed<'_> {
    fn position(&self) -> Position {
        self.pos
    }

    fn target(&self) -> Position {
        self.target
    }

    fn facing(&self) -> Heading {
        Heading::North
    }

    fn probe(&self, heading: Heading) -> CellProbe {
        if self.maze.is_passable(self.pos.step(heading)) {
            CellProbe::Open
        } else {
            CellProbe::Wall
        }
    }

    fn face(&mut self, _heading: Heading) {}

    fn advance(&mut self) {}
}

// ── DirectionEvaluator ────────────────────────────────────────────────────────

#[cfg(test)]
mod evaluator_tests {
    use super::*;
    use crate::evaluator::{horizontal_sense, horizontal_status, vertical_sense, vertical_status};

    const HERE: Position = Position::new(2, 2);

    #[test]
    fn vertical_sense_per_row() {
        for x in 0..5 {
            assert_eq!(vertical_sense(HERE, Position::new(x, 0)), 1, "target north");
            assert_eq!(vertical_sense(HERE, Position::new(x, 4)), -1, "target south");
            assert_eq!(vertical_sense(HERE, Position::new(x, 2)), 0, "target level");
        }
    }

    #[test]
    fn horizontal_sense_per_column() {
        for y in 0..5 {
            assert_eq!(horizontal_sense(HERE, Position::new(4, y)), 1, "target east");
            assert_eq!(horizontal_sense(HERE, Position::new(0, y)), -1, "target west");
            assert_eq!(horizontal_sense(HERE, Position::new(2, y)), 0, "target level");
        }
    }

    #[test]
    fn vertical_status_probes_toward_target() {
        let north = Position::new(2, 0);
        let south = Position::new(2, 4);
        let only = |want: Heading, answer: CellProbe| {
            move |h: Heading| {
                assert_eq!(h, want);
                answer
            }
        };
        assert_eq!(vertical_status(HERE, north, only(Heading::North, CellProbe::Open)), AxisStatus::Positive);
        assert_eq!(vertical_status(HERE, north, only(Heading::North, CellProbe::Wall)), AxisStatus::Blocked);
        assert_eq!(vertical_status(HERE, south, only(Heading::South, CellProbe::Open)), AxisStatus::Negative);
        assert_eq!(vertical_status(HERE, south, only(Heading::South, CellProbe::Wall)), AxisStatus::Blocked);
    }

    #[test]
    fn horizontal_status_probes_toward_target() {
        let east = Position::new(4, 2);
        let west = Position::new(0, 2);
        let only = |want: Heading, answer: CellProbe| {
            move |h: Heading| {
                assert_eq!(h, want);
                answer
            }
        };
        assert_eq!(horizontal_status(HERE, east, only(Heading::East, CellProbe::Open)), AxisStatus::Positive);
        assert_eq!(horizontal_status(HERE, east, only(Heading::East, CellProbe::Wall)), AxisStatus::Blocked);
        assert_eq!(horizontal_status(HERE, west, only(Heading::West, CellProbe::Open)), AxisStatus::Negative);
        assert_eq!(horizontal_status(HERE, west, only(Heading::West, CellProbe::Wall)), AxisStatus::Blocked);
    }

    #[test]
    fn level_target_is_blocked_without_probing() {
        assert_eq!(vertical_status(HERE, Position::new(0, 2), probe_panics), AxisStatus::Blocked);
        assert_eq!(horizontal_status(HERE, Position::new(2, 0), probe_panics), AxisStatus::Blocked);
    }

    #[test]
    fn controller_reports_live_statuses() {
        let mut c = homing_on(open_maze(), 0);
        assert_eq!(c.axis_statuses().unwrap(), (AxisStatus::Positive, AxisStatus::Negative));
        set_cell(&mut c, 2, 1, Cell::Wall);
        assert_eq!(c.axis_statuses().unwrap(), (AxisStatus::Blocked, AxisStatus::Negative));
    }
}

// ── RandomWalker ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod walker_tests {
    use mz_core::RelativeDirection;

    use super::*;
    use crate::walker::{pick_open_heading, pick_open_relative};

    #[test]
    fn only_open_heading_is_chosen() {
        let mut rng = NavRng::new(3);
        let probe = |h: Heading| if h == Heading::South { CellProbe::Open } else { CellProbe::Wall };
        for _ in 0..100 {
            assert_eq!(pick_open_heading(probe, &mut rng), Heading::South);
        }
    }

    #[test]
    fn open_headings_are_uniform() {
        let mut rng = NavRng::new(11);
        let mut counts = [0u32; 4];
        for _ in 0..8_000 {
            let h = pick_open_heading(|_| CellProbe::Open, &mut rng);
            counts[Heading::ALL.iter().position(|&x| x == h).unwrap()] += 1;
        }
        for c in counts {
            assert!((1_600..=2_400).contains(&c), "counts {counts:?}");
        }
    }

    #[test]
    fn relative_choice_maps_through_facing() {
        let mut rng = NavRng::new(5);
        let probe = |h: Heading| if h == Heading::West { CellProbe::Open } else { CellProbe::Wall };
        for _ in 0..50 {
            assert_eq!(
                pick_open_relative(Heading::East, probe, &mut rng),
                (RelativeDirection::Behind, Heading::West)
            );
            assert_eq!(
                pick_open_relative(Heading::North, probe, &mut rng),
                (RelativeDirection::Left, Heading::West)
            );
        }
    }
}

// ── HeadingSelector ───────────────────────────────────────────────────────────

#[cfg(test)]
mod selector_tests {
    use super::*;
    use crate::determine_heading;
    use crate::selector::next_heading;

    use mz_core::AxisStatus::{Blocked, Negative, Positive};

    #[test]
    fn single_open_axis_rules() {
        let mut rng = NavRng::new(0);
        assert_eq!(determine_heading(Blocked, Positive, probe_panics, &mut rng), Heading::East);
        assert_eq!(determine_heading(Blocked, Negative, probe_panics, &mut rng), Heading::West);
        assert_eq!(determine_heading(Positive, Blocked, probe_panics, &mut rng), Heading::North);
        assert_eq!(determine_heading(Negative, Blocked, probe_panics, &mut rng), Heading::South);
    }

    #[test]
    fn double_block_falls_back_to_open_heading() {
        let mut rng = NavRng::new(9);
        let probe = |h: Heading| if h == Heading::East { CellProbe::Open } else { CellProbe::Wall };
        for _ in 0..100 {
            assert_eq!(determine_heading(Blocked, Blocked, probe, &mut rng), Heading::East);
        }
    }

    #[test]
    fn two_open_axes_pick_one_of_the_candidates() {
        let mut rng = NavRng::new(1);
        for _ in 0..100 {
            let h = determine_heading(Positive, Negative, probe_panics, &mut rng);
            assert!(h == Heading::North || h == Heading::West, "got {h}");
            let h = determine_heading(Negative, Positive, probe_panics, &mut rng);
            assert!(h == Heading::South || h == Heading::East, "got {h}");
        }
    }

    #[test]
    fn tie_break_is_a_fair_coin() {
        let mut rng = NavRng::new(2024);
        let trials = 10_000;
        let north = (0..trials)
            .filter(|_| determine_heading(Positive, Negative, probe_panics, &mut rng) == Heading::North)
            .count();
        assert!((4_500..=5_500).contains(&north), "north chosen {north} of {trials}");
    }

    #[test]
    fn tie_break_ignores_distance() {
        // Target 4 columns east but only 1 row south: still 50/50.
        let maze = GridMazeBuilder::new(9, 9).build().unwrap();
        let robot = Placed { maze: &maze, pos: Position::new(2, 2), target: Position::new(6, 3) };
        let mut rng = NavRng::new(77);
        let trials = 10_000;
        let south = (0..trials)
            .filter(|_| next_heading(&robot, &mut rng) == Heading::South)
            .count();
        assert!((4_500..=5_500).contains(&south), "south chosen {south} of {trials}");
    }

    #[test]
    fn level_target_with_walls_either_side_goes_west() {
        let mut c = homing_on(open_maze(), 0);
        set_cell(&mut c, 2, 1, Cell::Wall);
        set_cell(&mut c, 2, 3, Cell::Wall);
        set_target(&mut c, 0, 2);
        for _ in 0..20 {
            assert_eq!(c.determine_heading().unwrap(), Heading::West);
        }
    }

    #[test]
    fn never_heads_into_a_wall() {
        let maze = GridMaze::parse(WINDING).unwrap();
        let cells: Vec<Position> = (0..maze.height() as i32)
            .flat_map(|y| (0..maze.width() as i32).map(move |x| Position::new(x, y)))
            .filter(|&p| maze.is_passable(p))
            .collect();
        let mut rng = NavRng::new(5);

        for &pos in &cells {
            for &target in &cells {
                let robot = Placed { maze: &maze, pos, target };
                for _ in 0..4 {
                    let h = next_heading(&robot, &mut rng);
                    assert!(
                        robot.probe(h).is_open(),
                        "{pos} → {target}: chose {h} into a wall"
                    );
                }
            }
        }
    }

    /// Walks the decision table through a sequence of wall layouts around (2,2).
    #[test]
    fn decision_sequence_around_centre_cell() {
        let mut c = homing_on(open_maze(), 4);

        set_cell(&mut c, 2, 1, Cell::Wall);
        set_cell(&mut c, 2, 3, Cell::Wall);
        set_target(&mut c, 0, 2);
        assert_eq!(c.determine_heading().unwrap(), Heading::West);

        set_target(&mut c, 4, 4);
        assert_eq!(c.determine_heading().unwrap(), Heading::East);

        set_cell(&mut c, 2, 1, Cell::Passage);
        set_cell(&mut c, 2, 3, Cell::Passage);
        set_cell(&mut c, 1, 2, Cell::Wall);
        set_cell(&mut c, 3, 2, Cell::Wall);
        assert_eq!(c.determine_heading().unwrap(), Heading::South);

        set_target(&mut c, 0, 0);
        assert_eq!(c.determine_heading().unwrap(), Heading::North);

        set_cell(&mut c, 2, 3, Cell::Wall);
        assert_eq!(c.determine_heading().unwrap(), Heading::North);

        // Both axes blocked: only east is open.
        set_cell(&mut c, 3, 2, Cell::Passage);
        set_cell(&mut c, 2, 1, Cell::Wall);
        assert_eq!(c.determine_heading().unwrap(), Heading::East);

        // Both axes blocked: only south is open.
        set_cell(&mut c, 2, 3, Cell::Passage);
        set_cell(&mut c, 3, 2, Cell::Wall);
        assert_eq!(c.determine_heading().unwrap(), Heading::South);

        set_cell(&mut c, 1, 2, Cell::Passage);
        set_cell(&mut c, 2, 3, Cell::Wall);
        assert_eq!(c.determine_heading().unwrap(), Heading::West);

        // Target level to the east behind a wall: fallback finds west.
        set_target(&mut c, 4, 2);
        assert_eq!(c.determine_heading().unwrap(), Heading::West);

        set_cell(&mut c, 2, 1, Cell::Passage);
        set_target(&mut c, 0, 0);
        let h = c.determine_heading().unwrap();
        assert!(h == Heading::North || h == Heading::West, "got {h}");

        set_cell(&mut c, 2, 3, Cell::Passage);
        set_cell(&mut c, 3, 2, Cell::Passage);
        set_cell(&mut c, 1, 2, Cell::Wall);
        set_cell(&mut c, 2, 1, Cell::Wall);
        set_target(&mut c, 4, 4);
        let h = c.determine_heading().unwrap();
        assert!(h == Heading::South || h == Heading::East, "got {h}");

        set_cell(&mut c, 3, 2, Cell::Wall);
        set_target(&mut c, 3, 0);
        let summary = c.start().unwrap();
        assert!(summary.reached);
        assert_eq!(c.robot().unwrap().collisions(), 0);
    }
}

// ── HomingController ──────────────────────────────────────────────────────────

#[cfg(test)]
mod homing_tests {
    use std::time::Duration;

    use mz_core::CancelToken;

    use super::*;
    use crate::{NavError, NoopObserver};

    #[test]
    fn description() {
        let c: HomingController<MazeRobot> = HomingController::new(0);
        assert_eq!(c.description(), "A controller which homes in on the target");
    }

    #[test]
    fn unbound_start_errors() {
        let mut c: HomingController<MazeRobot> = HomingController::new(0);
        assert!(matches!(c.start(), Err(NavError::Unbound)));
        assert!(matches!(c.determine_heading(), Err(NavError::Unbound)));
        assert!(c.last_run().is_none());
    }

    #[test]
    fn unbind_returns_robot() {
        let mut c = homing_on(open_maze(), 0);
        let robot = c.unbind().unwrap();
        assert_eq!(robot.position(), Position::new(2, 2));
        assert!(c.robot().is_none());
    }

    #[test]
    fn target_due_east_takes_dx_steps() {
        let maze = GridMaze::parse("S.....T").unwrap();
        let mut c = homing_on(maze, 0);
        let mut trail = Trail::default();
        let summary = c.start_observed(&mut trail).unwrap();

        assert_eq!(summary, RunSummary { steps: 6, reached: true, cancelled: false });
        assert_eq!(trail.headings, vec![Heading::East; 6]);
        assert_eq!(trail.ended, Some(summary));
    }

    #[test]
    fn open_maze_homing_sequence() {
        let mut c = homing_on(open_maze(), 3);

        set_target(&mut c, 4, 2);
        let mut trail = Trail::default();
        c.start_observed(&mut trail).unwrap();
        assert_eq!(c.robot().unwrap().steps(), 2);
        assert_eq!(trail.headings, vec![Heading::East; 2]);

        set_target(&mut c, 4, 4);
        let mut trail = Trail::default();
        c.start_observed(&mut trail).unwrap();
        assert_eq!(c.robot().unwrap().steps() - 2, 2);
        assert_eq!(trail.headings, vec![Heading::South; 2]);

        set_target(&mut c, 0, 0);
        c.start().unwrap();
        let robot = c.robot().unwrap();
        assert_eq!(robot.steps() - 4, 8);
        assert_eq!(robot.position(), Position::new(0, 0));
        assert_eq!(robot.collisions(), 0);
    }

    #[test]
    fn detours_round_a_single_wall() {
        for seed in 0..16 {
            let mut c = homing_on(open_maze(), seed);
            set_cell(&mut c, 3, 1, Cell::Wall);
            set_target(&mut c, 4, 0);
            c.start().unwrap();
            let robot = c.robot().unwrap();
            assert_eq!(robot.steps(), 4, "seed {seed}");
            assert_eq!(robot.collisions(), 0);
        }
    }

    #[test]
    fn start_on_target_makes_no_moves() {
        let mut c = homing_on(open_maze(), 0);
        set_target(&mut c, 2, 2);
        let summary = c.start().unwrap();
        assert_eq!(summary, RunSummary { steps: 0, reached: true, cancelled: false });
        assert_eq!(c.last_run(), Some(summary));
    }

    #[test]
    fn pre_cancelled_token_stops_before_first_move() {
        let mut c = homing_on(open_maze(), 0);
        let token = CancelToken::new();
        token.cancel();
        let summary = c.run(&token, &mut NoopObserver).unwrap();
        assert_eq!(summary, RunSummary { steps: 0, reached: false, cancelled: true });
        assert_eq!(c.robot().unwrap().position(), Position::new(2, 2));
    }

    #[test]
    fn start_rearms_after_reset() {
        let mut c = homing_on(open_maze(), 0);
        c.reset();
        assert!(c.cancel_token().is_cancelled());
        let summary = c.start().unwrap();
        assert!(summary.reached);
        assert_eq!(summary.steps, 4);
    }

    /// Cancels the controller's token once `after` steps have been made.
    struct StopAfter {
        after: u64,
        token: CancelToken,
    }

    impl RunObserver for StopAfter {
        fn on_step(&mut self, step: u64, _from: Position, _h: Heading, _to: Position) {
            if step >= self.after {
                self.token.cancel();
            }
        }
    }

    #[test]
    fn cancel_mid_run_stops_at_next_iteration() {
        let mut c = homing_on(open_maze(), 0);
        let mut stop = StopAfter { after: 1, token: c.cancel_token() };
        let summary = c.start_observed(&mut stop).unwrap();
        assert_eq!(summary, RunSummary { steps: 1, reached: false, cancelled: true });
        assert_eq!(c.robot().unwrap().steps(), 1);
        assert_eq!(c.robot().unwrap().position().manhattan(Position::new(0, 0)), 3);
    }

    #[test]
    fn delay_paces_each_step() {
        let mut c = homing_on(open_maze(), 0);
        c.set_delay(Duration::from_millis(1));
        assert_eq!(c.delay(), Duration::from_millis(1));
        set_target(&mut c, 4, 2);
        c.start().unwrap();
        assert_eq!(c.robot().unwrap().slept(), Duration::from_millis(2));
    }

    #[test]
    fn zero_delay_never_sleeps() {
        let mut c = homing_on(open_maze(), 0);
        c.start().unwrap();
        assert_eq!(c.robot().unwrap().slept(), Duration::ZERO);
    }

    #[test]
    fn from_config_applies_delay() {
        let config = NavConfig { delay_ms: 5, ..NavConfig::default() };
        let c: HomingController<MazeRobot> = HomingController::from_config(&config).unwrap();
        assert_eq!(c.delay(), Duration::from_millis(5));
    }

    #[test]
    fn homing_logs_nothing() {
        let mut c = homing_on(open_maze(), 0);
        c.start().unwrap();
        assert!(c.robot().unwrap().move_log().is_empty());
    }
}

// ── RandomController ──────────────────────────────────────────────────────────

#[cfg(test)]
mod random_tests {
    use mz_core::config::DEFAULT_TURN_PROBABILITY;

    use super::*;
    use crate::NavError;
    use crate::random::step_heading;

    #[test]
    fn description() {
        let c: RandomController<MazeRobot> = RandomController::new(0);
        assert_eq!(c.description(), "A controller which randomly chooses where to go");
    }

    #[test]
    fn from_config_rejects_bad_turn_probability() {
        let config = NavConfig { turn_probability: -0.5, ..NavConfig::default() };
        let result: Result<RandomController<MazeRobot>, _> = RandomController::from_config(&config);
        assert!(matches!(result, Err(NavError::Core(_))));
    }

    #[test]
    fn straight_corridor_without_random_turns() {
        let config = NavConfig { turn_probability: 0.0, ..NavConfig::default() };
        let mut c = RandomController::from_config(&config).unwrap();
        c.bind(MazeRobot::new(GridMaze::parse("S...T").unwrap()));

        let summary = c.start().unwrap();
        assert_eq!(summary.steps, 4);
        let log = c.robot().unwrap().move_log();
        assert!(log.iter().all(|m| m.heading == Heading::East));
        assert_eq!(log.len(), 4);
    }

    /// Counts how often `step_heading` leaves an East facing with the way
    /// ahead open, over `trials` decisions from the robot's start cell.
    fn turns_away_from_east(maze: GridMaze, turn_probability: f64, trials: u32) -> u32 {
        let mut robot = MazeRobot::new(maze);
        robot.face(Heading::East);
        assert!(robot.probe(Heading::East).is_open());

        let mut rng = NavRng::new(31);
        (0..trials)
            .filter(|_| step_heading(&robot, &mut rng, turn_probability) != Heading::East)
            .count() as u32
    }

    #[test]
    fn open_corridor_turns_at_the_configured_rate() {
        // In a corridor a turn lands ahead or behind with equal odds, so the
        // facing is left on p/2 of the steps.
        let corridor = || GridMaze::parse("....S.....T").unwrap();

        assert_eq!(turns_away_from_east(corridor(), 0.0, 20_000), 0);

        let default_rate = turns_away_from_east(corridor(), DEFAULT_TURN_PROBABILITY, 20_000);
        assert!((1_100..=1_400).contains(&default_rate), "turned back {default_rate} times");

        let always = turns_away_from_east(corridor(), 1.0, 20_000);
        assert!((9_500..=10_500).contains(&always), "turned back {always} times");
    }

    #[test]
    fn open_field_turns_at_the_configured_rate() {
        // Four open directions: a turn leaves the facing 3/4 of the time.
        let default_rate = turns_away_from_east(open_maze(), DEFAULT_TURN_PROBABILITY, 20_000);
        assert!((1_700..=2_050).contains(&default_rate), "turned {default_rate} times");

        let always = turns_away_from_east(open_maze(), 1.0, 20_000);
        assert!((14_500..=15_500).contains(&always), "turned {always} times");
    }

    #[test]
    fn wall_ahead_always_turns() {
        let mut robot = MazeRobot::new(GridMaze::parse("S...T").unwrap());
        robot.face(Heading::West);
        let mut rng = NavRng::new(4);
        for _ in 0..100 {
            assert_eq!(step_heading(&robot, &mut rng, 0.0), Heading::East);
        }
    }

    #[test]
    fn reaches_target_in_connected_maze_without_collisions() {
        for seed in 0..8 {
            let mut c = random_on(GridMaze::parse(WINDING).unwrap(), seed);
            let summary = c.start().unwrap();
            let robot = c.robot().unwrap();

            assert!(summary.reached, "seed {seed}");
            assert_eq!(robot.position(), robot.target());
            assert_eq!(robot.collisions(), 0, "seed {seed}");
            assert_eq!(robot.move_log().len() as u64, summary.steps);
        }
    }

    #[test]
    fn logged_moves_chain_through_passages() {
        let mut c = random_on(GridMaze::parse(WINDING).unwrap(), 99);
        c.start().unwrap();
        let robot = c.robot().unwrap();
        let moves = robot.move_log().entries();

        assert_eq!(moves[0].from, robot.maze().start());
        for pair in moves.windows(2) {
            assert_eq!(pair[0].to(), pair[1].from);
        }
        for m in moves {
            assert!(robot.maze().is_passable(m.to()), "logged move into wall at step {}", m.step);
        }
        assert_eq!(moves.last().map(|m| m.to()), Some(robot.target()));
    }

    #[test]
    fn same_seed_same_walk() {
        let walk = |seed| {
            let mut c = random_on(GridMaze::parse(WINDING).unwrap(), seed);
            c.start().unwrap();
            c.robot().unwrap().move_log().entries().to_vec()
        };
        assert_eq!(walk(17), walk(17));
    }

    #[test]
    fn injected_rng_overrides_seed() {
        let walk = |c: RandomController<MazeRobot>| {
            let mut c = c;
            c.bind(MazeRobot::new(GridMaze::parse(WINDING).unwrap()));
            c.start().unwrap();
            c.robot().unwrap().move_log().entries().to_vec()
        };
        let a = walk(RandomController::new(1).with_rng(NavRng::new(500)));
        let b = walk(RandomController::new(2).with_rng(NavRng::new(500)));
        assert_eq!(a, b);
    }
}

// ── Controller trait objects ──────────────────────────────────────────────────

#[cfg(test)]
mod dyn_tests {
    use super::*;

    #[test]
    fn both_agents_behind_one_trait() {
        let mut agents: Vec<Box<dyn Controller<Robot = MazeRobot>>> = vec![
            Box::new(HomingController::new(8)),
            Box::new(RandomController::new(8)),
        ];
        for agent in &mut agents {
            agent.bind(MazeRobot::new(open_maze()));
            let summary = agent.start().unwrap();
            assert!(summary.reached, "{}", agent.description());
            assert_eq!(agent.robot().unwrap().collisions(), 0);
        }
    }
}
