//! walkthrough — runs both navigation agents on a fixed maze.
//!
//! ```bash
//! RUST_LOG=mz_nav=debug cargo run -p walkthrough -- config.json
//! ```
//!
//! The optional argument is a JSON `NavConfig`; missing fields take their
//! defaults, e.g. `{"seed": 7, "delay_ms": 50}`.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use mz_core::{CancelToken, Heading, NavConfig, Position};
use mz_host::{GridMaze, MazeRobot};
use mz_nav::{Controller, HomingController, RandomController, RunObserver, RunSummary};

// ── Maze ──────────────────────────────────────────────────────────────────────

// An open room on the left, a corridor system on the right.  Homing crosses
// the room directly; the random walk has to find the gap in the middle wall.
const LAYOUT: &str = "
    ###########
    #S....#...#
    #.....#.#.#
    #.....#.#.#
    #.........#
    #.....###.#
    #.....#T..#
    ###########
";

// ── Observer ──────────────────────────────────────────────────────────────────

/// Counts turns (consecutive moves with different headings).
#[derive(Default)]
struct TurnCounter {
    last:  Option<Heading>,
    turns: u64,
}

impl RunObserver for TurnCounter {
    fn on_step(&mut self, _step: u64, _from: Position, heading: Heading, _to: Position) {
        if self.last.is_some_and(|h| h != heading) {
            self.turns += 1;
        }
        self.last = Some(heading);
    }
}

/// Wraps a [`TurnCounter`] and cancels the run after `limit` steps.
struct Bounded {
    token: CancelToken,
    limit: u64,
    turns: TurnCounter,
}

impl Bounded {
    fn new(token: CancelToken, limit: u64) -> Self {
        Self { token, limit, turns: TurnCounter::default() }
    }
}

impl RunObserver for Bounded {
    fn on_step(&mut self, step: u64, from: Position, heading: Heading, to: Position) {
        self.turns.on_step(step, from, heading, to);
        if step >= self.limit {
            self.token.cancel();
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn load_config(path: Option<&Path>) -> Result<NavConfig> {
    let config = match path {
        Some(p) => {
            let text = std::fs::read_to_string(p)
                .with_context(|| format!("reading config {}", p.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing config {}", p.display()))?
        }
        None => NavConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref().map(Path::new))?;
    let maze = GridMaze::parse(LAYOUT)?;

    println!("=== walkthrough — rust_maze navigation agents ===");
    println!(
        "Maze: {}x{}  |  start {}  |  target {}  |  seed {}",
        maze.width(),
        maze.height(),
        maze.start(),
        maze.target(),
        config.seed,
    );
    println!();

    let mut agents: Vec<Box<dyn Controller<Robot = MazeRobot>>> = vec![
        Box::new(HomingController::from_config(&config)?),
        Box::new(RandomController::from_config(&config)?),
    ];

    println!("{:<50} {:>8} {:>6} {:>8} {:>10}", "Controller", "Steps", "Turns", "Reached", "Collisions");
    println!("{}", "-".repeat(86));

    for agent in &mut agents {
        agent.bind(MazeRobot::new(maze.clone()));

        // Homing can circle forever behind a long wall; bound every run.
        let mut observer = Bounded::new(agent.cancel_token(), 10_000);
        let t0 = Instant::now();
        let summary = agent.start_observed(&mut observer)?;
        info!(agent = agent.description(), elapsed_ms = t0.elapsed().as_millis() as u64, "run finished");

        let robot = agent.unbind().context("controller lost its robot")?;
        print_row(agent.description(), &summary, observer.turns.turns, robot.collisions());
    }

    Ok(())
}

fn print_row(description: &str, summary: &RunSummary, turns: u64, collisions: u64) {
    println!(
        "{:<50} {:>8} {:>6} {:>8} {:>10}",
        description,
        summary.steps,
        turns,
        if summary.reached { "yes" } else { "no" },
        collisions,
    );
}
