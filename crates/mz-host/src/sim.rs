//! `MazeRobot` — a simulated robot moving through a [`GridMaze`].

use std::time::Duration;

use tracing::warn;

use mz_core::{CellProbe, Heading, Position};

use crate::{GridMaze, HostResult, LoggedMove, MoveLog, Robot};

/// A [`Robot`] backed by an in-memory [`GridMaze`].
///
/// Tracks every `advance` call in [`steps`][Self::steps] and every attempt
/// to walk into a wall in [`collisions`][Self::collisions].  The maze stays
/// editable through [`maze_mut`][Self::maze_mut] so tests can add walls or
/// move the target between runs without rebuilding the robot.
pub struct MazeRobot {
    maze:       GridMaze,
    position:   Position,
    facing:     Heading,
    steps:      u64,
    collisions: u64,
    slept:      Duration,
    log:        MoveLog,
}

impl MazeRobot {
    /// Place a robot on the maze's start cell, facing north.
    pub fn new(maze: GridMaze) -> Self {
        Self {
            position:   maze.start(),
            maze,
            facing:     Heading::North,
            steps:      0,
            collisions: 0,
            slept:      Duration::ZERO,
            log:        MoveLog::new(),
        }
    }

    pub fn maze(&self) -> &GridMaze {
        &self.maze
    }

    pub fn maze_mut(&mut self) -> &mut GridMaze {
        &mut self.maze
    }

    /// Move the target.  See [`GridMaze::set_target`].
    pub fn set_target(&mut self, pos: Position) -> HostResult<()> {
        self.maze.set_target(pos)
    }

    /// Total `advance` calls, including ones that collided.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// `advance` calls that hit a wall and left the robot in place.
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    /// Total time spent in [`Robot::sleep`].
    pub fn slept(&self) -> Duration {
        self.slept
    }

    pub fn move_log(&self) -> &MoveLog {
        &self.log
    }
}

impl Robot for MazeRobot {
    fn position(&self) -> Position {
        self.position
    }

    fn target(&self) -> Position {
        self.maze.target()
    }

    fn facing(&self) -> Heading {
        self.facing
    }

    fn probe(&self, heading: Heading) -> CellProbe {
        if self.maze.is_passable(self.position.step(heading)) {
            CellProbe::Open
        } else {
            CellProbe::Wall
        }
    }

    fn face(&mut self, heading: Heading) {
        self.facing = heading;
    }

    fn advance(&mut self) {
        self.steps += 1;
        let next = self.position.step(self.facing);
        if self.maze.is_passable(next) {
            self.position = next;
        } else {
            self.collisions += 1;
            warn!(from = %self.position, heading = %self.facing, "robot walked into a wall");
        }
    }

    fn sleep(&mut self, delay: Duration) {
        self.slept += delay;
        std::thread::sleep(delay);
    }

    fn log_move(&mut self, heading: Heading) {
        self.log.push(LoggedMove { step: self.steps, from: self.position, heading });
    }
}
