//! The `Robot` trait — everything a controller may ask of its host.

use std::time::Duration;

use mz_core::{CellProbe, Heading, Position};

/// Sensing and actuation capabilities a navigation controller consumes.
///
/// Implement this for whatever drives the agent: a simulated grid
/// ([`MazeRobot`][crate::MazeRobot]), a test double, or real hardware.
/// Controllers never learn how walls are stored; they only
/// [`probe`][Self::probe].
///
/// # Movement contract
///
/// `advance` moves one cell along [`facing`][Self::facing].  If that cell is
/// a wall the host counts a collision and stays put.  A correct controller
/// never causes a collision: it probes before it turns.
pub trait Robot {
    /// The cell the robot currently occupies.
    fn position(&self) -> Position;

    /// The cell the robot is trying to reach.
    fn target(&self) -> Position;

    /// The absolute heading the robot currently faces.
    fn facing(&self) -> Heading;

    /// What lies in the adjacent cell toward `heading`.  Does not move or turn.
    fn probe(&self, heading: Heading) -> CellProbe;

    /// Turn to face `heading` without moving.
    fn face(&mut self, heading: Heading);

    /// Move one cell along the current facing.
    fn advance(&mut self);

    /// Block for `delay`.  Called only with a non-zero delay.
    fn sleep(&mut self, delay: Duration) {
        std::thread::sleep(delay);
    }

    /// Record a move in `heading` about to be made from the current cell.
    ///
    /// Default: ignored.
    fn log_move(&mut self, _heading: Heading) {}
}
