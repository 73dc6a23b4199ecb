//! `mz-host` — the sensing/actuation contract and a grid maze that satisfies it.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                      |
//! |-----------|---------------------------------------------------------------|
//! | [`robot`] | `Robot` trait — probe / face / advance / sleep / log_move     |
//! | [`maze`]  | `GridMaze`, `GridMazeBuilder`, `Cell`, ASCII layout parsing   |
//! | [`sim`]   | `MazeRobot` — a `Robot` moving through a `GridMaze`           |
//! | [`log`]   | `MoveLog`, `LoggedMove` — in-memory record of logged moves    |
//! | [`error`] | `HostError`, `HostResult<T>`                                  |
//!
//! # Design notes
//!
//! The navigation controllers in `mz-nav` only ever see the [`Robot`] trait.
//! `GridMaze` is a hand-built maze for tests and demos; it has no generator.
//! Cells outside the grid read as walls, so every maze has an implicit outer
//! wall.

pub mod error;
pub mod log;
pub mod maze;
pub mod robot;
pub mod sim;


pub use error::{HostError, HostResult};
pub use log::{LoggedMove, MoveLog};
pub use maze::{Cell, GridMaze, GridMazeBuilder};
pub use robot::Robot;
pub use sim::MazeRobot;
