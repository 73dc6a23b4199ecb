//! `mz-nav` — navigation controllers for grid mazes.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`evaluator`]  | Per-axis target direction and wall check → `AxisStatus`      |
//! | [`walker`]     | Open-heading search (absolute and facing-relative)           |
//! | [`selector`]   | `determine_heading` — the homing decision table              |
//! | [`nav_loop`]   | `navigate` — evaluate → turn → advance until done            |
//! | [`observer`]   | `RunObserver` hooks, `NoopObserver`                          |
//! | [`controller`] | `Controller` trait shared by both agents                     |
//! | [`homing`]     | `HomingController`                                           |
//! | [`random`]     | `RandomController`                                           |
//! | [`error`]      | `NavError`, `NavResult<T>`                                   |
//!
//! # Per-step data flow
//!
//! ```text
//! navigate ──► strategy ──► selector ──► evaluator (probe N/S, probe E/W)
//!    │                          └──────► walker    (fallback, coin flip)
//!    └──► Robot::face, Robot::advance, Robot::sleep
//! ```
//!
//! Every decision function takes its randomness as a `&mut R where R: Rng`,
//! so callers can pass a seeded [`mz_core::NavRng`] or any scripted source.

pub mod controller;
pub mod error;
pub mod evaluator;
pub mod homing;
pub mod nav_loop;
pub mod observer;
pub mod random;
pub mod selector;
pub mod walker;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use error::{NavError, NavResult};
pub use homing::HomingController;
pub use nav_loop::{RunSummary, navigate};
pub use observer::{NoopObserver, RunObserver};
pub use random::RandomController;
pub use selector::determine_heading;
