//! `mz-core` — foundational types for the `rust_maze` navigation agents.
//!
//! This crate is a dependency of every other `mz-*` crate.  It has no `mz-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`grid`]    | `Position`, grid axis conventions                     |
//! | [`heading`] | `Heading` (absolute), `RelativeDirection`             |
//! | [`probe`]   | `CellProbe`, `AxisStatus`                             |
//! | [`rng`]     | `NavRng` (seeded, injectable)                         |
//! | [`cancel`]  | `CancelToken` — cooperative stop flag                 |
//! | [`config`]  | `NavConfig`                                           |
//! | [`error`]   | `MzError`, `MzResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod cancel;
pub mod config;
pub mod error;
pub mod grid;
pub mod heading;
pub mod probe;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cancel::CancelToken;
pub use config::NavConfig;
pub use error::{MzError, MzResult};
pub use grid::Position;
pub use heading::{Heading, RelativeDirection};
pub use probe::{AxisStatus, CellProbe};
pub use rng::NavRng;
