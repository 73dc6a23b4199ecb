//! Grid coordinates.
//!
//! # Axis conventions
//!
//! ```text
//!        x →   (east)
//!   y  ┌───┬───┬───┐
//!   ↓  │0,0│1,0│2,0│
//!      ├───┼───┼───┤
//! (south)0,1│1,1│2,1│
//!      └───┴───┴───┘
//! ```
//!
//! `x` grows eastward and `y` grows southward, so "north" means a *smaller*
//! `y`.  Every sensing and decision routine in the workspace uses this
//! convention.

use std::fmt;

use crate::Heading;

/// A cell coordinate in the maze grid.
///
/// Signed so that a step off the western or northern edge yields a negative
/// coordinate the host can reject, rather than wrapping.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `heading`.
    #[inline]
    pub fn step(self, heading: Heading) -> Position {
        let (dx, dy) = heading.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// Manhattan (4-connected) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(i32, i32)> for Position {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Position::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
