//! Absolute compass headings and facing-relative directions.

use std::fmt;

// ── Heading ───────────────────────────────────────────────────────────────────

/// An absolute compass direction, independent of which way the agent faces.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All four headings in clockwise order starting from north.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Unit grid offset `(dx, dy)` for one step in this heading.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::East  => (1, 0),
            Heading::South => (0, 1),
            Heading::West  => (-1, 0),
        }
    }

    #[inline]
    pub const fn opposite(self) -> Heading {
        match self {
            Heading::North => Heading::South,
            Heading::East  => Heading::West,
            Heading::South => Heading::North,
            Heading::West  => Heading::East,
        }
    }

    #[inline]
    pub const fn clockwise(self) -> Heading {
        match self {
            Heading::North => Heading::East,
            Heading::East  => Heading::South,
            Heading::South => Heading::West,
            Heading::West  => Heading::North,
        }
    }

    #[inline]
    pub const fn counter_clockwise(self) -> Heading {
        match self {
            Heading::North => Heading::West,
            Heading::East  => Heading::North,
            Heading::South => Heading::East,
            Heading::West  => Heading::South,
        }
    }

    /// The absolute heading reached by turning `relative` from `self`.
    #[inline]
    pub const fn turn(self, relative: RelativeDirection) -> Heading {
        match relative {
            RelativeDirection::Ahead  => self,
            RelativeDirection::Left   => self.counter_clockwise(),
            RelativeDirection::Right  => self.clockwise(),
            RelativeDirection::Behind => self.opposite(),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Heading::North => "north",
            Heading::East  => "east",
            Heading::South => "south",
            Heading::West  => "west",
        };
        f.write_str(s)
    }
}

// ── RelativeDirection ─────────────────────────────────────────────────────────

/// A direction relative to the agent's current facing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelativeDirection {
    Ahead,
    Left,
    Right,
    Behind,
}

impl RelativeDirection {
    pub const ALL: [RelativeDirection; 4] = [
        RelativeDirection::Ahead,
        RelativeDirection::Left,
        RelativeDirection::Right,
        RelativeDirection::Behind,
    ];
}
