//! In-memory move log.

use mz_core::{Heading, Position};

/// One entry of a [`MoveLog`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct LoggedMove {
    /// Zero-based step index at which the move was logged.
    pub step: u64,
    /// Cell the move starts from.
    pub from: Position,
    /// Absolute heading of the move.
    pub heading: Heading,
}

impl LoggedMove {
    /// Cell the move ends in, if it succeeds.
    #[inline]
    pub fn to(&self) -> Position {
        self.from.step(self.heading)
    }
}

/// Append-only list of logged moves.
#[derive(Clone, Debug, Default)]
pub struct MoveLog {
    entries: Vec<LoggedMove>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LoggedMove) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[LoggedMove] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &LoggedMove> + '_ {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
