//! Grid maze representation and builder.
//!
//! # Data layout
//!
//! Cells are stored row-major in a flat `Vec<Cell>`; cell `(x, y)` lives at
//! index `y * width + x`.  Anything outside `0..width` × `0..height` is
//! treated as a wall, so callers never need a bounds check before probing.
//!
//! # ASCII layouts
//!
//! [`GridMaze::parse`] reads one line per row:
//!
//! | Char | Meaning                  |
//! |------|--------------------------|
//! | `#`  | wall                     |
//! | `.`  | passage                  |
//! | `S`  | passage, start cell      |
//! | `T`  | passage, target cell     |
//!
//! Blank lines and leading/trailing whitespace are ignored; every remaining
//! line must have the same width.

use mz_core::Position;

use crate::{HostError, HostResult};

// ── Cell ──────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    Wall,
    #[default]
    Passage,
}

// ── GridMaze ──────────────────────────────────────────────────────────────────

/// A rectangular maze of wall and passage cells with a start and a target.
///
/// Construct with [`GridMazeBuilder`] or [`GridMaze::parse`].
#[derive(Clone, Debug)]
pub struct GridMaze {
    width:  u32,
    height: u32,
    cells:  Vec<Cell>,
    start:  Position,
    target: Position,
}

impl GridMaze {
    /// Parse an ASCII layout (see the module docs for the alphabet).
    pub fn parse(layout: &str) -> HostResult<GridMaze> {
        let rows: Vec<(usize, &str)> = layout
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty())
            .collect();

        let Some(&(_, first)) = rows.first() else {
            return Err(HostError::EmptyMaze { width: 0, height: 0 });
        };
        let width = first.chars().count() as u32;
        let height = rows.len() as u32;

        let mut builder = GridMazeBuilder::new(width, height);
        let mut start = None;
        let mut target = None;

        for (y, &(line, row)) in rows.iter().enumerate() {
            if row.chars().count() as u32 != width {
                return Err(HostError::Layout {
                    line,
                    reason: format!("expected {width} cells, found {}", row.chars().count()),
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let pos = Position::new(x as i32, y as i32);
                match ch {
                    '#' => builder = builder.wall(pos),
                    '.' => {}
                    'S' => mark(&mut start, pos, line, "start")?,
                    'T' => mark(&mut target, pos, line, "target")?,
                    other => {
                        return Err(HostError::Layout {
                            line,
                            reason: format!("unknown cell character {other:?}"),
                        });
                    }
                }
            }
        }

        let start = start.ok_or(HostError::MissingEndpoint("start (S)"))?;
        let target = target.ok_or(HostError::MissingEndpoint("target (T)"))?;
        builder.start(start).target(target).build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn target(&self) -> Position {
        self.target
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.width as usize + pos.x as usize)
    }

    // ── Cell access ───────────────────────────────────────────────────────

    /// The cell at `pos`; out-of-bounds positions read as [`Cell::Wall`].
    #[inline]
    pub fn cell(&self, pos: Position) -> Cell {
        self.index(pos).map_or(Cell::Wall, |i| self.cells[i])
    }

    #[inline]
    pub fn is_passable(&self, pos: Position) -> bool {
        self.cell(pos) == Cell::Passage
    }

    /// Overwrite one cell in place.  The target cell cannot be walled in.
    pub fn set_cell(&mut self, pos: Position, cell: Cell) -> HostResult<()> {
        let i = self.index(pos).ok_or(HostError::OutOfBounds {
            pos,
            width:  self.width,
            height: self.height,
        })?;
        if cell == Cell::Wall && pos == self.target {
            return Err(HostError::BlockedEndpoint { what: "target", pos });
        }
        self.cells[i] = cell;
        Ok(())
    }

    /// Move the target marker.  The new target must be an in-bounds passage.
    pub fn set_target(&mut self, pos: Position) -> HostResult<()> {
        self.check_endpoint("target", pos)?;
        self.target = pos;
        Ok(())
    }

    fn check_endpoint(&self, what: &'static str, pos: Position) -> HostResult<()> {
        if !self.contains(pos) {
            return Err(HostError::OutOfBounds { pos, width: self.width, height: self.height });
        }
        if !self.is_passable(pos) {
            return Err(HostError::BlockedEndpoint { what, pos });
        }
        Ok(())
    }
}

/// Record a start/target marker, rejecting a second one.
fn mark(slot: &mut Option<Position>, pos: Position, line: usize, what: &str) -> HostResult<()> {
    if slot.is_some() {
        return Err(HostError::Layout { line, reason: format!("duplicate {what} marker") });
    }
    *slot = Some(pos);
    Ok(())
}

// ── GridMazeBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for a [`GridMaze`].
///
/// Every cell starts as a passage; add walls with [`wall`][Self::wall].
/// Start and target default to `(0, 0)`.
///
/// ```rust,ignore
/// let maze = GridMazeBuilder::new(5, 5)
///     .wall(Position::new(3, 1))
///     .start(Position::new(2, 2))
///     .target(Position::new(4, 0))
///     .build()?;
/// ```
pub struct GridMazeBuilder {
    width:  u32,
    height: u32,
    walls:  Vec<Position>,
    start:  Position,
    target: Position,
}

impl GridMazeBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            walls:  Vec::new(),
            start:  Position::default(),
            target: Position::default(),
        }
    }

    pub fn wall(mut self, pos: Position) -> Self {
        self.walls.push(pos);
        self
    }

    pub fn start(mut self, pos: Position) -> Self {
        self.start = pos;
        self
    }

    pub fn target(mut self, pos: Position) -> Self {
        self.target = pos;
        self
    }

    /// Validate dimensions, walls, and endpoints, and return the maze.
    pub fn build(self) -> HostResult<GridMaze> {
        if self.width == 0 || self.height == 0 {
            return Err(HostError::EmptyMaze { width: self.width, height: self.height });
        }

        let mut maze = GridMaze {
            width:  self.width,
            height: self.height,
            cells:  vec![Cell::Passage; self.width as usize * self.height as usize],
            start:  self.start,
            target: self.target,
        };
        for pos in self.walls {
            maze.set_cell(pos, Cell::Wall)?;
        }

        maze.check_endpoint("start", self.start)?;
        maze.check_endpoint("target", self.target)?;
        Ok(maze)
    }
}
