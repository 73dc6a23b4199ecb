//! Host error type.

use thiserror::Error;

use mz_core::Position;

/// Errors produced while building or editing a `GridMaze`.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("cell {pos} is outside the {width}x{height} maze")]
    OutOfBounds { pos: Position, width: u32, height: u32 },

    #[error("maze must be at least 1x1, got {width}x{height}")]
    EmptyMaze { width: u32, height: u32 },

    #[error("maze layout error on line {line}: {reason}")]
    Layout { line: usize, reason: String },

    #[error("{what} cell {pos} is a wall")]
    BlockedEndpoint { what: &'static str, pos: Position },

    #[error("maze layout has no {0} marker")]
    MissingEndpoint(&'static str),
}

pub type HostResult<T> = Result<T, HostError>;
