//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `MzError` as one variant
//! via `#[from]`.

use thiserror::Error;

/// The top-level error type for `mz-core`.
#[derive(Debug, Error)]
pub enum MzError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `mz-core`.
pub type MzResult<T> = Result<T, MzError>;
