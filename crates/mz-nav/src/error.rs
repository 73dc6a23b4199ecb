use thiserror::Error;

use mz_core::MzError;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("controller is not bound to a robot")]
    Unbound,

    #[error(transparent)]
    Core(#[from] MzError),
}

pub type NavResult<T> = Result<T, NavError>;
