use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortvecError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("index {index} out of range for buffer of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("allocation failed: {0}")]
    Alloc(#[from] TryReserveError),

    #[error("capacity overflow")]
    CapacityOverflow,

    #[error("options {0} and {1} cannot be used together")]
    ConflictingOptions(&'static str, &'static str),

    #[error("no record matches '{0}'")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, SortvecError>;
