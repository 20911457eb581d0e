//! Application-level errors.
//!
//! The tree engine itself is infallible: duplicate inserts and search misses
//! are absences, and every operation on an empty tree has a defined empty
//! result. Errors only arise at the CLI boundary (reading input, parsing
//! numbers, loading configuration).

use thiserror::Error;

use crate::exitcode;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a number: {0}")]
    InvalidNumber(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Exit code reported to the shell for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Io(_) => exitcode::IOERR,
            AppError::InvalidNumber(_) => exitcode::DATAERR,
            AppError::Config(_) => exitcode::CONFIG,
        }
    }
}
