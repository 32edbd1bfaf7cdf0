//! Error types

use thiserror::Error;

/// Raised when a candidate variable name fails the admission rules on the
/// write path. Carries the violated rule as a human-readable reason; the
/// caller decides whether to abort the write.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Variable name is over 256 characters")]
    TooLong,

    #[error("Variable name must contain at least one non-slash character")]
    NoContent,

    /// The leftover characters are reported verbatim, in input order.
    #[error("Variable name contains disallowed characters - {0}")]
    DisallowedCharacters(String),
}

/// Crate-level error type
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
