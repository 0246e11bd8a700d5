// errors.rs
use std::fmt;

/// Errors originating from either the front-desk logic
/// (validation, missing records, etc.) or downstream layers (DB).
#[derive(Debug)]
pub enum DeskError {
    NotFound,
    Invalid(String),
    DbError(String),
    InternalError,
}

// Type alias commonly used by store operations.
pub type DeskResult<T> = Result<T, DeskError>;

impl fmt::Display for DeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeskError::NotFound => write!(f, "Not Found"),
            DeskError::Invalid(msg) => write!(f, "Invalid Input: {msg}"),
            DeskError::DbError(msg) => write!(f, "Database Error: {msg}"),
            DeskError::InternalError => write!(f, "Internal Error"),
        }
    }
}

impl std::error::Error for DeskError {}
