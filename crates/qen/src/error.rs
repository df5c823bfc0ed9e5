//! Error types for qen operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QenError {
    #[error("Invalid Date")]
    InvalidDate,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unrepresentable date: {0}")]
    UnrepresentableDate(String),

    #[error("Invalid unit: {0}")]
    InvalidUnit(String),

    #[error("Calendar mismatch: {0}")]
    CalendarMismatch(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, QenError>;
