//! Error types for the semestra ecosystem.

use thiserror::Error;

/// Errors that can occur in semestra operations.
#[derive(Error, Debug)]
pub enum SemestraError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Semester not found: {0}")]
    SemesterNotFound(i64),

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Class not found: {0}")]
    ClassNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for semestra operations.
pub type SemestraResult<T> = Result<T, SemestraError>;
