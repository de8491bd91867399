//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent catalog input violations.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("Error in file format!! line {line_number} has no delimiter: {line:?}")]
    MalformedLine { line_number: usize, line: String },

    #[error("Error in file format!! line {line_number} has an empty course ID")]
    EmptyCourseId { line_number: usize },
}
