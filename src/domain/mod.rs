//! Domain layer: course records, the ordered catalog and input parsing
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod batch;
pub mod catalog;
pub mod course;
pub mod error;
pub mod parser;

pub use batch::{validate, RejectedCourse, ValidatedBatch};
pub use catalog::{Catalog, CatalogNode, InOrderIterator};
pub use course::Course;
pub use error::DomainError;
pub use parser::{parse_courses, parse_line, DEFAULT_DELIMITER};

/// Expand `~`, `$VAR` and `${VAR}` in a path-like string.
/// Falls back to the input unchanged when a variable is undefined.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
