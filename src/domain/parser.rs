//! Line parser for course files: `ID,Name[,Prereq1,Prereq2,...]`

use tracing::{debug, instrument};

use crate::domain::course::Course;
use crate::domain::error::DomainError;

/// Default field delimiter.
pub const DEFAULT_DELIMITER: char = ',';

/// Parses one line into a course candidate.
///
/// Returns `Ok(None)` for empty lines. Fields are the raw text between
/// delimiters: a trailing delimiter yields an empty prerequisite, which
/// then fails validation. One trailing `\r` is stripped.
/// `line_number` is 1-based and only used for error reporting.
pub fn parse_line(
    line: &str,
    line_number: usize,
    delimiter: char,
) -> Result<Option<Course>, DomainError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.is_empty() {
        return Ok(None);
    }

    let Some((id, rest)) = line.split_once(delimiter) else {
        return Err(DomainError::MalformedLine {
            line_number,
            line: line.to_string(),
        });
    };

    if id.is_empty() {
        return Err(DomainError::EmptyCourseId { line_number });
    }

    let course = match rest.split_once(delimiter) {
        Some((name, prerequisites)) => {
            Course::new(id, name).with_prerequisites(prerequisites.split(delimiter))
        }
        None => Course::new(id, rest),
    };
    Ok(Some(course))
}

/// Parses a whole file into the batch of candidate courses, in file order.
///
/// The first malformed line aborts the whole batch.
#[instrument(level = "debug", skip(content))]
pub fn parse_courses(content: &str, delimiter: char) -> Result<Vec<Course>, DomainError> {
    let mut candidates = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if let Some(course) = parse_line(line, i + 1, delimiter)? {
            candidates.push(course);
        }
    }
    debug!("parsed {} candidate courses", candidates.len());
    Ok(candidates)
}
