//! Prerequisite validation over one load batch.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::domain::course::Course;

/// Candidate dropped because some prerequisites are not defined in the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedCourse {
    pub id: String,
    /// Prerequisite IDs not found among the batch's course IDs, in listed order
    pub missing: Vec<String>,
}

/// Result of validating a batch: admitted courses keep file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedBatch {
    pub admitted: Vec<Course>,
    pub rejected: Vec<RejectedCourse>,
}

/// Splits candidates into admitted and rejected.
///
/// The universe of known IDs is every candidate's ID, whether or not that
/// candidate is itself admitted. A course is admitted only if all of its
/// prerequisites are known.
#[instrument(level = "debug", skip(candidates), fields(count = candidates.len()))]
pub fn validate(candidates: Vec<Course>) -> ValidatedBatch {
    let known: HashSet<String> = candidates.iter().map(|c| c.id.clone()).collect();

    let mut batch = ValidatedBatch::default();
    for course in candidates {
        let missing: Vec<String> = course
            .prerequisites
            .iter()
            .filter(|p| !known.contains(p.as_str()))
            .cloned()
            .collect();

        if missing.is_empty() {
            batch.admitted.push(course);
        } else {
            debug!(id = %course.id, ?missing, "rejecting course");
            batch.rejected.push(RejectedCourse {
                id: course.id,
                missing,
            });
        }
    }
    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_prerequisite_defined_later_in_file_when_validating_then_admitted() {
        let candidates = vec![
            Course::new("CSCI200", "Data Structures").with_prerequisites(["CSCI100"]),
            Course::new("CSCI100", "Intro"),
        ];

        let batch = validate(candidates);

        assert!(batch.rejected.is_empty());
        let ids: Vec<&str> = batch.admitted.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["CSCI200", "CSCI100"]);
    }

    #[test]
    fn given_invalid_first_and_valid_last_prerequisite_when_validating_then_rejected() {
        let candidates = vec![
            Course::new("CSCI100", "Intro"),
            Course::new("CSCI300", "Algorithms").with_prerequisites(["CSCI999", "CSCI100"]),
        ];

        let batch = validate(candidates);

        assert_eq!(
            batch.rejected,
            vec![RejectedCourse {
                id: "CSCI300".into(),
                missing: vec!["CSCI999".into()],
            }]
        );
        assert_eq!(batch.admitted.len(), 1);
    }
}
