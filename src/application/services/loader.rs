//! Catalog loading service
//!
//! Reads a course file, parses the whole batch, validates prerequisites
//! against the batch and inserts the admitted courses into a catalog.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::application::{ApplicationResult, IoResultExt};
use crate::domain::{parse_courses, validate, Catalog, RejectedCourse};
use crate::infrastructure::traits::FileSystem;

/// Outcome of a successful load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of courses inserted into the catalog
    pub admitted: usize,
    /// Courses skipped because of unknown prerequisites, in file order
    pub rejected: Vec<RejectedCourse>,
}

/// Service loading course files into a [`Catalog`].
pub struct CatalogLoader {
    fs: Arc<dyn FileSystem>,
    delimiter: char,
}

impl CatalogLoader {
    /// Create a new loader.
    pub fn new(fs: Arc<dyn FileSystem>, delimiter: char) -> Self {
        Self { fs, delimiter }
    }

    /// Load the courses in `path` into `catalog`.
    ///
    /// The catalog is only touched after the whole file has been read and
    /// parsed: an unreadable file or a malformed line leaves it unchanged.
    /// Courses with unknown prerequisites are skipped and listed in the report.
    #[instrument(level = "debug", skip(self, catalog))]
    pub fn load_into(&self, path: &Path, catalog: &mut Catalog) -> ApplicationResult<LoadReport> {
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("Unable to open file", path)?;
        debug!("read {} bytes from {}", content.len(), path.display());

        let candidates = parse_courses(&content, self.delimiter)?;
        let batch = validate(candidates);

        let admitted = batch.admitted.len();
        for course in batch.admitted {
            catalog.insert(course);
        }
        for rejected in &batch.rejected {
            warn!(id = %rejected.id, missing = ?rejected.missing, "course has unknown prerequisites");
        }
        info!(
            "loaded {} courses from {} ({} rejected)",
            admitted,
            path.display(),
            batch.rejected.len()
        );

        Ok(LoadReport {
            admitted,
            rejected: batch.rejected,
        })
    }

    /// Build a fresh catalog from `path`.
    pub fn load(&self, path: &Path) -> ApplicationResult<(Catalog, LoadReport)> {
        let mut catalog = Catalog::new();
        let report = self.load_into(path, &mut catalog)?;
        Ok((catalog, report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::domain::{Course, DomainError, DEFAULT_DELIMITER};
    use crate::infrastructure::traits::InMemoryFileSystem;

    fn loader_with(path: &str, content: &str) -> CatalogLoader {
        let fs = InMemoryFileSystem::new();
        fs.add_file(path, content);
        CatalogLoader::new(Arc::new(fs), DEFAULT_DELIMITER)
    }

    #[test]
    fn given_malformed_line_when_loading_into_existing_catalog_then_catalog_unchanged() {
        let loader = loader_with("courses.txt", "CSCI100,Intro\nbroken line\n");
        let mut catalog = Catalog::new();
        catalog.insert(Course::new("MATH100", "Calculus"));

        let result = loader.load_into(Path::new("courses.txt"), &mut catalog);

        assert!(matches!(
            result,
            Err(ApplicationError::Domain(DomainError::MalformedLine { line_number: 2, .. }))
        ));
        assert_eq!(catalog.len(), 1);
        assert!(catalog.search("CSCI100").is_none());
    }

    #[test]
    fn given_missing_file_when_loading_then_operation_failed() {
        let loader = loader_with("courses.txt", "CSCI100,Intro\n");

        let result = loader.load(Path::new("other.txt"));

        assert!(matches!(
            result,
            Err(ApplicationError::OperationFailed { .. })
        ));
    }

    #[test]
    fn given_rejected_course_when_loading_then_reported_and_others_admitted() {
        let loader = loader_with(
            "courses.txt",
            "CSCI100,Intro\nCSCI200,Data Structures,CSCI999\nCSCI300,Algorithms,CSCI100\n",
        );

        let (catalog, report) = loader.load(Path::new("courses.txt")).unwrap();

        assert_eq!(report.admitted, 2);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].id, "CSCI200");
        assert!(catalog.search("CSCI200").is_none());
        assert!(catalog.search("CSCI300").is_some());
    }
}
