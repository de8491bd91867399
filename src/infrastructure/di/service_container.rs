//! Service container for dependency injection
//!
//! Wires up all services with their dependencies.

use std::sync::Arc;

use crate::application::services::CatalogLoader;
use crate::config::Settings;
use crate::infrastructure::traits::{FileSystem, RealFileSystem};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Course file loader
    pub loader: CatalogLoader,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        Self::with_deps(settings, Arc::new(RealFileSystem))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(settings: Settings, fs: Arc<dyn FileSystem>) -> Self {
        let settings = Arc::new(settings);
        let loader = CatalogLoader::new(fs, settings.delimiter);

        Self { settings, loader }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::traits::InMemoryFileSystem;
    use std::path::Path;

    #[test]
    fn given_injected_fs_and_delimiter_when_loading_then_loader_uses_both() {
        let fs = InMemoryFileSystem::new();
        fs.add_file("courses.txt", "CS100;Intro\nCS200;Data Structures;CS100\n");
        let settings = Settings {
            delimiter: ';',
            ..Settings::default()
        };

        let container = ServiceContainer::with_deps(settings, Arc::new(fs));
        let (catalog, report) = container.loader.load(Path::new("courses.txt")).unwrap();

        assert_eq!(report.admitted, 2);
        assert_eq!(catalog.search("CS200").unwrap().prerequisites, vec!["CS100"]);
        assert_eq!(container.settings.delimiter, ';');
    }
}
