//! I/O boundary traits for testability
//!
//! These traits abstract external I/O operations, allowing services
//! to be tested with in-memory implementations.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

// ============================================================
// IN-MEMORY IMPLEMENTATIONS
// ============================================================

/// Filesystem backed by a map of path to content.
#[derive(Debug, Default)]
pub struct InMemoryFileSystem {
    files: RwLock<HashMap<PathBuf, String>>,
}

impl InMemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file.
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        if let Ok(mut files) = self.files.write() {
            files.insert(path.into(), content.into());
        }
    }
}

impl FileSystem for InMemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let files = self
            .files
            .read()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
        files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_in_memory_file_when_reading_then_returns_content() {
        let fs = InMemoryFileSystem::new();
        fs.add_file("courses.txt", "CSCI100,Intro\n");

        assert_eq!(
            fs.read_to_string(Path::new("courses.txt")).unwrap(),
            "CSCI100,Intro\n"
        );
        assert_eq!(
            fs.read_to_string(Path::new("missing.txt"))
                .unwrap_err()
                .kind(),
            io::ErrorKind::NotFound
        );
    }
}
