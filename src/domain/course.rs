//! Course record

use std::fmt;

/// One catalog entry: identifier, display name and prerequisite identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Course {
    /// Unique key, case-sensitive, ordered lexicographically
    pub id: String,
    /// Display name
    pub name: String,
    /// Prerequisite course IDs in file order (not deduplicated)
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            prerequisites: Vec::new(),
        }
    }

    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }

    /// Prerequisites joined for display, `None` when there are none.
    pub fn prerequisite_line(&self) -> Option<String> {
        if self.has_prerequisites() {
            Some(self.prerequisites.join(", "))
        } else {
            None
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.id, self.name)
    }
}
