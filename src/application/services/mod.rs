//! Application services

pub mod loader;

pub use loader::{CatalogLoader, LoadReport};
