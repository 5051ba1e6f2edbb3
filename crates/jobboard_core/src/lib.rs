//! Job Board Core - Backend logic for Job Board Viewer
//!
//! This crate contains all business logic with zero UI dependencies:
//! loading a JSON file of job listings, normalizing posting ages,
//! filtering by level/type/skill and sorting by title or posting age.

pub mod board;
pub mod config;
pub mod ingest;
pub mod listing;
pub mod logging;
pub mod models;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
