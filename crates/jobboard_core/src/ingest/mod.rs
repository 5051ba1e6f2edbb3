//! Ingestion of job listing files.
//!
//! This module provides:
//! - `parse_jobs`: JSON text to job records
//! - `load_file`: read and parse a file into a `Dataset`
//! - `ingest`: build records from already-parsed entries
//!
//! A file that is not a JSON array of objects is rejected as a whole.
//! A record whose posted time cannot be normalized is kept and logged.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::models::{JobRecord, PostedTime, RawJob, UnitCoverage};

/// Errors that can occur while loading a listings file.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to read job file: {0}")]
    Read(#[from] io::Error),

    #[error("Invalid JSON file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for ingestion.
pub type IngestResult<T> = Result<T, IngestError>;

/// Records produced by one successful load.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Records in file order.
    pub records: Vec<JobRecord>,
    /// File the records came from, if any.
    pub source: Option<PathBuf>,
    /// When the load completed.
    pub loaded_at: DateTime<Local>,
}

impl Dataset {
    pub fn new(records: Vec<JobRecord>, source: Option<PathBuf>) -> Self {
        Self {
            records,
            source,
            loaded_at: Local::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records whose posted time could not be normalized.
    pub fn unknown_posted_count(&self) -> usize {
        self.records.iter().filter(|r| !r.posted.is_known()).count()
    }

    /// Short name of the source for display.
    pub fn source_name(&self) -> String {
        self.source
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "(inline)".to_string())
    }
}

/// Build records from parsed file entries.
pub fn ingest(raw: Vec<RawJob>, coverage: UnitCoverage) -> Vec<JobRecord> {
    raw.into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            let record = JobRecord::from_raw(entry, coverage);
            if let PostedTime::Unknown(ref e) = record.posted {
                tracing::warn!(
                    "Job {} ({:?}) at index {}: {}",
                    record.job_number,
                    record.title,
                    idx,
                    e
                );
            }
            record
        })
        .collect()
}

/// Parse listings JSON text into records.
pub fn parse_jobs(content: &str, coverage: UnitCoverage) -> IngestResult<Vec<JobRecord>> {
    let raw: Vec<RawJob> = serde_json::from_str(content)?;
    Ok(ingest(raw, coverage))
}

/// Read and parse a listings file.
pub fn load_file(path: impl AsRef<Path>, coverage: UnitCoverage) -> IngestResult<Dataset> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dataset = load_str(&content, Some(path.to_path_buf()), coverage)?;
    Ok(dataset)
}

/// Parse already-read file content into a dataset.
///
/// Used by callers that read the file themselves (e.g. asynchronously).
pub fn load_str(
    content: &str,
    source: Option<PathBuf>,
    coverage: UnitCoverage,
) -> IngestResult<Dataset> {
    let records = parse_jobs(content, coverage)?;
    let dataset = Dataset::new(records, source);

    tracing::info!(
        "Loaded {} jobs from {} ({} with unknown posted time)",
        dataset.len(),
        dataset.source_name(),
        dataset.unknown_posted_count()
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"[
        {"Job No": 1, "Title": "B", "Job Page Link": "https://example.com/1",
         "Posted": "10 minutes ago", "Type": "Full-time", "Level": "Entry",
         "Estimated Time": "1 month", "Skill": "Rust", "Detail": "first"},
        {"Job No": "2", "Title": "A", "Job Page Link": "https://example.com/2",
         "Posted": "2 hours ago", "Type": "Contract", "Level": "Intermediate",
         "Estimated Time": "2 weeks", "Skill": "Go", "Detail": "second"},
        {"Job No": 3, "Title": "C", "Posted": "4 days ago"}
    ]"#;

    #[test]
    fn parses_records_in_file_order() {
        crate::logging::init_test_tracing();

        let jobs = parse_jobs(SAMPLE, UnitCoverage::Strict).unwrap();
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].title, "B");
        assert_eq!(jobs[0].posted_minutes(), Some(10));
        assert_eq!(jobs[1].job_number.to_string(), "2");
        assert_eq!(jobs[1].posted_minutes(), Some(120));
        assert_eq!(jobs[2].posted_minutes(), None);
        assert_eq!(jobs[2].level, "");
    }

    #[test]
    fn coverage_applies_to_every_record() {
        let jobs = parse_jobs(SAMPLE, UnitCoverage::Extended).unwrap();
        assert_eq!(jobs[2].posted_minutes(), Some(4 * 1440));
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(matches!(
            parse_jobs("{not json", UnitCoverage::Strict),
            Err(IngestError::Parse(_))
        ));
    }

    #[test]
    fn non_array_is_rejected() {
        assert!(matches!(
            parse_jobs(r#"{"Title": "solo"}"#, UnitCoverage::Strict),
            Err(IngestError::Parse(_))
        ));
        assert!(matches!(
            parse_jobs(r#"["just a string"]"#, UnitCoverage::Strict),
            Err(IngestError::Parse(_))
        ));
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(parse_jobs("[]", UnitCoverage::Strict).unwrap().is_empty());
    }

    #[test]
    fn load_file_reads_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jobs.json");
        fs::write(&path, SAMPLE).unwrap();

        let dataset = load_file(&path, UnitCoverage::Strict).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.unknown_posted_count(), 1);
        assert_eq!(dataset.source_name(), "jobs.json");
        assert_eq!(dataset.source.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn load_file_missing_is_read_error() {
        let dir = tempdir().unwrap();
        let result = load_file(dir.path().join("absent.json"), UnitCoverage::Strict);
        assert!(matches!(result, Err(IngestError::Read(_))));
    }
}
