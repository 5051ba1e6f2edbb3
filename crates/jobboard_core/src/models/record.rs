//! Job record: one immutable listing with its normalized posting age.

use serde::{Deserialize, Serialize};

use super::enums::{Dimension, UnitCoverage};
use super::posted::PostedTime;
use super::raw::{JobNumber, RawJob};

/// A single job listing.
///
/// Built once per ingestion and never mutated afterwards; the posted-time
/// string is normalized at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
    pub job_number: JobNumber,
    pub title: String,
    /// Listing URL. Displayed only, never fetched.
    pub job_page_link: String,
    /// Posted-time string as it appeared in the file.
    pub posted_raw: String,
    pub posted: PostedTime,
    pub job_type: String,
    pub level: String,
    pub estimated_time: String,
    pub skill: String,
    pub detail: String,
}

impl JobRecord {
    /// Build a record from the nine raw field values.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        job_number: impl Into<JobNumber>,
        title: impl Into<String>,
        job_page_link: impl Into<String>,
        posted: impl Into<String>,
        job_type: impl Into<String>,
        level: impl Into<String>,
        estimated_time: impl Into<String>,
        skill: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::from_raw(
            RawJob {
                job_number: job_number.into(),
                title: title.into(),
                job_page_link: job_page_link.into(),
                posted: posted.into(),
                job_type: job_type.into(),
                level: level.into(),
                estimated_time: estimated_time.into(),
                skill: skill.into(),
                detail: detail.into(),
            },
            UnitCoverage::Strict,
        )
    }

    /// Build a record from a parsed file entry.
    pub fn from_raw(raw: RawJob, coverage: UnitCoverage) -> Self {
        let posted = PostedTime::parse(&raw.posted, coverage);
        Self {
            job_number: raw.job_number,
            title: raw.title,
            job_page_link: raw.job_page_link,
            posted_raw: raw.posted,
            posted,
            job_type: raw.job_type,
            level: raw.level,
            estimated_time: raw.estimated_time,
            skill: raw.skill,
            detail: raw.detail,
        }
    }

    /// Minutes since posting, if the posted string could be normalized.
    pub fn posted_minutes(&self) -> Option<u64> {
        self.posted.minutes()
    }

    /// Value of a filter dimension.
    pub fn dimension(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Level => &self.level,
            Dimension::Type => &self.job_type,
            Dimension::Skill => &self.skill,
        }
    }

    /// Multi-line detail view shown when a listing is selected.
    pub fn format_details(&self) -> String {
        format!(
            "Job No: {}\nTitle: {}\nType: {}\nLevel: {}\nSkill: {}\nDetail: {}",
            self.job_number, self.title, self.job_type, self.level, self.skill, self.detail
        )
    }
}
