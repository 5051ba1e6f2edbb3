//! Filter records by level, type and skill.

use serde::{Deserialize, Serialize};

use crate::models::{Dimension, JobRecord};

/// Selection value meaning "do not constrain this dimension".
pub const ALL_SENTINEL: &str = "all";

/// Constraint on a single dimension.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Criterion {
    #[default]
    All,
    /// Case-sensitive exact match.
    Exact(String),
}

impl Criterion {
    pub fn exact(value: impl Into<String>) -> Self {
        Criterion::Exact(value.into())
    }

    /// Interpret a dropdown selection; `"all"` is the unconstrained sentinel.
    pub fn from_selection(selection: &str) -> Self {
        if selection == ALL_SENTINEL {
            Criterion::All
        } else {
            Criterion::Exact(selection.to_string())
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Criterion::All => true,
            Criterion::Exact(expected) => expected == value,
        }
    }
}

/// Active filter selection across all dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Criteria {
    pub level: Criterion,
    pub job_type: Criterion,
    pub skill: Criterion,
}

impl Criteria {
    /// Criteria that accept every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Build from three dropdown selections (level, type, skill).
    pub fn from_selections(level: &str, job_type: &str, skill: &str) -> Self {
        Self {
            level: Criterion::from_selection(level),
            job_type: Criterion::from_selection(job_type),
            skill: Criterion::from_selection(skill),
        }
    }

    pub fn with_level(mut self, criterion: Criterion) -> Self {
        self.level = criterion;
        self
    }

    pub fn with_type(mut self, criterion: Criterion) -> Self {
        self.job_type = criterion;
        self
    }

    pub fn with_skill(mut self, criterion: Criterion) -> Self {
        self.skill = criterion;
        self
    }

    pub fn get(&self, dimension: Dimension) -> &Criterion {
        match dimension {
            Dimension::Level => &self.level,
            Dimension::Type => &self.job_type,
            Dimension::Skill => &self.skill,
        }
    }

    pub fn set(&mut self, dimension: Dimension, criterion: Criterion) {
        match dimension {
            Dimension::Level => self.level = criterion,
            Dimension::Type => self.job_type = criterion,
            Dimension::Skill => self.skill = criterion,
        }
    }

    /// True when no dimension is constrained.
    pub fn is_unconstrained(&self) -> bool {
        Dimension::ALL
            .iter()
            .all(|d| *self.get(*d) == Criterion::All)
    }

    pub fn accepts(&self, record: &JobRecord) -> bool {
        Dimension::ALL
            .iter()
            .all(|d| self.get(*d).matches(record.dimension(*d)))
    }
}

/// Records accepted by `criteria`, in input order.
pub fn filter(records: &[JobRecord], criteria: &Criteria) -> Vec<JobRecord> {
    let result: Vec<JobRecord> = records
        .iter()
        .filter(|r| criteria.accepts(r))
        .cloned()
        .collect();

    tracing::debug!(
        "Filter kept {} of {} records ({:?})",
        result.len(),
        records.len(),
        criteria
    );
    result
}
