//! Distinct values per filter dimension, used to populate dropdowns.

use std::collections::HashSet;

use crate::models::{Dimension, JobRecord};

/// Distinct values of `dimension`, in order of first appearance.
pub fn distinct_values(records: &[JobRecord], dimension: Dimension) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|r| r.dimension(dimension))
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// Distinct values for every dimension of a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub levels: Vec<String>,
    pub types: Vec<String>,
    pub skills: Vec<String>,
}

impl Facets {
    pub fn from_records(records: &[JobRecord]) -> Self {
        Self {
            levels: distinct_values(records, Dimension::Level),
            types: distinct_values(records, Dimension::Type),
            skills: distinct_values(records, Dimension::Skill),
        }
    }

    pub fn get(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::Level => &self.levels,
            Dimension::Type => &self.types,
            Dimension::Skill => &self.skills,
        }
    }
}
