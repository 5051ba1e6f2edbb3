//! Core enums used throughout the application.

use serde::{Deserialize, Serialize};

/// Ordering applied to a list of job records.
///
/// The posted-time names describe recency, not numeric direction:
/// `PostedDesc` is newest first (fewest minutes), `PostedAsc` oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "title-asc")]
    TitleAsc,
    #[serde(rename = "title-desc")]
    TitleDesc,
    #[serde(rename = "posted-desc")]
    PostedDesc,
    #[serde(rename = "posted-asc")]
    PostedAsc,
}

impl SortKey {
    /// All keys in menu order.
    pub const ALL: [SortKey; 4] = [
        SortKey::TitleAsc,
        SortKey::TitleDesc,
        SortKey::PostedDesc,
        SortKey::PostedAsc,
    ];

    /// Wire name used in config files and option values.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
            SortKey::PostedDesc => "posted-desc",
            SortKey::PostedAsc => "posted-asc",
        }
    }

    /// Look up a key by wire name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == name)
    }

    /// Human-readable label for menus.
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::TitleAsc => "Title (A-Z)",
            SortKey::TitleDesc => "Title (Z-A)",
            SortKey::PostedDesc => "Posted (newest first)",
            SortKey::PostedAsc => "Posted (oldest first)",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Categorical field a listing can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Level,
    Type,
    Skill,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Level, Dimension::Type, Dimension::Skill];
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Level => write!(f, "Level"),
            Dimension::Type => write!(f, "Type"),
            Dimension::Skill => write!(f, "Skill"),
        }
    }
}

/// Which time units the posted-time normalizer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCoverage {
    /// Minutes and hours only.
    #[default]
    Strict,
    /// Minutes, hours, days and weeks.
    Extended,
}

impl std::fmt::Display for UnitCoverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnitCoverage::Strict => write!(f, "strict"),
            UnitCoverage::Extended => write!(f, "extended"),
        }
    }
}
