//! Relative posting-age normalization.
//!
//! Listings carry their age as a short phrase such as `"5 minutes ago"` or
//! `"3 hours ago"`. This module turns that phrase into whole minutes so the
//! listings can be ordered by recency.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::enums::UnitCoverage;

const MINUTES_PER_HOUR: u64 = 60;
const MINUTES_PER_DAY: u64 = 24 * MINUTES_PER_HOUR;
const MINUTES_PER_WEEK: u64 = 7 * MINUTES_PER_DAY;

/// Why a posted-time string could not be turned into minutes.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostedTimeError {
    #[error("posted time is empty")]
    Empty,

    #[error("posted time has no unit: {0:?}")]
    MissingUnit(String),

    #[error("posted time magnitude is not a number: {0:?}")]
    InvalidMagnitude(String),

    #[error("unrecognized posted time unit: {0:?}")]
    UnrecognizedUnit(String),
}

/// Normalized posting age of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostedTime {
    /// Minutes since the listing was posted.
    Minutes(u64),
    /// The raw string could not be normalized.
    Unknown(PostedTimeError),
}

impl PostedTime {
    /// Normalize a raw string using the given unit coverage.
    pub fn parse(raw: &str, coverage: UnitCoverage) -> Self {
        match normalize_with(raw, coverage) {
            Ok(minutes) => Self::Minutes(minutes),
            Err(e) => Self::Unknown(e),
        }
    }

    /// Minutes since posting, if known.
    pub fn minutes(&self) -> Option<u64> {
        match self {
            Self::Minutes(m) => Some(*m),
            Self::Unknown(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Minutes(_))
    }
}

impl fmt::Display for PostedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minutes(m) => write!(f, "{} min", m),
            Self::Unknown(_) => write!(f, "unknown"),
        }
    }
}

/// Normalize a `"<n> <unit>"` string to minutes, recognizing minutes and hours.
pub fn normalize(raw: &str) -> Result<u64, PostedTimeError> {
    normalize_with(raw, UnitCoverage::Strict)
}

/// Normalize a `"<n> <unit>"` string to minutes.
///
/// The first whitespace-separated token is the magnitude, the second the
/// unit; anything after (usually `"ago"`) is ignored. Units are matched by
/// substring so singular and plural forms both resolve.
pub fn normalize_with(raw: &str, coverage: UnitCoverage) -> Result<u64, PostedTimeError> {
    let mut tokens = raw.split_whitespace();

    let magnitude_token = tokens.next().ok_or(PostedTimeError::Empty)?;
    let unit = tokens
        .next()
        .ok_or_else(|| PostedTimeError::MissingUnit(raw.to_string()))?;

    let magnitude = parse_magnitude(magnitude_token)?;

    let factor = unit_factor(unit, coverage)
        .ok_or_else(|| PostedTimeError::UnrecognizedUnit(unit.to_string()))?;

    magnitude
        .checked_mul(factor)
        .ok_or_else(|| PostedTimeError::InvalidMagnitude(magnitude_token.to_string()))
}

/// Parse the leading decimal digits of a token ("5", "+5", "12m" -> 12).
fn parse_magnitude(token: &str) -> Result<u64, PostedTimeError> {
    let unsigned = token.strip_prefix('+').unwrap_or(token);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];

    if digits.is_empty() {
        return Err(PostedTimeError::InvalidMagnitude(token.to_string()));
    }

    digits
        .parse::<u64>()
        .map_err(|_| PostedTimeError::InvalidMagnitude(token.to_string()))
}

/// Minutes per unit, checked in order: minute before hour.
fn unit_factor(unit: &str, coverage: UnitCoverage) -> Option<u64> {
    if unit.contains("minute") {
        return Some(1);
    }
    if unit.contains("hour") {
        return Some(MINUTES_PER_HOUR);
    }

    match coverage {
        UnitCoverage::Strict => None,
        UnitCoverage::Extended => {
            if unit.contains("day") {
                Some(MINUTES_PER_DAY)
            } else if unit.contains("week") {
                Some(MINUTES_PER_WEEK)
            } else {
                None
            }
        }
    }
}
