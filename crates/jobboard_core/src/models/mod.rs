//! Data models for Job Board Viewer.
//!
//! This module contains the core data structures:
//! - `PostedTime` and the relative-time normalizer
//! - `JobRecord`, one immutable job listing
//! - `RawJob`, the wire shape of one entry in the input file
//! - Enums for sort keys, filter dimensions and unit coverage

mod enums;
mod posted;
mod raw;
mod record;

// Re-export all public types
pub use enums::{Dimension, SortKey, UnitCoverage};
pub use posted::{normalize, normalize_with, PostedTime, PostedTimeError};
pub use raw::{JobNumber, RawJob};
pub use record::JobRecord;
