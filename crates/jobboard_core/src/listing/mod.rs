//! Filtering, sorting and facet enumeration over job records.
//!
//! All functions here are pure: they take a slice of records and return a
//! new `Vec`, leaving the input untouched.
//!
//! # Example
//!
//! ```
//! use jobboard_core::listing::{filter, sort, Criteria, Criterion};
//! use jobboard_core::models::{JobRecord, SortKey};
//!
//! let jobs = vec![
//!     JobRecord::new("1", "B", "", "10 minutes ago", "", "Entry", "", "", ""),
//!     JobRecord::new("2", "A", "", "2 hours ago", "", "Intermediate", "", "", ""),
//! ];
//!
//! let newest = sort(&jobs, SortKey::PostedDesc);
//! assert_eq!(newest[0].title, "B");
//!
//! let entry = filter(&jobs, &Criteria::all().with_level(Criterion::exact("Entry")));
//! assert_eq!(entry.len(), 1);
//! ```

mod facets;
mod filter;
mod sort;

pub use facets::{distinct_values, Facets};
pub use filter::{filter, Criteria, Criterion, ALL_SENTINEL};
pub use sort::{compare_titles, sort, sort_by_name, sort_order};
