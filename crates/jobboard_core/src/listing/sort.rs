//! Sort records by title or posting age.
//!
//! Sorting always works on a copy and is stable: records with equal keys
//! keep their relative input order.

use std::cmp::Ordering;

use feruca::Collator;

use crate::models::{JobRecord, SortKey};

/// Sorted copy of `records`.
pub fn sort(records: &[JobRecord], key: SortKey) -> Vec<JobRecord> {
    let sorted: Vec<JobRecord> = sort_order(records, key)
        .into_iter()
        .map(|i| records[i].clone())
        .collect();

    tracing::debug!("Sorted {} records by {}", sorted.len(), key.as_str());
    sorted
}

/// Positions of `records` in sorted order.
///
/// Lets callers that track records by position (duplicates included)
/// follow them through a sort.
pub fn sort_order(records: &[JobRecord], key: SortKey) -> Vec<usize> {
    let mut order: Vec<usize> = (0..records.len()).collect();
    let mut collator = Collator::default();
    let title = |i: usize| records[i].title.as_str();
    let posted = |i: usize| records[i].posted_minutes();

    // `sort_by` is a stable merge sort.
    match key {
        SortKey::TitleAsc => order.sort_by(|&a, &b| collator.collate(title(a), title(b))),
        SortKey::TitleDesc => order.sort_by(|&a, &b| collator.collate(title(b), title(a))),
        SortKey::PostedDesc => order.sort_by(|&a, &b| compare_posted(posted(a), posted(b), false)),
        SortKey::PostedAsc => order.sort_by(|&a, &b| compare_posted(posted(a), posted(b), true)),
    }

    order
}

/// Sorted copy using a wire name (`"title-asc"`, ...).
///
/// An unrecognized name leaves the copy in input order.
pub fn sort_by_name(records: &[JobRecord], name: &str) -> Vec<JobRecord> {
    match SortKey::from_name(name) {
        Some(key) => sort(records, key),
        None => {
            tracing::debug!("Unknown sort key {:?}, keeping input order", name);
            records.to_vec()
        }
    }
}

/// Unknown posting ages go last in either direction.
fn compare_posted(a: Option<u64>, b: Option<u64>, oldest_first: bool) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            if oldest_first {
                b.cmp(&a)
            } else {
                a.cmp(&b)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compare titles in Unicode collation order (CLDR root locale).
///
/// Accents and case are secondary and tertiary differences, so "Éditeur"
/// sorts between "Analyst" and "Zoologist" and "apple" precedes "Apple".
/// Titles that collate equal fall back to byte order.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    Collator::default().collate(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, posted: &str) -> JobRecord {
        JobRecord::new(title, title, "", posted, "", "", "", "", "")
    }

    fn titles(records: &[JobRecord]) -> Vec<&str> {
        records.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn title_ascending_and_descending_are_reverses() {
        let jobs = vec![
            job("Pilot", "1 minute ago"),
            job("analyst", "1 minute ago"),
            job("Zoologist", "1 minute ago"),
            job("Baker", "1 minute ago"),
        ];

        let asc = sort(&jobs, SortKey::TitleAsc);
        assert_eq!(titles(&asc), vec!["analyst", "Baker", "Pilot", "Zoologist"]);

        let mut desc = sort(&jobs, SortKey::TitleDesc);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn posted_desc_is_newest_first() {
        let jobs = vec![
            job("A", "2 hours ago"),
            job("B", "10 minutes ago"),
            job("C", "1 hour ago"),
        ];
        let sorted = sort(&jobs, SortKey::PostedDesc);
        assert_eq!(titles(&sorted), vec!["B", "C", "A"]);
    }

    #[test]
    fn posted_asc_is_oldest_first() {
        let jobs = vec![
            job("A", "2 hours ago"),
            job("B", "10 minutes ago"),
            job("C", "1 hour ago"),
        ];
        let sorted = sort(&jobs, SortKey::PostedAsc);
        assert_eq!(titles(&sorted), vec!["A", "C", "B"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let jobs = vec![
            job("first", "60 minutes ago"),
            job("second", "1 hour ago"),
            job("third", "30 minutes ago"),
            job("fourth", "60 minutes"),
        ];
        let newest = sort(&jobs, SortKey::PostedDesc);
        assert_eq!(titles(&newest), vec!["third", "first", "second", "fourth"]);

        let oldest = sort(&jobs, SortKey::PostedAsc);
        assert_eq!(titles(&oldest), vec!["first", "second", "fourth", "third"]);

        let same_title = vec![
            JobRecord::new("1", "Tester", "", "", "", "", "", "", ""),
            JobRecord::new("2", "Tester", "", "", "", "", "", "", ""),
        ];
        let sorted = sort(&same_title, SortKey::TitleDesc);
        assert_eq!(sorted[0].job_number.to_string(), "1");
    }

    #[test]
    fn unknown_posted_times_sort_last_both_ways() {
        let jobs = vec![
            job("stale", "3 days ago"),
            job("old", "5 hours ago"),
            job("broken", "soon"),
            job("new", "5 minutes ago"),
        ];
        assert_eq!(
            titles(&sort(&jobs, SortKey::PostedDesc)),
            vec!["new", "old", "stale", "broken"]
        );
        assert_eq!(
            titles(&sort(&jobs, SortKey::PostedAsc)),
            vec!["old", "new", "stale", "broken"]
        );
    }

    #[test]
    fn unknown_name_keeps_order() {
        let jobs = vec![job("B", "1 hour ago"), job("A", "2 hours ago")];
        assert_eq!(sort_by_name(&jobs, "salary"), jobs);
        assert_eq!(titles(&sort_by_name(&jobs, "title-asc")), vec!["A", "B"]);
    }

    #[test]
    fn sort_order_is_a_stable_permutation() {
        let jobs = vec![
            job("B", "1 hour ago"),
            job("A", "2 hours ago"),
            job("B", "1 hour ago"),
        ];
        assert_eq!(sort_order(&jobs, SortKey::TitleAsc), vec![1, 0, 2]);
        assert_eq!(sort_order(&jobs, SortKey::TitleDesc), vec![0, 2, 1]);
        assert_eq!(sort_order(&jobs, SortKey::PostedAsc), vec![1, 0, 2]);
        assert!(sort_order(&[], SortKey::TitleAsc).is_empty());
    }

    #[test]
    fn sort_does_not_mutate_input() {
        let jobs = vec![job("B", "1 hour ago"), job("A", "2 hours ago")];
        let before = jobs.clone();
        let _ = sort(&jobs, SortKey::TitleAsc);
        assert_eq!(jobs, before);
    }

    #[test]
    fn scenario_from_two_listings() {
        let jobs = vec![
            JobRecord::new("1", "B", "", "10 minutes ago", "", "Entry", "", "", ""),
            JobRecord::new("2", "A", "", "2 hours ago", "", "Intermediate", "", "", ""),
        ];
        assert_eq!(titles(&sort(&jobs, SortKey::PostedDesc)), vec!["B", "A"]);
    }

    #[test]
    fn title_collation_rules() {
        assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_titles("apple", "Apple"), Ordering::Less);
        assert_eq!(compare_titles("Apple", "apple"), Ordering::Greater);
        assert_eq!(compare_titles("Same", "Same"), Ordering::Equal);
        assert_eq!(compare_titles("Dev", "Developer"), Ordering::Less);
    }

    #[test]
    fn accented_titles_sort_with_their_base_letter() {
        let jobs = vec![
            job("Zoologist", "1 minute ago"),
            job("Éditeur", "1 minute ago"),
            job("Analyst", "1 minute ago"),
            job("Ölmaler", "1 minute ago"),
            job("editor", "1 minute ago"),
        ];

        let asc = sort(&jobs, SortKey::TitleAsc);
        assert_eq!(
            titles(&asc),
            vec!["Analyst", "Éditeur", "editor", "Ölmaler", "Zoologist"]
        );

        let desc = sort(&jobs, SortKey::TitleDesc);
        assert_eq!(
            titles(&desc),
            vec!["Zoologist", "Ölmaler", "editor", "Éditeur", "Analyst"]
        );
    }

    #[test]
    fn non_latin_titles_follow_latin_ones() {
        assert_eq!(compare_titles("Zoologist", "Инженер"), Ordering::Less);
        assert_eq!(compare_titles("Éditeur", "Zoologist"), Ordering::Less);
        assert_eq!(compare_titles("résumé", "resume"), Ordering::Greater);
    }
}
