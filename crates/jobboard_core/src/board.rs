//! Application state for a loaded set of job listings.
//!
//! `JobBoard` owns the current dataset together with the active filter,
//! sort and selection. The UI calls into it explicitly and renders
//! `visible()`; nothing here depends on a UI toolkit.

use std::path::Path;

use crate::ingest::{self, Dataset, IngestResult};
use crate::listing::{self, Criteria, Facets};
use crate::models::{JobRecord, SortKey, UnitCoverage};

/// Current listings plus the view applied to them.
#[derive(Debug, Default)]
pub struct JobBoard {
    /// Last successfully loaded dataset.
    dataset: Option<Dataset>,
    /// Active filter.
    criteria: Criteria,
    /// Active sort (`None` keeps file order).
    sort_key: Option<SortKey>,
    /// Filtered and sorted records, rebuilt on every change.
    visible: Vec<JobRecord>,
    /// Dataset position of each entry in `visible`.
    rows: Vec<usize>,
    /// Dataset position of the selected record.
    selected: Option<usize>,
    /// Time units accepted by subsequent loads.
    coverage: UnitCoverage,
}

impl JobBoard {
    pub fn new(coverage: UnitCoverage) -> Self {
        Self {
            coverage,
            ..Self::default()
        }
    }

    pub fn coverage(&self) -> UnitCoverage {
        self.coverage
    }

    /// Swap in a new dataset.
    ///
    /// Filters reset to "all" and the selection is cleared because the old
    /// values may not exist in the new data. The sort key is kept.
    pub fn replace(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
        self.criteria = Criteria::all();
        self.selected = None;
        self.refresh();
    }

    /// Parse `content` and replace the dataset. On error nothing changes.
    pub fn load_str(&mut self, content: &str, source: Option<&Path>) -> IngestResult<usize> {
        let dataset = ingest::load_str(content, source.map(Path::to_path_buf), self.coverage)?;
        let count = dataset.len();
        self.replace(dataset);
        Ok(count)
    }

    /// Read `path` and replace the dataset. On error nothing changes.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> IngestResult<usize> {
        let dataset = ingest::load_file(path, self.coverage)?;
        let count = dataset.len();
        self.replace(dataset);
        Ok(count)
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    /// All loaded records in file order.
    pub fn records(&self) -> &[JobRecord] {
        self.dataset
            .as_ref()
            .map(|d| d.records.as_slice())
            .unwrap_or_default()
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: Criteria) {
        self.criteria = criteria;
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.set_criteria(Criteria::all());
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort_key
    }

    pub fn set_sort(&mut self, sort_key: Option<SortKey>) {
        self.sort_key = sort_key;
        self.refresh();
    }

    /// Records after filter and sort.
    pub fn visible(&self) -> &[JobRecord] {
        &self.visible
    }

    /// Distinct level/type/skill values across the whole dataset.
    pub fn facets(&self) -> Facets {
        Facets::from_records(self.records())
    }

    /// Select a record by its index in `visible()`.
    pub fn select(&mut self, index: usize) -> Option<&JobRecord> {
        self.selected = self.rows.get(index).copied();
        self.selected()
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Index in `visible()` of the selected record.
    pub fn selected_index(&self) -> Option<usize> {
        let position = self.selected?;
        self.rows.iter().position(|&row| row == position)
    }

    pub fn selected(&self) -> Option<&JobRecord> {
        self.selected_index().and_then(|i| self.visible.get(i))
    }

    /// Detail text of the selected record.
    pub fn selected_details(&self) -> Option<String> {
        self.selected().map(JobRecord::format_details)
    }

    /// One-line description of what is shown.
    pub fn summary(&self) -> String {
        match &self.dataset {
            None => "No file loaded".to_string(),
            Some(d) => format!(
                "Showing {} of {} jobs from {}",
                self.visible.len(),
                d.len(),
                d.source_name()
            ),
        }
    }

    /// Rebuild `visible`. The selection stays on the same dataset entry
    /// while it is shown and is dropped once filtered out.
    fn refresh(&mut self) {
        let records = self.records();

        let accepted: Vec<usize> = (0..records.len())
            .filter(|&i| self.criteria.accepts(&records[i]))
            .collect();
        let filtered = listing::filter(records, &self.criteria);

        let rows: Vec<usize> = match self.sort_key {
            Some(key) => listing::sort_order(&filtered, key)
                .into_iter()
                .map(|j| accepted[j])
                .collect(),
            None => accepted,
        };
        let visible: Vec<JobRecord> = rows.iter().map(|&i| records[i].clone()).collect();

        self.rows = rows;
        self.visible = visible;
        if let Some(position) = self.selected {
            if !self.rows.contains(&position) {
                self.selected = None;
            }
        }
    }
}
