//! Filter, sort and selection handlers.

use jobboard_core::listing::Criteria;
use jobboard_core::models::Dimension;

use crate::app::App;
use crate::components::FilterChoice;

impl App {
    /// Remember a dropdown change; applied on "Filter".
    pub fn handle_filter_changed(&mut self, dimension: Dimension, choice: FilterChoice) {
        match dimension {
            Dimension::Level => self.level_choice = choice,
            Dimension::Type => self.type_choice = choice,
            Dimension::Skill => self.skill_choice = choice,
        }
    }

    /// Apply the three dropdown selections to the board.
    pub fn apply_filter(&mut self) {
        let mut criteria = Criteria::all();
        for dimension in Dimension::ALL {
            criteria.set(dimension, self.pending_filter(dimension).to_criterion());
        }

        self.board.set_criteria(criteria);
        let summary = self.board.summary();
        self.set_status(summary);
    }

    pub fn clear_filters(&mut self) {
        self.reset_filter_choices();
        self.board.clear_filters();
        let summary = self.board.summary();
        self.set_status(summary);
    }

    /// Apply the selected sort order.
    pub fn apply_sort(&mut self) {
        let Some(key) = self.pending_sort else {
            return;
        };
        self.board.set_sort(Some(key));
        self.set_status(format!("{} - sorted by {}", self.board.summary(), key));
    }

    pub fn select_job(&mut self, idx: usize) {
        if self.board.select(idx).is_none() {
            tracing::debug!("Ignoring selection of row {} (out of range)", idx);
        }
    }

    pub fn reset_filter_choices(&mut self) {
        self.level_choice = FilterChoice::All;
        self.type_choice = FilterChoice::All;
        self.skill_choice = FilterChoice::All;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use jobboard_core::config::ConfigManager;
    use jobboard_core::ingest;
    use jobboard_core::models::{SortKey, UnitCoverage};
    use tempfile::tempdir;

    use super::*;
    use crate::app::Message;

    const JOBS: &str = r#"[
        {"Job No": 1, "Title": "B", "Posted": "10 minutes ago", "Level": "Entry", "Skill": "Rust"},
        {"Job No": 2, "Title": "A", "Posted": "2 hours ago", "Level": "Intermediate", "Skill": "Go"},
        {"Job No": 3, "Title": "C", "Posted": "5 minutes ago", "Level": "Entry", "Skill": "Go"}
    ]"#;

    fn app_with_jobs(dir: &std::path::Path) -> App {
        let config = Arc::new(Mutex::new(ConfigManager::new(dir.join("settings.toml"))));
        let mut app = App::new(config);
        let file = dir.join("jobs.json");
        let dataset = ingest::load_str(JOBS, Some(file.clone()), UnitCoverage::Strict).unwrap();
        let _ = app.update(Message::FileLoaded(Some((file, Ok(dataset)))));
        app
    }

    fn titles(app: &App) -> Vec<String> {
        app.board.visible().iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn dropdown_change_applies_only_on_filter() {
        let dir = tempdir().unwrap();
        let mut app = app_with_jobs(dir.path());

        let _ = app.update(Message::FilterChanged(
            Dimension::Level,
            FilterChoice::Value("Entry".to_string()),
        ));
        assert_eq!(titles(&app), vec!["B", "A", "C"]);

        let _ = app.update(Message::ApplyFilter);
        assert_eq!(titles(&app), vec!["B", "C"]);
        assert_eq!(app.status_text, "Showing 2 of 3 jobs from jobs.json");
    }

    #[test]
    fn sort_composes_with_filter() {
        let dir = tempdir().unwrap();
        let mut app = app_with_jobs(dir.path());

        let _ = app.update(Message::FilterChanged(
            Dimension::Skill,
            FilterChoice::Value("Go".to_string()),
        ));
        let _ = app.update(Message::ApplyFilter);
        let _ = app.update(Message::SortChanged(SortKey::PostedDesc));
        let _ = app.update(Message::ApplySort);
        assert_eq!(titles(&app), vec!["C", "A"]);

        let _ = app.update(Message::ClearFilters);
        assert_eq!(titles(&app), vec!["C", "B", "A"]);
        assert_eq!(app.pending_filter(Dimension::Skill), &FilterChoice::All);
    }

    #[test]
    fn empty_filter_result_is_not_an_error() {
        let dir = tempdir().unwrap();
        let mut app = app_with_jobs(dir.path());

        let _ = app.update(Message::FilterChanged(
            Dimension::Level,
            FilterChoice::Value("Expert".to_string()),
        ));
        let _ = app.update(Message::ApplyFilter);
        assert!(app.board.visible().is_empty());
        assert!(!app.status_is_error);
    }

    #[test]
    fn selecting_shows_details() {
        let dir = tempdir().unwrap();
        let mut app = app_with_jobs(dir.path());

        let _ = app.update(Message::JobSelected(1));
        let details = app.board.selected_details().unwrap();
        assert!(details.starts_with("Job No: 2\nTitle: A\n"));

        let _ = app.update(Message::CloseDetails);
        assert!(app.board.selected().is_none());
    }
}
