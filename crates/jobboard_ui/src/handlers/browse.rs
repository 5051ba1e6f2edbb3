//! File browsing and loading handlers.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use iced::Task;

use jobboard_core::config::{ConfigManager, ConfigSection};
use jobboard_core::ingest::{self, Dataset};
use jobboard_core::models::UnitCoverage;

use crate::app::{App, Message};

impl App {
    /// Pick a JSON file, then read and parse it off the UI thread.
    pub fn open_file(&mut self) -> Task<Message> {
        let start_dir = self.last_open_dir();
        let coverage = self.board.coverage();
        self.is_loading = true;

        Task::perform(
            async move {
                let mut dialog = rfd::AsyncFileDialog::new()
                    .set_title("Select Job Listings File")
                    .add_filter("JSON Files", &["json"])
                    .add_filter("All Files", &["*"]);
                if let Some(dir) = start_dir {
                    dialog = dialog.set_directory(dir);
                }

                let path = dialog.pick_file().await.map(|f| f.path().to_path_buf())?;
                let result = read_dataset(&path, coverage).await;
                Some((path, result))
            },
            Message::FileLoaded,
        )
    }

    /// Apply the outcome of `open_file`.
    ///
    /// Only a successful parse replaces the board; on failure the previous
    /// listings stay on screen.
    pub fn handle_file_loaded(
        &mut self,
        result: Option<(PathBuf, Result<Dataset, String>)>,
    ) -> Task<Message> {
        self.is_loading = false;

        let Some((path, result)) = result else {
            tracing::debug!("File selection cancelled");
            return Task::none();
        };

        match result {
            Ok(dataset) => {
                let loaded_at = dataset.loaded_at.format("%H:%M:%S").to_string();
                let count = dataset.len();
                let unknown = dataset.unknown_posted_count();
                let empty = dataset.is_empty();

                self.board.replace(dataset);
                self.facets = self.board.facets();
                self.reset_filter_choices();

                let mut status = if empty {
                    format!("{} contains no job listings", path.display())
                } else {
                    format!("Loaded {} jobs from {} at {}", count, path.display(), loaded_at)
                };
                if unknown > 0 {
                    status.push_str(&format!(
                        " ({} with unrecognized posted time, sorted last)",
                        unknown
                    ));
                }
                self.set_status(status);
                self.remember_open_dir(&path)
            }
            Err(e) => {
                tracing::error!("Failed to load {}: {}", path.display(), e);
                self.set_error(e);
                Task::none()
            }
        }
    }

    pub fn handle_settings_saved(&mut self, result: Result<(), String>) {
        if let Err(e) = result {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }

    fn last_open_dir(&self) -> Option<PathBuf> {
        let cfg = self.config.lock().ok()?;
        let dir = &cfg.settings().paths.last_open_dir;
        if dir.is_empty() {
            None
        } else {
            Some(PathBuf::from(dir))
        }
    }

    /// Record the directory in memory now; the file write runs as a task.
    fn remember_open_dir(&mut self, file: &Path) -> Task<Message> {
        let Some(dir) = file.parent() else {
            return Task::none();
        };

        match self.config.lock() {
            Ok(mut cfg) => {
                cfg.settings_mut().paths.last_open_dir = dir.to_string_lossy().to_string();
            }
            Err(e) => {
                tracing::warn!("Config lock poisoned: {}", e);
                return Task::none();
            }
        }

        let config = Arc::clone(&self.config);
        Task::perform(
            save_section(config, ConfigSection::Paths),
            Message::SettingsSaved,
        )
    }
}

/// Write one config section to disk.
async fn save_section(
    config: Arc<Mutex<ConfigManager>>,
    section: ConfigSection,
) -> Result<(), String> {
    let mut cfg = config
        .lock()
        .map_err(|e| format!("Config lock poisoned: {}", e))?;
    cfg.update_section(section).map_err(|e| e.to_string())
}

/// Read and parse a listings file; errors are flattened to display text.
async fn read_dataset(path: &Path, coverage: UnitCoverage) -> Result<Dataset, String> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ingest::IngestError::from(e).to_string())?;

    ingest::load_str(&content, Some(path.to_path_buf()), coverage).map_err(|e| e.to_string())
}
