//! Main application module for Job Board Viewer.
//!
//! Holds the application state, the message enum and the top-level
//! `update`/`view` functions. Handlers live in `crate::handlers`.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length, Task};

use jobboard_core::board::JobBoard;
use jobboard_core::config::ConfigManager;
use jobboard_core::ingest::Dataset;
use jobboard_core::listing::Facets;
use jobboard_core::models::{Dimension, SortKey};

use crate::components::{detail_panel, filter_bar, job_list, FilterChoice};
use crate::theme::{colors, font, spacing};

/// All possible messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    // File loading
    OpenFile,
    /// Result of the file dialog + read + parse task. `None` when cancelled.
    FileLoaded(Option<(PathBuf, Result<Dataset, String>)>),
    /// Result of writing settings to disk.
    SettingsSaved(Result<(), String>),

    // Filtering
    FilterChanged(Dimension, FilterChoice),
    ApplyFilter,
    ClearFilters,

    // Sorting
    SortChanged(SortKey),
    ApplySort,

    // Selection
    JobSelected(usize),
    CloseDetails,
}

/// Main application state.
pub struct App {
    pub config: Arc<Mutex<ConfigManager>>,
    pub board: JobBoard,

    /// Dropdown values for the loaded dataset.
    pub facets: Facets,
    /// Dropdown selections not yet applied with "Filter".
    pub level_choice: FilterChoice,
    pub type_choice: FilterChoice,
    pub skill_choice: FilterChoice,
    /// Sort selection not yet applied with "Sort".
    pub pending_sort: Option<SortKey>,

    pub status_text: String,
    pub status_is_error: bool,
    pub is_loading: bool,
}

impl App {
    pub fn new(config: Arc<Mutex<ConfigManager>>) -> Self {
        let listing = match config.lock() {
            Ok(cfg) => cfg.settings().listing.clone(),
            Err(e) => {
                tracing::warn!("Config lock poisoned, using default listing settings: {}", e);
                Default::default()
            }
        };

        let mut board = JobBoard::new(listing.posted_units);
        let default_sort = listing.default_sort_key();
        board.set_sort(default_sort);

        tracing::debug!(
            "Board ready (posted units: {}, default sort: {:?})",
            listing.posted_units,
            default_sort
        );

        Self {
            config,
            board,
            facets: Facets::default(),
            level_choice: FilterChoice::All,
            type_choice: FilterChoice::All,
            skill_choice: FilterChoice::All,
            pending_sort: default_sort,
            status_text: "Open a JSON file of job listings to begin.".to_string(),
            status_is_error: false,
            is_loading: false,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenFile => return self.open_file(),
            Message::FileLoaded(result) => return self.handle_file_loaded(result),
            Message::SettingsSaved(result) => self.handle_settings_saved(result),

            Message::FilterChanged(dimension, choice) => {
                self.handle_filter_changed(dimension, choice)
            }
            Message::ApplyFilter => self.apply_filter(),
            Message::ClearFilters => self.clear_filters(),

            Message::SortChanged(key) => self.pending_sort = Some(key),
            Message::ApplySort => self.apply_sort(),

            Message::JobSelected(idx) => self.select_job(idx),
            Message::CloseDetails => self.board.clear_selection(),
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let open_label = if self.is_loading {
            "Loading..."
        } else {
            "Open JSON..."
        };

        let header = row![
            text("Job Board Viewer").size(font::HEADER),
            Space::new().width(Length::Fill),
            button(text(open_label).size(font::NORMAL))
                .on_press_maybe((!self.is_loading).then_some(Message::OpenFile)),
        ]
        .align_y(Alignment::Center);

        let status_color = if self.status_is_error {
            colors::ERROR
        } else {
            colors::TEXT_SECONDARY
        };

        let content = column![
            header,
            filter_bar::filters(self),
            filter_bar::sorting(self),
            text(self.status_text.as_str())
                .size(font::SM)
                .color(status_color),
            row![
                job_list::view(self.board.visible(), self.board.selected_index()),
                detail_panel::view(self.board.selected()),
            ]
            .spacing(spacing::MD)
            .height(Length::Fill),
        ]
        .spacing(spacing::MD)
        .padding(spacing::LG);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Dropdown selection for a dimension.
    pub fn pending_filter(&self, dimension: Dimension) -> &FilterChoice {
        match dimension {
            Dimension::Level => &self.level_choice,
            Dimension::Type => &self.type_choice,
            Dimension::Skill => &self.skill_choice,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_text = message.into();
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_text = message.into();
        self.status_is_error = true;
    }
}
