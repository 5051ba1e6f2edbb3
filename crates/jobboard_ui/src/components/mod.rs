//! View components for the main window.

pub mod detail_panel;
pub mod filter_bar;
pub mod job_list;

pub use filter_bar::FilterChoice;
