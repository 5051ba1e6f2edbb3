//! Job Board Viewer - Main entry point
//!
//! This is the application entry point using iced. It handles:
//! - Configuration loading
//! - Application-level logging initialization
//! - Application launch

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use iced::Size;

use jobboard_core::config::ConfigManager;
use jobboard_core::logging::{init_tracing, init_tracing_with_file};

mod app;
mod components;
mod handlers;
mod theme;

use app::App;

/// Default config path: .config/settings.toml (relative to current working directory)
fn default_config_path() -> PathBuf {
    PathBuf::from(".config").join("settings.toml")
}

fn main() -> iced::Result {
    // Load configuration first (needed for logs directory path)
    let config_path = default_config_path();
    let mut config_manager = ConfigManager::new(&config_path);

    if let Err(e) = config_manager.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }

    let logging = config_manager.settings().logging.clone();
    let _log_guard = if logging.file_logging {
        init_tracing_with_file(logging.level, config_manager.logs_folder())
    } else {
        init_tracing(logging.level);
        None
    };

    tracing::info!("Job Board Viewer starting");
    tracing::info!("Config: {}", config_path.display());
    tracing::info!("Core version: {}", jobboard_core::version());

    let config = Arc::new(Mutex::new(config_manager));

    iced::application(move || App::new(config.clone()), App::update, App::view)
        .title("Job Board Viewer")
        .window_size(Size::new(1100.0, 720.0))
        .run()
}
