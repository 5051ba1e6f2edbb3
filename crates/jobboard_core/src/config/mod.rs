//! Configuration management for Job Board Viewer.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Validation on load with automatic defaults
//!
//! # Example
//!
//! ```no_run
//! use jobboard_core::config::{ConfigManager, ConfigSection};
//!
//! // Create manager and load (or create default) config
//! let mut config = ConfigManager::new(".config/settings.toml");
//! config.load_or_create().unwrap();
//!
//! // Read settings
//! println!("Logs folder: {}", config.settings().paths.logs_folder);
//!
//! // Remember where the last file came from
//! config.settings_mut().paths.last_open_dir = "/home/me/jobs".to_string();
//!
//! // Save just the paths section atomically
//! config.update_section(ConfigSection::Paths).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, ListingSettings, LoggingSettings, PathSettings, Settings};
