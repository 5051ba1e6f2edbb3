//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::models::{SortKey, UnitCoverage};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Listing behaviour (sorting, time parsing).
    #[serde(default)]
    pub listing: ListingSettings,
}

/// Path configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSettings {
    /// Folder for log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,

    /// Directory the last job file was opened from.
    #[serde(default)]
    pub last_open_dir: String,
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            logs_folder: default_logs_folder(),
            last_open_dir: String::new(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level when RUST_LOG is not set.
    #[serde(default)]
    pub level: LogLevel,

    /// Also write logs to a daily file in the logs folder.
    #[serde(default = "default_true")]
    pub file_logging: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file_logging: true,
        }
    }
}

/// Listing behaviour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingSettings {
    /// Sort applied right after loading a file ("" keeps file order).
    #[serde(default)]
    pub default_sort: String,

    /// Time units recognized in the "Posted" field.
    #[serde(default)]
    pub posted_units: UnitCoverage,
}

impl ListingSettings {
    /// The configured default sort, if it names a known key.
    pub fn default_sort_key(&self) -> Option<SortKey> {
        if self.default_sort.is_empty() {
            return None;
        }
        let key = SortKey::from_name(&self.default_sort);
        if key.is_none() {
            tracing::warn!(
                "Ignoring unknown default_sort {:?} in config",
                self.default_sort
            );
        }
        key
    }
}

/// Names of config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    Paths,
    Logging,
    Listing,
}

impl ConfigSection {
    pub const ALL: [ConfigSection; 3] = [
        ConfigSection::Paths,
        ConfigSection::Logging,
        ConfigSection::Listing,
    ];

    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "paths",
            ConfigSection::Logging => "logging",
            ConfigSection::Listing => "listing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_serializes() {
        let settings = Settings::default();
        let toml = toml::to_string_pretty(&settings).unwrap();
        assert!(toml.contains("[paths]"));
        assert!(toml.contains("[listing]"));
        assert!(toml.contains("logs_folder"));
        assert!(toml.contains("posted_units = \"strict\""));
    }

    #[test]
    fn settings_round_trip() {
        let mut settings = Settings::default();
        settings.listing.default_sort = "posted-desc".to_string();
        let toml = toml::to_string_pretty(&settings).unwrap();
        let parsed: Settings = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let minimal = "[listing]\nposted_units = \"extended\"";
        let parsed: Settings = toml::from_str(minimal).unwrap();
        // Custom value preserved
        assert_eq!(parsed.listing.posted_units, UnitCoverage::Extended);
        // Defaults applied for missing
        assert_eq!(parsed.paths.logs_folder, ".logs");
        assert!(parsed.logging.file_logging);
    }

    #[test]
    fn default_sort_key_parsing() {
        let mut listing = ListingSettings::default();
        assert_eq!(listing.default_sort_key(), None);

        listing.default_sort = "title-desc".to_string();
        assert_eq!(listing.default_sort_key(), Some(SortKey::TitleDesc));

        listing.default_sort = "newest".to_string();
        assert_eq!(listing.default_sort_key(), None);
    }
}
