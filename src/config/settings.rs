//! User settings for the envelope tracker
//!
//! Manages user preferences: display currency and date format, the snapshot
//! file name, and whether expenses must name an existing envelope.

use serde::{Deserialize, Serialize};

use super::paths::EnvelopePaths;
use crate::error::EnvelopeError;

/// User settings, stored as `config.json` in the base directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format for display (strftime format). Snapshots always use `%Y-%m-%d`.
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Reject expenses whose envelope does not exist
    #[serde(default)]
    pub strict_envelopes: bool,

    /// Snapshot file name, relative to the base directory
    #[serde(default = "default_snapshot_file")]
    pub snapshot_file: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_snapshot_file() -> String {
    "donnees_budget.json".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            strict_envelopes: false,
            snapshot_file: default_snapshot_file(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &EnvelopePaths) -> Result<Self, EnvelopeError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                EnvelopeError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                EnvelopeError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &EnvelopePaths) -> Result<(), EnvelopeError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            EnvelopeError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            EnvelopeError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
