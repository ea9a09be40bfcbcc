//! Path management for the envelope tracker
//!
//! ## Path Resolution Order
//!
//! 1. `ENVELOPE_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory from `directories`
//!    (`~/.config/envelope-tracker` on Linux, `%APPDATA%\envelope-tracker` on Windows)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::EnvelopeError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "ENVELOPE_CLI_DATA_DIR";

/// Manages all paths used by the envelope tracker
#[derive(Debug, Clone)]
pub struct EnvelopePaths {
    /// Base directory for settings and the budget snapshot
    base_dir: PathBuf,
}

impl EnvelopePaths {
    /// Create a new EnvelopePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined for the
    /// current user and no override is set.
    pub fn new() -> Result<Self, EnvelopeError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create EnvelopePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Resolve the snapshot file name from settings against the base directory
    ///
    /// Absolute names are used as-is.
    pub fn snapshot_file(&self, file_name: &str) -> PathBuf {
        self.base_dir.join(file_name)
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), EnvelopeError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| EnvelopeError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if the tracker has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, EnvelopeError> {
    ProjectDirs::from("", "", "envelope-tracker")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| EnvelopeError::Config("Could not determine home directory".into()))
}
