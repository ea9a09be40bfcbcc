//! Budget snapshot store
//!
//! Persists the whole [`BudgetState`] as a single JSON document. Loads are
//! all-or-nothing; saves replace the previous snapshot atomically.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::{EnvelopePaths, Settings};
use crate::error::{EnvelopeError, EnvelopeResult};
use crate::models::BudgetState;

use super::file_io::{move_aside, read_json, write_json_atomic};

/// Suffix given to a snapshot that could not be parsed
pub const CORRUPT_SUFFIX: &str = ".corrupt";

/// Durable whole-state snapshot of the budget
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Create a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the snapshot location named in settings
    pub fn from_settings(paths: &EnvelopePaths, settings: &Settings) -> Self {
        Self::new(paths.snapshot_file(&settings.snapshot_file))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the snapshot, failing soft
    ///
    /// A missing snapshot yields the empty default state. A snapshot that
    /// cannot be parsed is renamed with [`CORRUPT_SUFFIX`] so later saves
    /// don't overwrite it, and the empty default state is returned.
    /// Failures to read the snapshot, including a path that is not a regular
    /// file, are returned as errors and nothing is moved.
    pub fn load(&self) -> EnvelopeResult<BudgetState> {
        match self.load_strict() {
            Err(EnvelopeError::Json(reason)) => {
                let moved = move_aside(&self.path, CORRUPT_SUFFIX)?;
                warn!(
                    snapshot = %self.path.display(),
                    preserved_as = %moved.display(),
                    %reason,
                    "Snapshot is malformed, starting from an empty budget"
                );
                Ok(BudgetState::default())
            }
            other => other,
        }
    }

    /// Load the snapshot, surfacing malformed content as [`EnvelopeError::Json`]
    pub fn load_strict(&self) -> EnvelopeResult<BudgetState> {
        match read_json::<BudgetState, _>(&self.path)? {
            Some(state) => {
                debug!(
                    snapshot = %self.path.display(),
                    envelopes = state.envelopes.len(),
                    expenses = state.expenses.len(),
                    "Loaded budget snapshot"
                );
                Ok(state)
            }
            None => {
                debug!(snapshot = %self.path.display(), "No snapshot found, using empty budget");
                Ok(BudgetState::default())
            }
        }
    }

    /// Replace the snapshot with the given state
    pub fn save(&self, state: &BudgetState) -> EnvelopeResult<()> {
        write_json_atomic(&self.path, state)?;
        debug!(
            snapshot = %self.path.display(),
            envelopes = state.envelopes.len(),
            expenses = state.expenses.len(),
            "Saved budget snapshot"
        );
        Ok(())
    }
}
