//! Storage layer for the envelope tracker
//!
//! Provides JSON file storage with atomic writes and the snapshot store that
//! persists the whole budget state.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_json, write_json_atomic};
pub use snapshot::SnapshotStore;
