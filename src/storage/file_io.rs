//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::EnvelopeError;

/// Read JSON from a file, returning `None` if the file doesn't exist
///
/// Only malformed content is reported as [`EnvelopeError::Json`]. Failures to
/// open or read the file, including a path that is not a regular file, are
/// [`EnvelopeError::Storage`].
pub fn read_json<T, P>(path: P) -> Result<Option<T>, EnvelopeError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(EnvelopeError::Storage(format!(
                "Failed to open {}: {}",
                path.display(),
                e
            )))
        }
    };

    let is_file = file
        .metadata()
        .map_err(|e| EnvelopeError::Storage(format!("Failed to stat {}: {}", path.display(), e)))?
        .is_file();
    if !is_file {
        return Err(EnvelopeError::Storage(format!(
            "{} is not a regular file",
            path.display()
        )));
    }

    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map(Some).map_err(|e| {
        if e.is_io() {
            EnvelopeError::Storage(format!("Failed to read {}: {}", path.display(), e))
        } else {
            EnvelopeError::Json(format!("Failed to parse {}: {}", path.display(), e))
        }
    })
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at all,
/// preventing corruption on crashes or power failures.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), EnvelopeError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            EnvelopeError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = with_suffix(path, ".tmp");

    if let Err(e) = write_temp(&temp_path, data) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        EnvelopeError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

fn write_temp<T: Serialize>(temp_path: &Path, data: &T) -> Result<(), EnvelopeError> {
    let file = File::create(temp_path)
        .map_err(|e| EnvelopeError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| EnvelopeError::Storage(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| EnvelopeError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| EnvelopeError::Storage(format!("Failed to sync data: {}", e)))
}

/// Move a file aside by appending `suffix` to its name
///
/// Only regular files are moved. An existing file at the destination is
/// replaced. Returns the new path.
pub fn move_aside<P: AsRef<Path>>(path: P, suffix: &str) -> Result<PathBuf, EnvelopeError> {
    let path = path.as_ref();
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| EnvelopeError::Storage(format!("Failed to stat {}: {}", path.display(), e)))?;
    if !metadata.is_file() {
        return Err(EnvelopeError::Storage(format!(
            "Refusing to move {}: not a regular file",
            path.display()
        )));
    }

    let target = with_suffix(path, suffix);

    fs::rename(path, &target).map_err(|e| {
        EnvelopeError::Storage(format!(
            "Failed to move {} to {}: {}",
            path.display(),
            target.display(),
            e
        ))
    })?;

    Ok(target)
}

/// Append `suffix` to the full file name (`budget.json` -> `budget.json.tmp`)
pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct TestData {
        name: String,
        value: i32,
    }

    fn sample() -> TestData {
        TestData {
            name: "test".to_string(),
            value: 42,
        }
    }

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        let data: Option<TestData> = read_json(&path).unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(path.exists());

        let loaded: Option<TestData> = read_json(&path).unwrap();
        assert_eq!(loaded, Some(sample()));
    }

    #[test]
    fn test_read_malformed_is_json_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "not json at all").unwrap();

        let err = read_json::<TestData, _>(&path).unwrap_err();
        assert!(matches!(err, EnvelopeError::Json(_)));
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");
        let temp_path = temp_dir.path().join("test.json.tmp");

        write_json_atomic(&path, &sample()).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_replaces_previous_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        let newer = TestData {
            name: "newer".into(),
            value: 7,
        };
        write_json_atomic(&path, &newer).unwrap();

        let loaded: Option<TestData> = read_json(&path).unwrap();
        assert_eq!(loaded, Some(newer));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.json");

        write_json_atomic(&path, &sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_move_aside() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snap.json");
        fs::write(&path, "garbage").unwrap();

        let moved = move_aside(&path, ".corrupt").unwrap();

        assert_eq!(moved, temp_dir.path().join("snap.json.corrupt"));
        assert!(!path.exists());
        assert_eq!(fs::read_to_string(moved).unwrap(), "garbage");
    }

    #[test]
    fn test_read_directory_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("folder.json");
        fs::create_dir(&dir).unwrap();

        let err = read_json::<TestData, _>(&dir).unwrap_err();
        assert!(matches!(err, EnvelopeError::Storage(_)));
    }

    #[test]
    fn test_move_aside_refuses_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("folder");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("keep.txt"), "important").unwrap();

        assert!(move_aside(&dir, ".corrupt").is_err());
        assert!(dir.join("keep.txt").exists());
        assert!(!temp_dir.path().join("folder.corrupt").exists());
    }

    #[test]
    fn test_with_suffix_without_extension() {
        let path = Path::new("/tmp/snapshot");
        assert_eq!(with_suffix(path, ".tmp"), PathBuf::from("/tmp/snapshot.tmp"));
    }
}
