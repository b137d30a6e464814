//! JSON-file-backed blob store.
//!
//! Each key maps to `<dir>/<key>.json`. Writes go through a uniquely named
//! temp file, are synced, and land with an atomic rename so a crash mid-write
//! never leaves a truncated collection behind.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use super::traits::BlobStore;
use crate::error::{Result, StudyError};

/// Blob store persisting each key as a JSON file in a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            StudyError::Storage(format!(
                "Failed to create data directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        Ok(Self { dir })
    }

    /// The directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn blob_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn write_atomic(path: &Path, data: &str) -> Result<()> {
        let parent = path
            .parent()
            .ok_or_else(|| StudyError::Storage("Invalid blob path".to_string()))?;

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| StudyError::Storage(format!("System time error: {}", e)))?
            .as_nanos();
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| StudyError::Storage("Invalid blob filename".to_string()))?;
        let temp_path = parent.join(format!("{}.{}.tmp", filename, nanos));

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)
            .map_err(|e| StudyError::Storage(format!("Temp file create failed: {}", e)))?;
        file.write_all(data.as_bytes())
            .map_err(|e| StudyError::Storage(format!("Temp file write failed: {}", e)))?;
        file.sync_all()
            .map_err(|e| StudyError::Storage(format!("Temp file sync failed: {}", e)))?;

        rename_with_fallback(&temp_path, path)
            .map_err(|e| StudyError::Storage(format!("Atomic rename failed: {}", e)))?;

        Ok(())
    }
}

impl BlobStore for JsonFileStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StudyError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn store(&self, key: &str, raw: &str) -> Result<()> {
        Self::write_atomic(&self.blob_path(key), raw)
    }
}

/// Atomically rename a file, with a fallback for platforms where rename fails
/// if the target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails when the
/// destination already exists; remove the destination first and retry. The
/// temp file is cleaned up when the rename ultimately fails.
fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}
