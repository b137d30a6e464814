//! In-memory blob store.
//!
//! Backs tests and ephemeral usage. Clones share the same underlying map, so
//! two ledgers can be pointed at one store instance.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::traits::BlobStore;
use crate::error::{Result, StudyError};

/// Blob store keeping everything in a shared in-memory map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blobs: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let blobs = self
            .blobs
            .lock()
            .map_err(|_| StudyError::Storage("Blob map poisoned".to_string()))?;
        Ok(blobs.get(key).cloned())
    }

    fn store(&self, key: &str, raw: &str) -> Result<()> {
        let mut blobs = self
            .blobs
            .lock()
            .map_err(|_| StudyError::Storage("Blob map poisoned".to_string()))?;
        blobs.insert(key.to_string(), raw.to_string());
        Ok(())
    }
}
