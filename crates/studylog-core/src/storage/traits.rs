//! Blob store trait definition.
//!
//! The `BlobStore` trait is the seam both ledgers persist through. A backend
//! only has to offer whole-blob get/set under a namespaced key; everything
//! else (serialization, recovery from unreadable blobs) is ledger policy.

use crate::error::Result;

/// Durable key-value storage for serialized record collections.
///
/// Implementations must overwrite atomically enough that a reader never sees
/// a half-written blob, but are not required to coordinate concurrent
/// writers: the last full snapshot wins.
pub trait BlobStore: Send + Sync {
    /// Load the blob stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the blob stored under `key`.
    fn store(&self, key: &str, raw: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_definition_compiles() {
        // Ensures the trait stays usable as a bound.
        fn _accepts_blob_store<S: BlobStore>(_store: S) {}
    }
}
