//! Storage layer: blob store contract and implementations.
//!
//! Each collection lives under its own namespaced key and is written as a
//! single serialized blob. The backends make no promise beyond
//! last-write-wins.

mod json_file;
mod memory;
mod traits;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::BlobStore;
