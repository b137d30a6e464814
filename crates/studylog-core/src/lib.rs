//! # Studylog Core
//!
//! Core library for Studylog - a local-first tracker for study sessions and
//! study-related todo projects.
//!
//! This crate provides the domain model, storage abstraction, and ledger
//! logic independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **model**: Study sessions, topic payloads, todo projects and items
//! - **catalog**: Predefined topic catalogs (read-only)
//! - **storage**: Blob store trait and implementations
//! - **session**: Session ledger (record keeping + aggregate statistics)
//! - **todo**: Todo ledger (project/item CRUD + aggregate statistics)
//! - **import**: Markdown checklist parsing
//!
//! Both ledgers persist through the [`BlobStore`] trait: the full collection
//! is loaded, transformed in memory, and written back as one blob. There is no
//! record-level storage and no merge strategy; the last full snapshot wins.

pub mod catalog;
pub mod error;
pub mod import;
pub mod model;
pub mod session;
pub mod storage;
pub mod todo;

pub use error::{Result, StudyError};
pub use session::{SessionLedger, StudyStats};
pub use storage::BlobStore;
pub use todo::{TodoLedger, TodoStats};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
