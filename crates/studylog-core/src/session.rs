//! Session ledger: study-session records and derived statistics.

use chrono::Utc;
use log::{debug, warn};
use serde::Serialize;
use uuid::Uuid;

use crate::error::Result;
use crate::model::{NewSession, StudyCategory, StudySession};
use crate::storage::BlobStore;

/// Storage namespace for the session collection.
pub const SESSIONS_KEY: &str = "study_sessions";

/// Ledger over the study-session collection.
///
/// Every mutation loads the full collection, transforms it in memory, and
/// writes the full collection back. Operations referencing an unknown id are
/// silent no-ops.
pub struct SessionLedger<S> {
    store: S,
}

impl<S: BlobStore> SessionLedger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All sessions, newest first.
    pub fn sessions(&self) -> Result<Vec<StudySession>> {
        self.load()
    }

    /// Log a new session.
    ///
    /// Assigns the id and creation time, prepends the record so the list stays
    /// newest-first, persists, and returns the created record.
    pub fn add(&self, draft: NewSession) -> Result<StudySession> {
        let session = StudySession {
            id: Uuid::now_v7(),
            title: draft.title,
            category: draft.category,
            topic: draft.topic,
            duration: draft.duration,
            completed: false,
            resources: draft.resources,
            created_at: Utc::now(),
        };

        let mut sessions = self.load()?;
        sessions.insert(0, session.clone());
        self.persist(&sessions)?;

        Ok(session)
    }

    /// Flip the completion flag on the matching session.
    ///
    /// Unknown ids are a silent no-op; nothing is persisted in that case.
    pub fn toggle(&self, id: Uuid) -> Result<()> {
        let mut sessions = self.load()?;
        if let Some(session) = sessions.iter_mut().find(|s| s.id == id) {
            session.completed = !session.completed;
            self.persist(&sessions)?;
        }
        Ok(())
    }

    /// Remove the matching session. Unknown ids are a no-op.
    pub fn delete(&self, id: Uuid) -> Result<()> {
        let mut sessions = self.load()?;
        sessions.retain(|s| s.id != id);
        self.persist(&sessions)
    }

    /// Aggregate statistics over the current collection.
    pub fn stats(&self) -> Result<StudyStats> {
        let sessions = self.load()?;

        let mut stats = StudyStats::default();
        for session in &sessions {
            let bucket = match session.category {
                StudyCategory::Linux => &mut stats.linux,
                StudyCategory::Programming => &mut stats.programming,
                StudyCategory::DataAnalysis => &mut stats.data_analysis,
            };
            bucket.minutes += u64::from(session.duration);
            bucket.sessions += 1;

            let name = session.topic.display_name();
            if !bucket.topics.iter().any(|topic| topic == name) {
                bucket.topics.push(name.to_string());
            }

            if session.completed {
                stats.completed_sessions += 1;
            }
        }
        stats.total_sessions = sessions.len();

        Ok(stats)
    }

    fn load(&self) -> Result<Vec<StudySession>> {
        let raw = match self.store.load(SESSIONS_KEY)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_str(&raw) {
            Ok(sessions) => Ok(sessions),
            Err(e) => {
                // Unreadable state recovers as empty rather than failing.
                warn!("stored session collection is unreadable, starting empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    fn persist(&self, sessions: &[StudySession]) -> Result<()> {
        let raw = serde_json::to_string(sessions)?;
        self.store.store(SESSIONS_KEY, &raw)?;
        debug!("persisted {} study sessions", sessions.len());
        Ok(())
    }
}

/// Per-category aggregate bucket.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryStats {
    /// Summed session duration, in minutes
    pub minutes: u64,

    /// Number of sessions
    pub sessions: usize,

    /// Distinct topic display names, first-seen order
    pub topics: Vec<String>,
}

/// Aggregate statistics over the session collection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StudyStats {
    pub linux: CategoryStats,
    pub programming: CategoryStats,
    pub data_analysis: CategoryStats,

    /// Session count across all categories
    pub total_sessions: usize,

    /// Completed-session count across all categories
    pub completed_sessions: usize,
}

impl StudyStats {
    /// Bucket for a category.
    pub fn category(&self, category: StudyCategory) -> &CategoryStats {
        match category {
            StudyCategory::Linux => &self.linux,
            StudyCategory::Programming => &self.programming,
            StudyCategory::DataAnalysis => &self.data_analysis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::model::Topic;
    use crate::storage::MemoryStore;

    fn linux_draft(title: &str, distro: &str, duration: u32) -> NewSession {
        let distro = catalog::find_distro(distro).expect("catalog distro").clone();
        NewSession::new(title, StudyCategory::Linux, Topic::Linux(distro), duration)
    }

    #[test]
    fn test_malformed_blob_loads_as_empty() {
        let store = MemoryStore::new();
        store.store(SESSIONS_KEY, "{not json").unwrap();

        let ledger = SessionLedger::new(store);
        assert!(ledger.sessions().unwrap().is_empty());
    }

    #[test]
    fn test_add_persists_and_survives_reload() {
        let store = MemoryStore::new();
        let ledger = SessionLedger::new(store.clone());
        ledger.add(linux_draft("pipes", "Ubuntu", 30)).unwrap();

        // A second ledger over the same store sees the record.
        let reread = SessionLedger::new(store);
        let sessions = reread.sessions().unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].title, "pipes");
        assert!(!sessions[0].completed);
    }
}
