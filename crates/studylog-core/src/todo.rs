//! Todo ledger: projects, items, statistics, and markdown import.

use chrono::Utc;
use log::{debug, warn};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{Result, StudyError};
use crate::import::parse_checklist;
use crate::model::{
    NewProject, NewTodoItem, ProjectPatch, StudyCategory, TodoItem, TodoProject,
};
use crate::storage::BlobStore;

/// Storage namespace for the todo-project collection.
pub const TODOS_KEY: &str = "todo_projects";

/// Ledger over the todo-project collection.
///
/// Projects exclusively own their items; deleting a project discards them.
/// As with the session ledger, every mutation is a full read-modify-write of
/// the collection, and operations referencing unknown ids are silent no-ops.
pub struct TodoLedger<S> {
    store: S,
}

impl<S: BlobStore> TodoLedger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All projects, newest first.
    pub fn projects(&self) -> Result<Vec<TodoProject>> {
        self.load()
    }

    /// Create a project with no items, prepend it, persist, and return it.
    pub fn create_project(&self, draft: NewProject) -> Result<TodoProject> {
        let now = Utc::now();
        let project = TodoProject {
            id: Uuid::now_v7(),
            name: draft.name,
            description: draft.description,
            study_type: draft.study_type,
            created_at: now,
            updated_at: now,
            items: Vec::new(),
        };

        let mut projects = self.load()?;
        projects.insert(0, project.clone());
        self.persist(&projects)?;

        Ok(project)
    }

    /// Merge the patch into the matching project and bump `updated_at`.
    ///
    /// Unknown ids are a silent no-op.
    pub fn update_project(&self, id: Uuid, patch: ProjectPatch) -> Result<()> {
        let mut projects = self.load()?;
        if let Some(project) = projects.iter_mut().find(|p| p.id == id) {
            if let Some(name) = patch.name {
                project.name = name;
            }
            if let Some(description) = patch.description {
                project.description = Some(description);
            }
            if let Some(study_type) = patch.study_type {
                project.study_type = Some(study_type);
            }
            project.updated_at = Utc::now();
            self.persist(&projects)?;
        }
        Ok(())
    }

    /// Remove the project and all of its items. Unknown ids are a no-op.
    pub fn delete_project(&self, id: Uuid) -> Result<()> {
        let mut projects = self.load()?;
        projects.retain(|p| p.id != id);
        self.persist(&projects)
    }

    /// Append an item to a project, bumping the project's `updated_at`.
    ///
    /// Returns the created item, or `None` when the project id is unknown (in
    /// which case nothing is mutated).
    pub fn add_item(&self, project_id: Uuid, draft: NewTodoItem) -> Result<Option<TodoItem>> {
        let mut projects = self.load()?;
        let project = match projects.iter_mut().find(|p| p.id == project_id) {
            Some(project) => project,
            None => return Ok(None),
        };

        let item = TodoItem {
            id: Uuid::now_v7(),
            text: draft.text,
            completed: draft.completed,
            priority: draft.priority,
            tags: draft.tags,
            due_date: draft.due_date,
            created_at: Utc::now(),
        };
        project.items.push(item.clone());
        project.updated_at = Utc::now();
        self.persist(&projects)?;

        Ok(Some(item))
    }

    /// Flip an item's completion flag and bump the project's `updated_at`.
    ///
    /// A silent no-op when either id is unknown.
    pub fn toggle_item(&self, project_id: Uuid, item_id: Uuid) -> Result<()> {
        let mut projects = self.load()?;
        if let Some(project) = projects.iter_mut().find(|p| p.id == project_id) {
            if let Some(item) = project.items.iter_mut().find(|i| i.id == item_id) {
                item.completed = !item.completed;
                project.updated_at = Utc::now();
                self.persist(&projects)?;
            }
        }
        Ok(())
    }

    /// Remove an item from a project, bumping the project's `updated_at`.
    ///
    /// An unknown project id is a silent no-op; a known project with an
    /// unknown item id still gets its timestamp bumped.
    pub fn delete_item(&self, project_id: Uuid, item_id: Uuid) -> Result<()> {
        let mut projects = self.load()?;
        if let Some(project) = projects.iter_mut().find(|p| p.id == project_id) {
            project.items.retain(|i| i.id != item_id);
            project.updated_at = Utc::now();
            self.persist(&projects)?;
        }
        Ok(())
    }

    /// Aggregate statistics over the current collection.
    pub fn stats(&self) -> Result<TodoStats> {
        let projects = self.load()?;

        let total_items: usize = projects.iter().map(|p| p.items.len()).sum();
        let completed_items: usize = projects
            .iter()
            .map(|p| p.items.iter().filter(|i| i.completed).count())
            .sum();

        let mut by_type = ProjectTypeCounts::default();
        for project in &projects {
            match project.study_type {
                Some(StudyCategory::Linux) => by_type.linux += 1,
                Some(StudyCategory::Programming) => by_type.programming += 1,
                Some(StudyCategory::DataAnalysis) => by_type.data_analysis += 1,
                None => by_type.general += 1,
            }
        }

        let completion_rate = if total_items > 0 {
            ((completed_items as f64 / total_items as f64) * 100.0).round() as u8
        } else {
            0
        };

        Ok(TodoStats {
            total_projects: projects.len(),
            total_items,
            completed_items,
            projects_by_type: by_type,
            completion_rate,
        })
    }

    /// Import a markdown checklist as a new project.
    ///
    /// Non-checklist lines are skipped. Every parsed draft goes through
    /// [`add_item`](Self::add_item), so each item receives its own id and
    /// creation time and the project's `updated_at` is bumped once per item.
    /// Returns the materialized project with its items.
    pub fn import_markdown(
        &self,
        name: &str,
        content: &str,
        study_type: Option<StudyCategory>,
    ) -> Result<TodoProject> {
        let drafts = parse_checklist(content);
        if drafts.is_empty() {
            warn!("markdown import for {:?} matched no checklist lines", name);
        }

        let mut project_draft = NewProject::new(name)
            .with_description(format!("Imported from markdown ({} tasks)", drafts.len()));
        if let Some(study_type) = study_type {
            project_draft = project_draft.with_study_type(study_type);
        }
        let project = self.create_project(project_draft)?;

        for draft in drafts {
            self.add_item(project.id, draft.into_new_item())?;
        }

        let projects = self.load()?;
        projects
            .into_iter()
            .find(|p| p.id == project.id)
            .ok_or_else(|| StudyError::Storage("Imported project missing after persist".to_string()))
    }

    fn load(&self) -> Result<Vec<TodoProject>> {
        let raw = match self.store.load(TODOS_KEY)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        match serde_json::from_str(&raw) {
            Ok(projects) => Ok(projects),
            Err(e) => {
                // Unreadable state recovers as empty rather than failing.
                warn!("stored project collection is unreadable, starting empty: {}", e);
                Ok(Vec::new())
            }
        }
    }

    fn persist(&self, projects: &[TodoProject]) -> Result<()> {
        let raw = serde_json::to_string(projects)?;
        self.store.store(TODOS_KEY, &raw)?;
        debug!("persisted {} todo projects", projects.len());
        Ok(())
    }
}

/// Project counts per study-type bucket.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ProjectTypeCounts {
    pub linux: usize,
    pub programming: usize,
    pub data_analysis: usize,

    /// Projects with no study type set
    pub general: usize,
}

/// Aggregate statistics over the todo-project collection.
#[derive(Debug, Clone, Serialize)]
pub struct TodoStats {
    pub total_projects: usize,
    pub total_items: usize,
    pub completed_items: usize,
    pub projects_by_type: ProjectTypeCounts,

    /// Completed items as a rounded percentage of all items; 0 when there are
    /// no items at all.
    pub completion_rate: u8,
}
