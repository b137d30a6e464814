//! Core data types for the study tracker.
//!
//! Stored collections serialize these records as JSON arrays; date fields use
//! RFC 3339 strings via chrono's serde support.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Study category, fixed at session creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StudyCategory {
    Linux,
    Programming,
    DataAnalysis,
}

impl StudyCategory {
    /// Stable lowercase name, as used in stored blobs and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            StudyCategory::Linux => "linux",
            StudyCategory::Programming => "programming",
            StudyCategory::DataAnalysis => "data-analysis",
        }
    }
}

impl std::fmt::Display for StudyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StudyCategory {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "linux" => Ok(StudyCategory::Linux),
            "programming" => Ok(StudyCategory::Programming),
            "data-analysis" => Ok(StudyCategory::DataAnalysis),
            other => Err(format!(
                "Unknown study category: {} (use linux, programming, or data-analysis)",
                other
            )),
        }
    }
}

/// A Linux distribution, the topic payload for [`StudyCategory::Linux`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinuxDistro {
    /// Distribution name (e.g., "Ubuntu")
    pub name: String,

    /// Package manager command family (e.g., "APT", "pacman")
    pub package_manager: String,

    /// Init system (e.g., "systemd")
    pub init_system: String,

    /// Short logo glyph used by pickers
    pub logo: String,
}

/// A programming topic, the payload for [`StudyCategory::Programming`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgrammingTopic {
    /// Language name (e.g., "Rust")
    pub language: String,

    /// Flagship framework, when one exists
    pub framework: Option<String>,

    /// Key concepts covered by this topic, ordered
    pub concepts: Vec<String>,

    /// Display color (hex)
    pub color: String,
}

/// Sub-kind of a data-analysis topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataTopicKind {
    Language,
    Library,
    Tool,
    AiFramework,
}

impl DataTopicKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataTopicKind::Language => "language",
            DataTopicKind::Library => "library",
            DataTopicKind::Tool => "tool",
            DataTopicKind::AiFramework => "ai-framework",
        }
    }
}

impl std::fmt::Display for DataTopicKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A data-analysis topic, the payload for [`StudyCategory::DataAnalysis`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataAnalysisTopic {
    /// Topic name (e.g., "Pandas")
    pub name: String,

    /// Whether this is a language, library, tool, or AI framework
    pub kind: DataTopicKind,

    /// Related technologies, ordered
    pub technologies: Vec<String>,

    /// AI integrations relevant to this topic, ordered
    pub ai_integration: Vec<String>,

    /// Display color (hex)
    pub color: String,
}

/// Topic payload for a study session, one shape per category.
///
/// The session's `category` field and its topic shape are stored separately;
/// the ledger trusts the caller to keep them in agreement and never validates
/// the pairing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    Linux(LinuxDistro),
    Programming(ProgrammingTopic),
    DataAnalysis(DataAnalysisTopic),
}

impl Topic {
    /// Display name used by statistics aggregation: distro name for linux,
    /// language for programming, topic name for data-analysis.
    pub fn display_name(&self) -> &str {
        match self {
            Topic::Linux(distro) => &distro.name,
            Topic::Programming(topic) => &topic.language,
            Topic::DataAnalysis(topic) => &topic.name,
        }
    }

    /// The category this payload shape belongs to.
    pub fn category(&self) -> StudyCategory {
        match self {
            Topic::Linux(_) => StudyCategory::Linux,
            Topic::Programming(_) => StudyCategory::Programming,
            Topic::DataAnalysis(_) => StudyCategory::DataAnalysis,
        }
    }
}

/// A logged study session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySession {
    /// Unique identifier, assigned at creation
    pub id: Uuid,

    /// Free-text label
    pub title: String,

    /// Category, fixed at creation
    pub category: StudyCategory,

    /// Topic payload; shape is trusted to match `category`
    pub topic: Topic,

    /// Duration in minutes
    pub duration: u32,

    /// Completion flag, toggled post-creation
    pub completed: bool,

    /// Free-text resources (URLs, book chapters), order-preserving
    pub resources: Vec<String>,

    /// When this session was logged
    pub created_at: DateTime<Utc>,
}

/// Builder for logging new study sessions.
#[derive(Debug, Clone)]
pub struct NewSession {
    /// Free-text label
    pub title: String,

    /// Category for the session
    pub category: StudyCategory,

    /// Topic payload
    pub topic: Topic,

    /// Duration in minutes
    pub duration: u32,

    /// Resources, order-preserving
    pub resources: Vec<String>,
}

impl NewSession {
    pub fn new(
        title: impl Into<String>,
        category: StudyCategory,
        topic: Topic,
        duration: u32,
    ) -> Self {
        Self {
            title: title.into(),
            category,
            topic,
            duration,
            resources: Vec::new(),
        }
    }

    pub fn with_resources(mut self, resources: Vec<String>) -> Self {
        self.resources = resources;
        self
    }
}

/// Todo item priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!(
                "Unknown priority: {} (use low, medium, or high)",
                other
            )),
        }
    }
}

/// A todo item, owned exclusively by its project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier, assigned at creation
    pub id: Uuid,

    /// Item text
    pub text: String,

    /// Completion flag
    pub completed: bool,

    /// Priority level
    pub priority: Priority,

    /// Tags, order-preserving; duplicates are not deduplicated by contract
    pub tags: Vec<String>,

    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,

    /// When this item was created
    pub created_at: DateTime<Utc>,
}

/// Builder for creating new todo items.
#[derive(Debug, Clone)]
pub struct NewTodoItem {
    /// Item text
    pub text: String,

    /// Initial completion state
    pub completed: bool,

    /// Priority level
    pub priority: Priority,

    /// Tags, order-preserving
    pub tags: Vec<String>,

    /// Optional due date
    pub due_date: Option<DateTime<Utc>>,
}

impl NewTodoItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            completed: false,
            priority: Priority::Low,
            tags: Vec::new(),
            due_date: None,
        }
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// A todo project, owning an ordered list of items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoProject {
    /// Unique identifier, assigned at creation
    pub id: Uuid,

    /// Project name
    pub name: String,

    /// Optional free-text description
    pub description: Option<String>,

    /// Optional study category this project relates to
    pub study_type: Option<StudyCategory>,

    /// When this project was created
    pub created_at: DateTime<Utc>,

    /// Bumped on every mutation to the project or any of its items
    pub updated_at: DateTime<Utc>,

    /// Items in insertion order (= display order)
    pub items: Vec<TodoItem>,
}

/// Builder for creating new todo projects.
#[derive(Debug, Clone)]
pub struct NewProject {
    /// Project name
    pub name: String,

    /// Optional description
    pub description: Option<String>,

    /// Optional study category
    pub study_type: Option<StudyCategory>,
}

impl NewProject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            study_type: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_study_type(mut self, study_type: StudyCategory) -> Self {
        self.study_type = Some(study_type);
        self
    }
}

/// Partial update for a todo project. Unset fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub study_type: Option<StudyCategory>,
}

impl ProjectPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn study_type(mut self, study_type: StudyCategory) -> Self {
        self.study_type = Some(study_type);
        self
    }

    /// True when no field is set; applying this patch would only bump
    /// `updated_at`.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.study_type.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for category in [
            StudyCategory::Linux,
            StudyCategory::Programming,
            StudyCategory::DataAnalysis,
        ] {
            let parsed: StudyCategory = category.as_str().parse().expect("parse should succeed");
            assert_eq!(parsed, category);
        }
        assert!("cooking".parse::<StudyCategory>().is_err());
    }

    #[test]
    fn test_topic_serde_round_trip() {
        let topic = Topic::Programming(ProgrammingTopic {
            language: "Rust".to_string(),
            framework: None,
            concepts: vec!["Ownership".to_string(), "Borrowing".to_string()],
            color: "#CE422B".to_string(),
        });

        let raw = serde_json::to_string(&topic).expect("serialize should succeed");
        assert!(raw.contains("\"programming\""));
        let parsed: Topic = serde_json::from_str(&raw).expect("deserialize should succeed");
        assert_eq!(parsed, topic);
        assert_eq!(parsed.display_name(), "Rust");
        assert_eq!(parsed.category(), StudyCategory::Programming);
    }

    #[test]
    fn test_new_item_builder() {
        let due = Utc::now();
        let draft = NewTodoItem::new("Read man pages")
            .completed(true)
            .with_priority(Priority::High)
            .with_tags(vec!["reading".to_string()])
            .with_due_date(due);

        assert_eq!(draft.text, "Read man pages");
        assert!(draft.completed);
        assert_eq!(draft.priority, Priority::High);
        assert_eq!(draft.tags, vec!["reading".to_string()]);
        assert_eq!(draft.due_date, Some(due));
    }

    #[test]
    fn test_project_patch_is_empty() {
        assert!(ProjectPatch::new().is_empty());
        assert!(!ProjectPatch::new().name("renamed").is_empty());
    }
}
