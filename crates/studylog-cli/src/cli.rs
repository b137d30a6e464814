use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use studylog_core::VERSION;

/// Studylog - a local-first study tracker for Linux, programming, and data-analysis topics
#[derive(Parser)]
#[command(name = "studylog")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory override
    #[arg(long, global = true, env = "STUDYLOG_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage study sessions
    Session(SessionArgs),

    /// Manage todo projects
    Project(ProjectArgs),

    /// Manage todo items within a project
    Todo(TodoArgs),

    /// Import a markdown checklist as a new todo project
    Import(ImportArgs),

    /// Show aggregate statistics across sessions and todos
    Stats(StatsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `session` command group
#[derive(Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionSubcommand,
}

#[derive(Subcommand)]
pub enum SessionSubcommand {
    /// Log a new study session
    Add(SessionAddArgs),

    /// List sessions, newest first
    List(SessionListArgs),

    /// Flip a session's completed flag
    Toggle(SessionToggleArgs),

    /// Delete a session
    Delete(SessionDeleteArgs),

    /// Show the predefined topic catalogs
    Catalog(SessionCatalogArgs),
}

/// Arguments for `session add`
#[derive(Args)]
pub struct SessionAddArgs {
    /// Session title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Study category (linux, programming, data-analysis)
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: String,

    /// Topic name within the category's catalog (distro, language, or topic)
    #[arg(short, long, value_name = "NAME")]
    pub topic: String,

    /// Duration in minutes
    #[arg(short, long, value_name = "MINUTES")]
    pub duration: u32,

    /// Attach a resource (repeatable)
    #[arg(short, long, value_name = "RESOURCE")]
    pub resource: Vec<String>,
}

/// Arguments for `session list`
#[derive(Args)]
pub struct SessionListArgs {
    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `session toggle`
#[derive(Args)]
pub struct SessionToggleArgs {
    /// Session ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Arguments for `session delete`
#[derive(Args)]
pub struct SessionDeleteArgs {
    /// Session ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for `session catalog`
#[derive(Args)]
pub struct SessionCatalogArgs {
    /// Restrict to one category (linux, programming, data-analysis)
    #[arg(value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `project` command group
#[derive(Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    pub command: ProjectSubcommand,
}

#[derive(Subcommand)]
pub enum ProjectSubcommand {
    /// Create a todo project
    Create(ProjectCreateArgs),

    /// List projects, newest first
    List(ProjectListArgs),

    /// Show a project and its items
    Show(ProjectShowArgs),

    /// Update a project's fields
    Update(ProjectUpdateArgs),

    /// Delete a project and all its items
    Delete(ProjectDeleteArgs),
}

/// Arguments for `project create`
#[derive(Args)]
pub struct ProjectCreateArgs {
    /// Project name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Project description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Related study category (linux, programming, data-analysis)
    #[arg(short, long, value_name = "CATEGORY")]
    pub study_type: Option<String>,
}

/// Arguments for `project list`
#[derive(Args)]
pub struct ProjectListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `project show`
#[derive(Args)]
pub struct ProjectShowArgs {
    /// Project ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `project update`
#[derive(Args)]
pub struct ProjectUpdateArgs {
    /// Project ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,

    /// New project name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New project description
    #[arg(short, long)]
    pub description: Option<String>,

    /// New study category (linux, programming, data-analysis)
    #[arg(short, long, value_name = "CATEGORY")]
    pub study_type: Option<String>,
}

/// Arguments for `project delete`
#[derive(Args)]
pub struct ProjectDeleteArgs {
    /// Project ID (full UUID)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `todo` command group
#[derive(Args)]
pub struct TodoArgs {
    #[command(subcommand)]
    pub command: TodoSubcommand,
}

#[derive(Subcommand)]
pub enum TodoSubcommand {
    /// Add an item to a project
    Add(TodoAddArgs),

    /// Flip an item's completed flag
    Toggle(TodoToggleArgs),

    /// Delete an item from a project
    Delete(TodoDeleteArgs),
}

/// Arguments for `todo add`
#[derive(Args)]
pub struct TodoAddArgs {
    /// Project ID (full UUID)
    #[arg(value_name = "PROJECT_ID")]
    pub project_id: String,

    /// Item text
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Priority (low, medium, high)
    #[arg(short, long, default_value = "low")]
    pub priority: String,

    /// Add a tag (repeatable)
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    /// Due date (ISO-8601 or YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub due: Option<String>,

    /// Create the item already completed
    #[arg(long)]
    pub done: bool,
}

/// Arguments for `todo toggle`
#[derive(Args)]
pub struct TodoToggleArgs {
    /// Project ID (full UUID)
    #[arg(value_name = "PROJECT_ID")]
    pub project_id: String,

    /// Item ID (full UUID)
    #[arg(value_name = "ITEM_ID")]
    pub item_id: String,
}

/// Arguments for `todo delete`
#[derive(Args)]
pub struct TodoDeleteArgs {
    /// Project ID (full UUID)
    #[arg(value_name = "PROJECT_ID")]
    pub project_id: String,

    /// Item ID (full UUID)
    #[arg(value_name = "ITEM_ID")]
    pub item_id: String,
}

/// Arguments for the `import` command
#[derive(Args)]
pub struct ImportArgs {
    /// Name for the created project
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Read the checklist from this file instead of stdin
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<String>,

    /// Related study category (linux, programming, data-analysis)
    #[arg(short, long, value_name = "CATEGORY")]
    pub study_type: Option<String>,

    /// Output the created project as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `stats` command
#[derive(Args)]
pub struct StatsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}
