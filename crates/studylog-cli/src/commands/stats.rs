use studylog_core::model::StudyCategory;
use studylog_core::StudyStats;

use crate::app::AppContext;
use crate::cli::StatsArgs;
use crate::output::{new_table, print_json};

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let session_stats = ctx.session_ledger()?.stats()?;
    let todo_stats = ctx.todo_ledger()?.stats()?;

    if args.json {
        let value = serde_json::json!({
            "sessions": session_stats,
            "todos": todo_stats,
        });
        return print_json(&value);
    }

    print_session_stats(&session_stats);
    println!();

    let mut table = new_table(&["PROJECTS", "ITEMS", "DONE", "RATE"]);
    table.add_row(vec![
        todo_stats.total_projects.to_string(),
        todo_stats.total_items.to_string(),
        todo_stats.completed_items.to_string(),
        format!("{}%", todo_stats.completion_rate),
    ]);
    println!("{table}");

    if !ctx.quiet() {
        let by_type = &todo_stats.projects_by_type;
        println!(
            "Projects by type: linux {}, programming {}, data-analysis {}, general {}",
            by_type.linux, by_type.programming, by_type.data_analysis, by_type.general
        );
    }
    Ok(())
}

fn print_session_stats(stats: &StudyStats) {
    let mut table = new_table(&["CATEGORY", "SESSIONS", "MINUTES", "TOPICS"]);
    for category in [
        StudyCategory::Linux,
        StudyCategory::Programming,
        StudyCategory::DataAnalysis,
    ] {
        let bucket = stats.category(category);
        table.add_row(vec![
            category.to_string(),
            bucket.sessions.to_string(),
            bucket.minutes.to_string(),
            bucket.topics.join(", "),
        ]);
    }
    println!("{table}");

    // Completion rate is derived here, not stored by the ledger.
    let rate = if stats.total_sessions > 0 {
        (stats.completed_sessions as f64 / stats.total_sessions as f64 * 100.0).round() as u32
    } else {
        0
    };
    println!(
        "Sessions: {} total, {} completed ({}%)",
        stats.total_sessions, stats.completed_sessions, rate
    );
}
