//! Table and JSON rendering for command output.

use chrono::{DateTime, Utc};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;
use serde::Serialize;

use studylog_core::model::Priority;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(Cell::new).collect::<Vec<_>>());
    table
}

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M UTC").to_string()
}

pub fn check_mark(completed: bool) -> String {
    if completed {
        "[x]".green().to_string()
    } else {
        "[ ]".to_string()
    }
}

pub fn priority_label(priority: Priority) -> String {
    match priority {
        Priority::High => priority.as_str().red().to_string(),
        Priority::Medium => priority.as_str().yellow().to_string(),
        Priority::Low => priority.as_str().to_string(),
    }
}
