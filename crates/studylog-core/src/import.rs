//! Markdown checklist parsing.
//!
//! Turns `- [ ] task`-style lines into typed item drafts with inferred
//! priority and extracted tags. Lines that are not checklist entries are
//! silently skipped.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{NewTodoItem, Priority};

/// Optional list marker, checkbox, then the item text. `X` counts as a
/// completion mark alongside `x`.
static CHECKLIST_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*+]?\s*\[([ xX])\]\s*(.+)$").expect("valid checklist regex"));

/// Inline priority markers, stripped from the stored text.
static PRIORITY_MARKERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)!!!|!!|HIGH|URGENT|MEDIUM").expect("valid priority regex"));

/// `#word` tag tokens.
static TAG_TOKENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\w+)").expect("valid tag regex"));

/// A parsed checklist entry prior to materialization as a todo item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedItem {
    pub text: String,
    pub completed: bool,
    pub priority: Priority,
    pub tags: Vec<String>,
}

impl ParsedItem {
    /// Convert into an item draft for the todo ledger.
    pub fn into_new_item(self) -> NewTodoItem {
        NewTodoItem::new(self.text)
            .completed(self.completed)
            .with_priority(self.priority)
            .with_tags(self.tags)
    }
}

/// Parse checklist lines out of `content`, preserving line order.
pub fn parse_checklist(content: &str) -> Vec<ParsedItem> {
    content.lines().filter_map(parse_line).collect()
}

/// Parse a single line; returns `None` for non-checklist lines.
fn parse_line(line: &str) -> Option<ParsedItem> {
    let captures = CHECKLIST_LINE.captures(line.trim())?;
    let completed = captures[1].eq_ignore_ascii_case("x");
    let raw_text = &captures[2];

    Some(ParsedItem {
        priority: infer_priority(raw_text),
        tags: extract_tags(raw_text),
        text: clean_text(raw_text),
        completed,
    })
}

/// Priority signals checked in precedence order; the first match wins, so a
/// line carrying both `!!!` and `MEDIUM` comes out high.
fn infer_priority(text: &str) -> Priority {
    let upper = text.to_uppercase();
    if text.contains("!!!") || upper.contains("HIGH") || upper.contains("URGENT") {
        Priority::High
    } else if text.contains("!!") || upper.contains("MEDIUM") {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Tags come from the raw text, before cleaning, in order of appearance.
fn extract_tags(text: &str) -> Vec<String> {
    TAG_TOKENS
        .captures_iter(text)
        .map(|captures| captures[1].to_string())
        .collect()
}

/// Strip priority markers, then tag tokens, then trim. The pass order is
/// observable: `#HIGH` loses its marker first and leaves a bare `#`.
fn clean_text(text: &str) -> String {
    let without_priority = PRIORITY_MARKERS.replace_all(text, "");
    TAG_TOKENS
        .replace_all(&without_priority, "")
        .trim()
        .to_string()
}
