//! Parsing and prompt helpers shared by command handlers.

use chrono::{DateTime, NaiveDate, Utc};
use dialoguer::Confirm;
use uuid::Uuid;

use studylog_core::model::{Priority, StudyCategory};

pub fn parse_id(value: &str, what: &str) -> anyhow::Result<Uuid> {
    Uuid::parse_str(value).map_err(|e| anyhow::anyhow!("Invalid {} ID: {}", what, e))
}

pub fn parse_category(value: &str) -> anyhow::Result<StudyCategory> {
    value.parse().map_err(|e: String| anyhow::anyhow!(e))
}

pub fn parse_priority(value: &str) -> anyhow::Result<Priority> {
    value.parse().map_err(|e: String| anyhow::anyhow!(e))
}

/// Parse a datetime string (ISO-8601 or YYYY-MM-DD).
pub fn parse_datetime(value: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let naive = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| anyhow::anyhow!("Invalid date value: {}", value))?;
        return Ok(DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc));
    }

    Err(anyhow::anyhow!(
        "Invalid date/time (expected ISO-8601 or YYYY-MM-DD): {}",
        value
    ))
}

/// Ask for confirmation, unless `--yes` already answered it.
pub fn confirm(prompt: &str, assume_yes: bool) -> anyhow::Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read confirmation: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datetime_accepts_both_formats() {
        assert!(parse_datetime("2026-08-07T12:00:00Z").is_ok());
        assert!(parse_datetime("2026-08-07").is_ok());
        assert!(parse_datetime("next tuesday").is_err());
    }

    #[test]
    fn test_parse_category_and_priority() {
        assert!(parse_category("data-analysis").is_ok());
        assert!(parse_category("cooking").is_err());
        assert!(parse_priority("high").is_ok());
        assert!(parse_priority("urgent").is_err());
    }
}
