use studylog_core::catalog;
use studylog_core::model::{NewSession, StudyCategory, Topic};

use crate::app::AppContext;
use crate::cli::{
    SessionAddArgs, SessionArgs, SessionCatalogArgs, SessionDeleteArgs, SessionListArgs,
    SessionSubcommand, SessionToggleArgs,
};
use crate::helpers::{confirm, parse_category, parse_id};
use crate::output::{check_mark, format_datetime, new_table, print_json};

pub fn handle_session(ctx: &AppContext, args: &SessionArgs) -> anyhow::Result<()> {
    match &args.command {
        SessionSubcommand::Add(add_args) => handle_add(ctx, add_args),
        SessionSubcommand::List(list_args) => handle_list(ctx, list_args),
        SessionSubcommand::Toggle(toggle_args) => handle_toggle(ctx, toggle_args),
        SessionSubcommand::Delete(delete_args) => handle_delete(ctx, delete_args),
        SessionSubcommand::Catalog(catalog_args) => handle_catalog(catalog_args),
    }
}

fn handle_add(ctx: &AppContext, args: &SessionAddArgs) -> anyhow::Result<()> {
    let category = parse_category(&args.category)?;
    let topic = resolve_topic(category, &args.topic)?;

    let draft = NewSession::new(&args.title, category, topic, args.duration)
        .with_resources(args.resource.clone());
    let session = ctx.session_ledger()?.add(draft)?;

    if !ctx.quiet() {
        println!("Added session {}", session.id);
    }
    Ok(())
}

/// Resolve a catalog entry for the category, failing with the available names
/// when the topic is unknown.
fn resolve_topic(category: StudyCategory, name: &str) -> anyhow::Result<Topic> {
    match category {
        StudyCategory::Linux => catalog::find_distro(name)
            .map(|distro| Topic::Linux(distro.clone()))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown distribution \"{}\". Available: {}",
                    name,
                    names(catalog::linux_distros().iter().map(|d| d.name.as_str()))
                )
            }),
        StudyCategory::Programming => catalog::find_programming_topic(name)
            .map(|topic| Topic::Programming(topic.clone()))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown language \"{}\". Available: {}",
                    name,
                    names(catalog::programming_topics().iter().map(|t| t.language.as_str()))
                )
            }),
        StudyCategory::DataAnalysis => catalog::find_data_analysis_topic(name)
            .map(|topic| Topic::DataAnalysis(topic.clone()))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown data-analysis topic \"{}\". Available: {}",
                    name,
                    names(catalog::data_analysis_topics().iter().map(|t| t.name.as_str()))
                )
            }),
    }
}

fn names<'a>(iter: impl Iterator<Item = &'a str>) -> String {
    iter.collect::<Vec<_>>().join(", ")
}

fn handle_list(ctx: &AppContext, args: &SessionListArgs) -> anyhow::Result<()> {
    let mut sessions = ctx.session_ledger()?.sessions()?;
    if let Some(limit) = args.limit {
        sessions.truncate(limit);
    }

    if args.json {
        return print_json(&sessions);
    }

    let mut table = new_table(&["ID", "DONE", "TITLE", "CATEGORY", "TOPIC", "MIN", "CREATED"]);
    for session in &sessions {
        table.add_row(vec![
            session.id.to_string(),
            check_mark(session.completed),
            session.title.clone(),
            session.category.to_string(),
            session.topic.display_name().to_string(),
            session.duration.to_string(),
            format_datetime(&session.created_at),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn handle_toggle(ctx: &AppContext, args: &SessionToggleArgs) -> anyhow::Result<()> {
    let id = parse_id(&args.id, "session")?;
    ctx.session_ledger()?.toggle(id)?;

    if !ctx.quiet() {
        println!("Toggled session {}", id);
    }
    Ok(())
}

fn handle_delete(ctx: &AppContext, args: &SessionDeleteArgs) -> anyhow::Result<()> {
    let id = parse_id(&args.id, "session")?;
    if !confirm(&format!("Delete session {}?", id), args.yes)? {
        if !ctx.quiet() {
            println!("Aborted.");
        }
        return Ok(());
    }

    ctx.session_ledger()?.delete(id)?;
    if !ctx.quiet() {
        println!("Deleted session {}", id);
    }
    Ok(())
}

fn handle_catalog(args: &SessionCatalogArgs) -> anyhow::Result<()> {
    let filter = args
        .category
        .as_deref()
        .map(parse_category)
        .transpose()?;

    if args.json {
        let value = serde_json::json!({
            "linux": catalog::linux_distros(),
            "programming": catalog::programming_topics(),
            "data_analysis": catalog::data_analysis_topics(),
        });
        return match filter {
            Some(category) => print_json(&value[json_key(category)]),
            None => print_json(&value),
        };
    }

    if matches!(filter, None | Some(StudyCategory::Linux)) {
        let mut table = new_table(&["DISTRIBUTION", "PACKAGE MANAGER", "INIT", "LOGO"]);
        for distro in catalog::linux_distros() {
            table.add_row(vec![
                distro.name.clone(),
                distro.package_manager.clone(),
                distro.init_system.clone(),
                distro.logo.clone(),
            ]);
        }
        println!("{table}");
    }

    if matches!(filter, None | Some(StudyCategory::Programming)) {
        let mut table = new_table(&["LANGUAGE", "FRAMEWORK", "CONCEPTS"]);
        for topic in catalog::programming_topics() {
            table.add_row(vec![
                topic.language.clone(),
                topic.framework.clone().unwrap_or_else(|| "-".to_string()),
                topic.concepts.join(", "),
            ]);
        }
        println!("{table}");
    }

    if matches!(filter, None | Some(StudyCategory::DataAnalysis)) {
        let mut table = new_table(&["TOPIC", "KIND", "TECHNOLOGIES", "AI"]);
        for topic in catalog::data_analysis_topics() {
            table.add_row(vec![
                topic.name.clone(),
                topic.kind.to_string(),
                topic.technologies.join(", "),
                topic.ai_integration.join(", "),
            ]);
        }
        println!("{table}");
    }

    Ok(())
}

fn json_key(category: StudyCategory) -> &'static str {
    match category {
        StudyCategory::Linux => "linux",
        StudyCategory::Programming => "programming",
        StudyCategory::DataAnalysis => "data_analysis",
    }
}
