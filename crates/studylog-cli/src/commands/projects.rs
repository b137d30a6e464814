use studylog_core::model::{NewProject, ProjectPatch, TodoProject};

use crate::app::AppContext;
use crate::cli::{
    ProjectArgs, ProjectCreateArgs, ProjectDeleteArgs, ProjectListArgs, ProjectShowArgs,
    ProjectSubcommand, ProjectUpdateArgs,
};
use crate::helpers::{confirm, parse_category, parse_id};
use crate::output::{check_mark, format_datetime, new_table, print_json, priority_label};

pub fn handle_project(ctx: &AppContext, args: &ProjectArgs) -> anyhow::Result<()> {
    match &args.command {
        ProjectSubcommand::Create(create_args) => handle_create(ctx, create_args),
        ProjectSubcommand::List(list_args) => handle_list(ctx, list_args),
        ProjectSubcommand::Show(show_args) => handle_show(ctx, show_args),
        ProjectSubcommand::Update(update_args) => handle_update(ctx, update_args),
        ProjectSubcommand::Delete(delete_args) => handle_delete(ctx, delete_args),
    }
}

fn handle_create(ctx: &AppContext, args: &ProjectCreateArgs) -> anyhow::Result<()> {
    let mut draft = NewProject::new(&args.name);
    if let Some(ref description) = args.description {
        draft = draft.with_description(description);
    }
    if let Some(ref study_type) = args.study_type {
        draft = draft.with_study_type(parse_category(study_type)?);
    }

    let project = ctx.todo_ledger()?.create_project(draft)?;
    if !ctx.quiet() {
        println!("Created project {}", project.id);
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, args: &ProjectListArgs) -> anyhow::Result<()> {
    let projects = ctx.todo_ledger()?.projects()?;

    if args.json {
        return print_json(&projects);
    }

    let mut table = new_table(&["ID", "NAME", "TYPE", "ITEMS", "DONE", "UPDATED"]);
    for project in &projects {
        let completed = project.items.iter().filter(|i| i.completed).count();
        table.add_row(vec![
            project.id.to_string(),
            project.name.clone(),
            project
                .study_type
                .map(|t| t.to_string())
                .unwrap_or_else(|| "-".to_string()),
            project.items.len().to_string(),
            completed.to_string(),
            format_datetime(&project.updated_at),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn handle_show(ctx: &AppContext, args: &ProjectShowArgs) -> anyhow::Result<()> {
    let id = parse_id(&args.id, "project")?;
    let projects = ctx.todo_ledger()?.projects()?;
    let project = projects
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| anyhow::anyhow!("Project not found"))?;

    if args.json {
        return print_json(project);
    }

    print_project(project, ctx.quiet());
    Ok(())
}

fn print_project(project: &TodoProject, quiet: bool) {
    if !quiet {
        println!("Project: {}", project.name);
        println!("ID: {}", project.id);
        if let Some(ref description) = project.description {
            println!("Description: {}", description);
        }
        if let Some(study_type) = project.study_type {
            println!("Type: {}", study_type);
        }
        println!("Created: {}", format_datetime(&project.created_at));
        println!("Updated: {}", format_datetime(&project.updated_at));
        println!();
    }

    let mut table = new_table(&["ID", "DONE", "TEXT", "PRIORITY", "TAGS", "DUE"]);
    for item in &project.items {
        table.add_row(vec![
            item.id.to_string(),
            check_mark(item.completed),
            item.text.clone(),
            priority_label(item.priority),
            item.tags.join(", "),
            item.due_date
                .map(|d| format_datetime(&d))
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    println!("{table}");
}

fn handle_update(ctx: &AppContext, args: &ProjectUpdateArgs) -> anyhow::Result<()> {
    let id = parse_id(&args.id, "project")?;

    let mut patch = ProjectPatch::new();
    if let Some(ref name) = args.name {
        patch = patch.name(name);
    }
    if let Some(ref description) = args.description {
        patch = patch.description(description);
    }
    if let Some(ref study_type) = args.study_type {
        patch = patch.study_type(parse_category(study_type)?);
    }
    if patch.is_empty() {
        return Err(anyhow::anyhow!(
            "Nothing to update: pass --name, --description, or --study-type"
        ));
    }

    ctx.todo_ledger()?.update_project(id, patch)?;
    if !ctx.quiet() {
        println!("Updated project {}", id);
    }
    Ok(())
}

fn handle_delete(ctx: &AppContext, args: &ProjectDeleteArgs) -> anyhow::Result<()> {
    let id = parse_id(&args.id, "project")?;
    if !confirm(
        &format!("Delete project {} and all its items?", id),
        args.yes,
    )? {
        if !ctx.quiet() {
            println!("Aborted.");
        }
        return Ok(());
    }

    ctx.todo_ledger()?.delete_project(id)?;
    if !ctx.quiet() {
        println!("Deleted project {}", id);
    }
    Ok(())
}
