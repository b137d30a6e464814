use studylog_core::model::NewTodoItem;

use crate::app::AppContext;
use crate::cli::{TodoAddArgs, TodoArgs, TodoDeleteArgs, TodoSubcommand, TodoToggleArgs};
use crate::helpers::{parse_datetime, parse_id, parse_priority};

pub fn handle_todo(ctx: &AppContext, args: &TodoArgs) -> anyhow::Result<()> {
    match &args.command {
        TodoSubcommand::Add(add_args) => handle_add(ctx, add_args),
        TodoSubcommand::Toggle(toggle_args) => handle_toggle(ctx, toggle_args),
        TodoSubcommand::Delete(delete_args) => handle_delete(ctx, delete_args),
    }
}

fn handle_add(ctx: &AppContext, args: &TodoAddArgs) -> anyhow::Result<()> {
    let project_id = parse_id(&args.project_id, "project")?;

    let mut draft = NewTodoItem::new(&args.text)
        .completed(args.done)
        .with_priority(parse_priority(&args.priority)?)
        .with_tags(args.tag.clone());
    if let Some(ref due) = args.due {
        draft = draft.with_due_date(parse_datetime(due)?);
    }

    let item = ctx
        .todo_ledger()?
        .add_item(project_id, draft)?
        .ok_or_else(|| {
            anyhow::anyhow!("Project not found. Run `studylog project list` to find project IDs.")
        })?;

    if !ctx.quiet() {
        println!("Added item {}", item.id);
    }
    Ok(())
}

fn handle_toggle(ctx: &AppContext, args: &TodoToggleArgs) -> anyhow::Result<()> {
    let project_id = parse_id(&args.project_id, "project")?;
    let item_id = parse_id(&args.item_id, "item")?;

    ctx.todo_ledger()?.toggle_item(project_id, item_id)?;
    if !ctx.quiet() {
        println!("Toggled item {}", item_id);
    }
    Ok(())
}

fn handle_delete(ctx: &AppContext, args: &TodoDeleteArgs) -> anyhow::Result<()> {
    let project_id = parse_id(&args.project_id, "project")?;
    let item_id = parse_id(&args.item_id, "item")?;

    ctx.todo_ledger()?.delete_item(project_id, item_id)?;
    if !ctx.quiet() {
        println!("Deleted item {}", item_id);
    }
    Ok(())
}
