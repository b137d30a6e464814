use std::io::{self, IsTerminal, Read};

use crate::app::AppContext;
use crate::cli::ImportArgs;
use crate::helpers::parse_category;
use crate::output::print_json;

pub fn handle_import(ctx: &AppContext, args: &ImportArgs) -> anyhow::Result<()> {
    let content = read_checklist(args.file.as_deref())?;
    let study_type = args
        .study_type
        .as_deref()
        .map(parse_category)
        .transpose()?;

    let project = ctx
        .todo_ledger()?
        .import_markdown(&args.name, &content, study_type)?;

    if args.json {
        return print_json(&project);
    }

    if !ctx.quiet() {
        println!(
            "Imported {} items into project {}",
            project.items.len(),
            project.id
        );
    }
    Ok(())
}

fn read_checklist(file: Option<&str>) -> anyhow::Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path, e));
    }

    if io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "No input provided. Use --file or pipe a checklist via stdin."
        ));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(buffer)
}
