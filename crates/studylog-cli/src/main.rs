//! Studylog CLI - track study sessions and todo projects from the terminal.
//!
//! This is the command-line interface for Studylog. It provides a
//! user-friendly surface over the core library's ledgers.

mod app;
mod cli;
mod commands;
mod config;
mod helpers;
mod logging;
mod output;

use clap::Parser;

use app::AppContext;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Completions need neither a data dir nor logging.
    if let Commands::Completions(ref completions_args) = cli.command {
        return commands::misc::handle_completions(completions_args);
    }

    let ctx = AppContext::resolve(cli.data_dir.clone(), cli.quiet)?;
    let _logger = logging::init(ctx.data_dir());

    match &cli.command {
        Commands::Session(args) => commands::sessions::handle_session(&ctx, args),
        Commands::Project(args) => commands::projects::handle_project(&ctx, args),
        Commands::Todo(args) => commands::todos::handle_todo(&ctx, args),
        Commands::Import(args) => commands::import::handle_import(&ctx, args),
        Commands::Stats(args) => commands::stats::handle_stats(&ctx, args),
        Commands::Completions(_) => Ok(()),
    }
}
