//! moodlog CLI - record how the day went, from the terminal
//!
//! Dated diary entries tagged with an emotion, mirrored to a local cache
//! slot and (when configured) a remote table.

mod cli;
mod commands;
mod config;
mod error;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::{add, completions, delete, edit, list, show};
use crate::config::resolve_cache_path;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("moodlog=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let cache_path = resolve_cache_path(cli.cache_path);

    match cli.command {
        Commands::Add {
            date,
            emotion,
            content,
        } => add::run_add(date.as_deref(), emotion, &content, &cache_path).await?,
        Commands::List { month, json } => {
            list::run_list(month.as_deref(), json, &cache_path).await?;
        }
        Commands::Show { id } => show::run_show(&id, &cache_path).await?,
        Commands::Edit {
            id,
            date,
            emotion,
            content,
        } => {
            edit::run_edit(
                &id,
                date.as_deref(),
                emotion,
                content.as_deref(),
                &cache_path,
            )
            .await?;
        }
        Commands::Delete { id } => delete::run_delete(&id, &cache_path).await?,
        Commands::Completions { shell, output } => {
            completions::run_completions(shell, output.as_deref())?;
        }
    }

    Ok(())
}
