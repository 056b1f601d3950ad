//! tempo CLI application
//!
//! Command-line interface for the tempo learning-plan tracker.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::{debug, info};
use renderer::TerminalRenderer;
use tempo_core::TrackerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        today,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    info!("tempo started");
    if let Some(today) = today {
        debug!("analytics evaluated as of {today}");
    }

    let cli = Cli::new(tracker, TerminalRenderer::new(!no_color), json, today);

    match command {
        Some(Goal { command }) => cli.handle_goal_command(command).await,
        Some(Task { command }) => cli.handle_task_command(command).await,
        Some(Stats { command }) => cli.handle_stats_command(command).await,
        Some(Dashboard) | None => cli.dashboard().await,
    }
}
