use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::civil::Date;

use crate::cli::{GoalCommands, StatsCommands, TaskCommands};

/// Track a day-by-day learning plan and see how you are pacing
///
/// Each goal is a 30-day plan with one task per day. Mark tasks complete as
/// you go; tempo keeps your streaks, spots missed days, suggests how to
/// catch up and tells you whether you are ahead of your deadline.
#[derive(Parser)]
#[command(version, about, name = "tempo")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/tempo/tempo.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print results as pretty JSON instead of markdown
    #[arg(long, global = true)]
    pub json: bool,

    /// Evaluate analytics as of this UTC date (YYYY-MM-DD) instead of today
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    pub today: Option<Date>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the tempo CLI
///
/// - `goal`: create, list, show and delete goals
/// - `task`: list a goal's tasks and mark them complete or pending
/// - `stats`: progress analytics for one goal
/// - `dashboard`: totals across all goals (the default)
#[derive(Subcommand)]
pub enum Commands {
    /// Manage goals
    #[command(alias = "g")]
    Goal {
        #[command(subcommand)]
        command: GoalCommands,
    },
    /// Manage the daily tasks of a goal
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Progress analytics for a goal
    #[command(alias = "s")]
    Stats {
        #[command(subcommand)]
        command: StatsCommands,
    },
    /// Totals across every goal plus the most recent ones
    #[command(alias = "d")]
    Dashboard,
}
