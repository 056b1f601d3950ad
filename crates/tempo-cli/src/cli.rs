//! Subcommand arguments and the command runner.
//!
//! Argument structs carry the clap derives and convert into the core's
//! interface-agnostic parameters with `From`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```
//!
//! [`Cli`] runs a parsed command against a [`Tracker`] and prints the result
//! as markdown through the [`TerminalRenderer`], or as JSON with `--json`.

use std::fmt::Display;

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use jiff::civil::Date;
use serde::Serialize;
use tempo_core::{
    display::OperationStatus,
    models::{GoalSort, SortOrder, TaskStatus},
    params::*,
    Tracker,
};

use crate::renderer::TerminalRenderer;

/// Create a goal with a 30-day task ledger
#[derive(Args)]
pub struct CreateGoalArgs {
    /// What you want to learn
    pub title: String,
    /// Your current level
    #[arg(short, long, value_enum, default_value_t = LevelArg::Beginner)]
    pub level: LevelArg,
    /// Minutes you can spend per day
    #[arg(short, long, default_value_t = 60)]
    pub minutes: u32,
    /// Finish by this date (YYYY-MM-DD)
    #[arg(long)]
    pub deadline: Option<String>,
    /// Optional description providing more context about the goal
    #[arg(short, long)]
    pub description: Option<String>,
    /// Backdate the plan so day 1 falls on this date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,
    /// Use the plain "Day N: Learning Module" ledger instead of a roadmap
    #[arg(long)]
    pub no_roadmap: bool,
}

impl From<CreateGoalArgs> for CreateGoal {
    fn from(val: CreateGoalArgs) -> Self {
        CreateGoal {
            title: val.title,
            description: val.description,
            level: val.level.as_str().to_string(),
            time_per_day: val.minutes,
            deadline: val.deadline,
            started_on: val.start,
            generate_roadmap: !val.no_roadmap,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    Beginner,
    Intermediate,
    Advanced,
}

impl LevelArg {
    fn as_str(self) -> &'static str {
        match self {
            LevelArg::Beginner => "beginner",
            LevelArg::Intermediate => "intermediate",
            LevelArg::Advanced => "advanced",
        }
    }
}

/// List goals one page at a time
#[derive(Args)]
pub struct ListGoalsArgs {
    /// Page to show, starting at 1
    #[arg(long)]
    pub page: Option<u32>,
    /// Goals per page (at most 100)
    #[arg(long)]
    pub per_page: Option<u32>,
    /// Column to sort by
    #[arg(long, value_enum, default_value_t = SortArg::CreatedAt)]
    pub sort: SortArg,
    /// Sort direction
    #[arg(long, value_enum, default_value_t = OrderArg::Desc)]
    pub order: OrderArg,
}

impl From<ListGoalsArgs> for ListGoals {
    fn from(val: ListGoalsArgs) -> Self {
        ListGoals {
            page: val.page,
            per_page: val.per_page,
            sort: val.sort.into(),
            order: val.order.into(),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    #[value(name = "created_at")]
    CreatedAt,
    Title,
    Level,
}

impl From<SortArg> for GoalSort {
    fn from(val: SortArg) -> Self {
        match val {
            SortArg::CreatedAt => GoalSort::CreatedAt,
            SortArg::Title => GoalSort::Title,
            SortArg::Level => GoalSort::Level,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    Asc,
    Desc,
}

impl From<OrderArg> for SortOrder {
    fn from(val: OrderArg) -> Self {
        match val {
            OrderArg::Asc => SortOrder::Asc,
            OrderArg::Desc => SortOrder::Desc,
        }
    }
}

/// Any command addressed by a single ID
#[derive(Args)]
pub struct IdArgs {
    /// Unique identifier
    pub id: u64,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a goal with all its tasks
#[derive(Args)]
pub struct DeleteGoalArgs {
    /// ID of the goal to delete
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteGoalArgs> for DeleteGoal {
    fn from(val: DeleteGoalArgs) -> Self {
        DeleteGoal {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a goal with a 30-day task ledger
    #[command(alias = "c")]
    Create(CreateGoalArgs),
    /// List goals
    #[command(aliases = ["l", "ls"])]
    List(ListGoalsArgs),
    /// Show a goal with its tasks
    #[command(alias = "s")]
    Show(IdArgs),
    /// Delete a goal permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteGoalArgs),
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List a goal's tasks in day order
    #[command(aliases = ["l", "ls"])]
    List {
        /// ID of the goal
        goal_id: u64,
    },
    /// Show a single task
    #[command(alias = "s")]
    Show(IdArgs),
    /// Mark a task completed
    #[command(aliases = ["c", "done"])]
    Complete(IdArgs),
    /// Mark a task pending again
    #[command(alias = "r")]
    Reopen(IdArgs),
}

/// Per-goal analytics
#[derive(Args)]
pub struct GoalArgs {
    /// ID of the goal
    pub goal_id: u64,
}

#[derive(Subcommand)]
pub enum StatsCommands {
    /// The stored progress snapshot
    #[command(alias = "p")]
    Progress {
        /// ID of the goal
        goal_id: u64,
        /// Rebuild the snapshot from the task ledger first
        #[arg(long)]
        refresh: bool,
    },
    /// Completion, streaks, recent activity and pace
    #[command(alias = "s")]
    Summary(GoalArgs),
    /// Pending tasks whose day has come
    #[command(alias = "m")]
    Missed(GoalArgs),
    /// A prioritized plan for overdue tasks
    #[command(alias = "c")]
    Catchup(GoalArgs),
    /// Reminder, velocity and recommendations
    #[command(alias = "i")]
    Insights(GoalArgs),
    /// Completions per calendar week
    #[command(alias = "w")]
    Weekly {
        /// ID of the goal
        goal_id: u64,
        /// Number of weeks, current week included
        #[arg(long)]
        weeks: Option<u32>,
    },
    /// One row per plan day
    #[command(alias = "d")]
    Daily(GoalArgs),
    /// This goal against the average of all goals
    Compare(GoalArgs),
}

/// Runs parsed commands against a tracker.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
    json: bool,
    today: Option<Date>,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer, json: bool, today: Option<Date>) -> Self {
        Self {
            tracker,
            renderer,
            json,
            today,
        }
    }

    fn output<D: Display, S: Serialize>(&self, markdown: &D, data: &S) -> Result<()> {
        if self.json {
            let json = serde_json::to_string_pretty(data).context("Failed to serialize output")?;
            println!("{json}");
            Ok(())
        } else {
            self.renderer.render(&markdown.to_string())
        }
    }

    fn emit<T: Display + Serialize>(&self, value: &T) -> Result<()> {
        self.output(value, value)
    }

    fn query(&self, goal_id: u64) -> AnalyticsQuery {
        AnalyticsQuery {
            goal_id,
            today: self.today,
        }
    }

    pub async fn handle_goal_command(&self, command: GoalCommands) -> Result<()> {
        match command {
            GoalCommands::Create(args) => {
                let result = self
                    .tracker
                    .create_goal_with_result(&args.into())
                    .await
                    .context("Failed to create goal")?;
                self.output(&result, &result.resource)
            }
            GoalCommands::List(args) => self.list_goals(&args.into()).await,
            GoalCommands::Show(args) => {
                let goal = self
                    .tracker
                    .show_goal(&args.into())
                    .await
                    .context("Failed to show goal")?;
                self.emit(&goal)
            }
            GoalCommands::Delete(args) => {
                let params = DeleteGoal::from(args);
                if !params.confirmed {
                    return self.emit(&OperationStatus::failure(format!(
                        "Goal {} was not deleted. Re-run with --confirm to delete it and its tasks.",
                        params.id
                    )));
                }
                let result = self
                    .tracker
                    .delete_goal_with_result(&params)
                    .await
                    .context("Failed to delete goal")?;
                self.output(&result, &result.resource)
            }
        }
    }

    pub async fn list_goals(&self, params: &ListGoals) -> Result<()> {
        let page = self
            .tracker
            .list_goals_page(params)
            .await
            .context("Failed to list goals")?;
        self.emit(&page)
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::List { goal_id } => {
                let tasks = self
                    .tracker
                    .list_tasks_with_result(&Id { id: goal_id })
                    .await
                    .context("Failed to list tasks")?;
                self.emit(&tasks)
            }
            TaskCommands::Show(args) => {
                let id = args.id;
                let task = self
                    .tracker
                    .get_task(&args.into())
                    .await
                    .context("Failed to show task")?
                    .with_context(|| format!("Task with ID {id} not found"))?;
                self.emit(&task)
            }
            TaskCommands::Complete(args) => self.set_status(args.id, TaskStatus::Completed).await,
            TaskCommands::Reopen(args) => self.set_status(args.id, TaskStatus::Pending).await,
        }
    }

    async fn set_status(&self, task_id: u64, status: TaskStatus) -> Result<()> {
        let result = self
            .tracker
            .update_task_status_with_result(&UpdateTaskStatus { task_id, status })
            .await
            .context("Failed to update task")?;
        self.output(&result, &result.resource)
    }

    pub async fn handle_stats_command(&self, command: StatsCommands) -> Result<()> {
        match command {
            StatsCommands::Progress { goal_id, refresh } => {
                let params = Id { id: goal_id };
                let progress = if refresh {
                    self.tracker.refresh_progress(&params).await
                } else {
                    self.tracker.stored_progress(&params).await
                };
                self.emit(&progress.context("Failed to load progress")?)
            }
            StatsCommands::Summary(args) => {
                let snapshot = self
                    .tracker
                    .goal_analytics(&self.query(args.goal_id))
                    .await
                    .context("Failed to compute analytics")?;
                self.emit(&snapshot)
            }
            StatsCommands::Missed(args) => {
                let missed = self
                    .tracker
                    .missed_days_with_result(&self.query(args.goal_id))
                    .await
                    .context("Failed to detect missed days")?;
                self.emit(&missed)
            }
            StatsCommands::Catchup(args) => {
                let plan = self
                    .tracker
                    .catchup_plan(&self.query(args.goal_id))
                    .await
                    .context("Failed to build catch-up plan")?;
                self.emit(&plan)
            }
            StatsCommands::Insights(args) => {
                let insights = self
                    .tracker
                    .goal_insights(&self.query(args.goal_id))
                    .await
                    .context("Failed to compute insights")?;
                self.emit(&insights)
            }
            StatsCommands::Weekly { goal_id, weeks } => {
                let weekly = self
                    .tracker
                    .weekly_progress(&WeeklyQuery {
                        goal_id,
                        today: self.today,
                        weeks,
                    })
                    .await
                    .context("Failed to compute weekly progress")?;
                self.emit(&weekly)
            }
            StatsCommands::Daily(args) => {
                let daily = self
                    .tracker
                    .daily_breakdown(&Id { id: args.goal_id })
                    .await
                    .context("Failed to build daily breakdown")?;
                self.emit(&daily)
            }
            StatsCommands::Compare(args) => {
                let comparison = self
                    .tracker
                    .compare_goal(&Id { id: args.goal_id })
                    .await
                    .context("Failed to compare goal")?;
                self.emit(&comparison)
            }
        }
    }

    pub async fn dashboard(&self) -> Result<()> {
        let dashboard = self
            .tracker
            .dashboard()
            .await
            .context("Failed to build dashboard")?;
        self.emit(&dashboard)
    }
}
