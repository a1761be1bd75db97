use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "haru", about = concat!("haru v", env!("CARGO_PKG_VERSION"), " - your day, one screen"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List today's schedule (filtered and sorted)
    List(ListArgs),
    /// List today's habits with streaks
    Habits,
    /// Add a schedule entry with placeholder values
    Add(AddArgs),
    /// Toggle an entry between pending and completed
    Toggle(ToggleArgs),
    /// Edit an entry's fields (duration is re-derived)
    Set(SetArgs),
    /// Show habit statistics for a month
    Stats(StatsArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// Filter by category (work, home, meal, personal)
    #[arg(long)]
    pub category: Option<String>,
    /// Sort order: start (default) or duration
    #[arg(long, default_value = "start")]
    pub sort: String,
}

#[derive(Args)]
pub struct AddArgs {
    /// Title for the new entry (default: placeholder)
    pub title: Option<String>,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Entry id
    pub id: u32,
}

#[derive(Args)]
pub struct SetArgs {
    /// Entry id
    pub id: u32,
    /// New title
    #[arg(long)]
    pub title: Option<String>,
    /// New category (work, home, meal, personal)
    #[arg(long)]
    pub category: Option<String>,
    /// New start time, e.g. "오전 11:15"
    #[arg(long)]
    pub start: Option<String>,
    /// New end time, e.g. "오후 1:00"
    #[arg(long)]
    pub end: Option<String>,
    /// Recurrence (none, daily, weekly, monthly)
    #[arg(long)]
    pub recur: Option<String>,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Month to report, as YYYY-MM (default: current month)
    #[arg(long)]
    pub month: Option<String>,
}
