use chrono::{Datelike, Local, NaiveDate};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::clock::{format_time_label, parse_time_to_minutes};
use crate::model::task::{Recurrence, Task, TaskCategory};
use crate::ops::order::{CategoryFilter, SortBy, displayed_tasks, habit_tasks};
use crate::ops::stats;
use crate::ops::store::{PlannerEvent, PlannerStore};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;

    match cli.command {
        // No subcommand → TUI, handled in main.rs
        None => Ok(()),
        Some(cmd) => match cmd {
            Commands::List(args) => cmd_list(args, json),
            Commands::Habits => cmd_habits(json),
            Commands::Add(args) => cmd_add(args, json),
            Commands::Toggle(args) => cmd_toggle(args, json),
            Commands::Set(args) => cmd_set(args, json),
            Commands::Stats(args) => cmd_stats(args, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

// Every invocation starts from the demo fixture; there is no persistence,
// so write commands report the resulting state and exit.
fn demo_store() -> PlannerStore {
    PlannerStore::demo()
}

fn parse_filter(category: Option<&str>) -> Result<CategoryFilter, String> {
    match category {
        None => Ok(CategoryFilter::All),
        Some(s) => TaskCategory::from_arg(s)
            .map(CategoryFilter::Only)
            .ok_or_else(|| format!("unknown category: {}", s)),
    }
}

fn parse_sort(sort: &str) -> Result<SortBy, String> {
    match sort {
        "start" => Ok(SortBy::StartTime),
        "duration" => Ok(SortBy::Duration),
        other => Err(format!("unknown sort order: {} (use start|duration)", other)),
    }
}

fn parse_month(arg: Option<&str>, today: NaiveDate) -> Result<(i32, u32), String> {
    let Some(s) = arg else {
        return Ok((today.year(), today.month()));
    };
    let parsed = s.split_once('-').and_then(|(y, m)| {
        let year: i32 = y.parse().ok()?;
        let month: u32 = m.parse().ok()?;
        (1..=12).contains(&month).then_some((year, month))
    });
    parsed.ok_or_else(|| format!("invalid month: {} (use YYYY-MM)", s))
}

// Re-render a label that parses so "오후 3:5" is stored as "오후 3:05";
// anything unparsable (including the sentinel) passes through unchanged.
fn normalize_label(label: String) -> String {
    match parse_time_to_minutes(&label) {
        Some(minutes) => format_time_label(minutes),
        None => label,
    }
}

fn checkbox(task: &Task) -> &'static str {
    if task.is_done() { "[x]" } else { "[ ]" }
}

fn time_range(task: &Task) -> String {
    let mut out = task.start_time.clone();
    if !task.end_time.is_empty() {
        out.push('~');
        out.push_str(&task.end_time);
    }
    if !task.duration.is_empty() {
        out.push_str(&format!(" ({})", task.duration));
    }
    out
}

fn print_task_line(task: &Task) {
    println!(
        "{} {:>3}  {:<10} {}  {}",
        checkbox(task),
        task.id,
        task.category.label(),
        time_range(task),
        task.title
    );
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(args: ListArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = demo_store();
    let filter = parse_filter(args.category.as_deref())?;
    let sort_by = parse_sort(&args.sort)?;
    let shown = displayed_tasks(store.tasks(), filter, sort_by);

    if json {
        let out = ScheduleJson {
            filter: filter.label().to_string(),
            sort: sort_by.label().to_string(),
            tasks: shown.iter().map(|t| TaskJson::from(*t)).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!("선택된 카테고리에 일정이 없어요.");
        return Ok(());
    }
    for task in shown {
        print_task_line(task);
    }
    Ok(())
}

fn cmd_habits(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = demo_store();
    let today = Local::now().date_naive();
    let habits = habit_tasks(store.tasks());
    let rate = stats::daily_rate(&habits);

    if json {
        let out = HabitsJson {
            daily_rate: rate,
            habits: habits
                .iter()
                .map(|h| HabitJson {
                    id: h.id,
                    title: h.title.clone(),
                    status: h.status,
                    streak_days: stats::current_streak(h, today),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("오늘의 습관 달성률: {}%", rate);
    for habit in habits {
        println!(
            "{} {:>3}  {}  (연속 {}일)",
            checkbox(habit),
            habit.id,
            habit.title,
            stats::current_streak(habit, today)
        );
    }
    Ok(())
}

fn cmd_stats(args: StatsArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = demo_store();
    let today = Local::now().date_naive();
    let (year, month) = parse_month(args.month.as_deref(), today)?;
    let habits = habit_tasks(store.tasks());
    let grid = stats::monthly_heatmap(&habits, today, year, month);
    let top = stats::top_habits(&habits, today, year, month);
    let rate = stats::daily_rate(&habits);

    if json {
        let out = StatsJson {
            month: format!("{}-{:02}", year, month),
            daily_rate: rate,
            days: grid
                .rates
                .iter()
                .enumerate()
                .map(|(i, rate)| HeatDayJson {
                    day: i as u32 + 1,
                    rate: *rate,
                })
                .collect(),
            top_habits: top
                .iter()
                .map(|(habit, count)| TopHabitJson {
                    id: habit.id,
                    title: habit.title.clone(),
                    completed_days: *count,
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}년 {}월 습관 통계", year, month);
    println!("오늘의 달성률: {}%", rate);
    println!();
    println!(" {}", stats::WEEKDAY_LABELS.join(" "));

    // Heat glyph per day, Sunday-first rows
    const HEAT: [&str; 6] = ["──", "░░", "▒▒", "▒▓", "▓▓", "██"];
    let mut row: Vec<String> = vec!["  ".to_string(); grid.leading_blanks as usize];
    for (i, day_rate) in grid.rates.iter().enumerate() {
        let cell = match day_rate {
            Some(r) => HEAT[stats::heat_level(*r) as usize].to_string(),
            None => "  ".to_string(),
        };
        row.push(cell);
        let weekday_full = (row.len()) % 7 == 0;
        let last = i + 1 == grid.rates.len();
        if weekday_full || last {
            println!(" {}", row.join(" "));
            row.clear();
        }
    }

    if !top.is_empty() {
        println!();
        println!("이번 달 TOP {} 습관", top.len());
        for (rank, (habit, count)) in top.iter().enumerate() {
            println!("  {}. {} — {}회", rank + 1, habit.title, count);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands (ephemeral: the store is rebuilt from the fixture each run)
// ---------------------------------------------------------------------------

fn cmd_add(args: AddArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = demo_store();
    store.apply(PlannerEvent::AddTask { title: args.title })?;
    let added = store.tasks().last().ok_or("store is empty after add")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&TaskJson::from(added))?);
        return Ok(());
    }
    println!("added {} — {}", added.id, added.title);
    Ok(())
}

fn cmd_toggle(args: ToggleArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = demo_store();
    store.apply(PlannerEvent::ToggleStatus { id: args.id })?;
    let task = store.get(args.id).ok_or("task vanished after toggle")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&TaskJson::from(task))?);
        return Ok(());
    }
    print_task_line(task);
    Ok(())
}

fn cmd_set(args: SetArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = demo_store();
    let mut task = store
        .get(args.id)
        .ok_or_else(|| format!("task not found: {}", args.id))?
        .clone();

    if let Some(title) = args.title {
        task.title = title;
    }
    if let Some(cat) = args.category.as_deref() {
        task.category =
            TaskCategory::from_arg(cat).ok_or_else(|| format!("unknown category: {}", cat))?;
    }
    if let Some(start) = args.start {
        task.start_time = normalize_label(start);
    }
    if let Some(end) = args.end {
        task.end_time = normalize_label(end);
    }
    if let Some(recur) = args.recur.as_deref() {
        task.recurrence =
            Recurrence::from_arg(recur).ok_or_else(|| format!("unknown recurrence: {}", recur))?;
    }

    store.apply(PlannerEvent::SaveEdit { task })?;
    let saved = store.get(args.id).ok_or("task vanished after edit")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&TaskJson::from(saved))?);
        return Ok(());
    }
    print_task_line(saved);
    Ok(())
}
