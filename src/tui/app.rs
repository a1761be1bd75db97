use std::io;
use std::time::{Duration, Instant};

use chrono::{Datelike, Local, NaiveDate};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::config::load_config;
use crate::model::task::Task;
use crate::ops::order::{CategoryFilter, SortBy, displayed_tasks, habit_tasks};
use crate::ops::store::{PlannerEvent, PlannerStore};
use crate::ops::timer::SessionTimer;

use super::input;
use super::input::edit::EditForm;
use super::render;
use super::theme::Theme;

/// Which view is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Today's schedule timeline
    Schedule,
    /// Today's habits + weekly overview
    Habits,
    /// Monthly statistics (calendar heatmap)
    Stats,
}

impl View {
    pub fn next(self) -> View {
        match self {
            View::Schedule => View::Habits,
            View::Habits => View::Stats,
            View::Stats => View::Schedule,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            View::Schedule => "오늘의 할 일",
            View::Habits => "오늘의 습관",
            View::Stats => "월간 통계",
        }
    }
}

/// Main application state
pub struct App {
    pub store: PlannerStore,
    pub view: View,
    pub filter: CategoryFilter,
    pub sort_by: SortBy,
    pub timer: SessionTimer,
    pub theme: Theme,
    pub today: NaiveDate,
    pub should_quit: bool,
    pub show_help: bool,
    /// Cursor into the displayed (filtered + sorted) schedule
    pub schedule_cursor: usize,
    /// Cursor into the habit list
    pub habits_cursor: usize,
    /// Month shown in the stats view
    pub stats_month: (i32, u32),
    /// Day-of-month selected in the stats heatmap
    pub selected_day: Option<u32>,
    /// Modal edit form, when open
    pub edit: Option<EditForm>,
    /// Transient message shown in the status row (e.g. a failed event)
    pub status_line: Option<String>,
}

impl App {
    pub fn new(store: PlannerStore) -> Self {
        let config = load_config();
        let timer = SessionTimer::new(store.tasks());
        let today = Local::now().date_naive();
        App {
            store,
            view: View::Schedule,
            filter: CategoryFilter::All,
            sort_by: SortBy::StartTime,
            timer,
            theme: Theme::from_config(&config.ui),
            today,
            should_quit: false,
            show_help: false,
            schedule_cursor: 0,
            habits_cursor: 0,
            stats_month: (today.year(), today.month()),
            selected_day: None,
            edit: None,
            status_line: None,
        }
    }

    /// The schedule timeline as currently filtered and sorted
    pub fn displayed(&self) -> Vec<&Task> {
        displayed_tasks(self.store.tasks(), self.filter, self.sort_by)
    }

    pub fn habits(&self) -> Vec<&Task> {
        habit_tasks(self.store.tasks())
    }

    /// Apply a store event; failures land in the status row instead of
    /// tearing down the TUI. The timer re-syncs after every mutation so an
    /// active-identity change resets it immediately, not on the next tick.
    pub fn dispatch(&mut self, event: PlannerEvent) {
        self.status_line = None;
        if let Err(e) = self.store.apply(event) {
            self.status_line = Some(e.to_string());
        }
        self.timer.sync(self.store.tasks());
        self.clamp_cursors();
    }

    pub fn clamp_cursors(&mut self) {
        let shown = self.displayed().len();
        if self.schedule_cursor >= shown {
            self.schedule_cursor = shown.saturating_sub(1);
        }
        let habits = self.habits().len();
        if self.habits_cursor >= habits {
            self.habits_cursor = habits.saturating_sub(1);
        }
    }

    /// The task under the cursor in the current view, if any
    pub fn selected_task_id(&self) -> Option<u32> {
        match self.view {
            View::Schedule => self.displayed().get(self.schedule_cursor).map(|t| t.id),
            View::Habits | View::Stats => self.habits().get(self.habits_cursor).map(|t| t.id),
        }
    }
}

/// Run the TUI application
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(PlannerStore::demo());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    // Single tick source: the loop advances the session timer once per
    // elapsed wall-clock second. Dropping out of the loop tears it down.
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        while last_tick.elapsed() >= Duration::from_secs(1) {
            app.timer.sync(app.store.tasks());
            app.timer.tick();
            last_tick += Duration::from_secs(1);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::TaskStatus;

    #[test]
    fn new_app_starts_on_schedule_view() {
        let app = App::new(PlannerStore::demo());
        assert_eq!(app.view, View::Schedule);
        assert_eq!(app.filter, CategoryFilter::All);
        assert_eq!(app.sort_by, SortBy::StartTime);
        assert_eq!(app.timer.active_id(), Some(1));
    }

    #[test]
    fn dispatch_resyncs_timer() {
        let mut app = App::new(PlannerStore::demo());
        app.dispatch(PlannerEvent::ToggleStatus { id: 1 });
        assert_eq!(app.store.get(1).unwrap().status, TaskStatus::Completed);
        assert_eq!(app.timer.active_id(), Some(2));
        assert_eq!(app.timer.elapsed_secs(), 0);
    }

    #[test]
    fn dispatch_failure_sets_status_line() {
        let mut app = App::new(PlannerStore::demo());
        app.dispatch(PlannerEvent::ToggleStatus { id: 999 });
        assert_eq!(app.status_line.as_deref(), Some("task not found: 999"));
    }

    #[test]
    fn cursor_clamps_when_filter_shrinks_list() {
        let mut app = App::new(PlannerStore::demo());
        app.schedule_cursor = 4;
        app.filter = CategoryFilter::Only(crate::model::task::TaskCategory::Meal);
        app.clamp_cursors();
        assert_eq!(app.schedule_cursor, 0);
    }

    #[test]
    fn views_cycle() {
        assert_eq!(View::Schedule.next(), View::Habits);
        assert_eq!(View::Habits.next(), View::Stats);
        assert_eq!(View::Stats.next(), View::Schedule);
    }
}
