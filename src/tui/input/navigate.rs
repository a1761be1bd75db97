use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::order::CategoryFilter;
use crate::ops::stats::days_in_month;
use crate::ops::store::PlannerEvent;
use crate::tui::app::{App, View};

use super::edit::EditForm;

pub fn handle_navigate_key(app: &mut App, key: KeyEvent) {
    // Keys shared by every view
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            return;
        }
        KeyCode::Tab => {
            app.view = app.view.next();
            return;
        }
        KeyCode::Char('1') => {
            app.view = View::Schedule;
            return;
        }
        KeyCode::Char('2') => {
            app.view = View::Habits;
            return;
        }
        KeyCode::Char('3') => {
            app.view = View::Stats;
            return;
        }
        _ => {}
    }

    match app.view {
        View::Schedule => handle_schedule_key(app, key),
        View::Habits => handle_habits_key(app, key),
        View::Stats => handle_stats_key(app, key),
    }
}

fn handle_schedule_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let shown = app.displayed().len();
            if shown > 0 && app.schedule_cursor + 1 < shown {
                app.schedule_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.schedule_cursor = app.schedule_cursor.saturating_sub(1);
        }
        KeyCode::Char(' ') => {
            if let Some(id) = app.selected_task_id() {
                app.dispatch(PlannerEvent::ToggleStatus { id });
            }
        }
        KeyCode::Char('a') => {
            app.dispatch(PlannerEvent::AddTask { title: None });
            // Adding always resets the filter so the new entry is visible;
            // unscheduled entries sort last, so jump the cursor there
            app.filter = CategoryFilter::All;
            app.schedule_cursor = app.displayed().len().saturating_sub(1);
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(id) = app.selected_task_id()
                && let Some(task) = app.store.get(id)
            {
                app.edit = Some(EditForm::from_task(task));
            }
        }
        KeyCode::Char('f') => {
            app.filter = app.filter.cycled();
            app.clamp_cursors();
        }
        KeyCode::Char('s') => {
            app.sort_by = app.sort_by.toggled();
        }
        _ => {}
    }
}

fn handle_habits_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            let habits = app.habits().len();
            if habits > 0 && app.habits_cursor + 1 < habits {
                app.habits_cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.habits_cursor = app.habits_cursor.saturating_sub(1);
        }
        KeyCode::Char(' ') => {
            if let Some(id) = app.selected_task_id() {
                app.dispatch(PlannerEvent::ToggleStatus { id });
            }
        }
        KeyCode::Char('e') | KeyCode::Enter => {
            if let Some(id) = app.selected_task_id()
                && let Some(task) = app.store.get(id)
            {
                app.edit = Some(EditForm::from_task(task));
            }
        }
        _ => {}
    }
}

fn handle_stats_key(app: &mut App, key: KeyEvent) {
    let (year, month) = app.stats_month;
    match key.code {
        KeyCode::Char('[') => {
            app.stats_month = if month == 1 {
                (year - 1, 12)
            } else {
                (year, month - 1)
            };
            app.selected_day = None;
        }
        KeyCode::Char(']') => {
            app.stats_month = if month == 12 {
                (year + 1, 1)
            } else {
                (year, month + 1)
            };
            app.selected_day = None;
        }
        KeyCode::Left => move_selected_day(app, -1),
        KeyCode::Right => move_selected_day(app, 1),
        KeyCode::Up => move_selected_day(app, -7),
        KeyCode::Down => move_selected_day(app, 7),
        KeyCode::Esc => app.selected_day = None,
        _ => {}
    }
}

fn move_selected_day(app: &mut App, delta: i32) {
    let (year, month) = app.stats_month;
    let last = days_in_month(year, month) as i32;
    let day = match app.selected_day {
        Some(d) => (d as i32 + delta).clamp(1, last),
        // First arrow press selects today when looking at the current
        // month, otherwise day 1
        None => {
            use chrono::Datelike;
            if (app.today.year(), app.today.month()) == (year, month) {
                app.today.day() as i32
            } else {
                1
            }
        }
    };
    app.selected_day = Some(day as u32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{TaskCategory, TaskStatus};
    use crate::ops::order::SortBy;
    use crate::ops::store::PlannerStore;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn demo_app() -> App {
        App::new(PlannerStore::demo())
    }

    #[test]
    fn space_toggles_selected_entry() {
        let mut app = demo_app();
        handle_navigate_key(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.store.get(1).unwrap().status, TaskStatus::Completed);
    }

    #[test]
    fn cursor_respects_bounds() {
        let mut app = demo_app();
        for _ in 0..20 {
            handle_navigate_key(&mut app, key(KeyCode::Char('j')));
        }
        assert_eq!(app.schedule_cursor, app.displayed().len() - 1);
        for _ in 0..20 {
            handle_navigate_key(&mut app, key(KeyCode::Char('k')));
        }
        assert_eq!(app.schedule_cursor, 0);
    }

    #[test]
    fn add_resets_filter_and_selects_new_entry() {
        let mut app = demo_app();
        app.filter = CategoryFilter::Only(TaskCategory::Meal);
        handle_navigate_key(&mut app, key(KeyCode::Char('a')));
        assert_eq!(app.filter, CategoryFilter::All);
        let selected = app.selected_task_id().unwrap();
        assert_eq!(selected, 9); // fixture ids run 1..=8
    }

    #[test]
    fn f_cycles_filter_and_s_toggles_sort() {
        let mut app = demo_app();
        handle_navigate_key(&mut app, key(KeyCode::Char('f')));
        assert_eq!(app.filter, CategoryFilter::Only(TaskCategory::Work));
        handle_navigate_key(&mut app, key(KeyCode::Char('s')));
        assert_eq!(app.sort_by, SortBy::Duration);
    }

    #[test]
    fn enter_opens_edit_form() {
        let mut app = demo_app();
        handle_navigate_key(&mut app, key(KeyCode::Enter));
        assert!(app.edit.is_some());
        assert_eq!(app.edit.as_ref().unwrap().task_id, 1);
    }

    #[test]
    fn habit_view_toggles_habits() {
        let mut app = demo_app();
        app.view = View::Habits;
        handle_navigate_key(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.store.get(6).unwrap().status, TaskStatus::Completed);
    }

    #[test]
    fn month_navigation_wraps_across_years() {
        let mut app = demo_app();
        app.view = View::Stats;
        app.stats_month = (2026, 1);
        handle_navigate_key(&mut app, key(KeyCode::Char('[')));
        assert_eq!(app.stats_month, (2025, 12));
        handle_navigate_key(&mut app, key(KeyCode::Char(']')));
        assert_eq!(app.stats_month, (2026, 1));
    }

    #[test]
    fn day_selection_clamps_to_month() {
        let mut app = demo_app();
        app.view = View::Stats;
        // Pin "today" so the first arrow press can't land on it
        app.today = chrono::NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        app.stats_month = (2026, 2);
        handle_navigate_key(&mut app, key(KeyCode::Left)); // selects day 1
        assert_eq!(app.selected_day, Some(1));
        handle_navigate_key(&mut app, key(KeyCode::Left));
        assert_eq!(app.selected_day, Some(1));
        for _ in 0..10 {
            handle_navigate_key(&mut app, key(KeyCode::Down));
        }
        assert_eq!(app.selected_day, Some(28));
    }
}
