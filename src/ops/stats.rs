//! Habit statistics: daily rate, weekly overview, streaks, and the monthly
//! calendar heatmap.
//!
//! Historical completion data is simulated — days before today get a
//! deterministic seeded boolean per (habit id, day offset), today reflects
//! the live store, and future days have no data. The generator contract is
//! `fract(sin(seed) * 10000) > 0.5`; consumers treat its output as opaque.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate};
use indexmap::IndexMap;

use crate::model::task::Task;

/// Sunday-first weekday headers for calendar layouts
pub const WEEKDAY_LABELS: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// The deterministic stand-in for historical data
pub fn seeded_done(seed: f64) -> bool {
    let x = seed.sin() * 10000.0;
    // floor-based fraction: always in [0, 1) even for negative x
    x - x.floor() > 0.5
}

/// Seed composition for one (habit, day-offset) cell
fn day_seed(habit_id: u32, day_offset: i64) -> f64 {
    (habit_id as i64 * 127 + day_offset) as f64
}

/// Whether `habit` counts as done on `date`. Live status for today, seeded
/// history for the past, `None` for the future.
pub fn habit_done_on(habit: &Task, date: NaiveDate, today: NaiveDate) -> Option<bool> {
    if date > today {
        return None;
    }
    if date == today {
        return Some(habit.is_done());
    }
    let offset = (today - date).num_days();
    Some(seeded_done(day_seed(habit.id, offset)))
}

/// One day's completion record across all habits
#[derive(Debug, Clone)]
pub struct DayRecord {
    pub completed: u32,
    pub by_habit: HashMap<u32, bool>,
}

/// Date-keyed history, oldest first
pub type History = IndexMap<NaiveDate, DayRecord>;

/// Per-habit completion records for every day in `[from, to]` that is not
/// in the future.
pub fn simulate_history(
    habits: &[&Task],
    today: NaiveDate,
    from: NaiveDate,
    to: NaiveDate,
) -> History {
    let mut history = History::new();
    let mut date = from;
    while date <= to {
        if date > today {
            break;
        }
        let mut by_habit = HashMap::new();
        let mut completed = 0;
        for habit in habits {
            let done = habit_done_on(habit, date, today).unwrap_or(false);
            if done {
                completed += 1;
            }
            by_habit.insert(habit.id, done);
        }
        history.insert(date, DayRecord { completed, by_habit });
        date += Duration::days(1);
    }
    history
}

/// Today's completion rate across habits, rounded percent; 0 with no habits
pub fn daily_rate(habits: &[&Task]) -> u32 {
    if habits.is_empty() {
        return 0;
    }
    let completed = habits.iter().filter(|h| h.is_done()).count();
    (completed as f64 / habits.len() as f64 * 100.0).round() as u32
}

/// Rate for one day of the weekly overview; `None` for future days
#[derive(Debug, Clone, Copy)]
pub struct DayRate {
    pub date: NaiveDate,
    pub rate: Option<u32>,
}

/// The current week, Sunday through Saturday, with the per-day rate
pub fn weekly_overview(habits: &[&Task], today: NaiveDate) -> Vec<DayRate> {
    let sunday = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
    (0..7)
        .map(|i| {
            let date = sunday + Duration::days(i);
            let rate = if date > today || habits.is_empty() {
                None
            } else {
                let done = habits
                    .iter()
                    .filter(|h| habit_done_on(h, date, today) == Some(true))
                    .count();
                Some((done as f64 / habits.len() as f64 * 100.0).round() as u32)
            };
            DayRate { date, rate }
        })
        .collect()
}

/// Consecutive done-days counting back from today. A still-pending today
/// does not break the streak; it just doesn't count yet.
pub fn current_streak(habit: &Task, today: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut offset = 0i64;
    if habit.is_done() {
        streak += 1;
    }
    offset += 1;
    loop {
        let date = today - Duration::days(offset);
        match habit_done_on(habit, date, today) {
            Some(true) => streak += 1,
            _ => break,
        }
        offset += 1;
    }
    streak
}

/// Number of days in a calendar month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_y, next_m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_y, next_m, 1)
        .and_then(|d| d.pred_opt())
        .map_or(30, |d| d.day())
}

/// A month laid out for a Sunday-first calendar grid
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Blank cells before day 1 in a Sunday-first row
    pub leading_blanks: u32,
    /// Completion rate per day of month (index 0 = day 1); `None` for
    /// future days
    pub rates: Vec<Option<u32>>,
}

impl MonthGrid {
    pub fn rate_for_day(&self, day: u32) -> Option<u32> {
        self.rates.get(day.saturating_sub(1) as usize).copied().flatten()
    }
}

/// Per-day completion rates for one calendar month
pub fn monthly_heatmap(habits: &[&Task], today: NaiveDate, year: i32, month: u32) -> MonthGrid {
    let first = NaiveDate::from_ymd_opt(year, month, 1);
    let leading_blanks = first.map_or(0, |d| d.weekday().num_days_from_sunday());
    let total = habits.len();
    let days = days_in_month(year, month);

    let history = match first {
        Some(first) => {
            let last = NaiveDate::from_ymd_opt(year, month, days).unwrap_or(first);
            simulate_history(habits, today, first, last)
        }
        None => History::new(),
    };

    let rates = (1..=days)
        .map(|day| {
            if total == 0 {
                return None;
            }
            let date = NaiveDate::from_ymd_opt(year, month, day)?;
            // Future days are absent from the history
            let record = history.get(&date)?;
            Some((record.completed as f64 / total as f64 * 100.0).round() as u32)
        })
        .collect();

    MonthGrid {
        year,
        month,
        leading_blanks,
        rates,
    }
}

/// Heat bucket for a day's rate: 0 (none) through 5 (100%)
pub fn heat_level(rate: u32) -> u8 {
    match rate {
        0 => 0,
        1..=24 => 1,
        25..=49 => 2,
        50..=74 => 3,
        75..=99 => 4,
        _ => 5,
    }
}

/// Top habits of a month by completed-day count, descending, at most three
pub fn top_habits<'a>(
    habits: &[&'a Task],
    today: NaiveDate,
    year: i32,
    month: u32,
) -> Vec<(&'a Task, u32)> {
    let mut counts: Vec<(&Task, u32)> = habits
        .iter()
        .map(|habit| {
            let done_days = (1..=days_in_month(year, month))
                .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
                .filter(|date| habit_done_on(habit, *date, today) == Some(true))
                .count() as u32;
            (*habit, done_days)
        })
        .filter(|(_, count)| *count > 0)
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(3);
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::demo_tasks;
    use crate::model::task::TaskStatus;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    fn habits_owned() -> Vec<Task> {
        demo_tasks().into_iter().filter(|t| t.is_habit).collect()
    }

    #[test]
    fn generator_is_deterministic() {
        for seed in [0.0, 1.0, 127.0, 893.5, -42.0] {
            assert_eq!(seeded_done(seed), seeded_done(seed));
        }
    }

    #[test]
    fn generator_fraction_stays_in_unit_interval() {
        // Negative sine values still produce a floor-based fraction
        for seed in -50..50 {
            let x = (seed as f64).sin() * 10000.0;
            let frac = x - x.floor();
            assert!((0.0..1.0).contains(&frac));
        }
    }

    #[test]
    fn today_uses_live_status() {
        let habits = habits_owned();
        let done = habits.iter().find(|h| h.is_done()).unwrap();
        let pending = habits.iter().find(|h| !h.is_done()).unwrap();
        assert_eq!(habit_done_on(done, today(), today()), Some(true));
        assert_eq!(habit_done_on(pending, today(), today()), Some(false));
    }

    #[test]
    fn future_has_no_data() {
        let habits = habits_owned();
        let tomorrow = today() + Duration::days(1);
        assert_eq!(habit_done_on(&habits[0], tomorrow, today()), None);
    }

    #[test]
    fn history_covers_past_range_only() {
        let habits = habits_owned();
        let refs: Vec<&Task> = habits.iter().collect();
        let from = today() - Duration::days(6);
        let to = today() + Duration::days(3);
        let history = simulate_history(&refs, today(), from, to);
        assert_eq!(history.len(), 7);
        assert_eq!(*history.keys().next().unwrap(), from);
        assert_eq!(*history.keys().last().unwrap(), today());
        for record in history.values() {
            assert_eq!(record.by_habit.len(), refs.len());
            assert_eq!(
                record.completed,
                record.by_habit.values().filter(|d| **d).count() as u32
            );
        }
    }

    #[test]
    fn daily_rate_rounds() {
        let mut habits = habits_owned();
        assert_eq!(habits.len(), 3);
        // One of three done → 33%
        for h in habits.iter_mut() {
            h.status = TaskStatus::Pending;
        }
        habits[0].status = TaskStatus::Completed;
        let refs: Vec<&Task> = habits.iter().collect();
        assert_eq!(daily_rate(&refs), 33);
        assert_eq!(daily_rate(&[]), 0);
    }

    #[test]
    fn weekly_overview_spans_sunday_to_saturday() {
        let habits = habits_owned();
        let refs: Vec<&Task> = habits.iter().collect();
        let week = weekly_overview(&refs, today());
        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date.weekday().num_days_from_sunday(), 0);
        // 2026-08-30 is a Sunday: rest of the week is future
        assert_eq!(week[0].date, today());
        assert!(week[0].rate.is_some());
        assert!(week[1..].iter().all(|d| d.rate.is_none()));
    }

    #[test]
    fn streak_counts_back_from_today() {
        let mut habit = habits_owned().remove(0);
        habit.status = TaskStatus::Completed;
        let with_today = current_streak(&habit, today());
        assert!(with_today >= 1);

        // Pending today doesn't break it, just doesn't count
        habit.status = TaskStatus::Pending;
        assert_eq!(current_streak(&habit, today()), with_today - 1);
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2026, 8), 31);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2026, 12), 31);
    }

    #[test]
    fn heatmap_layout_for_august_2026() {
        let habits = habits_owned();
        let refs: Vec<&Task> = habits.iter().collect();
        let grid = monthly_heatmap(&refs, today(), 2026, 8);
        // August 1st 2026 is a Saturday
        assert_eq!(grid.leading_blanks, 6);
        assert_eq!(grid.rates.len(), 31);
        // Day 31 is tomorrow: no data
        assert_eq!(grid.rate_for_day(31), None);
        assert!(grid.rate_for_day(30).is_some());
        assert!(grid.rate_for_day(1).is_some());
    }

    #[test]
    fn heat_levels_bucket_percentages() {
        assert_eq!(heat_level(0), 0);
        assert_eq!(heat_level(10), 1);
        assert_eq!(heat_level(25), 2);
        assert_eq!(heat_level(67), 3);
        assert_eq!(heat_level(99), 4);
        assert_eq!(heat_level(100), 5);
    }

    #[test]
    fn top_habits_sorted_and_capped() {
        let habits = habits_owned();
        let refs: Vec<&Task> = habits.iter().collect();
        let top = top_habits(&refs, today(), 2026, 8);
        assert!(top.len() <= 3);
        for pair in top.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
        assert!(top.iter().all(|(_, count)| *count > 0));
    }
}
