//! Filtering and ordering for the schedule timeline.
//!
//! Habits never appear in the timeline. Category filtering happens before
//! sorting; the sort is stable, so equal keys keep their store order.

use crate::clock::{parse_duration_minutes, time_sort_key};
use crate::model::task::{Task, TaskCategory};

/// Sort key selector for the schedule view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Ascending minute-of-day; unscheduled entries last
    #[default]
    StartTime,
    /// Ascending total duration (shorter first)
    Duration,
}

impl SortBy {
    pub fn toggled(self) -> SortBy {
        match self {
            SortBy::StartTime => SortBy::Duration,
            SortBy::Duration => SortBy::StartTime,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortBy::StartTime => "시간순",
            SortBy::Duration => "소요시간순",
        }
    }
}

/// Category filter chip state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(TaskCategory),
}

impl CategoryFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(cat) => task.category == cat,
        }
    }

    /// Cycle through 전체 → 업무 → 집안일 → 식사 → 개인 → 전체
    pub fn cycled(self) -> CategoryFilter {
        match self {
            CategoryFilter::All => CategoryFilter::Only(TaskCategory::Work),
            CategoryFilter::Only(TaskCategory::Work) => CategoryFilter::Only(TaskCategory::Home),
            CategoryFilter::Only(TaskCategory::Home) => CategoryFilter::Only(TaskCategory::Meal),
            CategoryFilter::Only(TaskCategory::Meal) => {
                CategoryFilter::Only(TaskCategory::Personal)
            }
            CategoryFilter::Only(TaskCategory::Personal) => CategoryFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "전체",
            CategoryFilter::Only(cat) => cat.label(),
        }
    }
}

/// The schedule timeline: non-habit tasks matching `filter`, stably sorted
/// by the `sort_by` key.
pub fn displayed_tasks(
    tasks: &[Task],
    filter: CategoryFilter,
    sort_by: SortBy,
) -> Vec<&Task> {
    let mut out: Vec<&Task> = tasks
        .iter()
        .filter(|t| !t.is_habit && filter.matches(t))
        .collect();
    match sort_by {
        SortBy::StartTime => out.sort_by_key(|t| time_sort_key(&t.start_time)),
        SortBy::Duration => out.sort_by_key(|t| parse_duration_minutes(&t.duration)),
    }
    out
}

/// Today's habit list, in store order
pub fn habit_tasks(tasks: &[Task]) -> Vec<&Task> {
    tasks.iter().filter(|t| t.is_habit).collect()
}
