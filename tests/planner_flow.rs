//! End-to-end flow over the planner store: filtering, toggling, editing,
//! and the session timer reacting to the active task changing.

use pretty_assertions::assert_eq;

use haru::model::{TaskCategory, TaskStatus};
use haru::ops::order::{CategoryFilter, SortBy, displayed_tasks};
use haru::ops::progress::{active_task, compute_progress};
use haru::ops::store::{PlannerEvent, PlannerStore};
use haru::ops::timer::SessionTimer;

fn ids(tasks: &[&haru::model::Task]) -> Vec<u32> {
    tasks.iter().map(|t| t.id).collect()
}

#[test]
fn work_filter_sorted_by_start_time() {
    let store = PlannerStore::demo();
    let shown = displayed_tasks(
        store.tasks(),
        CategoryFilter::Only(TaskCategory::Work),
        SortBy::StartTime,
    );
    assert_eq!(ids(&shown), vec![1, 4]);
}

#[test]
fn toggle_round_trip_leaves_other_tasks_alone() {
    let mut store = PlannerStore::demo();
    let before: Vec<(u32, TaskStatus)> = store
        .tasks()
        .iter()
        .filter(|t| t.id != 4)
        .map(|t| (t.id, t.status))
        .collect();

    store.apply(PlannerEvent::ToggleStatus { id: 4 }).unwrap();
    assert_eq!(store.get(4).unwrap().status, TaskStatus::Pending);
    store.apply(PlannerEvent::ToggleStatus { id: 4 }).unwrap();
    assert_eq!(store.get(4).unwrap().status, TaskStatus::Completed);

    let after: Vec<(u32, TaskStatus)> = store
        .tasks()
        .iter()
        .filter(|t| t.id != 4)
        .map(|t| (t.id, t.status))
        .collect();
    assert_eq!(before, after);
    assert_eq!(store.version(), 2);
}

#[test]
fn add_then_edit_rederives_duration() {
    let mut store = PlannerStore::demo();
    store.apply(PlannerEvent::AddTask { title: None }).unwrap();
    let added = store.tasks().last().unwrap().clone();
    assert_eq!(added.id, 9);
    assert_eq!(added.title, "새로운 일정");
    assert!(added.duration.is_empty());

    let mut edited = added;
    edited.title = "저녁 산책".into();
    edited.start_time = "오후 7:00".into();
    edited.end_time = "오후 7:45".into();
    edited.duration = "stale".into();
    store.apply(PlannerEvent::SaveEdit { task: edited }).unwrap();

    let saved = store.get(9).unwrap();
    assert_eq!(saved.title, "저녁 산책");
    assert_eq!(saved.duration, "45분");
}

#[test]
fn edit_with_end_before_start_clears_duration() {
    let mut store = PlannerStore::demo();
    let mut task = store.get(2).unwrap().clone();
    task.start_time = "오후 3:00".into();
    task.end_time = "오후 2:00".into();
    store.apply(PlannerEvent::SaveEdit { task }).unwrap();
    assert!(store.get(2).unwrap().duration.is_empty());
}

#[test]
fn timer_follows_the_active_task() {
    let mut store = PlannerStore::demo();
    let mut timer = SessionTimer::new(store.tasks());

    // Task 1 is the first pending non-habit and carries the demo seed.
    assert_eq!(active_task(store.tasks()).map(|t| t.id), Some(1));
    assert_eq!(timer.display(), "12분 05초");

    timer.tick();
    timer.tick();
    assert_eq!(timer.elapsed_secs(), 727);

    // Completing task 1 moves the active slot to task 2 and resets the clock.
    store.apply(PlannerEvent::ToggleStatus { id: 1 }).unwrap();
    timer.sync(store.tasks());
    assert_eq!(timer.active_id(), Some(2));
    assert_eq!(timer.display(), "00분 00초");

    // Completing every remaining schedule entry stops the timer outright.
    for id in [2, 3, 5] {
        store.apply(PlannerEvent::ToggleStatus { id }).unwrap();
    }
    timer.sync(store.tasks());
    assert_eq!(timer.active_id(), None);
    timer.tick();
    assert_eq!(timer.elapsed_secs(), 0);
}

#[test]
fn progress_is_clamped() {
    assert_eq!(compute_progress(0, 0), 0.0);
    assert_eq!(compute_progress(30, 60), 50.0);
    assert_eq!(compute_progress(90, 60), 100.0);
}
