//! Progress percentage and active-task selection.

use crate::model::task::Task;

/// Percentage of the active task's duration already elapsed, in [0, 100].
/// Zero total means zero progress (nothing to divide by); overruns clamp.
pub fn compute_progress(elapsed_secs: u64, total_secs: u64) -> f64 {
    if total_secs == 0 {
        return 0.0;
    }
    (elapsed_secs as f64 / total_secs as f64 * 100.0).min(100.0)
}

/// The single task currently being timed: the first pending, non-habit task
/// in store order — not the displayed (filtered/sorted) order.
pub fn active_task(tasks: &[Task]) -> Option<&Task> {
    tasks.iter().find(|t| !t.is_habit && !t.is_done())
}

/// True when there is at least one schedule entry and all are completed
pub fn all_schedule_done(tasks: &[Task]) -> bool {
    let mut any = false;
    for task in tasks.iter().filter(|t| !t.is_habit) {
        if !task.is_done() {
            return false;
        }
        any = true;
    }
    any
}

/// True when there is at least one habit and all are completed today
pub fn all_habits_done(tasks: &[Task]) -> bool {
    let mut any = false;
    for task in tasks.iter().filter(|t| t.is_habit) {
        if !task.is_done() {
            return false;
        }
        any = true;
    }
    any
}
