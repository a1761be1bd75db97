//! The per-session elapsed timer for the active task.
//!
//! At most one task is timed at a time. The timer is not tied to a wall
//! clock service: the TUI event loop is the single tick source and calls
//! [`SessionTimer::tick`] once per elapsed second, so there is never more
//! than one live timer and teardown is just dropping the loop.

use crate::clock::format_elapsed;
use crate::model::task::Task;
use crate::ops::progress::active_task;

/// Demo fixture: the first seeded entry starts mid-session so the elapsed
/// readout is visibly non-zero on first launch.
pub const DEMO_SEED_TASK_ID: u32 = 1;
const DEMO_SEED_SECS: u64 = 12 * 60 + 5;

#[derive(Debug, Clone, Default)]
pub struct SessionTimer {
    active_id: Option<u32>,
    elapsed_secs: u64,
}

impl SessionTimer {
    /// Timer for the given task collection, synced to its active task
    pub fn new(tasks: &[Task]) -> Self {
        let mut timer = SessionTimer::default();
        timer.sync(tasks);
        timer
    }

    pub fn active_id(&self) -> Option<u32> {
        self.active_id
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Re-resolve the active task; if its identity changed (another task,
    /// or none), the elapsed count resets. Call after every store mutation
    /// and before every tick.
    pub fn sync(&mut self, tasks: &[Task]) {
        let current = active_task(tasks).map(|t| t.id);
        if current != self.active_id {
            self.active_id = current;
            self.elapsed_secs = match current {
                Some(DEMO_SEED_TASK_ID) => DEMO_SEED_SECS,
                _ => 0,
            };
        }
    }

    /// Advance one second. No-op while nothing is active.
    pub fn tick(&mut self) {
        if self.active_id.is_some() {
            self.elapsed_secs += 1;
        }
    }

    /// `MM분 SS초` readout for the active row
    pub fn display(&self) -> String {
        format_elapsed(self.elapsed_secs)
    }
}
