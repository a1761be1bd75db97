//! The planner's state container.
//!
//! All task mutation flows through [`PlannerStore::apply`] as discrete
//! events; views hold no task state of their own and re-derive from
//! `tasks()` whenever `version()` changes. Tasks are never removed, and ids
//! are assigned monotonically (`max + 1`), so an id is never reused.

use crate::clock::derive_duration;
use crate::model::fixtures::{demo_tasks, placeholder_task};
use crate::model::task::Task;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("task not found: {0}")]
    TaskNotFound(u32),
}

/// A state-changing event dispatched by the UI or CLI
#[derive(Debug, Clone)]
pub enum PlannerEvent {
    /// Flip a task between pending and completed
    ToggleStatus { id: u32 },
    /// Append a new entry with placeholder values (optionally titled)
    AddTask { title: Option<String> },
    /// Whole-record replacement from the edit form. The duration label is
    /// re-derived from the start/end pair here, at the point of mutation.
    SaveEdit { task: Task },
}

#[derive(Debug, Clone)]
pub struct PlannerStore {
    tasks: Vec<Task>,
    version: u64,
}

impl PlannerStore {
    pub fn new(tasks: Vec<Task>) -> Self {
        PlannerStore { tasks, version: 0 }
    }

    /// A store seeded with the demo fixture
    pub fn demo() -> Self {
        PlannerStore::new(demo_tasks())
    }

    /// All tasks in insertion order (habits included)
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Change generation; bumped on every successful `apply`. Views compare
    /// this against the value they last rendered instead of subscribing.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The id the next `AddTask` will assign
    pub fn next_id(&self) -> u32 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }

    pub fn apply(&mut self, event: PlannerEvent) -> Result<(), StoreError> {
        match event {
            PlannerEvent::ToggleStatus { id } => {
                let task = self
                    .tasks
                    .iter_mut()
                    .find(|t| t.id == id)
                    .ok_or(StoreError::TaskNotFound(id))?;
                task.status = task.status.toggled();
            }
            PlannerEvent::AddTask { title } => {
                let mut task = placeholder_task(self.next_id());
                if let Some(title) = title {
                    task.title = title;
                }
                self.tasks.push(task);
            }
            PlannerEvent::SaveEdit { mut task } => {
                let slot = self
                    .tasks
                    .iter_mut()
                    .find(|t| t.id == task.id)
                    .ok_or(StoreError::TaskNotFound(task.id))?;
                // Keep the duration consistent with the endpoints; cleared
                // when either is unset or the end isn't strictly later
                task.duration = derive_duration(&task.start_time, &task.end_time);
                *slot = task;
            }
        }
        self.version += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::TIME_UNSET;
    use crate::model::fixtures::NEW_TASK_TITLE;
    use crate::model::task::{TaskCategory, TaskStatus};

    #[test]
    fn toggle_flips_only_the_target() {
        let mut store = PlannerStore::demo();
        let before: Vec<TaskStatus> = store.tasks().iter().map(|t| t.status).collect();

        store.apply(PlannerEvent::ToggleStatus { id: 4 }).unwrap();
        assert_eq!(store.get(4).unwrap().status, TaskStatus::Pending);
        for (task, prior) in store.tasks().iter().zip(&before) {
            if task.id != 4 {
                assert_eq!(task.status, *prior);
            }
        }

        store.apply(PlannerEvent::ToggleStatus { id: 4 }).unwrap();
        assert_eq!(store.get(4).unwrap().status, TaskStatus::Completed);
    }

    #[test]
    fn toggle_unknown_id_errors() {
        let mut store = PlannerStore::demo();
        let err = store.apply(PlannerEvent::ToggleStatus { id: 999 });
        assert!(matches!(err, Err(StoreError::TaskNotFound(999))));
        // Failed events don't bump the version
        assert_eq!(store.version(), 0);
    }

    #[test]
    fn add_assigns_max_plus_one() {
        let mut store = PlannerStore::demo();
        let expected = store.tasks().iter().map(|t| t.id).max().unwrap() + 1;
        store.apply(PlannerEvent::AddTask { title: None }).unwrap();

        let added = store.tasks().last().unwrap();
        assert_eq!(added.id, expected);
        assert_eq!(added.title, NEW_TASK_TITLE);
        assert_eq!(added.start_time, TIME_UNSET);
        assert_eq!(added.duration, "");
        assert_eq!(added.status, TaskStatus::Pending);
    }

    #[test]
    fn add_to_empty_store_starts_at_one() {
        let mut store = PlannerStore::new(Vec::new());
        store.apply(PlannerEvent::AddTask { title: None }).unwrap();
        assert_eq!(store.tasks()[0].id, 1);
    }

    #[test]
    fn save_edit_rederives_duration() {
        let mut store = PlannerStore::demo();
        let mut task = store.get(1).unwrap().clone();
        task.title = "자료 조사".into();
        task.category = TaskCategory::Personal;
        task.end_time = "오후 1:05".into();
        store.apply(PlannerEvent::SaveEdit { task }).unwrap();

        let saved = store.get(1).unwrap();
        assert_eq!(saved.title, "자료 조사");
        assert_eq!(saved.duration, "1시간 50분");
    }

    #[test]
    fn save_edit_clears_duration_when_inconsistent() {
        let mut store = PlannerStore::demo();
        let mut task = store.get(3).unwrap().clone();
        // End now precedes start: the stale "1시간" label must not survive
        task.end_time = "오전 11:00".into();
        store.apply(PlannerEvent::SaveEdit { task }).unwrap();
        assert_eq!(store.get(3).unwrap().duration, "");
    }

    #[test]
    fn version_bumps_on_every_apply() {
        let mut store = PlannerStore::demo();
        assert_eq!(store.version(), 0);
        store.apply(PlannerEvent::ToggleStatus { id: 1 }).unwrap();
        store.apply(PlannerEvent::AddTask { title: None }).unwrap();
        assert_eq!(store.version(), 2);
    }
}
