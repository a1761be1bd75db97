use serde::Serialize;

use crate::model::task::{Recurrence, Task, TaskCategory, TaskStatus};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: u32,
    pub title: String,
    pub category: TaskCategory,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub start_time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub end_time: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub duration: String,
    #[serde(skip_serializing_if = "is_none_recurrence")]
    pub recurrence: Recurrence,
}

fn is_none_recurrence(r: &Recurrence) -> bool {
    *r == Recurrence::None
}

impl From<&Task> for TaskJson {
    fn from(task: &Task) -> Self {
        TaskJson {
            id: task.id,
            title: task.title.clone(),
            category: task.category,
            status: task.status,
            start_time: task.start_time.clone(),
            end_time: task.end_time.clone(),
            duration: task.duration.clone(),
            recurrence: task.recurrence,
        }
    }
}

#[derive(Serialize)]
pub struct ScheduleJson {
    pub filter: String,
    pub sort: String,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct HabitJson {
    pub id: u32,
    pub title: String,
    pub status: TaskStatus,
    pub streak_days: u32,
}

#[derive(Serialize)]
pub struct HabitsJson {
    pub daily_rate: u32,
    pub habits: Vec<HabitJson>,
}

#[derive(Serialize)]
pub struct HeatDayJson {
    pub day: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<u32>,
}

#[derive(Serialize)]
pub struct TopHabitJson {
    pub id: u32,
    pub title: String,
    pub completed_days: u32,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub month: String,
    pub daily_rate: u32,
    pub days: Vec<HeatDayJson>,
    pub top_habits: Vec<TopHabitJson>,
}
