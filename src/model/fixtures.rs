use crate::clock::TIME_UNSET;
use crate::model::task::{Recurrence, Task, TaskCategory, TaskStatus};

/// Placeholder title for a freshly added entry
pub const NEW_TASK_TITLE: &str = "새로운 일정";

fn task(
    id: u32,
    title: &str,
    category: TaskCategory,
    start: &str,
    end: &str,
    duration: &str,
    status: TaskStatus,
) -> Task {
    Task {
        id,
        title: title.to_string(),
        category,
        start_time: start.to_string(),
        end_time: end.to_string(),
        duration: duration.to_string(),
        status,
        is_habit: false,
        recurrence: Recurrence::None,
    }
}

fn habit(id: u32, title: &str, category: TaskCategory, status: TaskStatus) -> Task {
    Task {
        id,
        title: title.to_string(),
        category,
        start_time: TIME_UNSET.to_string(),
        end_time: String::new(),
        duration: String::new(),
        status,
        is_habit: true,
        recurrence: Recurrence::Daily,
    }
}

/// The demo dataset every session starts from (no persistence by design).
/// Five scheduled entries plus three daily habits.
pub fn demo_tasks() -> Vec<Task> {
    vec![
        task(
            1,
            "스마트스토어 관리 및 제품 서치",
            TaskCategory::Work,
            "오전 11:15",
            "오전 11:45",
            "30분",
            TaskStatus::Pending,
        ),
        task(
            2,
            "집안일",
            TaskCategory::Home,
            "오전 11:15",
            "오전 11:45",
            "30분",
            TaskStatus::Pending,
        ),
        task(
            3,
            "점심",
            TaskCategory::Meal,
            "오후 12:00",
            "오후 1:00",
            "1시간",
            TaskStatus::Pending,
        ),
        task(
            4,
            "브런치 업로드 & 초안 작성",
            TaskCategory::Work,
            "오후 1:05",
            "오후 2:35",
            "1시간 30분",
            TaskStatus::Completed,
        ),
        task(
            5,
            "강아지 산책",
            TaskCategory::Personal,
            "오후 3:15",
            "오후 3:45",
            "30분",
            TaskStatus::Pending,
        ),
        habit(6, "물 2리터 마시기", TaskCategory::Personal, TaskStatus::Pending),
        habit(7, "아침 스트레칭", TaskCategory::Personal, TaskStatus::Completed),
        habit(8, "책 30분 읽기", TaskCategory::Personal, TaskStatus::Pending),
    ]
}

/// Create a new entry with placeholder values (sentinel start, no duration)
pub fn placeholder_task(id: u32) -> Task {
    Task {
        id,
        title: NEW_TASK_TITLE.to_string(),
        category: TaskCategory::Work,
        start_time: TIME_UNSET.to_string(),
        end_time: String::new(),
        duration: String::new(),
        status: TaskStatus::Pending,
        is_habit: false,
        recurrence: Recurrence::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_ids_unique() {
        let tasks = demo_tasks();
        for (i, a) in tasks.iter().enumerate() {
            for b in &tasks[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn fixture_has_habits_and_schedule() {
        let tasks = demo_tasks();
        assert_eq!(tasks.iter().filter(|t| !t.is_habit).count(), 5);
        assert!(tasks.iter().filter(|t| t.is_habit).count() >= 3);
    }
}
