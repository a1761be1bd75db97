use serde::{Deserialize, Serialize};

/// Completion state of a schedule entry or habit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    /// The opposite state (toggle semantics: pending ⇄ completed)
    pub fn toggled(self) -> TaskStatus {
        match self {
            TaskStatus::Pending => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }
}

/// Fixed category set for schedule entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskCategory {
    Work,
    Home,
    Meal,
    Personal,
}

impl TaskCategory {
    pub const ALL: [TaskCategory; 4] = [
        TaskCategory::Work,
        TaskCategory::Home,
        TaskCategory::Meal,
        TaskCategory::Personal,
    ];

    /// Display label (the UI is Korean-first)
    pub fn label(self) -> &'static str {
        match self {
            TaskCategory::Work => "업무",
            TaskCategory::Home => "집안일",
            TaskCategory::Meal => "식사",
            TaskCategory::Personal => "개인",
        }
    }

    /// Parse a CLI argument into a category
    pub fn from_arg(s: &str) -> Option<TaskCategory> {
        match s.to_ascii_lowercase().as_str() {
            "work" | "업무" => Some(TaskCategory::Work),
            "home" | "집안일" => Some(TaskCategory::Home),
            "meal" | "식사" => Some(TaskCategory::Meal),
            "personal" | "개인" => Some(TaskCategory::Personal),
            _ => None,
        }
    }

    /// Stable key used in JSON output and config color overrides
    pub fn key(self) -> &'static str {
        match self {
            TaskCategory::Work => "work",
            TaskCategory::Home => "home",
            TaskCategory::Meal => "meal",
            TaskCategory::Personal => "personal",
        }
    }
}

/// Recurrence frequency; `None` and an absent recurrence are equivalent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    pub const ALL: [Recurrence; 4] = [
        Recurrence::None,
        Recurrence::Daily,
        Recurrence::Weekly,
        Recurrence::Monthly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Recurrence::None => "안 함",
            Recurrence::Daily => "매일",
            Recurrence::Weekly => "매주",
            Recurrence::Monthly => "매월",
        }
    }

    pub fn from_arg(s: &str) -> Option<Recurrence> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Some(Recurrence::None),
            "daily" => Some(Recurrence::Daily),
            "weekly" => Some(Recurrence::Weekly),
            "monthly" => Some(Recurrence::Monthly),
            _ => None,
        }
    }
}

/// Abstract color slot for a category badge; the theme maps it to a concrete
/// terminal color so the model stays free of ratatui types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Green,
    Yellow,
    Orange,
    Sky,
}

/// Display metadata for a category badge
#[derive(Debug, Clone, Copy)]
pub struct CategoryStyle {
    pub icon: &'static str,
    pub color: ColorToken,
}

/// Exhaustive category → badge mapping (icon glyph + color slot)
pub fn category_style(category: TaskCategory) -> CategoryStyle {
    match category {
        TaskCategory::Work => CategoryStyle {
            icon: "◆",
            color: ColorToken::Green,
        },
        TaskCategory::Home => CategoryStyle {
            icon: "⌂",
            color: ColorToken::Yellow,
        },
        TaskCategory::Meal => CategoryStyle {
            icon: "※",
            color: ColorToken::Orange,
        },
        TaskCategory::Personal => CategoryStyle {
            icon: "♥",
            color: ColorToken::Sky,
        },
    }
}

/// A schedule entry or a recurring habit.
///
/// `start_time`/`end_time` hold localized 12-hour labels like `오전 11:15`
/// (or the `시간 미정` sentinel); `duration` holds a localized label like
/// `1시간 30분` and is kept consistent with the endpoints by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub category: TaskCategory,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub status: TaskStatus,
    /// Habits are tracked in their own section, outside the schedule timeline
    #[serde(default)]
    pub is_habit: bool,
    #[serde(default)]
    pub recurrence: Recurrence,
}

impl Task {
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}
