//! The modal edit form.
//!
//! Mirrors the planner's 일정 수정 dialog: title, category, start/end time,
//! recurrence. The duration is never edited directly — it is re-derived
//! from the endpoints on every keystroke that touches them, so the form
//! always previews exactly what a save will store.

use crossterm::event::{KeyCode, KeyEvent};

use crate::clock::derive_duration;
use crate::model::task::{Recurrence, Task, TaskCategory};
use crate::ops::store::PlannerEvent;
use crate::tui::app::App;
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

/// Form fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Title,
    Category,
    Start,
    End,
    Recurrence,
}

impl EditField {
    const ORDER: [EditField; 5] = [
        EditField::Title,
        EditField::Category,
        EditField::Start,
        EditField::End,
        EditField::Recurrence,
    ];

    fn next(self) -> EditField {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> EditField {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            EditField::Title => "일정",
            EditField::Category => "카테고리",
            EditField::Start => "시작 시간",
            EditField::End => "종료 시간",
            EditField::Recurrence => "반복",
        }
    }
}

/// Working copy of a task's editable fields
#[derive(Debug, Clone)]
pub struct EditForm {
    pub task_id: u32,
    pub focus: EditField,
    pub title: String,
    pub category: TaskCategory,
    pub start: String,
    pub end: String,
    pub recurrence: Recurrence,
    /// Read-only preview, refreshed whenever start/end change
    pub derived_duration: String,
    /// Byte cursor into the focused text field
    pub cursor: usize,
}

impl EditForm {
    pub fn from_task(task: &Task) -> Self {
        EditForm {
            task_id: task.id,
            focus: EditField::Title,
            title: task.title.clone(),
            category: task.category,
            start: task.start_time.clone(),
            end: task.end_time.clone(),
            recurrence: task.recurrence,
            derived_duration: derive_duration(&task.start_time, &task.end_time),
            cursor: task.title.len(),
        }
    }

    /// Merge the form back onto the stored record. Status and habit flag
    /// are not form-editable and carry over from `base`.
    pub fn to_task(&self, base: &Task) -> Task {
        Task {
            id: self.task_id,
            title: self.title.clone(),
            category: self.category,
            start_time: self.start.clone(),
            end_time: self.end.clone(),
            duration: self.derived_duration.clone(),
            status: base.status,
            is_habit: base.is_habit,
            recurrence: self.recurrence,
        }
    }

    pub fn refresh_duration(&mut self) {
        self.derived_duration = derive_duration(&self.start, &self.end);
    }

    fn is_text_field(&self) -> bool {
        matches!(self.focus, EditField::Title | EditField::Start | EditField::End)
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            EditField::Title => Some(&mut self.title),
            EditField::Start => Some(&mut self.start),
            EditField::End => Some(&mut self.end),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self.focus {
            EditField::Title => Some(&self.title),
            EditField::Start => Some(&self.start),
            EditField::End => Some(&self.end),
            _ => None,
        }
    }

    fn move_focus(&mut self, backwards: bool) {
        self.focus = if backwards {
            self.focus.prev()
        } else {
            self.focus.next()
        };
        // Cursor lands at the end of the newly focused text field
        self.cursor = self.text().map_or(0, str::len);
    }

    fn insert_char(&mut self, c: char) {
        let cursor = self.cursor;
        if let Some(text) = self.text_mut() {
            let at = cursor.min(text.len());
            text.insert(at, c);
            self.cursor = at + c.len_utf8();
            self.refresh_duration();
        }
    }

    fn backspace(&mut self) {
        let cursor = self.cursor;
        let Some(text) = self.text_mut() else { return };
        let Some(prev) = prev_grapheme_boundary(text, cursor.min(text.len())) else {
            return;
        };
        let end = cursor.min(text.len());
        text.replace_range(prev..end, "");
        self.cursor = prev;
        self.refresh_duration();
    }

    fn delete_forward(&mut self) {
        let cursor = self.cursor;
        let Some(text) = self.text_mut() else { return };
        let at = cursor.min(text.len());
        let Some(next) = next_grapheme_boundary(text, at) else {
            return;
        };
        text.replace_range(at..next, "");
        self.refresh_duration();
    }

    fn cursor_left(&mut self) {
        if let Some(text) = self.text()
            && let Some(prev) = prev_grapheme_boundary(text, self.cursor.min(text.len()))
        {
            self.cursor = prev;
        }
    }

    fn cursor_right(&mut self) {
        if let Some(text) = self.text()
            && let Some(next) = next_grapheme_boundary(text, self.cursor)
        {
            self.cursor = next;
        }
    }

    fn cycle_choice(&mut self, backwards: bool) {
        match self.focus {
            EditField::Category => {
                self.category = cycle_in(&TaskCategory::ALL, self.category, backwards);
            }
            EditField::Recurrence => {
                self.recurrence = cycle_in(&Recurrence::ALL, self.recurrence, backwards);
            }
            _ => {}
        }
    }
}

fn cycle_in<T: Copy + PartialEq>(options: &[T], current: T, backwards: bool) -> T {
    let i = options.iter().position(|o| *o == current).unwrap_or(0);
    let n = options.len();
    let next = if backwards { (i + n - 1) % n } else { (i + 1) % n };
    options[next]
}

pub fn handle_edit_key(app: &mut App, key: KeyEvent) {
    let Some(form) = app.edit.as_mut() else { return };

    match key.code {
        KeyCode::Esc => {
            app.edit = None;
        }
        KeyCode::Enter => {
            let form = app.edit.take();
            if let Some(form) = form
                && let Some(base) = app.store.get(form.task_id)
            {
                let task = form.to_task(base);
                app.dispatch(PlannerEvent::SaveEdit { task });
            }
        }
        KeyCode::Tab | KeyCode::Down => form.move_focus(false),
        KeyCode::BackTab | KeyCode::Up => form.move_focus(true),
        KeyCode::Left if !form.is_text_field() => form.cycle_choice(true),
        KeyCode::Right if !form.is_text_field() => form.cycle_choice(false),
        KeyCode::Left => form.cursor_left(),
        KeyCode::Right => form.cursor_right(),
        KeyCode::Home => form.cursor = 0,
        KeyCode::End => form.cursor = form.text().map_or(0, str::len),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Delete => form.delete_forward(),
        KeyCode::Char(c) => {
            if form.is_text_field() {
                form.insert_char(c);
            } else {
                // Space also cycles choice fields
                if c == ' ' {
                    form.cycle_choice(false);
                }
            }
        }
        _ => {}
    }
}
