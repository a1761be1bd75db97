use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::clock::parse_duration_minutes;
use crate::model::task::{Task, TaskCategory};
use crate::ops::order::CategoryFilter;
use crate::ops::progress::{all_schedule_done, compute_progress};
use crate::tui::app::App;
use crate::util::unicode::truncate_to_width;

use super::helpers::{category_badge, progress_bar};

pub fn render_schedule(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();

    lines.push(filter_chips(app));
    lines.push(sort_row(app));
    lines.push(Line::default());

    let shown = app.displayed();
    let have_schedule = app.store.tasks().iter().any(|t| !t.is_habit);

    if !have_schedule {
        lines.push(empty_line(app, "오늘의 첫 일정을 추가해 보세요!"));
    } else if shown.is_empty() {
        lines.push(empty_line(app, "선택된 카테고리에 일정이 없어요."));
    } else {
        let width = area.width.saturating_sub(4) as usize;
        for (i, task) in shown.iter().enumerate() {
            let selected = i == app.schedule_cursor;
            let active = app.timer.active_id() == Some(task.id);
            lines.push(task_row(app, task, selected, active, width));
            if active {
                lines.push(active_progress_row(app, task));
            }
        }
        if all_schedule_done(app.store.tasks()) {
            lines.push(Line::default());
            lines.push(
                Line::from("오늘의 모든 일정을 완료했어요!")
                    .style(Style::default().fg(app.theme.done).add_modifier(Modifier::BOLD))
                    .centered(),
            );
            lines.push(
                Line::from("멋진 하루네요.")
                    .style(Style::default().fg(app.theme.dim))
                    .centered(),
            );
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn filter_chips(app: &App) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    let options = [
        CategoryFilter::All,
        CategoryFilter::Only(TaskCategory::Work),
        CategoryFilter::Only(TaskCategory::Home),
        CategoryFilter::Only(TaskCategory::Meal),
        CategoryFilter::Only(TaskCategory::Personal),
    ];
    for option in options {
        let label = format!(" {} ", option.label());
        let style = if option == app.filter {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn sort_row(app: &App) -> Line<'static> {
    Line::from(format!(" 정렬: {}", app.sort_by.label()))
        .style(Style::default().fg(app.theme.dim))
}

fn empty_line(app: &App, text: &'static str) -> Line<'static> {
    Line::from(text)
        .style(Style::default().fg(app.theme.dim))
        .centered()
}

fn task_row(app: &App, task: &Task, selected: bool, active: bool, width: usize) -> Line<'static> {
    let theme = &app.theme;
    let mut spans = Vec::new();

    spans.push(Span::styled(
        if selected { " ▸ " } else { "   " },
        Style::default().fg(theme.highlight),
    ));
    spans.push(category_badge(theme, task.category));
    spans.push(Span::raw(" "));
    spans.push(Span::styled(
        if task.is_done() { "[x] " } else { "[ ] " },
        Style::default().fg(if task.is_done() { theme.done } else { theme.warn }),
    ));

    // Active rows show the live elapsed readout instead of the time range
    if active {
        spans.push(Span::styled(
            app.timer.display(),
            Style::default().fg(theme.done).add_modifier(Modifier::BOLD),
        ));
    } else {
        spans.push(Span::styled(
            time_range(task),
            Style::default().fg(theme.dim),
        ));
    }
    spans.push(Span::raw("  "));

    let title_style = if task.is_done() {
        Style::default()
            .fg(theme.dim)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(theme.text_bright)
    };
    spans.push(Span::styled(
        truncate_to_width(&task.title, width.saturating_sub(30)),
        title_style,
    ));

    let mut line = Line::from(spans);
    if selected {
        line = line.style(Style::default().bg(app.theme.selection_bg));
    }
    line
}

fn active_progress_row(app: &App, task: &Task) -> Line<'static> {
    let total_secs = parse_duration_minutes(&task.duration) as u64 * 60;
    let percent = compute_progress(app.timer.elapsed_secs(), total_secs);
    Line::from(vec![
        Span::raw("         "),
        Span::styled(
            progress_bar(percent, 20),
            Style::default().fg(app.theme.highlight),
        ),
        Span::styled(
            format!(" {:.0}%", percent),
            Style::default().fg(app.theme.dim),
        ),
    ])
}

fn time_range(task: &Task) -> String {
    let mut out = task.start_time.clone();
    if !task.end_time.is_empty() {
        out.push('~');
        out.push_str(&task.end_time);
    }
    if !task.duration.is_empty() {
        out.push_str(&format!(" ({})", task.duration));
    }
    out
}
