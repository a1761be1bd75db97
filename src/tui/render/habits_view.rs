use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::Task;
use crate::ops::progress::all_habits_done;
use crate::ops::stats::{self, WEEKDAY_LABELS};
use crate::tui::app::App;

use super::helpers::{category_badge, progress_bar};

pub fn render_habits(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    let habits = app.habits();

    let rate = stats::daily_rate(&habits);
    lines.push(Line::from(vec![
        Span::raw(" 오늘의 달성률  "),
        Span::styled(
            progress_bar(rate as f64, 20),
            Style::default().fg(app.theme.highlight),
        ),
        Span::styled(
            format!(" {}%", rate),
            Style::default()
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::default());

    if habits.is_empty() {
        lines.push(
            Line::from("아직 습관이 없어요.")
                .style(Style::default().fg(app.theme.dim))
                .centered(),
        );
        frame.render_widget(Paragraph::new(lines), area);
        return;
    }

    for (i, habit) in habits.iter().enumerate() {
        lines.push(habit_row(app, habit, i == app.habits_cursor));
    }

    if all_habits_done(app.store.tasks()) {
        lines.push(Line::default());
        lines.push(
            Line::from("오늘의 습관을 모두 완료했어요!")
                .style(Style::default().fg(app.theme.done).add_modifier(Modifier::BOLD))
                .centered(),
        );
    }

    lines.push(Line::default());
    lines.push(
        Line::from(" 주간 현황").style(
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ),
    );
    lines.push(weekday_header(app));
    lines.push(weekly_rate_row(app, &habits));

    frame.render_widget(Paragraph::new(lines), area);
}

fn habit_row(app: &App, habit: &Task, selected: bool) -> Line<'static> {
    let theme = &app.theme;
    let streak = stats::current_streak(habit, app.today);

    let mut spans = vec![
        Span::styled(
            if selected { " ▸ " } else { "   " },
            Style::default().fg(theme.highlight),
        ),
        category_badge(theme, habit.category),
        Span::raw(" "),
        Span::styled(
            if habit.is_done() { "[x] " } else { "[ ] " },
            Style::default().fg(if habit.is_done() { theme.done } else { theme.warn }),
        ),
    ];

    let title_style = if habit.is_done() {
        Style::default()
            .fg(theme.dim)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(theme.text_bright)
    };
    spans.push(Span::styled(habit.title.clone(), title_style));
    spans.push(Span::styled(
        format!("  연속 {}일", streak),
        Style::default().fg(theme.dim),
    ));

    // This week's cells, Sunday-first; today highlighted
    spans.push(Span::raw("  "));
    for day in stats::weekly_overview(&[habit], app.today) {
        let done = day
            .rate
            .map(|r| r == 100)
            .unwrap_or(false);
        let is_today = day.date == app.today;
        let glyph = match (done, day.rate.is_some()) {
            (true, _) => "●",
            (false, true) => "○",
            (false, false) => "·",
        };
        let mut style = Style::default().fg(if done { theme.highlight } else { theme.dim });
        if is_today {
            style = style.add_modifier(Modifier::BOLD).fg(theme.text_bright);
        }
        spans.push(Span::styled(glyph.to_string(), style));
        spans.push(Span::raw(" "));
    }

    let mut line = Line::from(spans);
    if selected {
        line = line.style(Style::default().bg(theme.selection_bg));
    }
    line
}

fn weekday_header(app: &App) -> Line<'static> {
    let mut spans = vec![Span::raw("   ")];
    for (i, label) in WEEKDAY_LABELS.iter().enumerate() {
        let is_today = i as u32 == chrono::Datelike::weekday(&app.today).num_days_from_sunday();
        let style = if is_today {
            Style::default()
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.dim)
        };
        spans.push(Span::styled(format!("{}  ", label), style));
    }
    Line::from(spans)
}

fn weekly_rate_row(app: &App, habits: &[&Task]) -> Line<'static> {
    let mut spans = vec![Span::raw("   ")];
    for day in stats::weekly_overview(habits, app.today) {
        match day.rate {
            Some(rate) => {
                let level = stats::heat_level(rate);
                spans.push(Span::styled(
                    "■   ",
                    Style::default().fg(app.theme.heat[level as usize]),
                ));
            }
            None => spans.push(Span::styled("·   ", Style::default().fg(app.theme.dim))),
        }
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::store::PlannerEvent;
    use crate::tui::app::View;
    use crate::tui::render::test_helpers::*;

    fn habits_app() -> App {
        let mut app = demo_app();
        app.view = View::Habits;
        app
    }

    #[test]
    fn lists_habits_with_streaks() {
        let app = habits_app();
        let out = render_app(&app);
        for title in ["물 2리터 마시기", "아침 스트레칭", "책 30분 읽기"] {
            assert!(out.contains(title), "missing {} in:\n{}", title, out);
        }
        assert!(out.contains("연속"));
        assert!(out.contains("주간 현황"));
    }

    #[test]
    fn daily_rate_reflects_live_status() {
        let app = habits_app();
        // Fixture: 1 of 3 habits done
        let out = render_app(&app);
        assert!(out.contains("33%"));
    }

    #[test]
    fn all_done_banner() {
        let mut app = habits_app();
        let pending: Vec<u32> = app
            .habits()
            .iter()
            .filter(|h| !h.is_done())
            .map(|h| h.id)
            .collect();
        for id in pending {
            app.dispatch(PlannerEvent::ToggleStatus { id });
        }
        let out = render_app(&app);
        assert!(out.contains("오늘의 습관을 모두 완료했어요!"));
        assert!(out.contains("100%"));
    }
}
