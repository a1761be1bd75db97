use chrono::NaiveDate;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::stats::{self, WEEKDAY_LABELS};
use crate::tui::app::App;

pub fn render_stats(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    let habits = app.habits();
    let (year, month) = app.stats_month;
    let grid = stats::monthly_heatmap(&habits, app.today, year, month);

    lines.push(
        Line::from(format!(" {}년 {}월", year, month)).style(
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ),
    );
    lines.push(Line::from(vec![
        Span::raw(" 오늘의 습관 달성률 "),
        Span::styled(
            format!("{}%", stats::daily_rate(&habits)),
            Style::default()
                .fg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::default());

    // Weekday header
    let mut header = vec![Span::raw("  ")];
    for label in WEEKDAY_LABELS {
        header.push(Span::styled(
            format!(" {} ", label),
            Style::default().fg(app.theme.dim),
        ));
    }
    lines.push(Line::from(header));

    // Calendar rows, Sunday-first
    let mut row: Vec<Span> = vec![Span::raw("  ")];
    for _ in 0..grid.leading_blanks {
        row.push(Span::raw("    "));
    }
    for (i, day_rate) in grid.rates.iter().enumerate() {
        let day = i as u32 + 1;
        let selected = app.selected_day == Some(day);
        let mut style = match day_rate {
            Some(rate) => {
                let level = stats::heat_level(*rate);
                let fg = if level >= 3 {
                    app.theme.text_bright
                } else {
                    app.theme.text
                };
                Style::default().bg(app.theme.heat[level as usize]).fg(fg)
            }
            None => Style::default().fg(app.theme.dim),
        };
        if selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        row.push(Span::styled(format!(" {:>2} ", day), style));

        let cells = grid.leading_blanks as usize + day as usize;
        if cells % 7 == 0 || day == grid.rates.len() as u32 {
            lines.push(Line::from(std::mem::take(&mut row)));
            row.push(Span::raw("  "));
        }
    }
    lines.push(Line::default());

    if let Some(day) = app.selected_day
        && let Some(date) = NaiveDate::from_ymd_opt(year, month, day)
    {
        lines.extend(day_detail(app, &habits, date));
        lines.push(Line::default());
    }

    let top = stats::top_habits(&habits, app.today, year, month);
    if top.is_empty() {
        lines.push(
            Line::from(" 이번 달에 완료된 습관이 없습니다.")
                .style(Style::default().fg(app.theme.dim)),
        );
    } else {
        lines.push(Line::from(format!(" 이번 달 TOP {} 습관", top.len())).style(
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ));
        for (rank, (habit, count)) in top.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}. ", rank + 1),
                    Style::default()
                        .fg(app.theme.highlight)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(habit.title.clone(), Style::default().fg(app.theme.text)),
                Span::styled(
                    format!(" — {}회", count),
                    Style::default().fg(app.theme.dim),
                ),
            ]));
        }
    }

    lines.push(Line::default());
    lines.push(
        Line::from(" * 과거 데이터는 데모용으로 시뮬레이션 되었습니다.")
            .style(Style::default().fg(app.theme.dim)),
    );

    frame.render_widget(Paragraph::new(lines), area);
}

fn day_detail(
    app: &App,
    habits: &[&crate::model::task::Task],
    date: NaiveDate,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(format!(" {}", super::helpers::date_korean(date))).style(
        Style::default()
            .fg(app.theme.text_bright)
            .add_modifier(Modifier::BOLD),
    )];

    for habit in habits {
        let line = match stats::habit_done_on(habit, date, app.today) {
            Some(true) => Line::from(vec![
                Span::styled("   ✓ ", Style::default().fg(app.theme.done)),
                Span::styled(habit.title.clone(), Style::default().fg(app.theme.text)),
            ]),
            Some(false) => Line::from(vec![
                Span::styled("   ✗ ", Style::default().fg(app.theme.warn)),
                Span::styled(habit.title.clone(), Style::default().fg(app.theme.dim)),
            ]),
            None => Line::from(vec![
                Span::styled("   · ", Style::default().fg(app.theme.dim)),
                Span::styled(habit.title.clone(), Style::default().fg(app.theme.dim)),
            ]),
        };
        lines.push(line);
    }
    lines
}
