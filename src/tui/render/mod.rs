pub mod edit_modal;
pub mod habits_view;
pub mod helpers;
pub mod schedule_view;
pub mod stats_view;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use super::app::{App, View};
use helpers::date_korean;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.background).fg(app.theme.text)),
        area,
    );

    let [header, body, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, app, header);
    match app.view {
        View::Schedule => schedule_view::render_schedule(frame, app, body),
        View::Habits => habits_view::render_habits(frame, app, body),
        View::Stats => stats_view::render_stats(frame, app, body),
    }
    render_status_row(frame, app, status);

    if app.edit.is_some() {
        edit_modal::render_edit_modal(frame, app, area);
    }
    if app.show_help {
        render_help_overlay(frame, app, area);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(app.view.title()).style(
        Style::default()
            .fg(app.theme.highlight)
            .add_modifier(Modifier::BOLD),
    );
    let date = Line::from(date_korean(app.today)).style(Style::default().fg(app.theme.dim));
    let header = Paragraph::new(vec![title, date, Line::default()]).centered();
    frame.render_widget(header, area);
}

fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = &app.status_line {
        let line = Line::from(format!(" {}", msg)).style(Style::default().fg(app.theme.warn));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }
    let hints = match app.view {
        View::Schedule => " ␣ 완료 · a 추가 · e 수정 · f 필터 · s 정렬 · Tab 화면 · ? 도움말 · q 종료",
        View::Habits => " ␣ 완료 · e 수정 · Tab 화면 · ? 도움말 · q 종료",
        View::Stats => " [ ] 달 이동 · ←→↑↓ 날짜 선택 · Tab 화면 · ? 도움말 · q 종료",
    };
    let line = Line::from(hints).style(Style::default().fg(app.theme.dim));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from("  1 / 2 / 3      일정 · 습관 · 통계 화면"),
        Line::from("  Tab            다음 화면"),
        Line::from("  j / k, ↓ / ↑   이동"),
        Line::from("  Space          완료 ⇄ 미완료"),
        Line::from("  a              새 일정 추가"),
        Line::from("  e, Enter       일정 수정"),
        Line::from("  f              카테고리 필터"),
        Line::from("  s              정렬 전환 (시간순/소요시간순)"),
        Line::from("  [ / ]          통계: 이전/다음 달"),
        Line::from("  q              종료"),
        Line::from(""),
        Line::from("  아무 키나 누르면 닫힙니다").style(Style::default().fg(app.theme.dim)),
    ];
    let popup = helpers::centered_rect(area, 48, lines.len() as u16 + 2);
    frame.render_widget(Clear, popup);
    let block = Block::bordered()
        .title(" 도움말 ")
        .style(Style::default().bg(app.theme.background).fg(app.theme.text))
        .border_style(Style::default().fg(app.theme.highlight));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
