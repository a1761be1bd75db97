use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::input::edit::{EditField, EditForm};
use crate::util::unicode::display_width;

use super::helpers::centered_rect;

const LABEL_WIDTH: usize = 10;

pub fn render_edit_modal(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.edit else { return };

    let popup = centered_rect(area, 46, 12);
    frame.render_widget(Clear, popup);

    let block = Block::bordered()
        .title(" 일정 수정 ")
        .style(Style::default().bg(app.theme.background).fg(app.theme.text))
        .border_style(Style::default().fg(app.theme.highlight));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        text_field_line(app, form, EditField::Title, &form.title),
        choice_field_line(app, form, EditField::Category, form.category.label()),
        text_field_line(app, form, EditField::Start, &form.start),
        text_field_line(app, form, EditField::End, &form.end),
        derived_duration_line(app, form),
        choice_field_line(app, form, EditField::Recurrence, form.recurrence.label()),
        Line::default(),
        Line::from(" Enter 저장 · Esc 취소 · Tab 다음 필드")
            .style(Style::default().fg(app.theme.dim)),
    ];
    frame.render_widget(Paragraph::new(lines), inner);

    // Terminal cursor inside the focused text field
    if let Some(text) = form.text() {
        let row = match form.focus {
            EditField::Title => 0,
            EditField::Start => 2,
            EditField::End => 3,
            _ => return,
        };
        let prefix = display_width(&text[..form.cursor.min(text.len())]);
        let x = inner.x + LABEL_WIDTH as u16 + prefix as u16;
        frame.set_cursor_position((x.min(inner.right().saturating_sub(1)), inner.y + row));
    }
}

fn label_span(app: &App, form: &EditForm, field: EditField) -> Span<'static> {
    let focused = form.focus == field;
    let padded = format!(
        " {}{}",
        field.label(),
        " ".repeat(LABEL_WIDTH.saturating_sub(1 + display_width(field.label())))
    );
    let style = if focused {
        Style::default()
            .fg(app.theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim)
    };
    Span::styled(padded, style)
}

fn text_field_line(app: &App, form: &EditForm, field: EditField, value: &str) -> Line<'static> {
    let focused = form.focus == field;
    let value_style = if focused {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
    } else {
        Style::default().fg(app.theme.text)
    };
    Line::from(vec![
        label_span(app, form, field),
        Span::styled(value.to_string(), value_style),
    ])
}

fn choice_field_line(app: &App, form: &EditForm, field: EditField, value: &str) -> Line<'static> {
    let focused = form.focus == field;
    let value_span = if focused {
        Span::styled(
            format!("◀ {} ▶", value),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg),
        )
    } else {
        Span::styled(value.to_string(), Style::default().fg(app.theme.text))
    };
    Line::from(vec![label_span(app, form, field), value_span])
}

fn derived_duration_line(app: &App, form: &EditForm) -> Line<'static> {
    let value = if form.derived_duration.is_empty() {
        "-".to_string()
    } else {
        form.derived_duration.clone()
    };
    Line::from(vec![
        Span::styled(
            format!(
                " 소요 시간{}",
                " ".repeat(LABEL_WIDTH.saturating_sub(1 + display_width("소요 시간")))
            ),
            Style::default().fg(app.theme.dim),
        ),
        Span::styled(value, Style::default().fg(app.theme.text)),
        Span::styled(" (자동 계산)", Style::default().fg(app.theme.dim)),
    ])
}
