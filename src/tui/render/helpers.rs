use chrono::{Datelike, NaiveDate};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;

use crate::model::task::{TaskCategory, category_style};
use crate::ops::stats::WEEKDAY_LABELS;
use crate::tui::theme::Theme;

/// Korean long-form date, e.g. `2026년 8월 30일 일요일`
pub fn date_korean(date: NaiveDate) -> String {
    let weekday = WEEKDAY_LABELS[date.weekday().num_days_from_sunday() as usize];
    format!(
        "{}년 {}월 {}일 {}요일",
        date.year(),
        date.month(),
        date.day(),
        weekday
    )
}

/// Colored category badge glyph
pub fn category_badge(theme: &Theme, category: TaskCategory) -> Span<'static> {
    let style = category_style(category);
    Span::styled(style.icon, Style::default().fg(theme.color_for(style.color)))
}

/// Fixed-width progress bar, e.g. `████░░░░░░`
pub fn progress_bar(percent: f64, width: usize) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = (clamped / 100.0 * width as f64).round() as usize;
    let mut bar = String::new();
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '░' });
    }
    bar
}

/// A `width`×`height` rect centered inside `area`, clamped to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_formatting() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(date_korean(date), "2026년 8월 30일 일요일");
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0.0, 10), "░░░░░░░░░░");
        assert_eq!(progress_bar(50.0, 10), "█████░░░░░");
        assert_eq!(progress_bar(100.0, 10), "██████████");
        // Clamped even when fed an overrun value
        assert_eq!(progress_bar(250.0, 4), "████");
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered_rect(area, 40, 10);
        assert_eq!(popup, Rect::new(20, 7, 40, 10));
        let huge = centered_rect(area, 200, 100);
        assert_eq!(huge, area);
    }
}
