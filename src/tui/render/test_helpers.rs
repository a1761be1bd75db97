use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::ops::store::PlannerStore;
use crate::tui::app::App;
use crate::util::unicode::display_width;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 32;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer();
    let mut out = String::new();
    for row in buf.content.chunks(buf.area.width as usize) {
        let mut text = String::new();
        let mut skip = 0;
        for cell in row {
            if skip > 0 {
                skip -= 1;
                continue;
            }
            let symbol = cell.symbol();
            text.push_str(symbol);
            // A double-width glyph (Hangul) is followed by a filler cell;
            // collecting it would inject a phantom space mid-word
            skip = display_width(symbol).saturating_sub(1);
        }
        out.push_str(text.trim_end());
        out.push('\n');
    }
    // Drop trailing blank lines so assertions stay stable across heights
    out.truncate(out.trim_end_matches('\n').len());
    out
}

/// An App seeded with the demo planner data.
pub fn demo_app() -> App {
    App::new(PlannerStore::demo())
}

/// Render the full UI for an App at the default test size.
pub fn render_app(app: &App) -> String {
    render_to_string(TERM_W, TERM_H, |frame, _area| {
        super::render(frame, app);
    })
}

mod tests {
    use ratatui::widgets::Paragraph;

    use super::*;

    #[test]
    fn extraction_keeps_hangul_words_intact() {
        // Double-width glyphs leave a filler cell in the buffer; the
        // extractor must not turn those into spaces inside words
        let out = render_to_string(40, 3, |frame, area| {
            frame.render_widget(Paragraph::new("오늘의 할 일 x 일정"), area);
        });
        assert_eq!(out, "오늘의 할 일 x 일정");
    }

    #[test]
    fn extraction_trims_trailing_blanks() {
        let out = render_to_string(20, 5, |frame, area| {
            frame.render_widget(Paragraph::new("점심"), area);
        });
        assert_eq!(out, "점심");
    }
}
