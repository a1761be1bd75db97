use ratatui::style::Color;

use crate::model::config::UiConfig;
use crate::model::task::ColorToken;

/// Parsed color theme for the TUI. Defaults follow the planner's pink
/// accent with one badge color per category slot.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub highlight: Color,
    pub done: Color,
    pub warn: Color,
    pub selection_bg: Color,
    /// Category badge colors
    pub work: Color,
    pub home: Color,
    pub meal: Color,
    pub personal: Color,
    /// Heatmap ramp, level 0 (no data / 0%) through 5 (100%)
    pub heat: [Color; 6],
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x11, 0x10, 0x18),
            text: Color::Rgb(0xD4, 0xD0, 0xDE),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x6B, 0x66, 0x78),
            highlight: Color::Rgb(0xEC, 0x48, 0x99),
            done: Color::Rgb(0x4A, 0xDE, 0x80),
            warn: Color::Rgb(0xFA, 0xCC, 0x15),
            selection_bg: Color::Rgb(0x3A, 0x16, 0x2C),
            work: Color::Rgb(0x4A, 0xDE, 0x80),
            home: Color::Rgb(0xFA, 0xCC, 0x15),
            meal: Color::Rgb(0xFB, 0x92, 0x3C),
            personal: Color::Rgb(0x38, 0xBD, 0xF8),
            heat: [
                Color::Rgb(0x2A, 0x28, 0x32),
                Color::Rgb(0x4D, 0x24, 0x3C),
                Color::Rgb(0x77, 0x2D, 0x55),
                Color::Rgb(0xA3, 0x35, 0x6E),
                Color::Rgb(0xC8, 0x3E, 0x84),
                Color::Rgb(0xEC, 0x48, 0x99),
            ],
        }
    }
}

/// Parse a hex color string like "#EC4899" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the user config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "dim" => theme.dim = color,
                "highlight" => theme.highlight = color,
                "done" => theme.done = color,
                "warn" => theme.warn = color,
                "selection" => theme.selection_bg = color,
                "work" => theme.work = color,
                "home" => theme.home = color,
                "meal" => theme.meal = color,
                "personal" => theme.personal = color,
                _ => {}
            }
        }
        theme
    }

    /// Concrete color for a category badge slot
    pub fn color_for(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::Green => self.work,
            ColorToken::Yellow => self.home,
            ColorToken::Orange => self.meal,
            ColorToken::Sky => self.personal,
        }
    }
}
