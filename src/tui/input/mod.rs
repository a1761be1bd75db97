pub mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::App;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Help overlay swallows everything
    if app.show_help {
        app.show_help = false;
        return;
    }

    // Modal edit form intercepts all input while open
    if app.edit.is_some() {
        edit::handle_edit_key(app, key);
        return;
    }

    navigate::handle_navigate_key(app, key);
}
