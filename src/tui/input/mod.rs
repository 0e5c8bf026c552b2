mod confirm;
mod edit;
mod move_mode;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

use confirm::handle_confirm;
use edit::handle_edit;
use move_mode::handle_move;
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Notices last until the next key
    app.status_message = None;

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Add | Mode::Edit => handle_edit(app, key),
        Mode::Move => handle_move(app, key),
        Mode::Confirm => handle_confirm(app, key),
    }
}

#[cfg(test)]
pub(crate) mod test_keys {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::handle_key;
    use crate::tui::app::App;

    pub fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    pub fn press_char(app: &mut App, c: char) {
        press(app, KeyCode::Char(c));
    }

    pub fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press_char(app, c);
        }
    }
}
