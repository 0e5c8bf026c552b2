use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y or Enter
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('y' | 'Y'))
        | (_, KeyCode::Enter) => {
            app.mode = Mode::Navigate;
            if let Some(pending) = app.confirm.take() {
                let result = app.store.confirm(pending);
                if let Some(removed) = app.report(result) {
                    app.status_message = Some(format!("removed {} task(s)", removed));
                }
                app.clamp_cursor();
            }
        }
        // Cancel: n or Esc
        (_, KeyCode::Char('n' | 'N')) | (_, KeyCode::Esc) => {
            app.confirm = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}
