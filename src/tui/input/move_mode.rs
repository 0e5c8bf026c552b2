use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

/// Move mode: j/k carry the selected task through the visible list
pub(super) fn handle_move(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => move_down(app),
        KeyCode::Char('k') | KeyCode::Up => move_up(app),
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char('m') => app.mode = Mode::Navigate,
        _ => {}
    }
}

fn move_down(app: &mut App) {
    // Moving down means the next visible task goes in front of this one
    let (sel, next) = {
        let view = app.view();
        match (view.get(app.cursor), view.get(app.cursor + 1)) {
            (Some(sel), Some(next)) => (sel.id, next.id),
            _ => return,
        }
    };
    let result = app.store.reorder(next, sel);
    if app.report(result) == Some(true) {
        app.cursor += 1;
    }
}

fn move_up(app: &mut App) {
    let Some(prev_idx) = app.cursor.checked_sub(1) else {
        return;
    };
    let (sel, prev) = {
        let view = app.view();
        match (view.get(app.cursor), view.get(prev_idx)) {
            (Some(sel), Some(prev)) => (sel.id, prev.id),
            _ => return,
        }
    };
    let result = app.store.reorder(sel, prev);
    if app.report(result) == Some(true) {
        app.cursor = prev_idx;
    }
}
