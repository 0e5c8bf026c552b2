use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::FilterMode;
use crate::ops::store::BulkAction;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) | (_, KeyCode::Char('q')) => {
            app.should_quit = true;
        }
        (_, KeyCode::Char('?')) => app.show_help = true,

        // Cursor movement
        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => move_cursor(app, 1),
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => move_cursor(app, -1),
        (_, KeyCode::Char('g')) | (_, KeyCode::Home) => app.cursor = 0,
        (_, KeyCode::Char('G')) | (_, KeyCode::End) => {
            app.cursor = app.view_len().saturating_sub(1);
        }

        // Filters
        (_, KeyCode::Tab) => app.set_filter(app.filter.next()),
        (_, KeyCode::Char('1')) => app.set_filter(FilterMode::All),
        (_, KeyCode::Char('2')) => app.set_filter(FilterMode::Pending),
        (_, KeyCode::Char('3')) => app.set_filter(FilterMode::Completed),

        // Task operations
        (_, KeyCode::Char('a')) => begin_add(app),
        (_, KeyCode::Char('e')) | (_, KeyCode::Enter) => begin_edit(app),
        (_, KeyCode::Char(' ')) | (_, KeyCode::Char('x')) => toggle_selected(app),
        (_, KeyCode::Char('d')) | (_, KeyCode::Delete) => delete_selected(app),
        (_, KeyCode::Char('m')) => {
            if app.selected().is_some() {
                app.mode = Mode::Move;
            }
        }

        // Bulk operations
        (_, KeyCode::Char('C')) => begin_bulk(app, BulkAction::ClearCompleted),
        (_, KeyCode::Char('D')) => begin_bulk(app, BulkAction::ClearAll),

        // Preferences
        (_, KeyCode::Char('t')) => {
            let result = app.store.toggle_dark_mode();
            if app.report(result).is_some() {
                app.refresh_theme();
            }
        }
        (_, KeyCode::Char('s')) => {
            let result = app.store.toggle_sound();
            if let Some(on) = app.report(result) {
                app.status_message = Some(format!("sound {}", if on { "on" } else { "off" }));
            }
        }
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let len = app.view_len();
    if len == 0 {
        app.cursor = 0;
        return;
    }
    let next = app.cursor as isize + delta;
    app.cursor = next.clamp(0, len as isize - 1) as usize;
}

fn begin_add(app: &mut App) {
    app.clear_edit();
    app.new_priority = app.default_priority;
    app.mode = Mode::Add;
}

fn begin_edit(app: &mut App) {
    let Some(task) = app.selected() else {
        return;
    };
    let (id, text) = (task.id, task.text.clone());
    app.edit_cursor = text.len();
    app.edit_buffer = text;
    app.edit_target = Some(id);
    app.mode = Mode::Edit;
}

fn toggle_selected(app: &mut App) {
    let Some(id) = app.selected_id() else {
        return;
    };
    let result = app.store.toggle_complete(id);
    app.report(result);
    // The task may have left the filtered view
    app.clamp_cursor();
}

fn delete_selected(app: &mut App) {
    let Some(id) = app.selected_id() else {
        return;
    };
    let result = app.store.delete(id);
    app.report(result);
    app.clamp_cursor();
}

fn begin_bulk(app: &mut App, action: BulkAction) {
    match app.store.prepare(action) {
        Some(pending) => {
            app.confirm = Some(pending);
            app.mode = Mode::Confirm;
        }
        None => app.status_message = Some(action.nothing_message().to_string()),
    }
}
