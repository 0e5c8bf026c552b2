use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

/// Text input for Add and Edit modes
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.clear_edit();
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Enter) => submit(app),
        (_, KeyCode::Tab) if app.mode == Mode::Add => {
            app.new_priority = app.new_priority.next();
        }
        (_, KeyCode::Backspace) => {
            if let Some(prev) = prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(prev..app.edit_cursor, "");
                app.edit_cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) = next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_buffer.replace_range(app.edit_cursor..next, "");
            }
        }
        (_, KeyCode::Left) => {
            if let Some(prev) = prev_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) = next_grapheme_boundary(&app.edit_buffer, app.edit_cursor) {
                app.edit_cursor = next;
            }
        }
        (_, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => app.edit_cursor = 0,
        (_, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
            app.edit_cursor = app.edit_buffer.len();
        }
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
            app.edit_buffer.replace_range(..app.edit_cursor, "");
            app.edit_cursor = 0;
        }
        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
            app.edit_buffer.insert(app.edit_cursor, c);
            app.edit_cursor += c.len_utf8();
        }
        _ => {}
    }
}

/// Enter: create or update. Blank text keeps the input open with a notice.
fn submit(app: &mut App) {
    let text = app.edit_buffer.clone();
    match (app.mode, app.edit_target) {
        (Mode::Add, _) => {
            let result = app.store.create(&text, app.new_priority);
            if let Some(task) = app.report(result) {
                app.clear_edit();
                app.mode = Mode::Navigate;
                app.select_id(task.id);
            }
        }
        (Mode::Edit, Some(id)) => {
            let result = app.store.edit_text(id, &text);
            if app.report(result).is_some() {
                app.clear_edit();
                app.mode = Mode::Navigate;
            }
        }
        _ => {
            app.clear_edit();
            app.mode = Mode::Navigate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use crate::tui::input::test_keys::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn add_task_with_priority() {
        let mut app = app_with_tasks(&[("existing", Priority::Low, false)]);
        press_char(&mut app, 'a');
        assert_eq!(app.mode, Mode::Add);
        assert_eq!(app.new_priority, Priority::Medium);
        type_text(&mut app, "  Buy milk ");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.new_priority, Priority::High);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Navigate);
        let last = app.store.tasks().last().unwrap();
        assert_eq!(last.text, "Buy milk");
        assert_eq!(last.priority, Priority::High);
        assert_eq!(app.selected().unwrap().text, "Buy milk");
        assert!(app.edit_buffer.is_empty());
    }

    #[test]
    fn add_blank_stays_open_with_notice() {
        let mut app = app_with_tasks(&[]);
        press_char(&mut app, 'a');
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Add);
        assert!(app.store.is_empty());
        assert_eq!(app.status_message.as_deref(), Some("Please enter a task!"));
    }

    #[test]
    fn escape_cancels_add() {
        let mut app = app_with_tasks(&[]);
        press_char(&mut app, 'a');
        type_text(&mut app, "never mind");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.store.is_empty());
    }

    #[test]
    fn edit_replaces_text() {
        let mut app = app_with_tasks(&[("draft", Priority::Low, false)]);
        press_char(&mut app, 'e');
        assert_eq!(app.mode, Mode::Edit);
        assert_eq!(app.edit_buffer, "draft");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        type_text(&mut app, "ma");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Navigate);
        assert_eq!(app.store.tasks()[0].text, "drama");
    }

    #[test]
    fn edit_to_blank_keeps_original() {
        let mut app = app_with_tasks(&[("keep me", Priority::Low, false)]);
        press_char(&mut app, 'e');
        handle_edit(
            &mut app,
            KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL),
        );
        assert!(app.edit_buffer.is_empty());
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.mode, Mode::Edit);
        assert_eq!(app.store.tasks()[0].text, "keep me");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.store.tasks()[0].text, "keep me");
    }

    #[test]
    fn cursor_editing_handles_multibyte() {
        let mut app = app_with_tasks(&[]);
        press_char(&mut app, 'a');
        type_text(&mut app, "café");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.edit_buffer, "caé");
        press(&mut app, KeyCode::Delete);
        assert_eq!(app.edit_buffer, "ca");
        press(&mut app, KeyCode::Home);
        press_char(&mut app, 'X');
        assert_eq!(app.edit_buffer, "Xca");
    }
}
