use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let (mut spans, hint): (Vec<Span>, &str) = match app.mode {
        Mode::Navigate => {
            let spans = match &app.status_message {
                Some(msg) => vec![Span::styled(
                    format!(" {}", msg),
                    Style::default().fg(app.theme.highlight).bg(bg),
                )],
                None => Vec::new(),
            };
            (spans, "a add  space done  d delete  ? help")
        }
        Mode::Add | Mode::Edit => {
            let label = if app.mode == Mode::Add { "add" } else { "edit" };
            let mut spans = vec![Span::styled(
                format!(" {}: ", label),
                Style::default()
                    .fg(app.theme.highlight)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            )];
            if app.mode == Mode::Add {
                spans.push(Span::styled(
                    format!("[{}] ", app.new_priority.label()),
                    Style::default()
                        .fg(app.theme.priority_color(app.new_priority))
                        .bg(bg),
                ));
            }
            spans.push(Span::styled(
                app.edit_buffer.clone(),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ));
            let hint = match (&app.status_message, app.mode) {
                (Some(_), _) => "",
                (None, Mode::Add) => "Tab priority  Enter save  Esc cancel",
                (None, _) => "Enter save  Esc cancel",
            };
            if let Some(msg) = &app.status_message {
                spans.push(Span::styled(
                    format!("  {}", msg),
                    Style::default().fg(app.theme.red).bg(bg),
                ));
            }
            (spans, hint)
        }
        Mode::Move => (
            vec![Span::styled(
                " -- MOVE --",
                Style::default()
                    .fg(app.theme.highlight)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            )],
            "j/k move  Enter done",
        ),
        Mode::Confirm => (Vec::new(), "y confirm  n cancel"),
    };

    if app.ui.show_key_hints {
        let content_width: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
        let hint_width = hint.chars().count();
        if !hint.is_empty() && content_width + hint_width + 1 < width {
            let padding = width - content_width - hint_width - 1;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, dim));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);

    // Terminal cursor inside the text input
    if matches!(app.mode, Mode::Add | Mode::Edit) {
        let prefix = if app.mode == Mode::Add {
            format!(" add: [{}] ", app.new_priority.label())
        } else {
            " edit: ".to_string()
        };
        let col = unicode::display_width(&prefix)
            + unicode::byte_offset_to_display_col(&app.edit_buffer, app.edit_cursor);
        let x = area.x + (col as u16).min(area.width.saturating_sub(1));
        frame.set_cursor_position(Position::new(x, area.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use crate::tui::render::test_helpers::*;

    fn render(app: &App) -> String {
        render_to_string(TERM_W, 1, |frame, area| {
            render_status_row(frame, app, area);
        })
    }

    #[test]
    fn navigate_shows_hints_and_notice() {
        let mut app = app_with_tasks(&[]);
        assert!(render(&app).contains("? help"));

        app.status_message = Some("No tasks to clear!".into());
        let out = render(&app);
        assert!(out.starts_with(" No tasks to clear!"));
    }

    #[test]
    fn hints_can_be_hidden() {
        let mut app = app_with_tasks(&[]);
        app.ui.show_key_hints = false;
        assert_eq!(render(&app), "");
    }

    #[test]
    fn add_prompt_shows_priority_and_buffer() {
        let mut app = app_with_tasks(&[]);
        app.mode = Mode::Add;
        app.new_priority = Priority::High;
        app.edit_buffer = "Call mom".into();
        let out = render(&app);
        assert!(out.starts_with(" add: [High] Call mom"));
        assert!(out.contains("Tab priority"));
    }

    #[test]
    fn edit_prompt_shows_validation_notice() {
        let mut app = app_with_tasks(&[]);
        app.mode = Mode::Edit;
        app.status_message = Some("Please enter a task!".into());
        let out = render(&app);
        assert!(out.starts_with(" edit: "));
        assert!(out.contains("Please enter a task!"));
    }

    #[test]
    fn move_mode_banner() {
        let mut app = app_with_tasks(&[]);
        app.mode = Mode::Move;
        assert!(render(&app).contains("-- MOVE --"));
    }
}
