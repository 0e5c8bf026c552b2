use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ops::store::{BulkAction, Confirmation};
use crate::tui::app::App;

use super::centered_rect_fixed;

/// Render the y/n popup for a pending bulk action
pub fn render_confirm_popup(frame: &mut Frame, app: &App, pending: &Confirmation, area: Rect) {
    let popup_w: u16 = 56.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let bg = app.theme.background;
    let highlight = app.theme.highlight;
    let header_style = Style::default()
        .fg(highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let key_style = Style::default()
        .fg(highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let title = match pending.action() {
        BulkAction::ClearCompleted => " Clear completed",
        BulkAction::ClearAll => " Clear all",
    };

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(title, header_style)), Line::from("")];
    for s in wrap_text(" ", &pending.prompt(), inner_w) {
        lines.push(Line::from(Span::styled(s, text_style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" y", key_style),
        Span::styled(" confirm   ", dim_style),
        Span::styled("n", key_style),
        Span::styled(" cancel", dim_style),
    ]));

    // Dynamic height from content + 2 for borders
    let popup_h = (lines.len() as u16) + 2;
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

/// Greedy word wrap with a leading indent on every line
fn wrap_text(indent: &str, text: &str, max_width: usize) -> Vec<String> {
    let indent_len = indent.len();
    let mut lines = Vec::new();
    let mut current = indent.to_string();

    for word in text.split_whitespace() {
        let space = if current.len() == indent_len { 0 } else { 1 };
        if current.len() + space + word.len() > max_width && current.len() > indent_len {
            lines.push(current);
            current = indent.to_string();
        }
        if current.len() > indent_len {
            current.push(' ');
        }
        current.push_str(word);
    }
    if current.len() > indent_len || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap_text(" ", "one two three four", 10),
            vec![" one two", " three", " four"]
        );
        assert_eq!(wrap_text(" ", "", 10), vec![" "]);
    }

    #[test]
    fn clear_all_popup_wraps_prompt() {
        let mut app = app_with_tasks(&[
            ("a", Priority::Low, false),
            ("b", Priority::Low, true),
        ]);
        let pending = app.store.prepare_clear_all().unwrap();
        app.confirm = Some(pending.clone());
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_popup(frame, &app, &pending, area);
        });
        assert!(out.contains("Clear all"));
        assert!(out.contains("delete all 2 task(s)?"));
        assert!(out.contains("cannot be undone."));
        assert!(out.contains("y confirm"));
    }
}
