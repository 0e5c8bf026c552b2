use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the filtered task list, keeping the cursor row on screen
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let visible_height = area.height as usize;

    let len = app.view_len();
    if len == 0 {
        let msg = format!(" {}", app.filter.empty_message());
        let line = Line::from(Span::styled(msg, Style::default().fg(app.theme.dim).bg(bg)));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        app.scroll_offset = 0;
        return;
    }

    // Adjust scroll so the cursor row is visible
    let cursor = app.cursor.min(len - 1);
    if cursor < app.scroll_offset {
        app.scroll_offset = cursor;
    } else if visible_height > 0 && cursor >= app.scroll_offset + visible_height {
        app.scroll_offset = cursor + 1 - visible_height;
    }
    app.scroll_offset = app.scroll_offset.min(len.saturating_sub(1));

    let app = &*app;
    let view = app.view();
    let end = len.min(app.scroll_offset + visible_height);
    let lines: Vec<Line> = view[app.scroll_offset..end]
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_cursor = app.scroll_offset + i == cursor;
            render_task_line(app, task, is_cursor, area.width as usize)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn render_task_line(app: &App, task: &Task, is_cursor: bool, width: usize) -> Line<'static> {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let moving = is_cursor && app.mode == Mode::Move;

    let marker = match (is_cursor, moving) {
        (true, true) => "\u{2195}",
        (true, false) => "\u{258E}",
        _ => " ",
    };
    let mut spans = vec![
        Span::styled(marker, Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(
            if task.completed { "[x] " } else { "[ ] " },
            Style::default()
                .fg(if task.completed { app.theme.green } else { app.theme.text })
                .bg(bg),
        ),
        Span::styled(
            format!("{:<6} ", task.priority.label()),
            Style::default()
                .fg(app.theme.priority_color(task.priority))
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    let text = unicode::truncate_to_width(&task.text, width.saturating_sub(used));
    let text_style = if task.completed {
        Style::default()
            .fg(app.theme.dim)
            .bg(bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if is_cursor {
        Style::default().fg(app.theme.text_bright).bg(bg)
    } else {
        Style::default().fg(app.theme.text).bg(bg)
    };
    let text_width = unicode::display_width(&text);
    spans.push(Span::styled(text, text_style));

    // Fill the rest of the row so the selection background spans it
    let pad = width.saturating_sub(used + text_width);
    if pad > 0 {
        spans.push(Span::styled(" ".repeat(pad), Style::default().bg(bg)));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FilterMode, Priority};
    use crate::tui::render::test_helpers::*;

    fn render(app: &mut App, w: u16, h: u16) -> String {
        render_to_string(w, h, |frame, area| {
            render_list_view(frame, app, area);
        })
    }

    #[test]
    fn rows_show_checkbox_priority_and_text() {
        let mut app = app_with_tasks(&[
            ("Water plants", Priority::Low, false),
            ("File taxes", Priority::High, true),
        ]);
        let out = render(&mut app, TERM_W, 5);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("[ ] Low    Water plants"));
        assert!(lines[1].contains("[x] High   File taxes"));
    }

    #[test]
    fn empty_view_shows_filter_message() {
        let mut app = app_with_tasks(&[("open", Priority::Low, false)]);
        app.set_filter(FilterMode::Completed);
        let out = render(&mut app, TERM_W, 5);
        assert!(out.contains("No completed tasks yet!"));

        let mut empty = app_with_tasks(&[]);
        let out = render(&mut empty, TERM_W, 5);
        assert!(out.contains("No tasks yet. Add one to get started!"));
    }

    #[test]
    fn long_text_is_truncated() {
        let mut app = app_with_tasks(&[(
            "an extremely long task description that will not fit",
            Priority::Medium,
            false,
        )]);
        let out = render(&mut app, 30, 2);
        let first = out.lines().next().unwrap();
        assert!(first.ends_with('\u{2026}'));
        assert!(unicode::display_width(first) <= 30);
    }

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        let mut app = app_with_tasks(&[
            ("t1", Priority::Low, false),
            ("t2", Priority::Low, false),
            ("t3", Priority::Low, false),
            ("t4", Priority::Low, false),
            ("t5", Priority::Low, false),
        ]);
        app.cursor = 4;
        let out = render(&mut app, TERM_W, 3);
        assert_eq!(app.scroll_offset, 2);
        assert!(out.contains("t5"));
        assert!(!out.contains("t1"));

        app.cursor = 0;
        let out = render(&mut app, TERM_W, 3);
        assert_eq!(app.scroll_offset, 0);
        assert!(out.contains("t1"));
    }
}
