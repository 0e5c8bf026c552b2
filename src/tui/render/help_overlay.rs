use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        " Navigation",
        &[
            (" \u{2191}\u{2193}/jk", "Move cursor up/down"),
            (" g/G", "Jump to top/bottom"),
            (" Tab", "Next filter"),
            (" 1/2/3", "All / pending / completed"),
        ],
    ),
    (
        " Tasks",
        &[
            (" a", "Add a task (Tab cycles priority)"),
            (" e/Enter", "Edit text"),
            (" Space/x", "Toggle completed"),
            (" d", "Delete"),
            (" m", "Move mode (j/k to reorder)"),
            (" C", "Clear completed"),
            (" D", "Clear all"),
        ],
    ),
    (
        " Preferences",
        &[
            (" t", "Toggle dark mode"),
            (" s", "Toggle sound"),
            (" ?", "Close this help"),
            (" q", "Quit"),
        ],
    ),
];

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay_area = centered_rect(60, 80, area);
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(" Key Bindings", header_style)));
    lines.push(Line::from(""));

    for (header, bindings) in SECTIONS {
        lines.push(Line::from(Span::styled(*header, header_style)));
        for (key, desc) in *bindings {
            add_binding(&mut lines, *key, *desc, key_style, desc_style);
        }
        lines.push(Line::from(""));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 12;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

/// Create a centered rectangle of the given percentage of the parent
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
