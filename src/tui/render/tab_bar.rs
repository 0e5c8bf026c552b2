use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::FilterMode;
use crate::ops::view::ViewCounts;
use crate::tui::app::App;

/// Render the tab bar: one tab per filter with its count, preference
/// indicators on the right, and a separator line below
pub fn render_tab_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1]);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    let sep = Span::styled("\u{2502}", Style::default().fg(app.theme.dim).bg(bg));
    let counts = ViewCounts::of(app.store.tasks());

    let mut spans: Vec<Span> = vec![Span::styled(" ", bg_style)];
    for filter in FilterMode::ALL {
        let is_current = app.filter == filter;
        spans.push(Span::styled(
            format!(" {} {} ", filter.label(), counts.for_filter(filter)),
            tab_style(app, is_current),
        ));
        spans.push(sep.clone());
    }

    // Preference indicators, right-aligned
    let prefs = app.store.preferences();
    let indicators = format!(
        "{}  {} ",
        if prefs.dark_mode { "\u{263E} dark" } else { "\u{263C} light" },
        if prefs.sound { "\u{266A} sound" } else { "\u{266A} muted" },
    );
    let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let ind_width = indicators.chars().count();
    let width = area.width as usize;
    if used + ind_width < width {
        spans.push(Span::styled(" ".repeat(width - used - ind_width), bg_style));
        spans.push(Span::styled(
            indicators,
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let tabs = Paragraph::new(Line::from(spans)).style(bg_style);
    frame.render_widget(tabs, area);
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(app.theme.background)
    }
}
