pub mod confirm_popup;
pub mod help_overlay;
pub mod list_view;
pub mod status_row;
pub mod tab_bar;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Mode};

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: tab bar (2 rows) | list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // tab bar + separator
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    tab_bar::render_tab_bar(frame, app, chunks[0]);
    list_view::render_list_view(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }

    if app.mode == Mode::Confirm
        && let Some(pending) = &app.confirm
    {
        confirm_popup::render_confirm_popup(frame, app, pending, area);
    }
}

/// A rectangle of fixed size centered in `area`, clipped to fit
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;
    use crate::model::Priority;

    #[test]
    fn full_screen_layout() {
        let mut app = app_with_tasks(&[
            ("Water plants", Priority::Low, false),
            ("File taxes", Priority::High, true),
        ]);
        let out = render_app(&mut app);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains("All 2"));
        assert!(lines[1].contains('\u{2500}'));
        assert!(out.contains("Water plants"));
        assert!(out.contains("File taxes"));
    }

    #[test]
    fn confirm_popup_shows_prompt() {
        let mut app = app_with_tasks(&[("File taxes", Priority::High, true)]);
        app.confirm = app.store.prepare_clear_completed();
        app.mode = Mode::Confirm;
        let out = render_app(&mut app);
        assert!(out.contains("clear 1 completed task(s)?"));
    }

    #[test]
    fn centered_rect_clips_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect_fixed(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect_fixed(40, 40, area), area);
    }
}
