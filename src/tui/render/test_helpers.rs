use chrono::{DateTime, TimeZone, Utc};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::kv::MemoryStore;
use crate::io::persistence::Persistence;
use crate::model::{Config, Priority};
use crate::ops::store::TaskStore;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Render the whole screen for `app`
pub fn render_app(app: &mut App) -> String {
    render_to_string(TERM_W, TERM_H, |frame, _area| {
        super::render(frame, app);
    })
}

fn fixed_clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
}

/// Build an App over an in-memory store holding `tasks` in order.
/// Each entry is (text, priority, completed).
pub fn app_with_tasks(tasks: &[(&str, Priority, bool)]) -> App {
    let mut store =
        TaskStore::open(Persistence::new(Box::new(MemoryStore::new()))).with_clock(fixed_clock);
    for (text, priority, completed) in tasks {
        let task = store.create(text, *priority).unwrap();
        if *completed {
            store.toggle_complete(task.id).unwrap();
        }
    }
    App::new(store, &Config::default())
}
