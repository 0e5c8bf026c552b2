use serde::Serialize;

use crate::model::filter::FilterMode;
use crate::model::prefs::Preferences;
use crate::model::task::Task;
use crate::ops::view::ViewCounts;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskListJson<'a> {
    pub filter: FilterMode,
    pub counts: ViewCounts,
    pub tasks: Vec<&'a Task>,
}

#[derive(Serialize)]
pub struct ClearedJson {
    pub removed: usize,
}

#[derive(Serialize)]
pub struct MovedJson {
    pub moved: bool,
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// Checkbox mark for a task
pub fn checkbox(task: &Task) -> &'static str {
    if task.completed { "[x]" } else { "[ ]" }
}

/// One line per task: `<id>  [x] <Priority>  <text>`
pub fn format_task_line(task: &Task) -> String {
    format!(
        "{}  {} {:<6}  {}",
        task.id,
        checkbox(task),
        task.priority.label(),
        task.text
    )
}

/// Format a projected view, falling back to the filter's empty message
pub fn format_task_list(view: &[&Task], filter: FilterMode) -> String {
    if view.is_empty() {
        return filter.empty_message().to_string();
    }
    view.iter()
        .map(|t| format_task_line(t))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Footer like `3 tasks: 1 completed, 2 pending`
pub fn format_counts(counts: &ViewCounts) -> String {
    format!(
        "{} task{}: {} completed, {} pending",
        counts.total,
        if counts.total == 1 { "" } else { "s" },
        counts.completed,
        counts.pending
    )
}

pub fn format_prefs(prefs: &Preferences) -> String {
    format!(
        "dark-mode: {}\nsound: {}",
        on_off(prefs.dark_mode),
        on_off(prefs.sound)
    )
}

pub fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}
