use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which subset of tasks is on screen. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Completed,
    Pending,
}

impl FilterMode {
    /// Tab order in the UI
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Pending, FilterMode::Completed];

    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Completed => "completed",
            FilterMode::Pending => "pending",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Completed => "Completed",
            FilterMode::Pending => "Pending",
        }
    }

    /// Does a task with this completion flag pass the filter?
    pub fn admits(self, completed: bool) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Completed => completed,
            FilterMode::Pending => !completed,
        }
    }

    /// Message shown when the filtered view is empty
    pub fn empty_message(self) -> &'static str {
        match self {
            FilterMode::All => "No tasks yet. Add one to get started!",
            FilterMode::Completed => "No completed tasks yet!",
            FilterMode::Pending => "No pending tasks!",
        }
    }

    /// Next tab, wrapping around
    pub fn next(self) -> FilterMode {
        let idx = FilterMode::ALL.iter().position(|f| *f == self).unwrap_or(0);
        FilterMode::ALL[(idx + 1) % FilterMode::ALL.len()]
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "completed" | "done" => Ok(FilterMode::Completed),
            "pending" | "todo" => Ok(FilterMode::Pending),
            _ => Err(format!(
                "invalid filter \"{}\" (expected all, completed or pending)",
                s
            )),
        }
    }
}
