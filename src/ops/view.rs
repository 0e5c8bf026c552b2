use serde::Serialize;

use crate::model::filter::FilterMode;
use crate::model::task::Task;

/// Filter `tasks` through `filter`, keeping their relative order
pub fn project(tasks: &[Task], filter: FilterMode) -> Vec<&Task> {
    tasks.iter().filter(|t| filter.admits(t.completed)).collect()
}

/// Task counts per filter tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ViewCounts {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

impl ViewCounts {
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        ViewCounts {
            total: tasks.len(),
            completed,
            pending: tasks.len() - completed,
        }
    }

    pub fn for_filter(&self, filter: FilterMode) -> usize {
        match filter {
            FilterMode::All => self.total,
            FilterMode::Completed => self.completed,
            FilterMode::Pending => self.pending,
        }
    }
}
