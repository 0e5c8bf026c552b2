use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::io::persistence::{PersistError, Persistence};
use crate::model::filter::FilterMode;
use crate::model::prefs::{PrefKey, Preferences};
use crate::model::task::{Priority, Task, TaskId, normalize_text};
use crate::ops::notify::{Cue, Notifier, Silent};
use crate::ops::view;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("task text cannot be empty")]
    EmptyText,
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// A destructive operation over many tasks, run only after confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    ClearCompleted,
    ClearAll,
}

impl BulkAction {
    /// Notice shown instead of a prompt when there is nothing to remove
    pub fn nothing_message(self) -> &'static str {
        match self {
            BulkAction::ClearCompleted => "No completed tasks to clear!",
            BulkAction::ClearAll => "No tasks to clear!",
        }
    }
}

/// A pending bulk action and the number of tasks it would remove.
/// Dropping it cancels the action.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Confirmation {
    action: BulkAction,
    count: usize,
}

impl Confirmation {
    pub fn action(&self) -> BulkAction {
        self.action
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Question put to the user
    pub fn prompt(&self) -> String {
        match self.action {
            BulkAction::ClearCompleted => format!(
                "Are you sure you want to clear {} completed task(s)?",
                self.count
            ),
            BulkAction::ClearAll => format!(
                "Are you sure you want to delete all {} task(s)? This action cannot be undone.",
                self.count
            ),
        }
    }
}

type Clock = Box<dyn Fn() -> DateTime<Utc>>;

/// The ordered task collection plus preferences.
///
/// Every mutation builds the next collection, writes it through to
/// persistence and only then replaces the in-memory list, so a failed write
/// leaves the store untouched.
pub struct TaskStore {
    tasks: Vec<Task>,
    prefs: Preferences,
    persistence: Persistence,
    notifier: Box<dyn Notifier>,
    clock: Clock,
    /// Highest id ever handed out or loaded
    last_id: i64,
}

impl TaskStore {
    /// Load tasks and preferences from `persistence`
    pub fn open(mut persistence: Persistence) -> Self {
        let tasks = persistence.load();
        let prefs = persistence.load_preferences();
        let last_id = tasks.iter().map(|t| t.id.0).max().unwrap_or(0);
        tracing::debug!(tasks = tasks.len(), ?prefs, "opened task store");
        TaskStore {
            tasks,
            prefs,
            persistence,
            notifier: Box::new(Silent),
            clock: Box::new(Utc::now),
            last_id,
        }
    }

    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_clock(mut self, clock: impl Fn() -> DateTime<Utc> + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// The tasks the render sink should display for `filter`
    pub fn projected_view(&self, filter: FilterMode) -> Vec<&Task> {
        view::project(&self.tasks, filter)
    }

    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    #[cfg(test)]
    pub(crate) fn persistence(&mut self) -> &mut Persistence {
        &mut self.persistence
    }

    // -----------------------------------------------------------------------
    // Task mutations
    // -----------------------------------------------------------------------

    /// Append a new task. Fails without touching state if `text` is blank.
    pub fn create(&mut self, text: &str, priority: Priority) -> Result<Task, StoreError> {
        let text = normalize_text(text).ok_or(StoreError::EmptyText)?;
        let now = (self.clock)();
        let id = self.next_id(now);
        let task = Task::new(id, text, priority, now);

        let mut next = self.tasks.clone();
        next.push(task.clone());
        self.commit(next)?;
        self.last_id = self.last_id.max(id.0);

        tracing::debug!(id = %task.id, %priority, "created task");
        self.play(Cue::Added);
        Ok(task)
    }

    /// Remove a task. Returns the removed task, or `None` if the id is unknown.
    pub fn delete(&mut self, id: TaskId) -> Result<Option<Task>, StoreError> {
        let Some(idx) = self.position(id) else {
            return Ok(None);
        };
        let mut next = self.tasks.clone();
        let removed = next.remove(idx);
        self.commit(next)?;

        tracing::debug!(%id, "deleted task");
        self.play(Cue::Deleted);
        Ok(Some(removed))
    }

    /// Flip the completed flag. Returns the new value, or `None` if the id is unknown.
    pub fn toggle_complete(&mut self, id: TaskId) -> Result<Option<bool>, StoreError> {
        let Some(idx) = self.position(id) else {
            return Ok(None);
        };
        let mut next = self.tasks.clone();
        next[idx].completed = !next[idx].completed;
        let completed = next[idx].completed;
        self.commit(next)?;

        tracing::debug!(%id, completed, "toggled task");
        self.play(Cue::Completed);
        Ok(Some(completed))
    }

    /// Replace a task's text. Blank text is rejected before the id is looked
    /// up; an unknown id returns `Ok(false)`.
    pub fn edit_text(&mut self, id: TaskId, new_text: &str) -> Result<bool, StoreError> {
        let text = normalize_text(new_text).ok_or(StoreError::EmptyText)?;
        let Some(idx) = self.position(id) else {
            return Ok(false);
        };
        let mut next = self.tasks.clone();
        next[idx].text = text;
        self.commit(next)?;

        tracing::debug!(%id, "edited task");
        self.play(Cue::Added);
        Ok(true)
    }

    /// Move `id` to sit immediately before `before_id`.
    ///
    /// Unknown ids, equal ids and moves that would not change the order are
    /// no-ops and return `Ok(false)`.
    pub fn reorder(&mut self, id: TaskId, before_id: TaskId) -> Result<bool, StoreError> {
        if id == before_id {
            return Ok(false);
        }
        let (Some(from), Some(to)) = (self.position(id), self.position(before_id)) else {
            return Ok(false);
        };
        // Index of `before_id` once `id` has been taken out
        let insert_at = if from < to { to - 1 } else { to };
        if insert_at == from {
            return Ok(false);
        }

        let mut next = self.tasks.clone();
        let task = next.remove(from);
        next.insert(insert_at, task);
        self.commit(next)?;

        tracing::debug!(%id, before = %before_id, "reordered task");
        Ok(true)
    }

    /// Remove every completed task, returning how many went
    pub fn clear_completed(&mut self) -> Result<usize, StoreError> {
        let next: Vec<Task> = self.tasks.iter().filter(|t| !t.completed).cloned().collect();
        let removed = self.tasks.len() - next.len();
        if removed == 0 {
            return Ok(0);
        }
        self.commit(next)?;

        tracing::debug!(removed, "cleared completed tasks");
        self.play(Cue::Deleted);
        Ok(removed)
    }

    /// Remove every task, returning how many went
    pub fn clear_all(&mut self) -> Result<usize, StoreError> {
        let removed = self.tasks.len();
        if removed == 0 {
            return Ok(0);
        }
        self.commit(Vec::new())?;

        tracing::debug!(removed, "cleared all tasks");
        self.play(Cue::Deleted);
        Ok(removed)
    }

    // -----------------------------------------------------------------------
    // Confirmation protocol
    // -----------------------------------------------------------------------

    /// Ask before clearing completed tasks; `None` when there are none
    pub fn prepare_clear_completed(&self) -> Option<Confirmation> {
        let count = self.tasks.iter().filter(|t| t.completed).count();
        (count > 0).then_some(Confirmation {
            action: BulkAction::ClearCompleted,
            count,
        })
    }

    /// Ask before clearing everything; `None` when the list is empty
    pub fn prepare_clear_all(&self) -> Option<Confirmation> {
        let count = self.tasks.len();
        (count > 0).then_some(Confirmation {
            action: BulkAction::ClearAll,
            count,
        })
    }

    pub fn prepare(&self, action: BulkAction) -> Option<Confirmation> {
        match action {
            BulkAction::ClearCompleted => self.prepare_clear_completed(),
            BulkAction::ClearAll => self.prepare_clear_all(),
        }
    }

    /// Run a confirmed bulk action against the current state
    pub fn confirm(&mut self, confirmation: Confirmation) -> Result<usize, StoreError> {
        match confirmation.action {
            BulkAction::ClearCompleted => self.clear_completed(),
            BulkAction::ClearAll => self.clear_all(),
        }
    }

    // -----------------------------------------------------------------------
    // Preferences
    // -----------------------------------------------------------------------

    pub fn toggle_dark_mode(&mut self) -> Result<bool, StoreError> {
        self.toggle_preference(PrefKey::DarkMode)
    }

    /// Toggle sound cues; turning them on plays a cue as confirmation
    pub fn toggle_sound(&mut self) -> Result<bool, StoreError> {
        let enabled = self.toggle_preference(PrefKey::Sound)?;
        if enabled {
            self.play(Cue::Completed);
        }
        Ok(enabled)
    }

    fn toggle_preference(&mut self, key: PrefKey) -> Result<bool, StoreError> {
        let value = !self.prefs.get(key);
        self.persistence.save_preference(key, value)?;
        self.prefs.set(key, value);
        tracing::debug!(key = key.storage_key(), value, "toggled preference");
        Ok(value)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn commit(&mut self, next: Vec<Task>) -> Result<(), StoreError> {
        self.persistence.save(&next)?;
        self.tasks = next;
        Ok(())
    }

    fn next_id(&self, now: DateTime<Utc>) -> TaskId {
        let millis = now.timestamp_millis();
        if millis > self.last_id {
            return TaskId(millis);
        }
        match self.last_id.checked_add(1) {
            Some(id) => TaskId(id),
            // Nothing left above the highest id, take the lowest free one
            None => {
                let used: HashSet<i64> = self.tasks.iter().map(|t| t.id.0).collect();
                TaskId((1..i64::MAX).find(|n| !used.contains(n)).unwrap_or(0))
            }
        }
    }

    fn play(&mut self, cue: Cue) {
        if self.prefs.sound {
            self.notifier.cue(cue);
        }
    }
}
