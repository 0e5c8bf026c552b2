use std::collections::HashSet;

use crate::io::kv::{KeyValueStore, KvError};
use crate::model::prefs::{PrefKey, Preferences};
use crate::model::task::{Task, normalize_text};

/// Storage key for the full task collection
pub const TASKS_KEY: &str = "todoList_tasks";

/// Where an unreadable task blob is copied before it is reset
pub const CORRUPT_BACKUP_KEY: &str = "todoList_tasks.corrupt";

/// Error type for persistence writes. Loads never fail.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("storage error: {0}")]
    Kv(#[from] KvError),
    #[error("could not serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Reads and writes tasks and preferences as JSON text in a key-value store.
pub struct Persistence {
    kv: Box<dyn KeyValueStore>,
}

impl Persistence {
    pub fn new(kv: Box<dyn KeyValueStore>) -> Self {
        Persistence { kv }
    }

    /// Replace the stored collection with `tasks`, preserving order
    pub fn save(&mut self, tasks: &[Task]) -> Result<(), PersistError> {
        let json = serde_json::to_string(tasks)?;
        self.kv.set(TASKS_KEY, &json)?;
        Ok(())
    }

    /// Load the stored collection.
    ///
    /// Missing data yields an empty list. Malformed data also yields an empty
    /// list: the raw text is copied to [`CORRUPT_BACKUP_KEY`] and a warning is
    /// logged. Individual records that break invariants are dropped.
    pub fn load(&mut self) -> Vec<Task> {
        let raw = match self.kv.get(TASKS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e @ KvError::NotText { .. }) => {
                self.reset_malformed(&e);
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(error = %e, "could not read stored tasks, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => sanitize(tasks),
            Err(e) => {
                self.reset_malformed(&e);
                Vec::new()
            }
        }
    }

    /// Keep the unreadable task blob under [`CORRUPT_BACKUP_KEY`]
    fn reset_malformed(&mut self, error: &dyn std::error::Error) {
        tracing::warn!(
            error = %error,
            backup = CORRUPT_BACKUP_KEY,
            "stored tasks are malformed, resetting to an empty list"
        );
        if let Err(e) = self.kv.copy(TASKS_KEY, CORRUPT_BACKUP_KEY) {
            tracing::warn!(error = %e, "could not back up malformed tasks");
        }
    }

    pub fn save_preference(&mut self, key: PrefKey, value: bool) -> Result<(), PersistError> {
        self.kv
            .set(key.storage_key(), if value { "true" } else { "false" })?;
        Ok(())
    }

    /// `None` when the preference was never stored. Anything other than
    /// `"true"` reads as false.
    pub fn load_preference(&self, key: PrefKey) -> Option<bool> {
        match self.kv.get(key.storage_key()) {
            Ok(value) => value.map(|v| v.trim() == "true"),
            Err(e) => {
                tracing::warn!(error = %e, key = key.storage_key(), "could not read preference");
                None
            }
        }
    }

    /// Load both preferences, applying defaults for missing ones
    pub fn load_preferences(&self) -> Preferences {
        let mut prefs = Preferences::default();
        for key in [PrefKey::DarkMode, PrefKey::Sound] {
            if let Some(value) = self.load_preference(key) {
                prefs.set(key, value);
            }
        }
        prefs
    }
}

/// Trim stored text, then drop records with blank text or a repeated id,
/// keeping the first occurrence
fn sanitize(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::new();
    let before = tasks.len();
    let kept: Vec<Task> = tasks
        .into_iter()
        .filter_map(|mut t| {
            t.text = normalize_text(&t.text)?;
            seen.insert(t.id).then_some(t)
        })
        .collect();
    if kept.len() != before {
        tracing::warn!(
            dropped = before - kept.len(),
            "dropped stored tasks with blank text or duplicate ids"
        );
    }
    kept
}
