use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::task::Priority;

/// Configuration from config.toml in the data directory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tasks: TasksConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Priority preselected when adding a task
    #[serde(default)]
    pub default_priority: Priority,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Overrides for the dark palette, keyed by theme slot name
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Overrides for the light palette
    #[serde(default)]
    pub light_colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
            light_colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}
