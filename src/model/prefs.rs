use serde::Serialize;

/// A persisted boolean preference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefKey {
    DarkMode,
    Sound,
}

impl PrefKey {
    /// Key the preference is stored under
    pub fn storage_key(self) -> &'static str {
        match self {
            PrefKey::DarkMode => "todoList_darkMode",
            PrefKey::Sound => "todoList_soundEnabled",
        }
    }

    pub fn default_value(self) -> bool {
        match self {
            PrefKey::DarkMode => false,
            PrefKey::Sound => true,
        }
    }
}

/// Process-wide preferences, loaded once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Preferences {
    pub dark_mode: bool,
    pub sound: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            dark_mode: PrefKey::DarkMode.default_value(),
            sound: PrefKey::Sound.default_value(),
        }
    }
}

impl Preferences {
    pub fn get(&self, key: PrefKey) -> bool {
        match key {
            PrefKey::DarkMode => self.dark_mode,
            PrefKey::Sound => self.sound,
        }
    }

    pub fn set(&mut self, key: PrefKey, value: bool) {
        match key {
            PrefKey::DarkMode => self.dark_mode = value,
            PrefKey::Sound => self.sound = value,
        }
    }
}
