use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "JOT_DIR";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Resolve the data directory: explicit override, then `$JOT_DIR`,
/// then `$XDG_DATA_HOME/jot`, then `~/.local/share/jot`.
pub fn resolve_data_dir(override_dir: Option<&str>) -> PathBuf {
    if let Some(dir) = override_dir {
        return PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var(DATA_DIR_ENV)
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    let data_home = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".local").join("share"));
    data_home.join("jot")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

/// Read config.toml from the data directory. A missing file gives defaults.
pub fn read_config(data_dir: &Path) -> Result<Config, ConfigError> {
    let path = config_path(data_dir);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(ConfigError::ReadError { path, source: e }),
    };
    toml::from_str(&text).map_err(|e| ConfigError::ParseError { path, source: e })
}
