use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tempfile::NamedTempFile;

/// Error type for key-value store operations
#[derive(Debug, thiserror::Error)]
pub enum KvError {
    #[error("invalid storage key \"{0}\"")]
    InvalidKey(String),
    #[error("{} does not hold text", path.display())]
    NotText { path: PathBuf },
    #[error("could not access {path}: {source}")]
    Io {
        path: PathBuf,
        source: io::Error,
    },
}

/// Local string key/value storage. Values are opaque text.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError>;
    /// Replace any previous value under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError>;
    /// Copy the value under `from` to `to` as stored, even when it is not
    /// readable as text. Returns false if `from` is absent.
    fn copy(&mut self, from: &str, to: &str) -> Result<bool, KvError> {
        match self.get(from)? {
            Some(value) => {
                self.set(to, &value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        (**self).set(key, value)
    }

    fn copy(&mut self, from: &str, to: &str) -> Result<bool, KvError> {
        (**self).copy(from, to)
    }
}

// ---------------------------------------------------------------------------
// In-memory store
// ---------------------------------------------------------------------------

/// Insertion-ordered in-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: IndexMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Directory-backed store
// ---------------------------------------------------------------------------

/// One file per key inside a data directory (`<dir>/<key>.json`).
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: &Path) -> Result<Self, KvError> {
        fs::create_dir_all(dir).map_err(|e| KvError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
        Ok(FileStore {
            dir: dir.to_path_buf(),
        })
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf, KvError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Err(KvError::NotText { path }),
            Err(e) => Err(KvError::Io { path, source: e }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), KvError> {
        let path = self.path_for(key)?;
        atomic_write(&path, value.as_bytes()).map_err(|e| KvError::Io { path, source: e })
    }

    fn copy(&mut self, from: &str, to: &str) -> Result<bool, KvError> {
        let src = self.path_for(from)?;
        let dst = self.path_for(to)?;
        let bytes = match fs::read(&src) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(KvError::Io { path: src, source: e }),
        };
        atomic_write(&dst, &bytes).map_err(|e| KvError::Io {
            path: dst,
            source: e,
        })?;
        Ok(true)
    }
}

/// Keys become file names, so only a conservative character set is allowed
fn validate_key(key: &str) -> Result<(), KvError> {
    let ok = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if ok {
        Ok(())
    } else {
        Err(KvError::InvalidKey(key.to_string()))
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
