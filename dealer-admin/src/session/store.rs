use crate::errors::AdminError;
use serde_json::{Map, Value};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tempfile::NamedTempFile;

/// Fixed key the token is stored under
pub const TOKEN_KEY: &str = "token";

/// A single key/value slot holding the bearer token
///
/// Reads never fail: storage that cannot be read is reported as absence, which
/// callers treat the same as "not logged in".
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;

    /// # Errors
    ///
    /// Returns [`AdminError::Storage`] when the value cannot be persisted.
    fn set(&self, token: &str) -> Result<(), AdminError>;

    /// # Errors
    ///
    /// Returns [`AdminError::Storage`] when the value cannot be removed.
    fn clear(&self) -> Result<(), AdminError>;
}

/// Process-local store
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RwLock<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.slot.read().ok().and_then(|slot| slot.clone())
    }

    fn set(&self, token: &str) -> Result<(), AdminError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|e| AdminError::storage(e.to_string()))?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), AdminError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|e| AdminError::storage(e.to_string()))?;
        *slot = None;
        Ok(())
    }
}

/// Store persisted as a JSON object file, keyed by [`TOKEN_KEY`]
///
/// Other keys in the file are preserved on write.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>, AdminError> {
        match fs::read(&self.path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| AdminError::storage(format!("{}: {e}", self.path.display()))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(AdminError::storage(format!("{}: {e}", self.path.display()))),
        }
    }

    /// Replace the file atomically; the content is only ever visible to the owner
    fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), AdminError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)
            .map_err(|e| AdminError::storage(format!("{}: {e}", dir.display())))?;
        let bytes = serde_json::to_vec_pretty(entries)
            .map_err(|e| AdminError::storage(e.to_string()))?;

        let mut staged = NamedTempFile::new_in(dir)
            .map_err(|e| AdminError::storage(format!("{}: {e}", dir.display())))?;
        restrict_permissions(staged.path())?;
        staged
            .write_all(&bytes)
            .map_err(|e| AdminError::storage(format!("{}: {e}", staged.path().display())))?;
        staged
            .persist(&self.path)
            .map_err(|e| AdminError::storage(format!("{}: {e}", self.path.display())))?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        match self.read_entries() {
            Ok(entries) => entries
                .get(TOKEN_KEY)
                .and_then(Value::as_str)
                .map(str::to_string),
            Err(err) => {
                tracing::debug!(error = ?err, "Session file unreadable, treating as logged out");
                None
            }
        }
    }

    fn set(&self, token: &str) -> Result<(), AdminError> {
        // A corrupt file is replaced rather than blocking login
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(TOKEN_KEY.to_string(), Value::String(token.to_string()));
        self.write_entries(&entries)
    }

    fn clear(&self) -> Result<(), AdminError> {
        if !self.path.exists() {
            return Ok(());
        }
        let mut entries = self.read_entries().unwrap_or_default();
        entries.remove(TOKEN_KEY);
        self.write_entries(&entries)
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), AdminError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
        .map_err(|e| AdminError::storage(format!("{}: {e}", path.display())))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), AdminError> {
    Ok(())
}
