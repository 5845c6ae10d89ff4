//! Session context shared by every request-issuing call.
//!
//! The session token is owned by one explicit object instead of ambient
//! global storage. It is set on login or registration and torn down when
//! the backend answers 401.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::domain::DashError;
use crate::state::platform::paths;

/// Session file name inside the config directory.
const SESSION_FILE: &str = "session.json";

#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    auth_data: String,
}

/// Holds the current auth token and, optionally, where it is persisted.
///
/// Clones share the same token, so clearing it from a background task is
/// visible everywhere.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    token: Arc<Mutex<Option<String>>>,
    store: Option<PathBuf>,
}

impl SessionContext {
    /// Session that lives only in memory.
    #[cfg(test)]
    #[must_use]
    pub fn in_memory(token: Option<String>) -> Self {
        Self {
            token: Arc::new(Mutex::new(token)),
            store: None,
        }
    }

    /// Default session file location.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined.
    pub fn default_path() -> Result<PathBuf, DashError> {
        paths::config_file(SESSION_FILE).map_err(|e| DashError::Session(e.to_string()))
    }

    /// Loads the session stored at `path`. A missing or unreadable file
    /// yields an empty session bound to the same path.
    #[must_use]
    pub fn load(path: PathBuf) -> Self {
        let token = match read_token(&path) {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!("Ignoring unreadable session file {}: {err}", path.display());
                None
            }
        };
        Self {
            token: Arc::new(Mutex::new(token)),
            store: Some(path),
        }
    }

    /// Current token, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Sets the token and persists it when the session is file-backed.
    ///
    /// # Errors
    ///
    /// Returns `DashError::Session` if the session file cannot be written.
    pub fn store(&self, token: impl Into<String>) -> Result<(), DashError> {
        let token = token.into();
        if let Some(path) = &self.store {
            let content = serde_json::to_string_pretty(&SessionFile {
                auth_data: token.clone(),
            })
            .map_err(|e| DashError::Session(e.to_string()))?;
            fs::write(path, content).map_err(|e| DashError::Session(e.to_string()))?;
        }
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token);
        tracing::info!("Session token stored");
        Ok(())
    }

    /// Drops the token and removes the session file.
    ///
    /// # Errors
    ///
    /// Returns `DashError::Session` if an existing session file cannot be removed.
    pub fn clear(&self) -> Result<(), DashError> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(path) = &self.store
            && path.exists()
        {
            fs::remove_file(path).map_err(|e| DashError::Session(e.to_string()))?;
        }
        tracing::info!("Session cleared");
        Ok(())
    }
}

fn read_token(path: &Path) -> Result<Option<String>, DashError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|e| DashError::Session(e.to_string()))?;
    let file: SessionFile =
        serde_json::from_str(&content).map_err(|e| DashError::Session(e.to_string()))?;
    Ok(Some(file.auth_data).filter(|t| !t.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_session_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("subdash-test-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir.join(SESSION_FILE)
    }

    #[test]
    fn test_in_memory_session() {
        let session = SessionContext::in_memory(Some("tok".to_string()));
        assert_eq!(session.token().as_deref(), Some("tok"));
        session.clear().unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_clones_share_token() {
        let session = SessionContext::in_memory(None);
        let clone = session.clone();
        session.store("abc").unwrap();
        assert_eq!(clone.token().as_deref(), Some("abc"));
        clone.clear().unwrap();
        assert!(session.token().is_none());
    }

    #[test]
    fn test_file_backed_round_trip() {
        let path = temp_session_path("roundtrip");
        let session = SessionContext::load(path.clone());
        assert!(!session.is_authenticated());

        session.store("persisted").unwrap();
        let reloaded = SessionContext::load(path.clone());
        assert_eq!(reloaded.token().as_deref(), Some("persisted"));

        reloaded.clear().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_file_yields_empty_session() {
        let path = temp_session_path("corrupt");
        fs::write(&path, "not json").unwrap();
        let session = SessionContext::load(path.clone());
        assert!(!session.is_authenticated());
        let _ = fs::remove_file(path);
    }
}
