//! Durable session storage.
//!
//! The browser original stashed `access_token` / `refresh_token` directly in
//! localStorage from wherever it happened to need them. Here storage is an
//! explicit abstraction injected into the auth and mentorship clients:
//! the [`TokenStore`] trait, with a file-backed implementation for the
//! application and an in-memory one for tests.
//!
//! No expiry or refresh logic lives here. A stale access token surfaces as a
//! rejected request upstream.

pub mod paths;

pub use paths::{ClientPaths, PathSource, detect_client_paths};

use crate::error::session::SessionStoreError;

use common::{ErrorLocation, RedactedSecret};

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use log::{debug, info};
use serde::{Deserialize, Serialize};

/// The token pair returned by a successful login.
#[derive(Debug, Clone)]
pub struct SessionTokens {
    pub access: RedactedSecret,
    pub refresh: RedactedSecret,
}

impl SessionTokens {
    pub fn new(access: impl Into<RedactedSecret>, refresh: impl Into<RedactedSecret>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }
}

/// On-disk representation. Field names are the storage keys the rest of the
/// platform expects (`access_token`, `refresh_token`).
#[derive(Serialize, Deserialize)]
struct StoredSession {
    access_token: String,
    refresh_token: String,
}

impl From<&SessionTokens> for StoredSession {
    fn from(tokens: &SessionTokens) -> Self {
        Self {
            access_token: tokens.access.expose().to_string(),
            refresh_token: tokens.refresh.expose().to_string(),
        }
    }
}

impl From<StoredSession> for SessionTokens {
    fn from(stored: StoredSession) -> Self {
        SessionTokens::new(stored.access_token, stored.refresh_token)
    }
}

/// Durable key-value storage for session tokens.
pub trait TokenStore: Send + Sync {
    /// Persist the token pair, replacing any previous session.
    fn save(&self, tokens: &SessionTokens) -> Result<(), SessionStoreError>;

    /// Load the stored token pair, if a session exists.
    fn load(&self) -> Result<Option<SessionTokens>, SessionStoreError>;

    /// Remove any stored session.
    fn clear(&self) -> Result<(), SessionStoreError>;
}

/// File-backed token store (`session.json` in the data directory).
///
/// Writes are atomic (temp file + rename) so a crash never leaves a
/// half-written session behind.
pub struct FileTokenStore {
    session_file: PathBuf,
}

impl FileTokenStore {
    /// Store backed by the detected platform data directory.
    pub fn open_default() -> Result<Self, SessionStoreError> {
        let paths = detect_client_paths()?;
        Ok(Self::at(paths.session_file))
    }

    /// Store backed by an explicit session file path.
    pub fn at(session_file: impl Into<PathBuf>) -> Self {
        Self {
            session_file: session_file.into(),
        }
    }

    pub fn session_file(&self) -> &Path {
        &self.session_file
    }
}

impl TokenStore for FileTokenStore {
    fn save(&self, tokens: &SessionTokens) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.session_file.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SessionStoreError::Write {
                location: ErrorLocation::from(Location::caller()),
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let stored = StoredSession::from(tokens);
        let json =
            serde_json::to_string_pretty(&stored).map_err(|e| SessionStoreError::Parse {
                location: ErrorLocation::from(Location::caller()),
                path: self.session_file.clone(),
                reason: e.to_string(),
            })?;

        let temp_path = self.session_file.with_extension("json.tmp");

        std::fs::write(&temp_path, &json).map_err(|e| SessionStoreError::Write {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        // Session tokens are credentials: owner read/write only.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&temp_path, perms).map_err(|e| {
                SessionStoreError::Write {
                    location: ErrorLocation::from(Location::caller()),
                    path: temp_path.clone(),
                    source: e,
                }
            })?;
        }

        // Atomic rename (POSIX guarantees atomicity)
        std::fs::rename(&temp_path, &self.session_file).map_err(|e| {
            SessionStoreError::Write {
                location: ErrorLocation::from(Location::caller()),
                path: self.session_file.clone(),
                source: e,
            }
        })?;

        info!("Session saved to {}", self.session_file.display());
        Ok(())
    }

    fn load(&self) -> Result<Option<SessionTokens>, SessionStoreError> {
        if !self.session_file.exists() {
            debug!("No session file at {}", self.session_file.display());
            return Ok(None);
        }

        let contents =
            std::fs::read_to_string(&self.session_file).map_err(|e| SessionStoreError::Read {
                location: ErrorLocation::from(Location::caller()),
                path: self.session_file.clone(),
                source: e,
            })?;

        let stored: StoredSession =
            serde_json::from_str(&contents).map_err(|e| SessionStoreError::Parse {
                location: ErrorLocation::from(Location::caller()),
                path: self.session_file.clone(),
                reason: e.to_string(),
            })?;

        Ok(Some(SessionTokens::from(stored)))
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        if self.session_file.exists() {
            std::fs::remove_file(&self.session_file).map_err(|e| SessionStoreError::Write {
                location: ErrorLocation::from(Location::caller()),
                path: self.session_file.clone(),
                source: e,
            })?;
            info!("Session cleared");
        }
        Ok(())
    }
}

/// In-memory token store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<Option<SessionTokens>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token pair.
    pub fn with_tokens(tokens: SessionTokens) -> Self {
        Self {
            tokens: Mutex::new(Some(tokens)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, tokens: &SessionTokens) -> Result<(), SessionStoreError> {
        let mut guard = self.tokens.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(tokens.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<SessionTokens>, SessionStoreError> {
        let guard = self.tokens.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(guard.clone())
    }

    fn clear(&self) -> Result<(), SessionStoreError> {
        let mut guard = self.tokens.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = None;
        Ok(())
    }
}
