//! Session handling.
//!
//! A `Session` wraps the bearer token returned by the login endpoint. The
//! token is persisted as a single `session.json` entry in the user data
//! directory so it survives across invocations, until `login` overwrites it
//! or `logout` removes it. Absence of the file means "not logged in".

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const SESSION_FILENAME: &str = "session.json";

/// An authenticated context identified by an opaque bearer token.
///
/// Constructed only through [`Session::new`], which rejects blank tokens,
/// and passed explicitly into every task operation.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    token: String,
}

impl Session {
    /// Create a session from a token, rejecting blank input.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::InvalidCredentials);
        }
        Ok(Self { token })
    }

    /// The bearer token value.
    pub fn token(&self) -> &str {
        &self.token
    }
}

// Keep the token out of debug logs.
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("token", &"<redacted>").finish()
    }
}

/// On-disk shape of the persisted session.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    token: String,
    saved_at: DateTime<Utc>,
}

/// File-backed store holding the single persisted session entry.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Create a store rooted at the given directory.
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Resolve the store location: an explicit override first, then the
    /// per-user data directory.
    pub fn resolve(override_dir: Option<PathBuf>) -> Result<Self> {
        if let Some(dir) = override_dir {
            return Ok(Self::new(dir));
        }
        let dirs = directories::ProjectDirs::from("", "", "tasknest").ok_or_else(|| {
            Error::OperationFailed("could not determine user data directory".to_string())
        })?;
        Ok(Self::new(dirs.data_dir().to_path_buf()))
    }

    /// Path to the persisted session file.
    pub fn session_file(&self) -> PathBuf {
        self.dir.join(SESSION_FILENAME)
    }

    /// Persist the session, overwriting any previous entry.
    pub fn save(&self, session: &Session) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let stored = StoredSession {
            token: session.token.clone(),
            saved_at: Utc::now(),
        };
        let content = serde_json::to_string_pretty(&stored)?;
        std::fs::write(self.session_file(), content)?;
        Ok(())
    }

    /// Load the persisted session, if any.
    ///
    /// A missing file or a blank stored token both read as "not logged in".
    pub fn load(&self) -> Result<Option<Session>> {
        let path = self.session_file();
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(&path)?;
        let stored: StoredSession = serde_json::from_str(&raw)?;
        if stored.token.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(Session {
            token: stored.token,
        }))
    }

    /// Remove the persisted session. Returns whether an entry existed.
    pub fn clear(&self) -> Result<bool> {
        let path = self.session_file();
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(path)?;
        Ok(true)
    }
}
