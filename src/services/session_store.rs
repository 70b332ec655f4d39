// LinkKeeper session store
// Holds the bearer token and user profile for the current login, persisted as a
// JSON file so a restart preserves the session. No network calls; the server is
// the sole authority on token validity.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::platform;
use crate::types::auth::{Session, UserProfile};
use crate::types::errors::SessionError;

/// Trait defining the session store interface.
pub trait SessionStoreTrait {
    fn load(&mut self) -> Result<Option<Session>, SessionError>;
    fn get_token(&self) -> Option<&str>;
    fn get_user(&self) -> Option<&UserProfile>;
    fn set_session(&mut self, token: &str, user: UserProfile) -> Result<(), SessionError>;
    fn clear_session(&mut self) -> Result<(), SessionError>;
    fn has_session(&self) -> bool;
    fn get_store_path(&self) -> &str;
}

/// Session store implementation that persists the session as JSON on disk.
pub struct SessionStore {
    store_path: String,
    session: Option<Session>,
}

impl SessionStore {
    /// Creates a new SessionStore.
    ///
    /// If `path_override` is `Some`, uses that path for the session file.
    /// Otherwise, uses the platform-specific config directory with `session.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let store_path = match path_override {
            Some(p) => p,
            None => {
                let config_dir = platform::get_config_dir();
                config_dir
                    .join("session.json")
                    .to_string_lossy()
                    .to_string()
            }
        };

        Self {
            store_path,
            session: None,
        }
    }
}

impl SessionStoreTrait for SessionStore {
    /// Loads the persisted session from disk.
    ///
    /// If the file does not exist, there is no session; this is not an error.
    /// If the file exists but is malformed, returns a serialization error.
    fn load(&mut self) -> Result<Option<Session>, SessionError> {
        let path = Path::new(&self.store_path);

        if !path.exists() {
            self.session = None;
            return Ok(None);
        }

        let content = fs::read_to_string(path)
            .map_err(|e| SessionError::IoError(format!("Failed to read session file: {}", e)))?;

        let session: Session = serde_json::from_str(&content).map_err(|e| {
            SessionError::SerializationError(format!("Failed to parse session file: {}", e))
        })?;

        self.session = Some(session.clone());
        Ok(Some(session))
    }

    /// Returns the stored bearer token, if logged in.
    fn get_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// Returns the stored user profile, if logged in.
    fn get_user(&self) -> Option<&UserProfile> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// Stores a new session and persists it to disk.
    ///
    /// Creates parent directories if they don't exist.
    fn set_session(&mut self, token: &str, user: UserProfile) -> Result<(), SessionError> {
        let session = Session {
            token: token.to_string(),
            user,
        };

        let path = Path::new(&self.store_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SessionError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&session).map_err(|e| {
            SessionError::SerializationError(format!("Failed to serialize session: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| SessionError::IoError(format!("Failed to write session file: {}", e)))?;

        debug!(user = %session.user.email, "session stored");
        self.session = Some(session);
        Ok(())
    }

    /// Removes the session from memory and disk.
    fn clear_session(&mut self) -> Result<(), SessionError> {
        self.session = None;

        let path = Path::new(&self.store_path);
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::IoError(format!(
                "Failed to remove session file: {}",
                e
            ))),
        }
    }

    /// Returns true if a session is currently held in memory.
    fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the path to the session file.
    fn get_store_path(&self) -> &str {
        &self.store_path
    }
}
