//! The signed-in user, persisted between runs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::GoBarberConfig;
use crate::error::{GoBarberError, GoBarberResult};
use crate::model::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// Stores the session as TOML, by default in ~/.config/gobarber/session.toml
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SessionStore { path: path.into() }
    }

    pub fn default_location() -> GoBarberResult<Self> {
        Ok(Self::new(GoBarberConfig::config_dir()?.join("session.toml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> GoBarberResult<Option<Session>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&self.path)?;
        let session = toml::from_str(&contents).map_err(|e| {
            GoBarberError::Session(format!("Invalid session file {}: {e}", self.path.display()))
        })?;

        Ok(Some(session))
    }

    /// The current session, or `NotSignedIn`.
    pub fn require(&self) -> GoBarberResult<Session> {
        self.load()?.ok_or(GoBarberError::NotSignedIn)
    }

    pub fn save(&self, session: &Session) -> GoBarberResult<()> {
        let contents = toml::to_string_pretty(session)
            .map_err(|e| GoBarberError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, contents)?;

        info!(user = %session.user.email, "Session saved");
        Ok(())
    }

    /// Replace the user snapshot, keeping the token.
    pub fn update_user(&self, user: User) -> GoBarberResult<Session> {
        let mut session = self.require()?;
        session.user = user;
        self.save(&session)?;
        Ok(session)
    }

    /// Remove the stored session. Returns false if nobody was signed in.
    pub fn sign_out(&self) -> GoBarberResult<bool> {
        if !self.path.exists() {
            return Ok(false);
        }

        std::fs::remove_file(&self.path)?;
        info!("Signed out");
        Ok(true)
    }
}
