use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::session::Session;

/// File-based persistence for the current session.
///
/// The session is stored as JSON in the application's config directory.
#[derive(Debug, Clone)]
pub struct SessionStorage {
    dir: PathBuf,
}

impl SessionStorage {
    /// Storage rooted at the platform config directory.
    pub fn new() -> Result<Self> {
        let dir = dirs::config_dir()
            .context("Failed to get config directory")?
            .join("clima");
        Ok(Self::at(dir))
    }

    /// Storage rooted at an explicit directory (tests, custom setups).
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn session_path(&self) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).context("Failed to create session directory")?;
        Ok(self.dir.join("session.json"))
    }

    /// Persist a session, replacing any previous one.
    pub fn store(&self, session: &Session) -> Result<()> {
        let path = self.session_path()?;

        let json =
            serde_json::to_string_pretty(session).context("Failed to serialize session")?;

        fs::write(&path, &json).context("Failed to write session file")?;

        tracing::info!("Stored session for user {} at {:?}", session.user_id, path);
        Ok(())
    }

    /// Load the stored session, if any.
    pub fn load(&self) -> Result<Option<Session>> {
        let path = self.session_path()?;
        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path).context("Failed to read session file")?;

        let session: Session =
            serde_json::from_str(&json).context("Failed to deserialize session")?;

        Ok(Some(session))
    }

    /// Delete the stored session.
    pub fn delete(&self) -> Result<()> {
        let path = self.session_path()?;

        if path.exists() {
            fs::remove_file(&path).context("Failed to delete session file")?;
            tracing::info!("Deleted stored session");
        }

        Ok(())
    }
}
