use anyhow::Result;
use tokio::sync::watch;

use crate::session::Session;
use crate::storage::SessionStorage;

/// Tracks the current session and notifies subscribers when it changes.
///
/// The session is an explicit value handed to callers; nothing reads it
/// ambiently. Expired sessions are reported as absent.
#[derive(Debug)]
pub struct SessionManager {
    storage: SessionStorage,
    tx: watch::Sender<Option<Session>>,
}

impl SessionManager {
    /// Load the stored session (if any) and start tracking it.
    pub fn new(storage: SessionStorage) -> Result<Self> {
        let initial = storage.load()?.filter(|s| !s.is_expired());
        let (tx, _rx) = watch::channel(initial);
        Ok(Self { storage, tx })
    }

    /// The active session, or `None` when signed out or expired.
    pub fn current(&self) -> Option<Session> {
        self.tx.borrow().clone().filter(|s| !s.is_expired())
    }

    /// Subscribe to session-change events.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.tx.subscribe()
    }

    /// Persist and activate a session.
    pub fn sign_in(&self, session: Session) -> Result<()> {
        self.storage.store(&session)?;
        tracing::info!("Signed in as {}", session.user_id);
        self.tx.send_replace(Some(session));
        Ok(())
    }

    /// Clear the stored session and notify subscribers.
    pub fn sign_out(&self) -> Result<()> {
        self.storage.delete()?;
        self.tx.send_replace(None);
        tracing::info!("Signed out");
        Ok(())
    }
}
