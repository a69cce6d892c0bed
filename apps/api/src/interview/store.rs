use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::session::Session;

/// In-memory session tracker. Lives for the lifetime of the process.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a freshly started session and returns its id.
    pub async fn insert(&self, session: Session) -> Uuid {
        let id = session.id;
        self.sessions.write().await.insert(id, session);
        id
    }

    /// Runs `f` against the session under the write lock.
    pub async fn with_session<F, R>(&self, id: Uuid, f: F) -> Result<R, AppError>
    where
        F: FnOnce(&mut Session) -> Result<R, AppError>,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(AppError::InvalidSession)?;
        f(session)
    }

    /// Snapshot of a session.
    pub async fn get(&self, id: Uuid) -> Result<Session, AppError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(AppError::InvalidSession)
    }

    /// Drops a session. Unknown ids are an error.
    pub async fn remove(&self, id: Uuid) -> Result<Session, AppError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .ok_or(AppError::InvalidSession)
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
