//! In-memory session store.
//!
//! One shared map from [`SessionId`] to a per-session async mutex. The map
//! lock is only held long enough to find a handle; all mutation of one
//! session is serialized through its own mutex, and different sessions never
//! contend with each other.

use chartroom_domain::{Session, SessionId};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

/// A session plus bookkeeping the store needs for eviction.
#[derive(Debug)]
pub struct StoredSession {
    pub session: Session,
    pub last_touched: Instant,
}

type Handle = Arc<Mutex<StoredSession>>;

/// Lifecycle owner of every live session.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, Handle>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session, replacing any previous one with the same id
    pub async fn insert(&self, session: Session) {
        let id = session.id().clone();
        let stored = StoredSession {
            session,
            last_touched: Instant::now(),
        };
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(stored)));
    }

    async fn handle(&self, id: &SessionId) -> Option<Handle> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Run `f` with exclusive access to one session.
    ///
    /// Returns `None` if the id is unknown.
    pub async fn with_session<R>(
        &self,
        id: &SessionId,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Option<R> {
        let handle = self.handle(id).await?;
        let mut stored = handle.lock().await;
        stored.last_touched = Instant::now();
        Some(f(&mut stored.session))
    }

    /// Consistent copy of one session, taken under its lock
    pub async fn snapshot(&self, id: &SessionId) -> Option<Session> {
        self.with_session(id, |session| session.clone()).await
    }

    pub async fn contains(&self, id: &SessionId) -> bool {
        self.sessions.read().await.contains_key(id)
    }

    /// Drop a session, returning its last state
    pub async fn remove(&self, id: &SessionId) -> Option<Session> {
        let handle = self.sessions.write().await.remove(id)?;
        let stored = handle.lock().await;
        Some(stored.session.clone())
    }

    /// Remove sessions untouched for longer than `max_idle`.
    ///
    /// Sessions currently locked by an operation count as active and are kept.
    pub async fn evict_idle(&self, max_idle: Duration) -> Vec<SessionId> {
        let mut sessions = self.sessions.write().await;
        let now = Instant::now();
        let idle: Vec<SessionId> = sessions
            .iter()
            .filter(|(_, handle)| match handle.try_lock() {
                Ok(stored) => now.duration_since(stored.last_touched) > max_idle,
                Err(_) => false,
            })
            .map(|(id, _)| id.clone())
            .collect();
        for id in &idle {
            sessions.remove(id);
        }
        if !idle.is_empty() {
            debug!("Evicted {} idle sessions", idle.len());
        }
        idle
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartroom_domain::{ChannelMeta, SessionMode};

    fn session(id: &str) -> Session {
        Session::new(
            SessionId::new(id),
            SessionMode::BoardInvestors,
            "",
            ChannelMeta::web(),
        )
    }

    #[tokio::test]
    async fn test_insert_and_mutate() {
        let store = SessionStore::new();
        store.insert(session("a")).await;

        let stored = store
            .with_session(&SessionId::new("a"), |s| s.add_message("hello"))
            .await;
        assert_eq!(stored, Some(true));

        let snap = store.snapshot(&SessionId::new("a")).await.unwrap();
        assert_eq!(snap.messages(), ["hello".to_string()]);
    }

    #[tokio::test]
    async fn test_unknown_id() {
        let store = SessionStore::new();
        store.insert(session("a")).await;
        assert!(store.snapshot(&SessionId::new("A")).await.is_none());
        assert!(
            store
                .with_session(&SessionId::new("missing"), |_| ())
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_remove() {
        let store = SessionStore::new();
        store.insert(session("a")).await;
        assert!(store.remove(&SessionId::new("a")).await.is_some());
        assert!(store.is_empty().await);
        assert!(store.remove(&SessionId::new("a")).await.is_none());
    }

    #[tokio::test]
    async fn test_evict_idle_keeps_recent() {
        let store = SessionStore::new();
        store.insert(session("old")).await;
        store.insert(session("new")).await;

        // Backdate "old" so it looks idle without sleeping
        {
            let handle = store.handle(&SessionId::new("old")).await.unwrap();
            let mut stored = handle.lock().await;
            stored.last_touched = Instant::now()
                .checked_sub(Duration::from_secs(120))
                .unwrap();
        }

        let evicted = store.evict_idle(Duration::from_secs(60)).await;
        assert_eq!(evicted, vec![SessionId::new("old")]);
        assert!(store.contains(&SessionId::new("new")).await);
        assert_eq!(store.len().await, 1);
    }
}
