//! In-memory session store.
//!
//! Sessions live in a process-wide `DashMap` keyed by a random UUID that the
//! browser carries in a cookie. A restart logs everyone out.

use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use uuid::Uuid;

use crate::observability::metrics;

/// Opaque session identifier carried in the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(Self)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// The logged-in user attached to a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub session_id: SessionId,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone)]
struct Session {
    email: String,
    name: String,
    last_seen: Instant,
}

/// A thread-safe map of live sessions.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<DashMap<SessionId, Session>>,
    ttl: Option<Duration>,
}

impl SessionStore {
    /// `ttl_secs == 0` keeps sessions until logout.
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
            ttl: (ttl_secs > 0).then(|| Duration::from_secs(ttl_secs)),
        }
    }

    /// Start a session for `email`.
    pub fn create(&self, email: &str, name: &str) -> SessionId {
        let id = SessionId::new();
        self.inner.insert(
            id,
            Session {
                email: email.to_string(),
                name: name.to_string(),
                last_seen: Instant::now(),
            },
        );
        metrics::record_active_sessions(self.inner.len());
        id
    }

    /// Resolve a session, refreshing its idle timer. Expired sessions are dropped.
    pub fn get(&self, id: SessionId) -> Option<CurrentUser> {
        self.get_at(id, Instant::now())
    }

    fn get_at(&self, id: SessionId, now: Instant) -> Option<CurrentUser> {
        let mut entry = self.inner.get_mut(&id)?;
        if !self.is_expired(entry.value(), now) {
            entry.last_seen = now;
            return Some(CurrentUser {
                session_id: id,
                email: entry.email.clone(),
                name: entry.name.clone(),
            });
        }
        drop(entry);
        self.remove(id);
        None
    }

    /// End a session. Unknown ids are ignored.
    pub fn remove(&self, id: SessionId) {
        if self.inner.remove(&id).is_some() {
            metrics::record_active_sessions(self.inner.len());
        }
    }

    /// Drop every session idle past the TTL. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        self.purge_expired_at(Instant::now())
    }

    fn purge_expired_at(&self, now: Instant) -> usize {
        let before = self.inner.len();
        self.inner.retain(|_, session| !self.is_expired(session, now));
        let removed = before.saturating_sub(self.inner.len());
        if removed > 0 {
            metrics::record_active_sessions(self.inner.len());
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn is_expired(&self, session: &Session, now: Instant) -> bool {
        self.ttl
            .is_some_and(|ttl| now.duration_since(session.last_seen) > ttl)
    }
}
