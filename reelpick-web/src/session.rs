//! Per-browser result pickers keyed by a session cookie.
//!
//! Sessions idle for longer than the store's TTL are dropped, and the store
//! never holds more than `max_sessions` pickers. Both are enforced on every
//! write.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use reelpick_core::{ResultPicker, ServerConfig};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Cookie carrying the session identifier.
pub const SESSION_COOKIE_NAME: &str = "reelpick_session";

#[derive(Debug)]
struct SessionEntry {
    picker: ResultPicker,
    last_seen: Instant,
}

impl SessionEntry {
    fn is_expired(&self, now: Instant, idle_ttl: Duration) -> bool {
        now.duration_since(self.last_seen) > idle_ttl
    }
}

/// In-memory picker state for recently active sessions.
#[derive(Debug, Clone)]
pub struct SessionStore {
    pickers: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
    idle_ttl: Duration,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        let limits = ServerConfig::default();
        Self::with_limits(limits.session_ttl, limits.max_sessions)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that forgets sessions idle for `idle_ttl` and keeps at most
    /// `max_sessions` of them (at least one).
    pub fn with_limits(idle_ttl: Duration, max_sessions: usize) -> Self {
        Self {
            pickers: Arc::default(),
            idle_ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    /// Reads the session id from `jar`, issuing a fresh cookie when it is
    /// missing or unparsable.
    pub fn resolve(jar: CookieJar) -> (CookieJar, Uuid) {
        if let Some(id) = jar
            .get(SESSION_COOKIE_NAME)
            .and_then(|c| Uuid::parse_str(c.value()).ok())
        {
            return (jar, id);
        }

        let id = Uuid::new_v4();
        tracing::debug!(session = %id, "Issuing session cookie");
        let cookie = Cookie::build((SESSION_COOKIE_NAME, id.to_string()))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();
        (jar.add(cookie), id)
    }

    /// Copy of the session's picker, empty for unknown or expired sessions.
    pub async fn snapshot(&self, id: Uuid) -> ResultPicker {
        let now = Instant::now();
        self.pickers
            .read()
            .await
            .get(&id)
            .filter(|entry| !entry.is_expired(now, self.idle_ttl))
            .map(|entry| entry.picker.clone())
            .unwrap_or_default()
    }

    /// Runs `f` against the session's picker under the write lock, creating
    /// the session when it does not exist yet.
    pub async fn update<R>(&self, id: Uuid, f: impl FnOnce(&mut ResultPicker) -> R) -> R {
        let now = Instant::now();
        let mut pickers = self.pickers.write().await;
        self.prune(&mut pickers, now);

        if !pickers.contains_key(&id) && pickers.len() >= self.max_sessions {
            evict_oldest(&mut pickers);
        }

        let entry = pickers.entry(id).or_insert_with(|| SessionEntry {
            picker: ResultPicker::default(),
            last_seen: now,
        });
        entry.last_seen = now;
        f(&mut entry.picker)
    }

    /// Like [`update`](Self::update) but never creates a session. Returns
    /// `None` when `id` is unknown or has expired.
    pub async fn update_existing<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut ResultPicker) -> R,
    ) -> Option<R> {
        let now = Instant::now();
        let mut pickers = self.pickers.write().await;
        self.prune(&mut pickers, now);

        let entry = pickers.get_mut(&id)?;
        entry.last_seen = now;
        Some(f(&mut entry.picker))
    }

    pub async fn session_count(&self) -> usize {
        let now = Instant::now();
        self.pickers
            .read()
            .await
            .values()
            .filter(|entry| !entry.is_expired(now, self.idle_ttl))
            .count()
    }

    fn prune(&self, pickers: &mut HashMap<Uuid, SessionEntry>, now: Instant) {
        let before = pickers.len();
        pickers.retain(|_, entry| !entry.is_expired(now, self.idle_ttl));
        let dropped = before - pickers.len();
        if dropped > 0 {
            tracing::debug!(dropped, remaining = pickers.len(), "Dropped idle sessions");
        }
    }
}

fn evict_oldest(pickers: &mut HashMap<Uuid, SessionEntry>) {
    let oldest = pickers
        .iter()
        .min_by_key(|(_, entry)| entry.last_seen)
        .map(|(id, _)| *id);
    if let Some(id) = oldest {
        pickers.remove(&id);
        tracing::debug!(session = %id, "Evicted oldest session at capacity");
    }
}
