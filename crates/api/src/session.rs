//! In-memory session store.
//!
//! Sessions are ephemeral flags keyed by an opaque token the client echoes
//! back in the `X-Session-Token` header. Nothing here survives a restart;
//! logout simply removes the entry.

use domain::models::SessionState;
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

/// HTTP header carrying the session token.
pub const SESSION_TOKEN_HEADER: &str = "X-Session-Token";

#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh session and returns its token.
    pub fn create(&self) -> Uuid {
        self.create_with(SessionState::new())
    }

    /// Creates a session already authenticated as admin.
    pub fn create_admin(&self) -> Uuid {
        let mut state = SessionState::new();
        state.is_admin = true;
        self.create_with(state)
    }

    fn create_with(&self, state: SessionState) -> Uuid {
        let token = Uuid::new_v4();
        self.write().insert(token, state);
        token
    }

    /// A snapshot of the session, if the token is known.
    pub fn get(&self, token: Uuid) -> Option<SessionState> {
        self.read().get(&token).cloned()
    }

    pub fn is_admin(&self, token: Uuid) -> bool {
        self.read().get(&token).is_some_and(|s| s.is_admin)
    }

    /// Applies `f` to the session. Returns false when the token is unknown.
    pub fn update<F>(&self, token: Uuid, f: F) -> bool
    where
        F: FnOnce(&mut SessionState),
    {
        match self.write().get_mut(&token) {
            Some(state) => {
                f(state);
                true
            }
            None => false,
        }
    }

    /// Logout: removes the session entirely.
    pub fn remove(&self, token: Uuid) -> bool {
        self.write().remove(&token).is_some()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<Uuid, SessionState>> {
        self.sessions.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Uuid, SessionState>> {
        self.sessions.write().unwrap_or_else(|e| e.into_inner())
    }
}

/// Parses the session token header, if present and well-formed.
pub fn token_from_headers(headers: &axum::http::HeaderMap) -> Option<Uuid> {
    headers
        .get(SESSION_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| Uuid::parse_str(v).ok())
}
