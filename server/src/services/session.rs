//! Session token management.
//!
//! ARCHITECTURE
//! ============
//! Tokens are random 32-byte hex strings handed to the browser in an HttpOnly
//! cookie. The token → session map lives in memory only, so a restart logs
//! everybody out. Every session expires `SESSION_TTL` after creation; expired
//! entries are evicted when looked up and pruned whenever a session is
//! created.

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

use rand::Rng;
use time::{Duration, OffsetDateTime};
use tokio::sync::RwLock;

/// Lifetime of a session, also used as the cookie `Max-Age`.
pub const SESSION_TTL: Duration = Duration::days(7);

/// One logged-in browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEntry {
    pub username: String,
    pub expires_at: OffsetDateTime,
}

/// Live sessions keyed by token.
pub type SessionMap = Arc<RwLock<HashMap<String, SessionEntry>>>;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Create a session for `username`, returning the token.
pub async fn create_session(sessions: &SessionMap, username: &str) -> String {
    create_session_at(sessions, username, OffsetDateTime::now_utc()).await
}

/// Create a session as of `now`, pruning sessions already expired at `now`.
pub async fn create_session_at(sessions: &SessionMap, username: &str, now: OffsetDateTime) -> String {
    let token = generate_token();
    let entry = SessionEntry { username: username.to_owned(), expires_at: now + SESSION_TTL };
    let mut map = sessions.write().await;
    map.retain(|_, existing| existing.expires_at > now);
    map.insert(token.clone(), entry);
    token
}

/// Username owning `token`, if the session exists and has not expired.
pub async fn validate_session(sessions: &SessionMap, token: &str) -> Option<String> {
    validate_session_at(sessions, token, OffsetDateTime::now_utc()).await
}

/// Validate `token` as of `now`; an expired session is evicted.
pub async fn validate_session_at(sessions: &SessionMap, token: &str, now: OffsetDateTime) -> Option<String> {
    {
        let map = sessions.read().await;
        match map.get(token) {
            None => return None,
            Some(entry) if entry.expires_at > now => return Some(entry.username.clone()),
            Some(_) => {}
        }
    }
    sessions.write().await.remove(token);
    None
}

/// Delete a session by token; returns whether it existed.
pub async fn delete_session(sessions: &SessionMap, token: &str) -> bool {
    sessions.write().await.remove(token).is_some()
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
