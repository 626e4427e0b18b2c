//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root `App` owns one `SessionStore` and provides it via context. The
//! admin guard, login form, and current-user widget read and mutate it; no
//! other component writes it. The session lives in memory only and is
//! re-established from `/api/me` after a reload.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

/// Who is logged in, if anyone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub username: Option<String>,
}

/// The two mutations a session accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    Login(String),
    Logout,
}

impl Session {
    /// Apply `action`, returning the next session.
    #[must_use]
    pub fn reduce(self, action: SessionAction) -> Self {
        match action {
            SessionAction::Login(username) => Self { username: Some(username) },
            SessionAction::Logout => Self::default(),
        }
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }
}

/// Reactive single-writer handle around the session, shared via context.
#[derive(Clone, Copy)]
pub struct SessionStore {
    state: RwSignal<Session>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(Session::default()) }
    }

    pub fn login(&self, username: impl Into<String>) {
        self.dispatch(SessionAction::Login(username.into()));
    }

    pub fn logout(&self) {
        self.dispatch(SessionAction::Logout);
    }

    /// Current username; tracked, so reactive closures re-run on change.
    #[must_use]
    pub fn username(&self) -> Option<String> {
        self.state.with(|s| s.username.clone())
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.state.with(Session::is_logged_in)
    }

    fn dispatch(&self, action: SessionAction) {
        self.state.update(|session| {
            *session = std::mem::take(session).reduce(action);
        });
    }
}
