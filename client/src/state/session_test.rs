use super::*;

// =============================================================
// Session reducer
// =============================================================

#[test]
fn session_default_has_no_user() {
    let session = Session::default();
    assert!(session.username.is_none());
    assert!(!session.is_logged_in());
}

#[test]
fn login_sets_username() {
    let session = Session::default().reduce(SessionAction::Login("admin".to_owned()));
    assert_eq!(session.username.as_deref(), Some("admin"));
    assert!(session.is_logged_in());
}

#[test]
fn login_replaces_previous_user() {
    let session = Session::default()
        .reduce(SessionAction::Login("alice".to_owned()))
        .reduce(SessionAction::Login("bob".to_owned()));
    assert_eq!(session.username.as_deref(), Some("bob"));
}

#[test]
fn login_then_logout_returns_to_initial_state() {
    let session = Session::default()
        .reduce(SessionAction::Login("admin".to_owned()))
        .reduce(SessionAction::Logout);
    assert_eq!(session, Session::default());
}

#[test]
fn logout_on_empty_session_is_idempotent() {
    let once = Session::default().reduce(SessionAction::Logout);
    let twice = once.clone().reduce(SessionAction::Logout);
    assert_eq!(once, Session::default());
    assert_eq!(twice, once);
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn store_starts_logged_out() {
    let store = SessionStore::new();
    assert!(!store.is_logged_in());
    assert_eq!(store.username(), None);
}

#[test]
fn store_login_then_logout_round_trips_through_signal() {
    let store = SessionStore::new();
    store.login("admin");
    assert!(store.is_logged_in());
    assert_eq!(store.username().as_deref(), Some("admin"));

    store.logout();
    assert!(!store.is_logged_in());
    assert_eq!(store.username(), None);
}

#[test]
fn store_copies_share_one_session() {
    let store = SessionStore::new();
    let copy = store;
    copy.login("wd");
    assert_eq!(store.username().as_deref(), Some("wd"));
}
