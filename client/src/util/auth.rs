//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Admin routes apply identical session bootstrap behavior: when nobody is
//! logged in, ask the server who we are, and let the session-aware wrapper
//! send the browser to the login page if the server says `403`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::notice::Notifications;
use crate::state::session::{Session, SessionStore};

/// Adapt the router's `navigate` into the request layer's `Navigator` shape.
pub fn router_navigator<F>(navigate: F) -> impl Fn(&str) + Clone + 'static
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    move |path: &str| navigate(path, NavigateOptions::default())
}

/// Whether the current user has to be fetched before admin content renders.
#[must_use]
pub fn should_fetch_current_user(session: &Session) -> bool {
    !session.is_logged_in()
}

/// Fetch `/api/me` whenever the session is empty and log the result in.
pub fn install_session_bootstrap<F>(session: SessionStore, notices: Notifications, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigator = router_navigator(navigate);
    Effect::new(move || {
        let current = Session { username: session.username() };
        if !should_fetch_current_user(&current) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let navigator = navigator.clone();
            leptos::task::spawn_local(async move {
                let fetched = crate::net::request::wrap_admin::<String, _, _>(
                    &navigator,
                    &notices,
                    crate::net::api::current_user,
                )
                .await;
                if let Some(name) = fetched {
                    leptos::logging::log!("login: {name}");
                    session.login(name);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigator, notices);
        }
    });
}
