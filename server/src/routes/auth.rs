//! Auth routes: credential login, logout, and current-user lookup.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use gframe_ui::net::types::LoginRequest;
use time::Duration;

use super::reply;
use crate::services::session;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

/// Envelope code for rejected credentials (sent with HTTP 200).
pub const CODE_BAD_CREDENTIALS: i64 = 1;
pub const BAD_CREDENTIALS: &str = "invalid username or password";

/// Envelope code and message for a missing or expired session (sent with
/// HTTP 403).
pub const CODE_LOGIN_REQUIRED: i64 = 403;
pub const LOGIN_REQUIRED: &str = "login required";

/// Envelope message for a login body that is not `{name, pass}` JSON; the
/// envelope code is the HTTP status.
pub const MALFORMED_LOGIN: &str = "malformed login request";

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(session::SESSION_TTL)
        .build()
}

fn forbidden() -> Response {
    reply::fail(StatusCode::FORBIDDEN, CODE_LOGIN_REQUIRED, LOGIN_REQUIRED)
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub username: String,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(forbidden());
        }

        let app_state = AppState::from_ref(state);
        let username = session::validate_session(&app_state.sessions, token)
            .await
            .ok_or_else(forbidden)?;

        Ok(Self { username, token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/login`: check credentials, set the session cookie.
///
/// A session already named by the incoming cookie is revoked first, so
/// logging in again replaces it rather than adding a second one.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let status = rejection.status();
            tracing::warn!(%status, error = %rejection.body_text(), "login body rejected");
            return reply::fail(status, i64::from(status.as_u16()), MALFORMED_LOGIN);
        }
    };

    if !state.config.credentials_match(&req.name, &req.pass) {
        tracing::warn!(name = %req.name, "login rejected");
        return reply::fail(StatusCode::OK, CODE_BAD_CREDENTIALS, BAD_CREDENTIALS);
    }

    if let Some(previous) = jar.get(COOKIE_NAME) {
        session::delete_session(&state.sessions, previous.value()).await;
    }
    let token = session::create_session(&state.sessions, &req.name).await;
    tracing::info!(name = %req.name, "login succeeded");

    let jar = jar.add(session_cookie(token, state.config.cookie_secure));
    (jar, reply::ok(serde_json::Value::String(req.name))).into_response()
}

/// `GET /api/me`: return the current username.
pub async fn me(auth: AuthUser) -> Response {
    reply::ok(serde_json::Value::String(auth.username))
}

/// `POST /api/logout`: delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> Response {
    session::delete_session(&state.sessions, &auth.token).await;
    tracing::info!(name = %auth.username, "logout");

    let mut cookie = session_cookie(String::new(), state.config.cookie_secure);
    cookie.set_max_age(Duration::ZERO);
    let jar = CookieJar::new().add(cookie);
    (jar, reply::ok(serde_json::Value::Null)).into_response()
}
