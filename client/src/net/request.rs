//! Request wrappers that normalize API envelopes into typed results.
//!
//! ARCHITECTURE
//! ============
//! `wrap` is the only place that interprets the `{code, data, msg}` envelope.
//! It never swallows a failure: every error reaches the caller as a
//! `RequestError`. The policy wrappers (`wrap_ignore`, `wrap_x`,
//! `wrap_admin`) sit on top and decide exactly once what a failure means for
//! the user: a log line, an error banner, or a redirect to the login page.
//!
//! Navigation and notification are reached through the `Navigator` and
//! `Notifier` traits so the policies stay testable without a browser.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::future::Future;

use serde::de::DeserializeOwned;

use super::types::{CODE_OK, Envelope, RawResponse};

/// Reason shown when a failure carries no message of its own.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// HTTP status that sends admin pages back to the login form.
pub const STATUS_FORBIDDEN: u16 = 403;

/// Route the session-aware wrapper redirects to on `403`.
pub const LOGIN_PATH: &str = "/log";

/// Classified failure of a wrapped request.
///
/// `Display` renders the user-facing reason.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// HTTP 200 but the envelope `code` was not `0`.
    #[error("{msg}")]
    Api { code: i64, msg: String },
    /// The server answered with a non-200 status.
    #[error("{msg}")]
    Status { status: u16, msg: String },
    /// No response at all (offline, DNS, CORS, aborted).
    #[error("network unreachable: {0}")]
    Network(String),
    /// HTTP 200 whose body is not an envelope.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl RequestError {
    /// HTTP status of the underlying response, if one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Api { .. } | Self::Decode(_) => Some(200),
            Self::Network(_) => None,
        }
    }

    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(STATUS_FORBIDDEN)
    }
}

/// Sink for transient user-facing messages.
pub trait Notifier {
    /// Show an error banner; an empty reason falls back to `UNKNOWN_ERROR`.
    fn error(&self, reason: &str);
    /// Show a success banner; an empty text falls back to a generic "done".
    fn success(&self, text: &str);
}

/// Client-side navigation target.
pub trait Navigator {
    fn navigate_to(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn navigate_to(&self, path: &str) {
        self(path);
    }
}

/// Interpret a completed response.
///
/// # Errors
///
/// Returns `Status` for any non-200 response, `Api` when the envelope code is
/// non-zero, and `Decode` when a 200 body is not an envelope or `data` does
/// not fit `T`.
pub fn unwrap_envelope<T: DeserializeOwned>(response: &RawResponse) -> Result<T, RequestError> {
    let envelope = serde_json::from_str::<Envelope>(&response.body);

    if response.status != 200 {
        let msg = envelope
            .ok()
            .and_then(|env| env.reason().map(str::to_owned))
            .unwrap_or_else(|| UNKNOWN_ERROR.to_owned());
        return Err(RequestError::Status { status: response.status, msg });
    }

    let envelope = envelope.map_err(|e| RequestError::Decode(e.to_string()))?;
    if envelope.code != CODE_OK {
        let msg = envelope.reason().unwrap_or(UNKNOWN_ERROR).to_owned();
        return Err(RequestError::Api { code: envelope.code, msg });
    }
    serde_json::from_value(envelope.data).map_err(|e| RequestError::Decode(e.to_string()))
}

/// Base wrapper: run `fetch` and resolve with the envelope's `data`.
///
/// `fetch` reports transport failures (no response) as `Err(reason)`.
///
/// # Errors
///
/// Propagates every failure as a `RequestError`; see [`unwrap_envelope`].
pub async fn wrap<T, F, Fut>(fetch: F) -> Result<T, RequestError>
where
    T: DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<RawResponse, String>>,
{
    let response = fetch().await.map_err(RequestError::Network)?;
    unwrap_envelope(&response)
}

/// Silent policy: failures only reach the diagnostic log.
pub async fn wrap_ignore<T, F, Fut>(fetch: F) -> Option<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<RawResponse, String>>,
{
    match wrap(fetch).await {
        Ok(data) => Some(data),
        Err(err) => {
            log_failure(&err);
            None
        }
    }
}

/// User-facing policy: failures become an error banner.
pub async fn wrap_x<T, F, Fut>(notifier: &impl Notifier, fetch: F) -> Option<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<RawResponse, String>>,
{
    match wrap(fetch).await {
        Ok(data) => Some(data),
        Err(err) => {
            notifier.error(&err.to_string());
            None
        }
    }
}

/// Session-aware policy: `403` redirects to the login page, anything else
/// becomes an error banner.
pub async fn wrap_admin<T, F, Fut>(navigator: &impl Navigator, notifier: &impl Notifier, fetch: F) -> Option<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<RawResponse, String>>,
{
    match wrap(fetch).await {
        Ok(data) => Some(data),
        Err(err) => {
            handle_admin_failure(&err, navigator, notifier);
            None
        }
    }
}

/// Failure dispatch used by [`wrap_admin`].
pub fn handle_admin_failure(err: &RequestError, navigator: &impl Navigator, notifier: &impl Notifier) {
    if err.is_forbidden() {
        leptos::logging::log!("session rejected, redirecting to {LOGIN_PATH}");
        navigator.navigate_to(LOGIN_PATH);
    } else {
        notifier.error(&err.to_string());
    }
}

fn log_failure(err: &RequestError) {
    leptos::logging::log!("request failed: {err}");
}
