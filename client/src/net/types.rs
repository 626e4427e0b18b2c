//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Every API response is an HTTP response wrapping a JSON envelope
//! `{code, data, msg}`. The server builds envelopes with the same type the
//! client decodes, so both sides agree on field names and defaults.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Envelope `code` reported on success.
pub const CODE_OK: i64 = 0;

/// JSON envelope carried in the body of every API response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Application status; `0` means success.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub code: i64,
    /// Payload; `null` when the endpoint has nothing to return.
    #[serde(default)]
    pub data: serde_json::Value,
    /// Human-readable failure reason.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl Envelope {
    /// Successful envelope carrying `data`.
    #[must_use]
    pub fn success(data: serde_json::Value) -> Self {
        Self { code: CODE_OK, data, msg: None }
    }

    /// Failed envelope with an application `code` and reason.
    #[must_use]
    pub fn failure(code: i64, msg: impl Into<String>) -> Self {
        Self { code, data: serde_json::Value::Null, msg: Some(msg.into()) }
    }

    /// Failure reason, ignoring empty strings.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.msg.as_deref().filter(|m| !m.is_empty())
    }
}

/// A completed HTTP exchange: status line plus raw body text.
///
/// Any status is representable here; only failures that never produced a
/// response (offline, DNS, CORS) are reported outside this type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Build a response whose body is a serialized envelope.
    #[must_use]
    pub fn with_envelope(status: u16, envelope: &Envelope) -> Self {
        Self { status, body: serde_json::to_string(envelope).unwrap_or_default() }
    }
}

/// Credentials posted to `/api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub name: String,
    pub pass: String,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
