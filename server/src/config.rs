//! Server configuration parsed from environment variables.
//!
//! `from_lookup` takes the variable source as a closure so parsing is tested
//! without touching the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub admin_username: String,
    pub admin_password: String,
    pub cookie_secure: bool,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `ADMIN_PASSWORD`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `ADMIN_USERNAME`: default `admin`
    /// - `COOKIE_SECURE`: `1/true/yes/on` or `0/false/no/off`, default false
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a required variable is missing or a value
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_blank(lookup("PORT")) {
            None => DEFAULT_PORT,
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
        };

        let admin_username =
            non_blank(lookup("ADMIN_USERNAME")).unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_owned());
        let admin_password = non_blank(lookup("ADMIN_PASSWORD")).ok_or(ConfigError::Missing("ADMIN_PASSWORD"))?;

        let cookie_secure = match non_blank(lookup("COOKIE_SECURE")) {
            None => false,
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "COOKIE_SECURE", value: raw })?,
        };

        Ok(Self { port, admin_username, admin_password, cookie_secure })
    }

    /// Check a login attempt against the configured admin account.
    #[must_use]
    pub fn credentials_match(&self, name: &str, pass: &str) -> bool {
        let name_ok = constant_time_eq(name.as_bytes(), self.admin_username.as_bytes());
        let pass_ok = constant_time_eq(pass.as_bytes(), self.admin_password.as_bytes());
        name_ok & pass_ok
    }
}

/// Byte comparison whose running time depends only on the input lengths,
/// never on where the first mismatch sits.
pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    let len = a.len().max(b.len());
    let diff = (0..len).fold(a.len() ^ b.len(), |acc, i| {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        acc | usize::from(x ^ y)
    });
    diff == 0
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
