use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn defaults_apply_when_only_password_is_set() {
    let cfg = ServerConfig::from_lookup(lookup(&[("ADMIN_PASSWORD", "pw")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.admin_username, DEFAULT_ADMIN_USERNAME);
    assert_eq!(cfg.admin_password, "pw");
    assert!(!cfg.cookie_secure);
}

#[test]
fn overrides_are_parsed() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("ADMIN_USERNAME", "wd"),
        ("ADMIN_PASSWORD", "pw"),
        ("COOKIE_SECURE", "Yes"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.admin_username, "wd");
    assert!(cfg.cookie_secure);
}

#[test]
fn missing_password_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("ADMIN_PASSWORD"));
}

#[test]
fn blank_password_counts_as_missing() {
    let err = ServerConfig::from_lookup(lookup(&[("ADMIN_PASSWORD", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("ADMIN_PASSWORD"));
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("ADMIN_PASSWORD", "pw"), ("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
}

#[test]
fn invalid_cookie_flag_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("ADMIN_PASSWORD", "pw"), ("COOKIE_SECURE", "maybe")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "COOKIE_SECURE", .. }));
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  true  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "FALSE"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// credentials_match
// =============================================================================

#[test]
fn credentials_match_requires_both_fields() {
    let cfg = ServerConfig::from_lookup(lookup(&[("ADMIN_PASSWORD", "pw")])).unwrap();
    assert!(cfg.credentials_match("admin", "pw"));
    assert!(!cfg.credentials_match("admin", "nope"));
    assert!(!cfg.credentials_match("root", "pw"));
}

// =============================================================================
// constant_time_eq
// =============================================================================

#[test]
fn constant_time_eq_matches_equal_inputs() {
    assert!(constant_time_eq(b"secret", b"secret"));
    assert!(constant_time_eq(b"", b""));
}

#[test]
fn constant_time_eq_rejects_any_byte_difference() {
    assert!(!constant_time_eq(b"secret", b"secreT"));
    assert!(!constant_time_eq(b"secret", b"Secret"));
}

#[test]
fn constant_time_eq_rejects_prefixes_and_extensions() {
    assert!(!constant_time_eq(b"secret", b"secre"));
    assert!(!constant_time_eq(b"secret", b"secret\0"));
    assert!(!constant_time_eq(b"", b"s"));
}
