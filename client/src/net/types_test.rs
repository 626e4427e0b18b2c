use super::*;

// =============================================================
// Envelope decoding
// =============================================================

#[test]
fn envelope_decodes_full_body() {
    let env: Envelope = serde_json::from_str(r#"{"code":0,"data":{"n":1},"msg":"ok"}"#).unwrap();
    assert_eq!(env.code, CODE_OK);
    assert_eq!(env.data, serde_json::json!({"n": 1}));
    assert_eq!(env.msg.as_deref(), Some("ok"));
}

#[test]
fn envelope_missing_data_and_msg_default() {
    let env: Envelope = serde_json::from_str(r#"{"code":7}"#).unwrap();
    assert_eq!(env.code, 7);
    assert!(env.data.is_null());
    assert!(env.msg.is_none());
}

#[test]
fn envelope_accepts_integral_float_code() {
    let env: Envelope = serde_json::from_str(r#"{"code":403.0}"#).unwrap();
    assert_eq!(env.code, 403);
}

#[test]
fn envelope_rejects_fractional_code() {
    assert!(serde_json::from_str::<Envelope>(r#"{"code":1.5}"#).is_err());
}

#[test]
fn envelope_rejects_missing_code() {
    assert!(serde_json::from_str::<Envelope>(r#"{"data":1}"#).is_err());
}

#[test]
fn envelope_rejects_string_code() {
    assert!(serde_json::from_str::<Envelope>(r#"{"code":"0"}"#).is_err());
}

// =============================================================
// Envelope construction
// =============================================================

#[test]
fn success_envelope_omits_msg() {
    let raw = serde_json::to_value(Envelope::success(serde_json::json!("admin"))).unwrap();
    assert_eq!(raw, serde_json::json!({"code": 0, "data": "admin"}));
}

#[test]
fn failure_envelope_carries_reason() {
    let env = Envelope::failure(403, "login required");
    assert_eq!(env.reason(), Some("login required"));
    assert!(env.data.is_null());
}

#[test]
fn empty_msg_is_not_a_reason() {
    let env = Envelope::failure(1, "");
    assert_eq!(env.reason(), None);
}

#[test]
fn raw_response_with_envelope_serializes_body() {
    let resp = RawResponse::with_envelope(200, &Envelope::success(serde_json::Value::Null));
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, r#"{"code":0,"data":null}"#);
}

#[test]
fn login_request_uses_name_and_pass_fields() {
    let body = serde_json::to_value(LoginRequest { name: "admin".to_owned(), pass: "pw".to_owned() }).unwrap();
    assert_eq!(body, serde_json::json!({"name": "admin", "pass": "pw"}));
}
