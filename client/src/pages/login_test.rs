use super::*;

#[test]
fn validate_login_input_trims_username() {
    assert_eq!(
        validate_login_input("  admin  ", "secret"),
        Ok(("admin".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    assert_eq!(
        validate_login_input("admin", " pass word "),
        Ok(("admin".to_owned(), " pass word ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_username() {
    assert_eq!(
        validate_login_input("   ", "secret"),
        Err(FieldErrors { name: Some(NAME_REQUIRED), pass: None })
    );
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(
        validate_login_input("admin", ""),
        Err(FieldErrors { name: None, pass: Some(PASS_REQUIRED) })
    );
}

#[test]
fn validate_login_input_reports_both_fields() {
    assert_eq!(
        validate_login_input("", ""),
        Err(FieldErrors { name: Some(NAME_REQUIRED), pass: Some(PASS_REQUIRED) })
    );
}
