use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  a@x.com ", "secret"),
        Ok(Credentials { email: "a@x.com".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let credentials = validate_login_input("a@x.com", " pass ").unwrap();
    assert_eq!(credentials.password, " pass ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret"), Err(ApiError::validation(MISSING_CREDENTIALS)));
    assert_eq!(validate_login_input("a@x.com", ""), Err(ApiError::validation(MISSING_CREDENTIALS)));
    assert_eq!(validate_login_input("   ", "secret"), Err(ApiError::validation(MISSING_CREDENTIALS)));
}
