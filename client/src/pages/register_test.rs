use super::*;
use crate::net::types::SELF_REGISTERED_ROLE;

fn form() -> RegisterForm {
    RegisterForm {
        name: " Ana ".to_owned(),
        email: "a@x.com".to_owned(),
        password: "secret".to_owned(),
        confirm_password: "secret".to_owned(),
    }
}

#[test]
fn valid_form_builds_registration_with_default_role() {
    let payload = form().validate().unwrap();
    assert_eq!(payload.name, "Ana");
    assert_eq!(payload.role, SELF_REGISTERED_ROLE);
}

#[test]
fn password_confirmation_must_match() {
    let f = RegisterForm { confirm_password: "other".to_owned(), ..form() };
    assert_eq!(f.validate(), Err(ApiError::validation(PASSWORD_MISMATCH)));
}

#[test]
fn empty_password_is_rejected() {
    let f = RegisterForm { password: String::new(), confirm_password: String::new(), ..form() };
    assert!(matches!(f.validate(), Err(ApiError::Validation(_))));
}

#[test]
fn missing_email_is_rejected() {
    let f = RegisterForm { email: "  ".to_owned(), ..form() };
    assert_eq!(f.validate(), Err(ApiError::validation("Informe seu email.")));
}
