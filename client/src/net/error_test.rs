use super::*;

#[test]
fn unreachable_message_differs_from_rejected_credentials() {
    let unreachable = ApiError::NetworkUnreachable("TypeError: Failed to fetch".to_owned());
    let rejected = ApiError::Http { status: 401 };
    assert!(unreachable.is_unreachable());
    assert!(!unreachable.is_rejected());
    assert!(rejected.is_rejected());
    assert!(!rejected.is_unreachable());
    assert_ne!(unreachable.user_message(), rejected.user_message());
}

#[test]
fn forbidden_counts_as_rejected() {
    assert!(ApiError::Http { status: 403 }.is_rejected());
    assert!(!ApiError::Http { status: 400 }.is_rejected());
}

#[test]
fn server_error_message_includes_status() {
    let msg = ApiError::Http { status: 502 }.user_message();
    assert!(msg.contains("502"));
}

#[test]
fn client_error_message_includes_status() {
    let msg = ApiError::Http { status: 422 }.user_message();
    assert!(msg.contains("422"));
}

#[test]
fn malformed_message_includes_raw_body() {
    let msg = ApiError::MalformedResponse { raw: "<html>".to_owned() }.user_message();
    assert_eq!(msg, "Resposta inválida do servidor: <html>");
}

#[test]
fn validation_message_is_passed_through() {
    let err = ApiError::validation("As senhas não coincidem");
    assert_eq!(err.user_message(), "As senhas não coincidem");
    assert_eq!(err.to_string(), "As senhas não coincidem");
}

#[test]
fn http_display_matches_status() {
    assert_eq!(ApiError::Http { status: 500 }.to_string(), "HTTP error! status: 500");
}
