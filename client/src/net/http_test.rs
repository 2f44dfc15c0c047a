use super::*;
use crate::net::types::User;

// =============================================================
// decode_body
// =============================================================

#[test]
fn non_success_status_is_http_error() {
    let result = decode_body::<User>(401, r#"{"message":"unauthorized"}"#);
    assert_eq!(result, Err(ApiError::Http { status: 401 }));
}

#[test]
fn redirect_status_is_http_error() {
    assert_eq!(decode_body::<User>(302, ""), Err(ApiError::Http { status: 302 }));
}

#[test]
fn empty_body_is_none() {
    assert_eq!(decode_body::<User>(204, ""), Ok(None));
    assert_eq!(decode_body::<User>(200, ""), Ok(None));
}

#[test]
fn whitespace_body_is_none() {
    assert_eq!(decode_body::<User>(200, "  \n\t"), Ok(None));
}

#[test]
fn json_body_is_parsed() {
    let result = decode_body::<User>(200, r#"{"id":"1","name":"Ana","email":"a@x.com"}"#);
    assert_eq!(
        result,
        Ok(Some(User { id: "1".to_owned(), name: "Ana".to_owned(), email: "a@x.com".to_owned() }))
    );
}

#[test]
fn non_json_body_is_malformed_with_raw_text() {
    let result = decode_body::<User>(200, "<html>oops</html>");
    assert_eq!(result, Err(ApiError::MalformedResponse { raw: "<html>oops</html>".to_owned() }));
}

#[test]
fn wrong_shape_is_malformed() {
    let result = decode_body::<User>(200, r#"{"id":1}"#);
    assert!(matches!(result, Err(ApiError::MalformedResponse { .. })));
}

#[test]
fn generic_value_accepts_any_json() {
    let result = decode_body::<serde_json::Value>(201, "[1,2]");
    assert_eq!(result, Ok(Some(serde_json::json!([1, 2]))));
}

// =============================================================
// ApiClient without a browser
// =============================================================

#[test]
fn request_off_browser_is_unreachable() {
    let client = ApiClient::new(ApiConfig::default());
    let result = futures::executor::block_on(client.get::<User>("/auth/me"));
    assert!(matches!(result, Err(ApiError::NetworkUnreachable(_))));
}

#[test]
fn client_exposes_config() {
    let client = ApiClient::new(ApiConfig::default());
    assert_eq!(client.config().me_path, crate::config::DEFAULT_ME_PATH);
}
