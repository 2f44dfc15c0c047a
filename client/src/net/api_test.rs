use super::*;

#[test]
fn report_download_endpoint_formats_expected_path() {
    assert_eq!(report_download_endpoint("r42"), "/api/reports/r42/download");
}

#[test]
fn user_endpoint_formats_expected_path() {
    assert_eq!(user_endpoint("u7"), "/api/users/u7");
}

#[test]
fn session_endpoints_are_under_auth() {
    assert_eq!(LOGIN_ENDPOINT, "/auth/login");
    assert_eq!(LOGOUT_ENDPOINT, "/auth/logout");
}

#[test]
fn fetch_reports_off_browser_surfaces_unreachable() {
    let client = ApiClient::new(crate::config::ApiConfig::default());
    let result = futures::executor::block_on(client.fetch_reports());
    assert!(matches!(result, Err(ApiError::NetworkUnreachable(_))));
}

#[test]
fn current_user_off_browser_surfaces_unreachable() {
    let client = ApiClient::new(crate::config::ApiConfig::default());
    let result = futures::executor::block_on(client.current_user());
    assert!(result.unwrap_err().is_unreachable());
}
