use super::*;

#[test]
fn defaults_when_nothing_set() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.base_url, DEFAULT_API_URL);
    assert_eq!(cfg.me_path, DEFAULT_ME_PATH);
    assert_eq!(cfg.register_path, DEFAULT_REGISTER_PATH);
}

#[test]
fn base_url_trailing_slash_trimmed() {
    let cfg = ApiConfig::from_parts(Some("https://api.example.test/"), None, None);
    assert_eq!(cfg.base_url, "https://api.example.test");
    assert_eq!(cfg.url("/api/reports"), "https://api.example.test/api/reports");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ApiConfig::from_parts(Some("  "), Some(""), Some(" "));
    assert_eq!(cfg, ApiConfig::default());
}

#[test]
fn endpoint_overrides_gain_leading_slash() {
    let cfg = ApiConfig::from_parts(None, Some("api/me"), Some("auth/register"));
    assert_eq!(cfg.me_path, "/api/me");
    assert_eq!(cfg.register_path, "/auth/register");
}

#[test]
fn url_accepts_relative_endpoint() {
    let cfg = ApiConfig::default();
    assert_eq!(cfg.url("auth/login"), format!("{DEFAULT_API_URL}/auth/login"));
}
