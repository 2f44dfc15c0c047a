use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn from_values_defaults() {
    let cfg = HostConfig::from_values(None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, HostConfig::from_values(None, None).unwrap());
}

// =============================================================
// Overrides
// =============================================================

#[test]
fn from_values_parses_overrides() {
    let cfg = HostConfig::from_values(Some("8080"), Some("127.0.0.1")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn ipv6_bind_addr_is_accepted() {
    let cfg = HostConfig::from_values(Some("3000"), Some("::1")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3000");
}

// =============================================================
// Errors
// =============================================================

#[test]
fn invalid_port_is_rejected() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort("http".into())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn invalid_bind_addr_is_rejected() {
    let err = HostConfig::from_values(None, Some("localhost")).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBindAddr("localhost".into()));
    assert_eq!(err.to_string(), "invalid BIND_ADDR 'localhost'");
}
