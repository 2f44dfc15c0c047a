use super::*;
use crate::net::types::User;

// =============================================================
// Helpers
// =============================================================

fn ana() -> User {
    User { id: "1".to_owned(), name: "Ana".to_owned(), email: "a@x.com".to_owned() }
}

fn loading() -> SessionState {
    SessionState::default()
}

fn anonymous() -> SessionState {
    SessionState::anonymous()
}

fn authenticated() -> SessionState {
    SessionState::authenticated(ana())
}

const ALL_PATHS: &[&str] = &["/", "", "/login", "/register", "/home", "/history", "/profile", "/nope", "/history/r1"];

// =============================================================
// Classification
// =============================================================

#[test]
fn classify_known_paths() {
    assert_eq!(classify("/"), RouteKind::Root);
    assert_eq!(classify(""), RouteKind::Root);
    assert_eq!(classify("/login"), RouteKind::Public);
    assert_eq!(classify("/register"), RouteKind::Public);
    assert_eq!(classify("/home"), RouteKind::Protected);
    assert_eq!(classify("/history"), RouteKind::Protected);
    assert_eq!(classify("/profile"), RouteKind::Protected);
}

#[test]
fn classify_uses_first_segment() {
    assert_eq!(classify("/history/r1"), RouteKind::Protected);
    assert_eq!(classify("/login/"), RouteKind::Public);
    assert_eq!(classify("/home?tab=1"), RouteKind::Protected);
    assert_eq!(classify("/?next=home"), RouteKind::Root);
}

#[test]
fn classify_unknown_is_other() {
    assert_eq!(classify("/admin"), RouteKind::Other);
    assert_eq!(classify("/logins"), RouteKind::Other);
}

#[test]
fn route_paths_round_trip() {
    for route in [Route::Root, Route::Login, Route::Register, Route::Home, Route::History, Route::Profile] {
        assert_eq!(Route::from_path(route.path()), Some(route));
    }
}

#[test]
fn auth_pages_are_login_and_register() {
    assert!(is_auth_page("/login"));
    assert!(is_auth_page("/register"));
    assert!(!is_auth_page("/home"));
    assert!(!is_auth_page("/"));
}

// =============================================================
// Decision table
// =============================================================

#[test]
fn loading_session_never_redirects() {
    for path in ALL_PATHS {
        assert_eq!(decide(&loading(), path), None, "path {path}");
    }
}

#[test]
fn root_redirects_by_auth() {
    assert_eq!(decide(&authenticated(), "/"), Some(Route::Home));
    assert_eq!(decide(&anonymous(), "/"), Some(Route::Login));
}

#[test]
fn protected_requires_session() {
    for path in ["/home", "/history", "/profile"] {
        assert_eq!(decide(&anonymous(), path), Some(Route::Login));
        assert_eq!(decide(&authenticated(), path), None);
    }
}

#[test]
fn public_bounces_authenticated_users() {
    for path in ["/login", "/register"] {
        assert_eq!(decide(&authenticated(), path), Some(Route::Home));
        assert_eq!(decide(&anonymous(), path), None);
    }
}

#[test]
fn unknown_paths_are_left_alone() {
    assert_eq!(decide(&anonymous(), "/nope"), None);
    assert_eq!(decide(&authenticated(), "/nope"), None);
}

#[test]
fn decision_is_deterministic() {
    for state in [loading(), anonymous(), authenticated()] {
        for path in ALL_PATHS {
            assert_eq!(decide(&state, path), decide(&state, path));
        }
    }
}

#[test]
fn following_a_redirect_settles() {
    for state in [anonymous(), authenticated()] {
        for path in ALL_PATHS {
            if let Some(target) = decide(&state, path) {
                assert_eq!(decide(&state, target.path()), None, "from {path}");
            }
        }
    }
}

#[test]
fn authenticated_login_visit_goes_home() {
    let state = SessionState::authenticated(ana());
    assert_eq!(decide(&state, "/login"), Some(Route::Home));
}

// =============================================================
// GuardMemo
// =============================================================

#[test]
fn memo_issues_each_redirect_once() {
    let mut memo = GuardMemo::default();
    let state = anonymous();
    assert_eq!(memo.next(&state, "/home"), Some(Route::Login));
    assert_eq!(memo.next(&state, "/home"), None);
    assert_eq!(memo.next(&state, "/home"), None);
}

#[test]
fn memo_resets_after_settling() {
    let mut memo = GuardMemo::default();
    let state = anonymous();
    assert_eq!(memo.next(&state, "/home"), Some(Route::Login));
    assert_eq!(memo.next(&state, "/login"), None);
    assert_eq!(memo.next(&state, "/home"), Some(Route::Login));
}

#[test]
fn memo_reissues_when_target_changes() {
    let mut memo = GuardMemo::default();
    assert_eq!(memo.next(&anonymous(), "/"), Some(Route::Login));
    assert_eq!(memo.next(&authenticated(), "/"), Some(Route::Home));
}

#[test]
fn memo_waits_for_loading() {
    let mut memo = GuardMemo::default();
    assert_eq!(memo.next(&loading(), "/home"), None);
    assert_eq!(memo.next(&anonymous(), "/home"), Some(Route::Login));
}
