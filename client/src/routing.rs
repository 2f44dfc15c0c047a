//! Route table and the redirect decision for auth-dependent navigation.
//!
//! DESIGN
//! ======
//! [`decide`] is a pure function of the session snapshot and the current
//! path so the whole redirect table is testable without a router. The
//! reactive wiring lives in `util::route_guard`.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

use crate::state::session::SessionState;

/// Application screens with a fixed path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    Login,
    Register,
    Home,
    History,
    Profile,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Home => "/home",
            Self::History => "/history",
            Self::Profile => "/profile",
        }
    }

    /// Route owning `path`, matched on its first segment.
    pub fn from_path(path: &str) -> Option<Self> {
        let first = path.trim_start_matches('/').split(['/', '?', '#']).next().unwrap_or_default();
        match first {
            "" => Some(Self::Root),
            "login" => Some(Self::Login),
            "register" => Some(Self::Register),
            "home" => Some(Self::Home),
            "history" => Some(Self::History),
            "profile" => Some(Self::Profile),
            _ => None,
        }
    }

    pub fn kind(self) -> RouteKind {
        match self {
            Self::Root => RouteKind::Root,
            Self::Login | Self::Register => RouteKind::Public,
            Self::Home | Self::History | Self::Profile => RouteKind::Protected,
        }
    }
}

/// Access class of a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteKind {
    /// `/`: always forwards somewhere.
    Root,
    /// Only meaningful to anonymous visitors.
    Public,
    /// Requires an authenticated session.
    Protected,
    /// Not an application route; left to the router's fallback.
    Other,
}

pub fn classify(path: &str) -> RouteKind {
    Route::from_path(path).map_or(RouteKind::Other, Route::kind)
}

/// Whether the sidebar chrome should be hidden for `path`.
pub fn is_auth_page(path: &str) -> bool {
    classify(path) == RouteKind::Public
}

/// Redirect required for `path` given the session, or `None` to stay put.
///
/// Nothing is decided while the session is still loading.
pub fn decide(session: &SessionState, path: &str) -> Option<Route> {
    if session.loading {
        return None;
    }
    let authenticated = session.is_authenticated();
    match classify(path) {
        RouteKind::Root if authenticated => Some(Route::Home),
        RouteKind::Root | RouteKind::Protected if !authenticated => Some(Route::Login),
        RouteKind::Public if authenticated => Some(Route::Home),
        _ => None,
    }
}

/// Suppresses repeated navigation for unchanged guard inputs.
///
/// Reactive effects may re-run with the same path before the router has
/// applied a pending navigation; the memo makes the second run a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuardMemo {
    last: Option<(String, Route)>,
}

impl GuardMemo {
    /// Redirect to issue now, if any.
    pub fn next(&mut self, session: &SessionState, path: &str) -> Option<Route> {
        let Some(target) = decide(session, path) else {
            self.last = None;
            return None;
        };
        if self.last.as_ref().is_some_and(|(p, t)| p == path && *t == target) {
            return None;
        }
        self.last = Some((path.to_owned(), target));
        Some(target)
    }
}
