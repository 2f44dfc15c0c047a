//! Reactive route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Installed once inside the router so every screen gets identical redirect
//! behavior. The decision itself is `routing::decide`; this module only
//! reacts to session and location changes and issues the navigation.

use std::cell::RefCell;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routing::{GuardMemo, Route};
use crate::state::session::SessionState;

/// Redirect whenever the resolved session and the current path disagree.
pub fn install_route_guard<F>(session: RwSignal<SessionState>, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let memo = RefCell::new(GuardMemo::default());
    Effect::new(move || {
        let state = session.get();
        let path = pathname.get();
        let target = memo.borrow_mut().next(&state, &path);
        if let Some(route) = target {
            log::debug!("route guard: {path} -> {}", route.path());
            navigate_to(&navigate, route);
        }
    });
}

/// Navigate to `route`, replacing the current history entry.
pub fn navigate_to<F>(navigate: &F, route: Route)
where
    F: Fn(&str, NavigateOptions),
{
    navigate(route.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
}
