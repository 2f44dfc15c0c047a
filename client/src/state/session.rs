//! Auth-session state and the store that owns it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once at the app root via context. Pages and the route guard read
//! the session; only [`SessionStore`] writes it.
//!
//! STATE MACHINE
//! =============
//! `Unknown (loading)` -> `Authenticated(user)` | `Anonymous`. A session check
//! always ends loading. Logout always lands in `Anonymous`, even when the
//! backend call fails.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::net::api::AuthApi;
use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{Credentials, Registration, User};
use crate::routing::Route;

/// Client-held record of the authenticated identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
    /// Bumped on login and logout; session checks started in an older epoch
    /// do not overwrite `user`.
    pub epoch: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true, epoch: 0 }
    }
}

impl SessionState {
    pub fn anonymous() -> Self {
        Self { user: None, loading: false, epoch: 0 }
    }

    pub fn authenticated(user: User) -> Self {
        Self { user: Some(user), loading: false, epoch: 0 }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn phase(&self) -> SessionPhase {
        match (&self.user, self.loading) {
            (_, true) => SessionPhase::Unknown,
            (Some(_), false) => SessionPhase::Authenticated,
            (None, false) => SessionPhase::Anonymous,
        }
    }
}

/// Coarse session status for views that only branch on auth.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Unknown,
    Authenticated,
    Anonymous,
}

/// Storage the session store writes through.
///
/// The app uses a reactive `RwSignal`; tests use a plain `RefCell`.
pub trait SessionCell {
    fn snapshot(&self) -> SessionState;
    fn modify(&self, f: impl FnOnce(&mut SessionState));
}

impl SessionCell for RwSignal<SessionState> {
    fn snapshot(&self) -> SessionState {
        self.get_untracked()
    }

    fn modify(&self, f: impl FnOnce(&mut SessionState)) {
        self.update(f);
    }
}

impl SessionCell for RefCell<SessionState> {
    fn snapshot(&self) -> SessionState {
        self.borrow().clone()
    }

    fn modify(&self, f: impl FnOnce(&mut SessionState)) {
        f(&mut self.borrow_mut());
    }
}

impl<C: SessionCell> SessionCell for Rc<C> {
    fn snapshot(&self) -> SessionState {
        self.as_ref().snapshot()
    }

    fn modify(&self, f: impl FnOnce(&mut SessionState)) {
        self.as_ref().modify(f);
    }
}

/// Single writer of the session: login, registration, logout, session check.
#[derive(Clone, Debug)]
pub struct SessionStore<A, S> {
    api: A,
    state: S,
}

/// Session store as wired into the running app.
pub type AppSession = SessionStore<ApiClient, RwSignal<SessionState>>;

impl<A: AuthApi, S: SessionCell> SessionStore<A, S> {
    pub fn new(api: A, state: S) -> Self {
        Self { api, state }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn snapshot(&self) -> SessionState {
        self.state.snapshot()
    }

    /// Resolve the session from the backend's "current user" endpoint.
    ///
    /// Any failure or empty body resolves to anonymous; loading is cleared
    /// on every path.
    pub async fn load_session(&self) {
        let epoch = self.state.snapshot().epoch;
        let user = match self.api.current_user().await {
            Ok(Some(user)) => Some(user),
            Ok(None) => {
                log::info!("no active session");
                None
            }
            Err(e) => {
                log::info!("no active session: {e}");
                None
            }
        };
        self.state.modify(|s| {
            if s.epoch == epoch {
                s.user = user;
            } else {
                log::debug!("discarding session check from epoch {epoch}");
            }
            s.loading = false;
        });
    }

    /// Log in and refresh the identity; returns where to go next.
    ///
    /// # Errors
    ///
    /// The login call's error, classified so the form can tell an unreachable
    /// server from rejected credentials. The session is left untouched.
    pub async fn login(&self, credentials: &Credentials) -> Result<Route, ApiError> {
        self.api.login(credentials).await?;
        self.state.modify(|s| s.epoch = s.epoch.wrapping_add(1));
        self.load_session().await;
        Ok(Route::Home)
    }

    /// Create an account without signing in; returns where to go next.
    ///
    /// # Errors
    ///
    /// The registration call's error. The session is never modified.
    pub async fn register(&self, payload: &Registration) -> Result<Route, ApiError> {
        self.api.register(payload).await?;
        Ok(Route::Login)
    }

    /// Best-effort backend logout followed by an unconditional local clear.
    pub async fn logout(&self) -> Route {
        if let Err(e) = self.api.logout().await {
            log::warn!("logout failed: {e}");
        }
        self.state.modify(|s| {
            s.user = None;
            s.loading = false;
            s.epoch = s.epoch.wrapping_add(1);
        });
        Route::Login
    }
}

impl AppSession {
    /// Reactive session state for views.
    pub fn signal(&self) -> RwSignal<SessionState> {
        self.state
    }
}

/// Create the app session, provide it as context, and start the session check.
pub fn provide_session(api: ApiClient) -> AppSession {
    let store = SessionStore::new(api, RwSignal::new(SessionState::default()));
    provide_context(store.clone());

    #[cfg(feature = "hydrate")]
    {
        let store = store.clone();
        leptos::task::spawn_local(async move { store.load_session().await });
    }

    store
}

/// The session provided by [`provide_session`].
pub fn use_session() -> AppSession {
    expect_context::<AppSession>()
}
