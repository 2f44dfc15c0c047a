//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Redirects are left to the route guard.

pub mod history;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod root;
