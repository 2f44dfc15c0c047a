//! Helpers shared by pages and components.
//!
//! `browser` wraps `window` calls, `format` renders backend values for
//! display, `route_guard` wires redirect decisions into the router.

pub mod browser;
pub mod format;
pub mod route_guard;
