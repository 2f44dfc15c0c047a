//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `reports`, `profile`) so individual
//! pages can depend on small focused models.

pub mod profile;
pub mod reports;
pub mod session;
