//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and dialogs while reading shared state
//! from Leptos context providers.

pub mod navigation;
pub mod notice;
pub mod plan_picker;
pub mod report_detail;
