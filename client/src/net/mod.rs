//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns transport and response normalization, `api` names the
//! endpoints, `error` classifies failures, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
