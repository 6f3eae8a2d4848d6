//! Networking for the content backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls and `types` defines the wire schema shared
//! with the backend.

pub mod api;
pub mod types;
