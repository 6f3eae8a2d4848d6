//! copydesk — client for a marketing-content generation backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single page: a product form, the last generated copy, and the list of
//! past generations kept by the backend. `controller` owns the page state and
//! runs the user actions against `net::api::ContentApi`; `render` turns the
//! state into text; `shell` drives it interactively.

pub mod config;
pub mod confirm;
pub mod controller;
pub mod net;
pub mod render;
pub mod shell;
pub mod state;
