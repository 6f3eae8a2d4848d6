//! Client-side state.
//!
//! `view` holds everything the page renders from; it is owned by the
//! controller and only changed through its named transitions.

pub mod view;

pub use view::{FormInput, ViewState};
