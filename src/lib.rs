//! # maintpage
//!
//! Leptos + WASM maintenance splash page: one no-cache fetch of the status
//! document, a timer-driven progress bar, and an admin-gated detail panel.
//!
//! This crate contains the page, leaf components, application state, the
//! wire types for the status document, and browser glue for redirect/alert.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
