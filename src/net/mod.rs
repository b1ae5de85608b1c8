//! Networking modules for the status document fetch.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single no-cache GET and `types` defines the document
//! schema. This is the only network traffic the page ever generates.

pub mod api;
pub mod types;
