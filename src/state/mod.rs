//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`status`, `progress`, `login`) so individual
//! components can depend on small focused models. All transition logic here
//! is plain-struct and browser-free, so it is tested natively.

pub mod login;
pub mod progress;
pub mod status;
