//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The single page owns load/timeline orchestration and delegates rendering
//! details to `components`.

pub mod maintenance;
