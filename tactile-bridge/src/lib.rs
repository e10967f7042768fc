//! Tactile Bridge library target.
//!
//! Exposes the host's modules for integration tests. The binary entry point
//! is in `main.rs`.

pub mod app;
pub mod args;
pub mod script;
pub mod util;
