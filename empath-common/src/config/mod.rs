//! Configuration types shared by the filter crates.
//!
//! Filters themselves are built in code; the only configurable surface here
//! is how diagnostics are emitted.

pub mod logging;

pub use logging::{LogConfig, LogFormat};
