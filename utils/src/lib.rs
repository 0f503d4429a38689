//! Shared utilities for anchorpath.

pub mod logging;

pub use logging::{init_logging, LogFormat};
