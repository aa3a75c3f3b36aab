//! Logging setup shared by `kubever` binaries

pub mod tracing;

pub use tracing::{init_logging, LogFormat};
