//! Common types shared by the `kubever` crates

pub mod config;
pub mod constants;
pub mod error;

pub use config::VersionInfo;
pub use constants::{DEFAULT_MAX_KUBE_VERSION, DEFAULT_MIN_KUBE_VERSION, UNKNOWN_GIT_SHA};
pub use error::{ProbeError, Result};
