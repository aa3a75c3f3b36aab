//! Error types for `kubever`

use thiserror::Error;

/// Failure of one stage of the cluster version probe.
///
/// Each variant carries the collaborator's rendered error. None of these
/// reach the user as a failure; the probe logs them and reports a skip.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The kubeconfig could not be turned into a client configuration
    #[error("could not create cluster client: {0}")]
    ClientConstruction(String),

    /// The client configuration could not produce a connection handle
    #[error("could not acquire cluster connection: {0}")]
    HandleAcquisition(String),

    /// The API server did not answer the version request
    #[error("could not query server version: {0}")]
    VersionQuery(String),
}

impl ProbeError {
    /// Stable name of the stage that failed, for structured logs
    pub fn stage(&self) -> &'static str {
        match self {
            ProbeError::ClientConstruction(_) => "client_construction",
            ProbeError::HandleAcquisition(_) => "handle_acquisition",
            ProbeError::VersionQuery(_) => "version_query",
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ProbeError>;
