//! Best-effort cluster version probe
//!
//! The probe runs three fallible stages in order and stops at the first
//! failure:
//!
//! 1. [`ClusterConnector::connect`] builds a client from the kubeconfig
//! 2. [`ClusterClient::handle`] turns that client into a connection handle
//! 3. [`VersionQuery::server_version`] asks the API server for its version
//!
//! A missing kubeconfig skips the probe before stage 1. Any stage failure is
//! reported to the [`ErrorSink`] once and the probe skips. There are no
//! retries and no timeouts beyond the transport's defaults.

pub mod kube;

use async_trait::async_trait;
use kubever_common::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::sink::ErrorSink;

/// Where to find cluster credentials
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeInput {
    kubeconfig: Option<PathBuf>,
    context: Option<String>,
}

impl ProbeInput {
    pub fn new(kubeconfig: Option<PathBuf>) -> Self {
        Self {
            kubeconfig,
            context: None,
        }
    }

    /// Use a named kubeconfig context instead of `current-context`
    #[must_use]
    pub fn with_context(mut self, context: Option<String>) -> Self {
        self.context = context;
        self
    }

    /// Kubeconfig path, or `None` if none was provided. An empty path counts as none.
    pub fn kubeconfig(&self) -> Option<&Path> {
        self.kubeconfig
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref().filter(|context| !context.is_empty())
    }
}

/// Outcome of a probe
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    /// The API server reported this version string, verbatim
    Resolved(String),
    /// No credentials were given, or a stage failed
    Skipped,
}

impl ProbeResult {
    pub fn is_skipped(&self) -> bool {
        matches!(self, ProbeResult::Skipped)
    }

    pub fn version(&self) -> Option<&str> {
        match self {
            ProbeResult::Resolved(version) => Some(version),
            ProbeResult::Skipped => None,
        }
    }
}

/// Builds cluster clients from credentials
#[async_trait]
pub trait ClusterConnector: Send + Sync {
    type Client: ClusterClient;

    /// Build a client. Called only when a kubeconfig was provided.
    async fn connect(&self, input: &ProbeInput) -> Result<Self::Client>;
}

/// A configured client that can open a connection handle
pub trait ClusterClient: Send {
    type Handle: VersionQuery;

    fn handle(self) -> Result<Self::Handle>;
}

/// A connection handle that can ask for the server version
#[async_trait]
pub trait VersionQuery: Send + Sync {
    async fn server_version(&self) -> Result<String>;
}

/// Probe the cluster for its API version.
///
/// Never fails: a missing kubeconfig or any stage failure yields
/// [`ProbeResult::Skipped`]. Failures (but not a missing kubeconfig) are
/// handed to `sink` exactly once.
pub async fn probe<C>(input: &ProbeInput, connector: &C, sink: &dyn ErrorSink) -> ProbeResult
where
    C: ClusterConnector,
{
    if input.kubeconfig().is_none() {
        debug!("No kubeconfig provided, skipping API version check");
        return ProbeResult::Skipped;
    }

    match acquire(input, connector).await {
        Ok(version) => {
            debug!(%version, "Resolved API server version");
            ProbeResult::Resolved(version)
        }
        Err(err) => {
            sink.log_error(&err);
            ProbeResult::Skipped
        }
    }
}

async fn acquire<C>(input: &ProbeInput, connector: &C) -> Result<String>
where
    C: ClusterConnector,
{
    debug!(kubeconfig = ?input.kubeconfig(), context = ?input.context(), "Creating cluster client");
    let client = connector.connect(input).await?;
    let handle = client.handle()?;
    debug!("Querying API server version");
    handle.server_version().await
}
