//! Probe stages backed by the `kube` client

use async_trait::async_trait;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use kubever_common::{ProbeError, Result};

use super::{ClusterClient, ClusterConnector, ProbeInput, VersionQuery};

/// Connects to the cluster described by a kubeconfig file
#[derive(Debug, Clone, Copy, Default)]
pub struct KubeConnector;

/// Client configuration resolved from a kubeconfig, not yet connected
pub struct KubeClusterClient {
    config: Config,
}

/// A live `kube` client
pub struct KubeHandle {
    client: Client,
}

#[async_trait]
impl ClusterConnector for KubeConnector {
    type Client = KubeClusterClient;

    async fn connect(&self, input: &ProbeInput) -> Result<KubeClusterClient> {
        let path = input
            .kubeconfig()
            .ok_or_else(|| ProbeError::ClientConstruction("no kubeconfig provided".to_string()))?;

        let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
            ProbeError::ClientConstruction(format!("{}: {}", path.display(), e))
        })?;

        let options = KubeConfigOptions {
            context: input.context().map(str::to_string),
            ..KubeConfigOptions::default()
        };
        let config = Config::from_custom_kubeconfig(kubeconfig, &options)
            .await
            .map_err(|e| ProbeError::ClientConstruction(format!("{}: {}", path.display(), e)))?;

        Ok(KubeClusterClient { config })
    }
}

impl ClusterClient for KubeClusterClient {
    type Handle = KubeHandle;

    fn handle(self) -> Result<KubeHandle> {
        let client = Client::try_from(self.config)
            .map_err(|e| ProbeError::HandleAcquisition(e.to_string()))?;
        Ok(KubeHandle { client })
    }
}

#[async_trait]
impl VersionQuery for KubeHandle {
    async fn server_version(&self) -> Result<String> {
        let info = self
            .client
            .apiserver_version()
            .await
            .map_err(|e| ProbeError::VersionQuery(e.to_string()))?;
        Ok(info.git_version)
    }
}
