//! Version reporting for `kubever`
//!
//! [`report`] prints the static build identity of the binary and then,
//! best effort, the version of the Kubernetes API server reachable through
//! a kubeconfig. The cluster side lives in [`probe`]; it never fails, it
//! only resolves a version or skips.

pub mod probe;
pub mod report;
pub mod sink;

pub use probe::kube::KubeConnector;
pub use probe::{probe, ClusterClient, ClusterConnector, ProbeInput, ProbeResult, VersionQuery};
pub use report::{render, report};
pub use sink::{ErrorSink, TracingErrorSink};
