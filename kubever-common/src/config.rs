//! Build identity of the running binary

use crate::constants::{DEFAULT_MAX_KUBE_VERSION, DEFAULT_MIN_KUBE_VERSION, UNKNOWN_GIT_SHA};

/// Statically known version identifiers.
///
/// Built once by the binary from build-time values and passed by reference
/// to whatever renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    /// Tool version
    pub version: String,
    /// Oldest supported cluster version
    pub min_kube_version: String,
    /// Newest supported cluster version
    pub max_kube_version: String,
    /// Source revision the binary was built from
    pub git_sha: String,
}

impl VersionInfo {
    /// Create version info with the default supported range and an unknown revision.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            min_kube_version: DEFAULT_MIN_KUBE_VERSION.to_string(),
            max_kube_version: DEFAULT_MAX_KUBE_VERSION.to_string(),
            git_sha: UNKNOWN_GIT_SHA.to_string(),
        }
    }

    /// Set the supported cluster version range
    #[must_use]
    pub fn kube_range(mut self, min: impl Into<String>, max: impl Into<String>) -> Self {
        self.min_kube_version = min.into();
        self.max_kube_version = max.into();
        self
    }

    /// Set the build revision. Empty values keep the current revision.
    #[must_use]
    pub fn git_sha(mut self, sha: impl Into<String>) -> Self {
        let sha = sha.into();
        if !sha.is_empty() {
            self.git_sha = sha;
        }
        self
    }
}
