//! Output labels and build defaults for `kubever`.
//!
//! The labels are part of the command's textual output; scripts grep for
//! them, so they must not drift between releases.

/// Oldest Kubernetes release this build is tested against.
pub const DEFAULT_MIN_KUBE_VERSION: &str = "1.31.0";

/// Newest Kubernetes release this build is tested against.
pub const DEFAULT_MAX_KUBE_VERSION: &str = "1.33.99";

/// Build revision reported when the build script could not determine one.
pub const UNKNOWN_GIT_SHA: &str = "unknown";

/// Label preceding the tool version in full output.
pub const TOOL_VERSION_LABEL: &str = "kubever Version:";

/// Label preceding the minimum supported cluster version.
pub const MIN_KUBE_VERSION_LABEL: &str = "MinimumKubeVersion:";

/// Label preceding the maximum supported cluster version.
pub const MAX_KUBE_VERSION_LABEL: &str = "MaximumKubeVersion:";

/// Label preceding the build revision.
pub const GIT_SHA_LABEL: &str = "GitSHA:";

/// Label preceding a resolved cluster API version.
///
/// Followed by two spaces in the rendered line (`API Version:  v1.28.0`).
pub const API_VERSION_LABEL: &str = "API Version:";

/// Line printed in place of the API version when the probe was skipped.
pub const API_VERSION_SKIPPED: &str =
    "API Version check skipped due to missing credentials or other error";
