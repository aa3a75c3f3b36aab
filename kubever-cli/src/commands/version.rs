//! Version subcommand implementation

use anyhow::{Context, Result};
use clap::Args;
use kubever_common::{VersionInfo, DEFAULT_MAX_KUBE_VERSION, DEFAULT_MIN_KUBE_VERSION};
use kubever_core::{report, KubeConnector, ProbeInput, TracingErrorSink};
use kubever_observability::{init_logging, LogFormat};
use std::io;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Print only the kubever version
    #[arg(short, long)]
    short: bool,

    /// Kubeconfig used to query the API server version. The check is skipped if unset.
    #[arg(long, env = "KUBECONFIG")]
    kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use instead of current-context
    #[arg(long)]
    context: Option<String>,

    /// Log level
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,

    /// Log format (text or json)
    #[arg(long, default_value = "text", env = "KUBEVER_LOG_FORMAT")]
    log_format: LogFormat,
}

/// Build identity baked in at compile time
fn version_info() -> VersionInfo {
    VersionInfo::new(env!("CARGO_PKG_VERSION"))
        .kube_range(
            option_env!("KUBEVER_MIN_KUBE_VERSION").unwrap_or(DEFAULT_MIN_KUBE_VERSION),
            option_env!("KUBEVER_MAX_KUBE_VERSION").unwrap_or(DEFAULT_MAX_KUBE_VERSION),
        )
        .git_sha(option_env!("KUBEVER_BUILD_GIT_SHA").unwrap_or_default())
}

/// `KUBECONFIG` may hold a list of paths; the first non-empty one is used.
fn kubeconfig_path(arg: Option<PathBuf>) -> Option<PathBuf> {
    let arg = arg?;
    std::env::split_paths(&arg).find(|path| !path.as_os_str().is_empty())
}

pub async fn run(args: VersionArgs) -> Result<()> {
    let _ = init_logging(args.log_format, &args.log_level);

    let info = version_info();
    let input = ProbeInput::new(kubeconfig_path(args.kubeconfig)).with_context(args.context);

    let mut stdout = io::stdout();
    report(
        &mut stdout,
        &info,
        args.short,
        &input,
        &KubeConnector,
        &TracingErrorSink,
    )
    .await
    .context("Failed to write version report")
}
