//! Version report rendering
//!
//! Full output is four static lines followed by the probe line. The static
//! lines always come first so a slow or unreachable cluster never hides the
//! build identity.

use kubever_common::constants::{
    API_VERSION_LABEL, API_VERSION_SKIPPED, GIT_SHA_LABEL, MAX_KUBE_VERSION_LABEL,
    MIN_KUBE_VERSION_LABEL, TOOL_VERSION_LABEL,
};
use kubever_common::VersionInfo;
use std::io::{self, Write};

use crate::probe::{probe, ClusterConnector, ProbeInput, ProbeResult};
use crate::sink::ErrorSink;

fn static_lines(info: &VersionInfo) -> [String; 4] {
    [
        format!("{TOOL_VERSION_LABEL} {}", info.version),
        format!("{MIN_KUBE_VERSION_LABEL} {}", info.min_kube_version),
        format!("{MAX_KUBE_VERSION_LABEL} {}", info.max_kube_version),
        format!("{GIT_SHA_LABEL} {}", info.git_sha),
    ]
}

fn probe_line(result: &ProbeResult) -> String {
    match result {
        ProbeResult::Resolved(version) => format!("{API_VERSION_LABEL}  {version}"),
        ProbeResult::Skipped => API_VERSION_SKIPPED.to_string(),
    }
}

/// Render a report for an already completed probe.
///
/// Lines are separated by `\n` with no trailing newline. In short mode the
/// output is the tool version alone and `result` is ignored.
pub fn render(info: &VersionInfo, short: bool, result: &ProbeResult) -> String {
    if short {
        return info.version.clone();
    }

    let mut lines = static_lines(info).to_vec();
    lines.push(probe_line(result));
    lines.join("\n")
}

/// Write a report to `out`, probing the cluster only for full output.
///
/// The static lines are written and flushed before the probe starts.
/// Only failures to write `out` are returned.
pub async fn report<W, C>(
    out: &mut W,
    info: &VersionInfo,
    short: bool,
    input: &ProbeInput,
    connector: &C,
    sink: &dyn ErrorSink,
) -> io::Result<()>
where
    W: Write,
    C: ClusterConnector,
{
    if short {
        writeln!(out, "{}", info.version)?;
        return out.flush();
    }

    for line in static_lines(info) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    let result = probe(input, connector, sink).await;
    writeln!(out, "{}", probe_line(&result))?;
    out.flush()
}
