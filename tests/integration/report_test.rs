//! Reporter output with scripted cluster stages

use super::{run_report, version_info, RecordingSink, ScriptedConnector, SKIP_LINE};
use kubever_core::ProbeInput;
use std::path::PathBuf;

fn some_kubeconfig() -> ProbeInput {
    ProbeInput::new(Some(PathBuf::from("/tmp/kubever-test-kubeconfig")))
}

/// No kubeconfig, full output: ends with the skip line and nothing is logged
#[tokio::test]
async fn test_full_without_kubeconfig() {
    let sink = RecordingSink::default();
    let connector = ScriptedConnector {
        query: Ok("v1.28.0"),
    };

    let output = run_report(false, &ProbeInput::default(), &connector, &sink).await;

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "kubever Version: 1.2.3",
            "MinimumKubeVersion: 1.31.0",
            "MaximumKubeVersion: 1.33.99",
            "GitSHA: 0a1b2c3d",
            SKIP_LINE,
        ]
    );
    assert!(sink.errors().is_empty());
}

/// No kubeconfig, short output: exactly the tool version
#[tokio::test]
async fn test_short_without_kubeconfig() {
    let sink = RecordingSink::default();
    let connector = ScriptedConnector {
        query: Ok("v1.28.0"),
    };

    let output = run_report(true, &ProbeInput::default(), &connector, &sink).await;

    assert_eq!(output.trim_end_matches('\n'), version_info().version);
    assert_eq!(output, "1.2.3\n");
}

/// Short output never contains probe text, even with credentials
#[tokio::test]
async fn test_short_with_kubeconfig() {
    let sink = RecordingSink::default();
    let connector = ScriptedConnector {
        query: Ok("v1.28.0"),
    };

    let output = run_report(true, &some_kubeconfig(), &connector, &sink).await;

    assert_eq!(output, "1.2.3\n");
    assert!(sink.errors().is_empty());
}

/// All stages succeed: last line carries the server version verbatim
#[tokio::test]
async fn test_full_resolved() {
    let sink = RecordingSink::default();
    let connector = ScriptedConnector {
        query: Ok("v1.28.0"),
    };

    let output = run_report(false, &some_kubeconfig(), &connector, &sink).await;

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "kubever Version: 1.2.3");
    assert_eq!(lines.last(), Some(&"API Version:  v1.28.0"));
    assert!(sink.errors().is_empty());
}

/// Query fails: skip line last, one error logged
#[tokio::test]
async fn test_full_query_failure() {
    let sink = RecordingSink::default();
    let connector = ScriptedConnector {
        query: Err("connection reset by peer"),
    };

    let output = run_report(false, &some_kubeconfig(), &connector, &sink).await;

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[3], "GitSHA: 0a1b2c3d");
    assert_eq!(lines[4], SKIP_LINE);

    let errors = sink.errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].stage(), "version_query");
    assert!(errors[0].to_string().contains("connection reset by peer"));
}
