#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Integration tests for `kubever`
//!
//! These run the full report path: static lines, probe, probe line.

mod report_test;

use async_trait::async_trait;
use kubever_common::{ProbeError, Result, VersionInfo};
use kubever_core::{report, ClusterClient, ClusterConnector, ErrorSink, ProbeInput, VersionQuery};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

pub const SKIP_LINE: &str = "API Version check skipped due to missing credentials or other error";

pub fn version_info() -> VersionInfo {
    VersionInfo::new("1.2.3")
        .kube_range("1.31.0", "1.33.99")
        .git_sha("0a1b2c3d")
}

/// Sink that keeps every error it is given
#[derive(Default)]
pub struct RecordingSink {
    errors: Mutex<Vec<ProbeError>>,
}

impl RecordingSink {
    pub fn errors(&self) -> Vec<ProbeError> {
        self.errors.lock().unwrap().clone()
    }
}

impl ErrorSink for RecordingSink {
    fn log_error(&self, err: &ProbeError) {
        self.errors.lock().unwrap().push(err.clone());
    }
}

/// Connector whose stages succeed or fail as scripted
pub struct ScriptedConnector {
    pub query: std::result::Result<&'static str, &'static str>,
}

pub struct ScriptedHandle {
    query: std::result::Result<&'static str, &'static str>,
}

#[async_trait]
impl ClusterConnector for ScriptedConnector {
    type Client = ScriptedHandle;

    async fn connect(&self, _input: &ProbeInput) -> Result<ScriptedHandle> {
        Ok(ScriptedHandle { query: self.query })
    }
}

impl ClusterClient for ScriptedHandle {
    type Handle = ScriptedHandle;

    fn handle(self) -> Result<ScriptedHandle> {
        Ok(self)
    }
}

#[async_trait]
impl VersionQuery for ScriptedHandle {
    async fn server_version(&self) -> Result<String> {
        self.query
            .map(str::to_string)
            .map_err(|e| ProbeError::VersionQuery(e.to_string()))
    }
}

/// Run a full report and return stdout
pub async fn run_report<C: ClusterConnector>(
    short: bool,
    input: &ProbeInput,
    connector: &C,
    sink: &RecordingSink,
) -> String {
    let mut out = Vec::new();
    report(&mut out, &version_info(), short, input, connector, sink)
        .await
        .expect("writing to a Vec cannot fail");
    String::from_utf8(out).unwrap()
}

/// Write a kubeconfig with a single context pointing at `server`
pub fn write_kubeconfig(server: &str) -> tempfile::NamedTempFile {
    let contents = format!(
        r#"apiVersion: v1
kind: Config
current-context: test
clusters:
- name: test
  cluster:
    server: {server}
contexts:
- name: test
  context:
    cluster: test
    user: test
users:
- name: test
  user:
    token: test-token
"#
    );
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

pub fn input_for(file: &tempfile::NamedTempFile) -> ProbeInput {
    ProbeInput::new(Some(PathBuf::from(file.path())))
}

/// A local port with nothing listening on it
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind(("127.0.0.1", 0)).unwrap();
    listener.local_addr().unwrap().port()
}
