//! Destination for probe failures

use kubever_common::ProbeError;
use tracing::error;

/// Receives the error that made a probe skip.
///
/// Fire-and-forget: implementations must not fail and the caller never
/// looks at what happened to the error.
pub trait ErrorSink: Send + Sync {
    fn log_error(&self, err: &ProbeError);
}

/// Sink that emits each error as a `tracing` event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn log_error(&self, err: &ProbeError) {
        error!(stage = err.stage(), error = %err, "Cluster version probe failed");
    }
}
