//! Diagnostics side-channel.
//!
//! Pipeline failures never reach the caller as error values; they surface
//! here. The default sink swallows everything, the tracing sink forwards
//! to the active `tracing` subscriber, and the recording sink lets tests
//! assert on what was reported.

use std::sync::{Arc, Mutex};

use tracing::{debug, error};

/// Where the pipeline reports what it is doing.
///
/// `debug` carries step-by-step progress and is only invoked when the
/// debug flag is on; `error` carries the reason a lookup produced no
/// citation and is always invoked on failure.
pub trait Diagnostics: Send + Sync {
    fn debug(&self, message: &str);
    fn error(&self, message: &str);
}

/// Discards every message. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn debug(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

/// Forwards messages to the active tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn debug(&self, message: &str) {
        debug!("{message}");
    }

    fn error(&self, message: &str) {
        error!("{message}");
    }
}

/// Records messages in memory. Clones share one log, so a test can keep a
/// handle and hand another to the pipeline.
#[derive(Debug, Clone, Default)]
pub struct MemoryDiagnostics {
    log: Arc<Mutex<Log>>,
}

#[derive(Debug, Default)]
struct Log {
    debug: Vec<String>,
    error: Vec<String>,
}

impl MemoryDiagnostics {
    pub fn new() -> MemoryDiagnostics {
        MemoryDiagnostics::default()
    }

    pub fn debug_messages(&self) -> Vec<String> {
        self.log.lock().unwrap().debug.clone()
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.log.lock().unwrap().error.clone()
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn debug(&self, message: &str) {
        self.log.lock().unwrap().debug.push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.log.lock().unwrap().error.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_diagnostics_shares_log_across_clones() {
        let diagnostics = MemoryDiagnostics::new();
        let clone = diagnostics.clone();
        clone.debug("resolved uri");
        clone.error("fetch failed");
        assert_eq!(diagnostics.debug_messages(), vec!["resolved uri"]);
        assert_eq!(diagnostics.error_messages(), vec!["fetch failed"]);
    }

    #[test]
    fn test_noop_diagnostics_discards() {
        let diagnostics = NoopDiagnostics;
        diagnostics.debug("ignored");
        diagnostics.error("ignored");
    }
}
