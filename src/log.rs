//! `Log`: the sink interface the timing monitor and builder report through.
//!
//! Grounded on the event-sink pattern (a narrow trait plus a stdout and an
//! in-memory implementation) rather than inventing a bespoke logging layer.

use std::sync::Mutex;

/// A synchronous, mutex-guarded log sink. No ordering is specified between
/// concurrent calls from different threads.
pub trait Log: Send + Sync {
    fn log_message(&self, message: &str);
    fn log_error(&self, message: &str);
}

/// Routes through `tracing`, the default for production use.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl Log for TracingLog {
    fn log_message(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn log_error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Captures messages in memory; used by tests and example snapshots.
#[derive(Default)]
pub struct MemoryLog {
    messages: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Log for MemoryLog {
    fn log_message(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn log_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_log_captures_messages_and_errors_separately() {
        let log = MemoryLog::new();
        log.log_message("hi");
        log.log_error("boom");
        assert_eq!(log.messages(), vec!["hi".to_string()]);
        assert_eq!(log.errors(), vec!["boom".to_string()]);
    }
}
