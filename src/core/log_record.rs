//! Log record structure

use super::log_level::Level;
use chrono::{DateTime, Local};
use serde::Serialize;

/// A single submitted log message.
///
/// The timestamp is captured when the record is created, on the producer's
/// thread. Under queueing delay the consumer may write the record much later;
/// the recorded instant still reflects when the event was observed.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl LogRecord {
    /// Sanitize a log message so one record always renders as one line.
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// to prevent attackers from injecting fake log entries.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(level: Level, message: String) -> Self {
        Self {
            level,
            message: Self::sanitize_message(&message),
            timestamp: Local::now(),
        }
    }
}
