//! Line formatting for log records
//!
//! Maps a [`LogRecord`] to the single text line that is persisted:
//! `"<timestamp> [<LEVEL>] <message>"`. Formatting is pure and total; the
//! rendered timestamp is always the record's own observation instant, never
//! the time of formatting.

use super::log_record::LogRecord;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Timestamp format options for the rendered line
///
/// # Examples
///
/// ```
/// use log_pipeline::core::TimestampFormat;
/// use chrono::Local;
///
/// let format = TimestampFormat::DateTime;
/// let rendered = format.format(&Local::now());
/// // Output: "2025-01-08 10:30:45"
/// assert_eq!(rendered.len(), 19);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Local date and time with second precision: `2025-01-08 10:30:45`
    ///
    /// This is the default format.
    #[default]
    DateTime,

    /// Local date and time with milliseconds: `2025-01-08 10:30:45.123`
    ///
    /// Provides finer ordering of entries submitted within the same second.
    DateTimeMillis,

    /// RFC 3339 format with timezone offset: `2025-01-08T10:30:45+01:00`
    Rfc3339,

    /// Custom strftime format
    ///
    /// # Examples
    ///
    /// ```
    /// use log_pipeline::core::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Local>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::DateTime => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
            TimestampFormat::DateTimeMillis => {
                datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
            }
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}

/// Renders log records as persisted lines
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    timestamp_format: TimestampFormat,
}

impl Formatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timestamp format
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Render a record as `"<timestamp> [<LEVEL>] <message>"`
    #[must_use]
    pub fn format(&self, record: &LogRecord) -> String {
        format!(
            "{} [{}] {}",
            self.timestamp_format.format(&record.timestamp),
            record.level,
            record.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Level;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
    }

    fn fixed_record(level: Level, message: &str) -> LogRecord {
        let mut record = LogRecord::new(level, message.to_string());
        record.timestamp = fixed_datetime();
        record
    }

    #[test]
    fn test_datetime_format() {
        let format = TimestampFormat::DateTime;
        assert_eq!(format.format(&fixed_datetime()), "2025-01-08 10:30:45");
    }

    #[test]
    fn test_datetime_millis_format() {
        let format = TimestampFormat::DateTimeMillis;
        assert_eq!(
            format.format(&fixed_datetime()),
            "2025-01-08 10:30:45.000"
        );
    }

    #[test]
    fn test_rfc3339_format() {
        let format = TimestampFormat::Rfc3339;
        let result = format.format(&fixed_datetime());
        assert!(result.starts_with("2025-01-08T10:30:45"));
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30");
    }

    #[test]
    fn test_default_is_datetime() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::DateTime);
    }

    #[test]
    fn test_line_layout() {
        let formatter = Formatter::new();
        let line = formatter.format(&fixed_record(Level::Info, "server started"));
        assert_eq!(line, "2025-01-08 10:30:45 [INFO] server started");
    }

    #[test]
    fn test_line_layout_per_level() {
        let formatter = Formatter::new();
        for (level, tag) in [
            (Level::Info, "[INFO]"),
            (Level::Warning, "[WARNING]"),
            (Level::Error, "[ERROR]"),
        ] {
            let line = formatter.format(&fixed_record(level, "msg"));
            assert!(line.contains(tag), "missing {} in {}", tag, line);
        }
    }

    #[test]
    fn test_formatter_uses_record_timestamp() {
        // The rendered timestamp must come from the record, not from "now".
        let formatter = Formatter::new();
        let line = formatter.format(&fixed_record(Level::Warning, "stale"));
        assert!(line.starts_with("2025-01-08 10:30:45"));
    }

    #[test]
    fn test_formatter_custom_timestamp() {
        let formatter =
            Formatter::new().with_timestamp_format(TimestampFormat::Custom("%H:%M".to_string()));
        let line = formatter.format(&fixed_record(Level::Info, "tick"));
        assert_eq!(line, "10:30 [INFO] tick");
    }
}
