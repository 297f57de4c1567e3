//! Pipeline configuration
//!
//! A small JSON-backed configuration layer for host processes that wire the
//! pipeline from a file instead of code.

use super::error::Result;
use super::formatter::TimestampFormat;
use super::log_level::Level;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration for a file-backed pipeline
///
/// # Example
///
/// ```
/// use log_pipeline::PipelineConfig;
///
/// let config: PipelineConfig = serde_json::from_str(
///     r#"{ "log_path": "app.log", "min_level": "Warning" }"#,
/// ).unwrap();
/// assert_eq!(config.log_path.to_str(), Some("app.log"));
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Path of the append-only log file
    pub log_path: PathBuf,
    /// Minimum level accepted by `submit`
    pub min_level: Level,
    /// Flush the sink after every line
    pub flush_every_line: bool,
    /// Timestamp format for rendered lines
    pub timestamp_format: TimestampFormat,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("logs.txt"),
            min_level: Level::Info,
            flush_every_line: true,
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl PipelineConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }
}
