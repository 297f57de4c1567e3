//! Core pipeline types and traits

pub mod config;
pub mod error;
pub mod formatter;
pub mod log_level;
pub mod log_record;
pub mod metrics;
pub mod pipeline;
pub mod queue;
pub mod sink;

pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use formatter::{Formatter, TimestampFormat};
pub use log_level::Level;
pub use log_record::LogRecord;
pub use metrics::PipelineMetrics;
pub use pipeline::{Pipeline, PipelineBuilder};
pub use queue::{LogQueue, PipelineState};
pub use sink::Sink;
