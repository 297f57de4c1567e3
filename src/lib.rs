//! # Log Pipeline
//!
//! A thread-safe asynchronous logging pipeline: any number of producer
//! threads submit leveled messages without blocking on I/O, and a single
//! background consumer thread drains them to a durable sink.
//!
//! ## Features
//!
//! - **Non-blocking producers**: `submit` only takes a brief queue lock
//! - **FIFO delivery**: lines reach the sink in submission order
//! - **Graceful shutdown**: `stop` blocks until every pending message is
//!   flushed, so nothing submitted before the call is lost
//! - **Pluggable sinks**: file, console, or custom destinations

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Formatter, Level, LogQueue, LogRecord, Pipeline, PipelineBuilder, PipelineConfig,
        PipelineError, PipelineMetrics, PipelineState, Result, Sink, TimestampFormat,
    };
    pub use crate::sinks::{ConsoleSink, FileSink};
}

pub use crate::core::{
    Formatter, Level, LogQueue, LogRecord, Pipeline, PipelineBuilder, PipelineConfig,
    PipelineError, PipelineMetrics, PipelineState, Result, Sink, TimestampFormat,
};
pub use crate::sinks::{ConsoleSink, FileSink};
