//! Main pipeline implementation
//!
//! The [`Pipeline`] owns the shared queue, the sink, and the consumer
//! thread. Producers call [`Pipeline::submit`] from any thread; the consumer
//! drains the queue in batches and writes each line to the sink.
//! [`Pipeline::stop`] requests a drain and blocks until every message
//! submitted before the call has reached the sink.

use super::{
    config::PipelineConfig,
    error::{PipelineError, Result},
    formatter::{Formatter, TimestampFormat},
    log_level::Level,
    log_record::LogRecord,
    metrics::PipelineMetrics,
    queue::{LogQueue, PipelineState},
    sink::Sink,
};
use crate::sinks::FileSink;
use std::sync::Arc;
use std::thread;

pub struct Pipeline {
    queue: Arc<LogQueue>,
    /// Present until `start` hands the sink to the consumer thread.
    sink: Option<Box<dyn Sink>>,
    worker: Option<thread::JoinHandle<()>>,
    formatter: Formatter,
    min_level: Level,
    flush_every_line: bool,
    metrics: Arc<PipelineMetrics>,
}

// SAFETY: every field except `sink` is already `Sync` (the two `Arc`s wrap
// `parking_lot`/atomic state, the rest are plain `Copy`/immutable data). The
// `sink` (`Box<dyn Sink>`, `Send` per spec) is only ever accessed through
// `&mut self` in `start`/`build`; no `&self` method (`submit`, `info`, …)
// touches it. A shared `&Pipeline` therefore never reaches the sink, so
// sharing one across producer threads is data-race free.
unsafe impl Sync for Pipeline {}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `dyn Sink` is not `Debug`; report only its presence.
        f.debug_struct("Pipeline")
            .field("has_sink", &self.sink.is_some())
            .field("worker_running", &self.worker.is_some())
            .field("min_level", &self.min_level)
            .field("flush_every_line", &self.flush_every_line)
            .field("state", &self.queue.state())
            .field("pending", &self.queue.len())
            .finish()
    }
}

impl Pipeline {
    /// Create a builder for Pipeline
    ///
    /// # Example
    /// ```
    /// use log_pipeline::prelude::*;
    ///
    /// let mut pipeline = Pipeline::builder()
    ///     .min_level(Level::Warning)
    ///     .sink(ConsoleSink::new())
    ///     .build()
    ///     .unwrap();
    /// pipeline.start().unwrap();
    /// pipeline.submit(Level::Error, "disk failure").unwrap();
    /// pipeline.stop();
    /// ```
    #[must_use]
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Create a pipeline writing to an append-only log file.
    ///
    /// Fails if the file cannot be opened; the pipeline never degrades to a
    /// no-op logger.
    pub fn with_file(path: impl Into<std::path::PathBuf>) -> Result<Self> {
        Pipeline::builder().sink(FileSink::new(path)?).build()
    }

    /// Create a pipeline from a loaded configuration.
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        Pipeline::builder()
            .sink(FileSink::new(config.log_path.clone())?)
            .min_level(config.min_level)
            .flush_every_line(config.flush_every_line)
            .timestamp_format(config.timestamp_format.clone())
            .build()
    }

    /// Spawn the consumer thread and begin accepting submissions.
    ///
    /// The lifecycle is one-shot: calling `start` on a pipeline that is
    /// already running, or that has been stopped, fails with
    /// [`PipelineError::AlreadyStarted`].
    pub fn start(&mut self) -> Result<()> {
        let sink = self.sink.take().ok_or(PipelineError::AlreadyStarted)?;
        if let Err(e) = self.queue.begin_running() {
            self.sink = Some(sink);
            return Err(e);
        }

        let queue = Arc::clone(&self.queue);
        let metrics = Arc::clone(&self.metrics);
        let flush_every_line = self.flush_every_line;
        self.worker = Some(thread::spawn(move || {
            consume(&queue, sink, &metrics, flush_every_line);
        }));
        Ok(())
    }

    /// Format and enqueue a message, waking the consumer.
    ///
    /// Never blocks on I/O; the only blocking is the brief queue lock hold.
    /// Messages below the configured minimum level are discarded. Returns
    /// [`PipelineError::Stopped`] once the pipeline has stopped.
    pub fn submit(&self, level: Level, message: impl Into<String>) -> Result<()> {
        if level < self.min_level {
            return Ok(());
        }

        let record = LogRecord::new(level, message.into());
        let line = self.formatter.format(&record);
        match self.queue.enqueue(line) {
            Ok(()) => {
                self.metrics.record_enqueued();
                Ok(())
            }
            Err(e) => {
                self.metrics.record_rejected();
                Err(e)
            }
        }
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.submit(Level::Info, message)
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) -> Result<()> {
        self.submit(Level::Warning, message)
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) -> Result<()> {
        self.submit(Level::Error, message)
    }

    /// Request a drain and block until the consumer has flushed every
    /// pending message and exited.
    ///
    /// Idempotent: stopping an already-stopped pipeline is a no-op.
    pub fn stop(&mut self) {
        self.queue.begin_draining();
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                eprintln!("[PIPELINE ERROR] consumer thread panicked during shutdown");
            }
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PipelineState {
        self.queue.state()
    }

    /// Number of lines queued but not yet handed to the sink.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Counters for pipeline health.
    pub fn metrics(&self) -> &PipelineMetrics {
        &self.metrics
    }
}

impl Drop for Pipeline {
    fn drop(&mut self) {
        // Drain remaining messages before the queue disappears.
        self.stop();
    }
}

/// Consumer loop body.
///
/// Each wakeup drains the whole queue, so lock acquisition is amortized over
/// a batch. A sink failure is reported on stderr and counted; it never takes
/// down the consumer, since a lost log line must not crash the host.
fn consume(
    queue: &LogQueue,
    mut sink: Box<dyn Sink>,
    metrics: &PipelineMetrics,
    flush_every_line: bool,
) {
    while let Some(batch) = queue.next_batch() {
        for line in &batch {
            match sink.write(line) {
                Ok(()) => {
                    metrics.record_written();
                }
                Err(e) => {
                    eprintln!("[PIPELINE ERROR] sink '{}' write failed: {}", sink.name(), e);
                    metrics.record_write_failure();
                    continue;
                }
            }
            if flush_every_line {
                if let Err(e) = sink.flush() {
                    eprintln!("[PIPELINE ERROR] sink '{}' flush failed: {}", sink.name(), e);
                    metrics.record_write_failure();
                }
            }
        }
        if !flush_every_line {
            if let Err(e) = sink.flush() {
                eprintln!("[PIPELINE ERROR] sink '{}' flush failed: {}", sink.name(), e);
                metrics.record_write_failure();
            }
        }
    }

    // Final flush before the thread exits.
    if let Err(e) = sink.flush() {
        eprintln!("[PIPELINE ERROR] sink '{}' flush failed: {}", sink.name(), e);
    }
}

/// Builder for constructing a Pipeline with a fluent API
///
/// # Example
/// ```
/// use log_pipeline::prelude::*;
///
/// let pipeline = Pipeline::builder()
///     .min_level(Level::Info)
///     .sink(ConsoleSink::new())
///     .flush_every_line(true)
///     .build()
///     .unwrap();
/// ```
pub struct PipelineBuilder {
    sink: Option<Box<dyn Sink>>,
    min_level: Level,
    flush_every_line: bool,
    timestamp_format: TimestampFormat,
}

impl PipelineBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            sink: None,
            min_level: Level::Info,
            flush_every_line: true,
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the sink the consumer writes to. Required.
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Flush the sink after every line (default) or once per drained batch.
    ///
    /// Per-line flushing trades throughput for the guarantee that a crash
    /// loses at most the single in-flight line.
    #[must_use = "builder methods return a new value"]
    pub fn flush_every_line(mut self, flush: bool) -> Self {
        self.flush_every_line = flush;
        self
    }

    /// Set the timestamp format used for rendered lines
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Build the Pipeline. Fails when no sink was configured.
    pub fn build(self) -> Result<Pipeline> {
        let sink = self
            .sink
            .ok_or_else(|| PipelineError::config("PipelineBuilder", "no sink configured"))?;

        Ok(Pipeline {
            queue: Arc::new(LogQueue::new()),
            sink: Some(sink),
            worker: None,
            formatter: Formatter::new().with_timestamp_format(self.timestamp_format),
            min_level: self.min_level,
            flush_every_line: self.flush_every_line,
            metrics: Arc::new(PipelineMetrics::new()),
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
