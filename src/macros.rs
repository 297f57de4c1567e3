//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for submitting messages with
//! automatic string formatting, similar to `println!` and `format!`. Each
//! macro expands to a [`Pipeline::submit`](crate::Pipeline::submit) call and
//! yields its `Result`, so rejected submissions stay caller-visible.
//!
//! # Examples
//!
//! ```
//! use log_pipeline::prelude::*;
//! use log_pipeline::info;
//!
//! let mut pipeline = Pipeline::builder()
//!     .sink(ConsoleSink::new())
//!     .build()
//!     .unwrap();
//! pipeline.start().unwrap();
//!
//! // Basic logging
//! info!(pipeline, "Server started").unwrap();
//!
//! // With format arguments
//! let port = 8080;
//! info!(pipeline, "Server listening on port {}", port).unwrap();
//!
//! pipeline.stop();
//! ```

/// Submit a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use log_pipeline::prelude::*;
/// # let mut pipeline = Pipeline::builder().sink(ConsoleSink::new()).build().unwrap();
/// # pipeline.start().unwrap();
/// use log_pipeline::log;
/// log!(pipeline, Level::Info, "Simple message").unwrap();
/// log!(pipeline, Level::Error, "Error code: {}", 500).unwrap();
/// # pipeline.stop();
/// ```
#[macro_export]
macro_rules! log {
    ($pipeline:expr, $level:expr, $($arg:tt)+) => {
        $pipeline.submit($level, format!($($arg)+))
    };
}

/// Submit an info-level message.
///
/// # Examples
///
/// ```
/// # use log_pipeline::prelude::*;
/// # let mut pipeline = Pipeline::builder().sink(ConsoleSink::new()).build().unwrap();
/// # pipeline.start().unwrap();
/// use log_pipeline::info;
/// info!(pipeline, "Application started").unwrap();
/// info!(pipeline, "Processing {} items", 100).unwrap();
/// # pipeline.stop();
/// ```
#[macro_export]
macro_rules! info {
    ($pipeline:expr, $($arg:tt)+) => {
        $crate::log!($pipeline, $crate::Level::Info, $($arg)+)
    };
}

/// Submit a warning-level message.
///
/// # Examples
///
/// ```
/// # use log_pipeline::prelude::*;
/// # let mut pipeline = Pipeline::builder().sink(ConsoleSink::new()).build().unwrap();
/// # pipeline.start().unwrap();
/// use log_pipeline::warning;
/// warning!(pipeline, "Low disk space").unwrap();
/// warning!(pipeline, "Retry attempt {} of {}", 3, 5).unwrap();
/// # pipeline.stop();
/// ```
#[macro_export]
macro_rules! warning {
    ($pipeline:expr, $($arg:tt)+) => {
        $crate::log!($pipeline, $crate::Level::Warning, $($arg)+)
    };
}

/// Submit an error-level message.
///
/// # Examples
///
/// ```
/// # use log_pipeline::prelude::*;
/// # let mut pipeline = Pipeline::builder().sink(ConsoleSink::new()).build().unwrap();
/// # pipeline.start().unwrap();
/// use log_pipeline::error;
/// error!(pipeline, "Failed to connect to database").unwrap();
/// error!(pipeline, "Error code: {}, message: {}", 500, "Internal error").unwrap();
/// # pipeline.stop();
/// ```
#[macro_export]
macro_rules! error {
    ($pipeline:expr, $($arg:tt)+) => {
        $crate::log!($pipeline, $crate::Level::Error, $($arg)+)
    };
}
