//! Error types for the log pipeline

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Sink could not be opened at pipeline construction
    #[error("failed to open sink '{path}': {message}")]
    SinkOpen { path: String, message: String },

    /// Pipeline already started
    #[error("pipeline already started")]
    AlreadyStarted,

    /// Message submitted after the pipeline stopped
    #[error("pipeline is stopped; message rejected")]
    Stopped,

    /// Invalid configuration with details
    #[error("invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Writer error (generic)
    #[error("writer error: {0}")]
    Writer(String),
}

impl PipelineError {
    /// Create a sink open error
    pub fn sink_open(path: impl Into<String>, message: impl Into<String>) -> Self {
        PipelineError::SinkOpen {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        PipelineError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        PipelineError::Writer(msg.into())
    }
}
