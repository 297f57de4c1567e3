//! Sink trait for log output destinations

use super::error::Result;

/// Destination for formatted log lines.
///
/// The sink is owned by the consumer thread once the pipeline starts, so
/// implementations only need to be `Send`. `write` receives one complete,
/// newline-free line per call and is responsible for terminating it.
pub trait Sink: Send {
    fn write(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
