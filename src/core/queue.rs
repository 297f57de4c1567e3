//! Shared log queue and pipeline state
//!
//! The queue is an unbounded FIFO of formatted lines guarded by a single
//! mutex. The pipeline state lives under the same mutex so that a producer
//! observing `Running` and the consumer observing a stop request can never
//! race: every state transition and every queue access is serialized by one
//! lock. A single condition variable carries both "item available" and
//! "shutdown requested" wakeups; the consumer's wait predicate checks both.

use super::error::{PipelineError, Result};
use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;

/// Lifecycle state of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PipelineState {
    /// No consumer running; submissions are rejected.
    #[default]
    Stopped,
    /// Consumer running; submissions are accepted.
    Running,
    /// Stop requested; the consumer drains remaining items and exits.
    Draining,
}

struct QueueInner {
    items: VecDeque<String>,
    state: PipelineState,
}

/// Unbounded FIFO of formatted lines, shared between producers and the
/// single consumer thread.
pub struct LogQueue {
    inner: Mutex<QueueInner>,
    cond: Condvar,
}

impl LogQueue {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(QueueInner {
                items: VecDeque::new(),
                state: PipelineState::Stopped,
            }),
            cond: Condvar::new(),
        }
    }

    /// Append a line to the tail and wake one waiter.
    ///
    /// Accepted while the pipeline is `Running` or `Draining`; rejected with
    /// [`PipelineError::Stopped`] once the consumer has fully stopped. The
    /// state check and the append are atomic under the queue lock.
    pub fn enqueue(&self, line: String) -> Result<()> {
        let mut inner = self.inner.lock();
        if inner.state == PipelineState::Stopped {
            return Err(PipelineError::Stopped);
        }
        inner.items.push_back(line);
        drop(inner);
        self.cond.notify_one();
        Ok(())
    }

    /// Atomically remove and return every currently queued line.
    pub fn drain_all(&self) -> Vec<String> {
        let mut inner = self.inner.lock();
        inner.items.drain(..).collect()
    }

    /// Consumer-side blocking wait.
    ///
    /// Suspends until the queue is non-empty or the state leaves `Running`.
    /// Returns `Some(batch)` with everything queued, or `None` when the
    /// consumer must exit: the state is no longer `Running` and a drain
    /// attempt found nothing. The exit check re-tests state and emptiness
    /// under the wait predicate's lock, and flips the state to `Stopped`
    /// before releasing it, so a late `enqueue` is rejected rather than
    /// silently lost.
    pub fn next_batch(&self) -> Option<Vec<String>> {
        let mut inner = self.inner.lock();
        loop {
            if !inner.items.is_empty() {
                return Some(inner.items.drain(..).collect());
            }
            if inner.state != PipelineState::Running {
                inner.state = PipelineState::Stopped;
                return None;
            }
            self.cond.wait(&mut inner);
        }
    }

    /// `Stopped -> Running` transition. Fails if already started.
    pub fn begin_running(&self) -> Result<()> {
        let mut inner = self.inner.lock();
        if inner.state != PipelineState::Stopped {
            return Err(PipelineError::AlreadyStarted);
        }
        inner.state = PipelineState::Running;
        Ok(())
    }

    /// `Running -> Draining` transition; wakes the consumer.
    ///
    /// Returns `false` when the pipeline was not running (already draining
    /// or stopped), making repeated stop requests harmless.
    pub fn begin_draining(&self) -> bool {
        let mut inner = self.inner.lock();
        if inner.state != PipelineState::Running {
            return false;
        }
        inner.state = PipelineState::Draining;
        drop(inner);
        self.cond.notify_all();
        true
    }

    pub fn state(&self) -> PipelineState {
        self.inner.lock().state
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().items.len()
    }
}

impl Default for LogQueue {
    fn default() -> Self {
        Self::new()
    }
}
