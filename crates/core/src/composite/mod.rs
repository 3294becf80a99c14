//! Composite build processes.
//!
//! A [`CompositeProcess`] runs an ordered list of block-wrapped processes one
//! after another and reports a single completion status. Composites are
//! assembled with [`CompositeProcessBuilder`], either directly or through
//! the [`composite_build_process`] entry point.

pub mod block;
pub mod builder;

pub use block::{Block, BlockScopedProcess};
pub use builder::CompositeProcessBuilder;

use crate::logger::ProgressLogger;
use crate::process::{BuildProcess, ProcessError, ProcessPoll, ProcessResult};
use bb_protocol::CompletionStatus;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Build a composite process by running `configure` against a fresh builder.
///
/// # Example
///
/// ```
/// use bb_core::composite::composite_build_process;
/// use bb_core::logger::TracingLogger;
/// use std::sync::Arc;
///
/// let process = composite_build_process(Arc::new(TracingLogger::new()), |builder| {
///     builder.execute("compile", || Ok(()));
///     builder.execute("package", || Ok(()));
/// });
/// assert_eq!(process.block_names(), vec!["compile", "package"]);
/// ```
pub fn composite_build_process<F>(logger: Arc<dyn ProgressLogger>, configure: F) -> CompositeProcess
where
    F: FnOnce(&mut CompositeProcessBuilder),
{
    let mut builder = CompositeProcessBuilder::new(logger);
    configure(&mut builder);
    builder.build()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompositeState {
    NotStarted,
    Running { index: usize },
    Finished(CompletionStatus),
}

/// Runs its entries strictly in insertion order.
///
/// Entry `i + 1` is started only after entry `i` reported success and was
/// finished. The first non-success status stops the sequence and becomes
/// the composite's status. An error raised by an entry also stops it; the
/// composite then reports [`CompletionStatus::Failed`].
pub struct CompositeProcess {
    entries: Vec<BlockScopedProcess>,
    state: CompositeState,
    interrupted: bool,
}

impl CompositeProcess {
    fn new(entries: Vec<BlockScopedProcess>) -> Self {
        Self {
            entries,
            state: CompositeState::NotStarted,
            interrupted: false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Names of the blocks in execution order.
    pub fn block_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.block().name()).collect()
    }

    /// Index of the entry currently running, if any.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            CompositeState::Running { index } if index < self.entries.len() => Some(index),
            _ => None,
        }
    }

    /// Final status once the composite has completed.
    pub fn status(&self) -> Option<CompletionStatus> {
        match self.state {
            CompositeState::Finished(status) => Some(status),
            _ => None,
        }
    }

    fn complete(&mut self, status: CompletionStatus) -> ProcessPoll {
        info!(%status, entries = self.entries.len(), "Composite process completed");
        self.state = CompositeState::Finished(status);
        ProcessPoll::Ready(status)
    }

    fn start_entry(&mut self, index: usize) -> ProcessResult<()> {
        self.state = CompositeState::Running { index };
        if let Some(entry) = self.entries.get_mut(index) {
            debug!(index, block = %entry.block(), "Starting entry");
            entry.start()?;
        }
        Ok(())
    }

    fn advance(&mut self, index: usize) -> ProcessResult<ProcessPoll> {
        let Some(entry) = self.entries.get_mut(index) else {
            return Ok(self.complete(CompletionStatus::Success));
        };

        let status = match entry.poll()? {
            ProcessPoll::Pending => return Ok(ProcessPoll::Pending),
            ProcessPoll::Ready(status) => status,
        };

        debug!(index, block = %entry.block(), %status, "Entry completed");
        entry.finish()?;

        if !status.is_success() {
            return Ok(self.complete(status));
        }
        if self.interrupted {
            return Ok(self.complete(CompletionStatus::Interrupted));
        }

        let next = index + 1;
        if next == self.entries.len() {
            return Ok(self.complete(CompletionStatus::Success));
        }
        self.start_entry(next)?;
        Ok(ProcessPoll::Pending)
    }

    /// An error from an entry ends the sequence: later polls report `Failed`.
    fn fail_on_error<T>(&mut self, result: ProcessResult<T>) -> ProcessResult<T> {
        if let Err(e) = &result {
            warn!(error = %e, "Entry raised an error, stopping composite process");
            self.state = CompositeState::Finished(CompletionStatus::Failed);
        }
        result
    }
}

impl BuildProcess for CompositeProcess {
    fn start(&mut self) -> ProcessResult<()> {
        if self.state != CompositeState::NotStarted {
            return Err(ProcessError::AlreadyStarted);
        }
        debug!(entries = self.entries.len(), "Starting composite process");
        let result = self.start_entry(0);
        self.fail_on_error(result)
    }

    fn poll(&mut self) -> ProcessResult<ProcessPoll> {
        let index = match self.state {
            CompositeState::NotStarted => return Err(ProcessError::NotStarted),
            CompositeState::Finished(status) => return Ok(ProcessPoll::Ready(status)),
            CompositeState::Running { index } => index,
        };

        let result = self.advance(index);
        self.fail_on_error(result)
    }

    fn interrupt(&mut self) {
        self.interrupted = true;
        if let CompositeState::Running { index } = self.state {
            if let Some(entry) = self.entries.get_mut(index) {
                entry.interrupt();
            }
        }
    }
}
