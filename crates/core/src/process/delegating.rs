//! Process that builds its inner process lazily at start time.

use crate::process::{BuildProcess, ProcessError, ProcessPoll, ProcessResult};
use bb_protocol::ProcessState;
use tracing::debug;

type Factory = Box<dyn FnOnce() -> anyhow::Result<Box<dyn BuildProcess>> + Send>;

/// Defers construction of a process until the moment it is started.
///
/// The factory is invoked exactly once, inside `start`. Every later call is
/// forwarded to the produced process.
pub struct DelegatingProcess {
    block: String,
    factory: Option<Factory>,
    inner: Option<Box<dyn BuildProcess>>,
    state: ProcessState,
}

impl DelegatingProcess {
    /// Create a delegating process. `block` is only used in error messages.
    pub fn new<F>(block: impl Into<String>, factory: F) -> Self
    where
        F: FnOnce() -> anyhow::Result<Box<dyn BuildProcess>> + Send + 'static,
    {
        Self {
            block: block.into(),
            factory: Some(Box::new(factory)),
            inner: None,
            state: ProcessState::NotStarted,
        }
    }

    fn inner_mut(&mut self) -> ProcessResult<&mut Box<dyn BuildProcess>> {
        self.inner.as_mut().ok_or(ProcessError::NotStarted)
    }
}

impl BuildProcess for DelegatingProcess {
    fn start(&mut self) -> ProcessResult<()> {
        let factory = self.factory.take().ok_or(ProcessError::AlreadyStarted)?;
        self.state = ProcessState::Running;

        debug!(block = %self.block, "Creating delegated process");
        let mut inner = factory().map_err(|source| ProcessError::Factory {
            block: self.block.clone(),
            source,
        })?;

        inner.start()?;
        self.inner = Some(inner);
        Ok(())
    }

    fn poll(&mut self) -> ProcessResult<ProcessPoll> {
        self.inner_mut()?.poll()
    }

    fn finish(&mut self) -> ProcessResult<()> {
        match self.state {
            ProcessState::NotStarted => Err(ProcessError::NotStarted),
            ProcessState::Finished => Err(ProcessError::AlreadyFinished),
            ProcessState::Running => {
                self.state = ProcessState::Finished;
                self.inner_mut()?.finish()
            }
        }
    }

    fn interrupt(&mut self) {
        if let Some(inner) = self.inner.as_mut() {
            inner.interrupt();
        }
    }
}
