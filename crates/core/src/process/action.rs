//! Process wrapping a synchronous action.

use crate::process::{BuildProcess, ProcessError, ProcessPoll, ProcessResult};
use bb_protocol::{CompletionStatus, ProcessState};

type Action = Box<dyn FnOnce() -> anyhow::Result<()> + Send>;

/// Runs a closure to completion on its first poll.
///
/// The action reports success whenever it returns `Ok(())`. An `Err`
/// escapes `poll` as [`ProcessError::Action`]. Any later poll reports
/// [`CompletionStatus::Failed`].
pub struct ActionProcess {
    block: String,
    action: Option<Action>,
    state: ProcessState,
    status: CompletionStatus,
}

impl ActionProcess {
    /// Create a process for `action`. `block` is only used in error messages.
    pub fn new<F>(block: impl Into<String>, action: F) -> Self
    where
        F: FnOnce() -> anyhow::Result<()> + Send + 'static,
    {
        Self {
            block: block.into(),
            action: Some(Box::new(action)),
            state: ProcessState::NotStarted,
            status: CompletionStatus::Success,
        }
    }
}

impl BuildProcess for ActionProcess {
    fn start(&mut self) -> ProcessResult<()> {
        if self.state != ProcessState::NotStarted {
            return Err(ProcessError::AlreadyStarted);
        }
        self.state = ProcessState::Running;
        Ok(())
    }

    fn poll(&mut self) -> ProcessResult<ProcessPoll> {
        match self.state {
            ProcessState::NotStarted => Err(ProcessError::NotStarted),
            ProcessState::Finished => Ok(ProcessPoll::Ready(self.status)),
            ProcessState::Running => {
                self.state = ProcessState::Finished;
                if let Some(action) = self.action.take() {
                    if let Err(source) = action() {
                        self.status = CompletionStatus::Failed;
                        return Err(ProcessError::Action {
                            block: self.block.clone(),
                            source,
                        });
                    }
                }
                Ok(ProcessPoll::Ready(self.status))
            }
        }
    }
}
