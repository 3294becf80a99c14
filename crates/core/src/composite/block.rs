//! Log blocks and the process decorator that opens and closes them.

use crate::logger::{CloseBlock, ProgressLogger};
use crate::process::{BuildProcess, ProcessError, ProcessPoll, ProcessResult};
use bb_protocol::ProcessState;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A named, described span of the progress log.
///
/// Converting from a string gives a block whose description equals its
/// name:
///
/// ```
/// use bb_core::composite::Block;
///
/// let plain = Block::from("compile");
/// assert_eq!(plain.description(), "compile");
///
/// let described = Block::new("compile").with_description("Compile sources");
/// assert_eq!(described.description(), "Compile sources");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    name: String,
    description: Option<String>,
}

impl Block {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Set the human readable text shown for the block.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The description, or the name when none was given.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.name)
    }
}

impl From<&str> for Block {
    fn from(name: &str) -> Self {
        Block::new(name)
    }
}

impl From<String> for Block {
    fn from(name: String) -> Self {
        Block::new(name)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Wraps a process in a log block.
///
/// The block is opened right before the inner process starts and closed
/// right before the inner process's own `finish`. When `start` or `poll`
/// fails, the block is closed before the error is returned.
pub struct BlockScopedProcess {
    block: Block,
    logger: Arc<dyn ProgressLogger>,
    inner: Box<dyn BuildProcess>,
    close: Option<CloseBlock>,
    state: ProcessState,
}

impl BlockScopedProcess {
    pub fn new(block: Block, logger: Arc<dyn ProgressLogger>, inner: Box<dyn BuildProcess>) -> Self {
        Self {
            block,
            logger,
            inner,
            close: None,
            state: ProcessState::NotStarted,
        }
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    fn close_block(&mut self) {
        if let Some(close) = self.close.take() {
            close();
        }
    }
}

impl BuildProcess for BlockScopedProcess {
    fn start(&mut self) -> ProcessResult<()> {
        if self.state != ProcessState::NotStarted {
            return Err(ProcessError::AlreadyStarted);
        }
        self.state = ProcessState::Running;
        debug!(block = %self.block, "Opening block");
        self.close = Some(
            self.logger
                .open_block(self.block.name(), self.block.description()),
        );

        if let Err(e) = self.inner.start() {
            self.close_block();
            return Err(e);
        }
        Ok(())
    }

    fn poll(&mut self) -> ProcessResult<ProcessPoll> {
        if self.state == ProcessState::NotStarted {
            return Err(ProcessError::NotStarted);
        }
        match self.inner.poll() {
            Ok(poll) => Ok(poll),
            Err(e) => {
                self.close_block();
                Err(e)
            }
        }
    }

    fn finish(&mut self) -> ProcessResult<()> {
        match self.state {
            ProcessState::NotStarted => Err(ProcessError::NotStarted),
            ProcessState::Finished => Err(ProcessError::AlreadyFinished),
            ProcessState::Running => {
                self.state = ProcessState::Finished;
                debug!(block = %self.block, "Closing block");
                self.close_block();
                self.inner.finish()
            }
        }
    }

    fn interrupt(&mut self) {
        self.inner.interrupt();
    }
}
