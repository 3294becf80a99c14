//! Two-phase builder for composite processes.

use crate::composite::block::{Block, BlockScopedProcess};
use crate::composite::CompositeProcess;
use crate::logger::ProgressLogger;
use crate::process::{ActionProcess, BuildProcess, DelegatingProcess};
use std::sync::Arc;

/// Collects block-wrapped processes in execution order.
///
/// Every appended process is wrapped in its own log block. Call
/// [`build`](Self::build) to freeze the sequence into a
/// [`CompositeProcess`].
///
/// # Example
///
/// ```
/// use bb_core::composite::{Block, CompositeProcessBuilder};
/// use bb_core::logger::TracingLogger;
/// use bb_core::process::{BuildProcess, CommandProcess};
/// use std::sync::Arc;
///
/// let mut builder = CompositeProcessBuilder::new(Arc::new(TracingLogger::new()));
/// builder
///     .execute("prepare", || Ok(()))
///     .delegate(Block::new("test").with_description("Run tests"), || {
///         Ok(Box::new(CommandProcess::new("npm test")) as Box<dyn BuildProcess>)
///     });
/// let composite = builder.build();
/// assert_eq!(composite.len(), 2);
/// ```
pub struct CompositeProcessBuilder {
    logger: Arc<dyn ProgressLogger>,
    entries: Vec<BlockScopedProcess>,
}

impl CompositeProcessBuilder {
    /// Create an empty builder logging blocks to `logger`.
    pub fn new(logger: Arc<dyn ProgressLogger>) -> Self {
        Self {
            logger,
            entries: Vec::new(),
        }
    }

    /// Append a synchronous action.
    ///
    /// The action runs on the entry's first poll and the entry reports
    /// success unless the action returns an error, which is propagated.
    pub fn execute<F>(&mut self, block: impl Into<Block>, action: F) -> &mut Self
    where
        F: FnOnce() -> anyhow::Result<()> + Send + 'static,
    {
        let block = block.into();
        let process = ActionProcess::new(block.name(), action);
        self.push(block, process)
    }

    /// Append a process produced by `factory` when the entry starts.
    ///
    /// The factory is not called before the composite reaches this entry;
    /// the block is already open when it runs.
    pub fn delegate<F>(&mut self, block: impl Into<Block>, factory: F) -> &mut Self
    where
        F: FnOnce() -> anyhow::Result<Box<dyn BuildProcess>> + Send + 'static,
    {
        let block = block.into();
        let process = DelegatingProcess::new(block.name(), factory);
        self.push(block, process)
    }

    /// Append an existing process wrapped in `block`.
    pub fn push<P>(&mut self, block: impl Into<Block>, process: P) -> &mut Self
    where
        P: BuildProcess + 'static,
    {
        let scoped = BlockScopedProcess::new(block.into(), self.logger.clone(), Box::new(process));
        self.entries.push(scoped);
        self
    }

    /// Number of entries appended so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the entries into a composite process.
    pub fn build(self) -> CompositeProcess {
        CompositeProcess::new(self.entries)
    }
}
