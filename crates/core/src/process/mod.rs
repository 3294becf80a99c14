//! Build process abstraction.
//!
//! A [`BuildProcess`] is a unit of work driven by a host through three calls:
//!
//! 1. `start` once,
//! 2. `poll` repeatedly until it returns [`ProcessPoll::Ready`],
//! 3. `finish` once after completion has been observed.
//!
//! Processes never block inside `poll`; a process that is still working
//! returns [`ProcessPoll::Pending`] and the host decides when to ask again.

pub mod action;
pub mod command;
pub mod delegating;
pub mod error;

use bb_protocol::CompletionStatus;

pub use action::ActionProcess;
pub use command::CommandProcess;
pub use delegating::DelegatingProcess;
pub use error::{ProcessError, ProcessResult};

/// Result of a single poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessPoll {
    /// Still running; poll again later.
    Pending,
    /// Completed with the given status; `finish` may now be called.
    Ready(CompletionStatus),
}

/// A schedulable unit of build work.
///
/// Contract for callers:
/// - `start` is called at most once.
/// - `poll` is only called after `start` and until it returns `Ready`.
/// - `finish` is called exactly once, after `Ready` was observed.
pub trait BuildProcess: Send {
    /// Begin the work. Must not block.
    fn start(&mut self) -> ProcessResult<()>;

    /// Check for completion, doing at most a bounded amount of work.
    fn poll(&mut self) -> ProcessResult<ProcessPoll>;

    /// Release whatever the process holds after completion.
    fn finish(&mut self) -> ProcessResult<()> {
        Ok(())
    }

    /// Ask the process to stop early.
    ///
    /// The process is still polled to completion afterwards and is expected
    /// to report [`CompletionStatus::Interrupted`].
    fn interrupt(&mut self) {}
}

impl<P: BuildProcess + ?Sized> BuildProcess for Box<P> {
    fn start(&mut self) -> ProcessResult<()> {
        (**self).start()
    }

    fn poll(&mut self) -> ProcessResult<ProcessPoll> {
        (**self).poll()
    }

    fn finish(&mut self) -> ProcessResult<()> {
        (**self).finish()
    }

    fn interrupt(&mut self) {
        (**self).interrupt()
    }
}
