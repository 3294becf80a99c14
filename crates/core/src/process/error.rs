//! Error types for build process lifecycles.
//!
//! These are the errors that escape `start`, `poll` and `finish`. A process
//! that simply did not succeed reports a non-success
//! [`CompletionStatus`](bb_protocol::CompletionStatus) instead.

use thiserror::Error;

/// Errors raised while driving a build process.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// `poll` or `finish` was called before `start`.
    #[error("Process has not been started")]
    NotStarted,

    /// `start` was called a second time.
    #[error("Process has already been started")]
    AlreadyStarted,

    /// `finish` was called a second time.
    #[error("Process has already been finished")]
    AlreadyFinished,

    /// A synchronous block action returned an error.
    #[error("Action of block '{block}' failed: {source}")]
    Action {
        block: String,
        source: anyhow::Error,
    },

    /// A delegate factory failed to produce its process.
    #[error("Failed to create process for block '{block}': {source}")]
    Factory {
        block: String,
        source: anyhow::Error,
    },

    /// A command could not be spawned.
    #[error("Failed to spawn command '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// Waiting on a spawned command failed.
    #[error("Failed to wait for command '{command}': {source}")]
    Wait {
        command: String,
        source: std::io::Error,
    },
}

/// Type alias for Result with ProcessError.
pub type ProcessResult<T> = Result<T, ProcessError>;
