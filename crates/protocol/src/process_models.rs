//! Build process outcome and lifecycle models.
//!
//! This module defines the status a build process reports when it finishes
//! and the coarse lifecycle state every process moves through.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome reported by a build process once it has finished.
///
/// A composite process treats anything other than `Success` as a reason to
/// stop before starting the remaining blocks.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompletionStatus {
    /// The process finished its work successfully.
    Success,

    /// The process finished but reported a failure.
    Failed,

    /// The process was stopped through an interrupt request.
    Interrupted,
}

impl CompletionStatus {
    /// Returns `true` only for [`CompletionStatus::Success`].
    pub fn is_success(self) -> bool {
        matches!(self, CompletionStatus::Success)
    }
}

impl fmt::Display for CompletionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CompletionStatus::Success => "success",
            CompletionStatus::Failed => "failed",
            CompletionStatus::Interrupted => "interrupted",
        };
        f.write_str(label)
    }
}

/// Lifecycle state of a build process.
///
/// The state only moves forward:
/// NotStarted -> Running -> Finished
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessState {
    /// `start` has not been called yet.
    #[default]
    NotStarted,

    /// Started and waiting to be polled to completion.
    Running,

    /// Completion has been observed.
    Finished,
}
