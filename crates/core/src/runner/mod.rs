//! Host-side driver for build processes.
//!
//! The [`ProcessRunner`] plays the role of the agent scheduler: it starts a
//! process, polls it on a fixed interval until it reports completion, and
//! finishes it.

use crate::process::{BuildProcess, ProcessPoll, ProcessResult};
use bb_protocol::config_models::RunnerConfig;
use bb_protocol::CompletionStatus;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Drives a [`BuildProcess`] through start, polling and finish.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    poll_interval: Duration,
}

impl ProcessRunner {
    /// Create a runner polling every `poll_interval`.
    pub fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }

    /// Create a runner from the `[runner]` section of `bb.toml`.
    pub fn from_config(config: &RunnerConfig) -> Self {
        Self::new(Duration::from_millis(config.poll_interval_ms))
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Run `process` to completion and return its status.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `start`, `poll` or `finish`.
    pub async fn run<P>(&self, process: &mut P) -> ProcessResult<CompletionStatus>
    where
        P: BuildProcess + ?Sized,
    {
        self.run_until(process, std::future::pending::<()>()).await
    }

    /// Run `process`, interrupting it once `shutdown` resolves.
    ///
    /// After the interrupt the process is still polled until it reports
    /// completion, so its blocks are closed and its status is returned.
    pub async fn run_until<P, S>(&self, process: &mut P, shutdown: S) -> ProcessResult<CompletionStatus>
    where
        P: BuildProcess + ?Sized,
        S: Future<Output = ()>,
    {
        tokio::pin!(shutdown);
        let mut interrupted = false;

        process.start()?;
        let mut polls: u64 = 0;
        loop {
            polls += 1;
            if let ProcessPoll::Ready(status) = process.poll()? {
                debug!(polls, %status, "Process reported completion");
                process.finish()?;
                return Ok(status);
            }

            if interrupted {
                tokio::time::sleep(self.poll_interval).await;
                continue;
            }

            tokio::select! {
                _ = tokio::time::sleep(self.poll_interval) => {}
                _ = &mut shutdown => {
                    warn!(polls, "Shutdown requested, interrupting process");
                    interrupted = true;
                    process.interrupt();
                }
            }
        }
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::from_config(&RunnerConfig::default())
    }
}
