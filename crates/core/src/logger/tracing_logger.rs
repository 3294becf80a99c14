//! Progress logger writing block boundaries as tracing events.

use crate::logger::{CloseBlock, ProgressLogger};
use std::time::Instant;
use tracing::info;

/// Writes block boundaries to the process-wide tracing subscriber.
///
/// Useful when the build log is simply the agent's own diagnostic output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl ProgressLogger for TracingLogger {
    fn open_block(&self, name: &str, description: &str) -> CloseBlock {
        info!(block = %name, description = %description, "Block opened");

        let name = name.to_string();
        let opened_at = Instant::now();
        Box::new(move || {
            let elapsed_ms = u64::try_from(opened_at.elapsed().as_millis()).unwrap_or(u64::MAX);
            info!(block = %name, elapsed_ms, "Block closed");
        })
    }

    fn message(&self, text: &str) {
        info!("{}", text);
    }
}
