//! Progress logging sinks.
//!
//! A [`ProgressLogger`] is the host's build log. The core only needs one
//! capability from it: open a named block and get back the action that
//! closes it again.

pub mod channel;
pub mod tracing_logger;

pub use channel::ChannelLogger;
pub use tracing_logger::TracingLogger;

/// Closes a block previously opened with [`ProgressLogger::open_block`].
pub type CloseBlock = Box<dyn FnOnce() + Send>;

/// A build log able to bracket work in named blocks.
pub trait ProgressLogger: Send + Sync {
    /// Open a block and return the action that closes it.
    fn open_block(&self, name: &str, description: &str) -> CloseBlock;

    /// Write a plain message into the log.
    fn message(&self, text: &str);
}
