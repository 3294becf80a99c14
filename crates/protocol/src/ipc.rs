//! Progress log events.
//!
//! This module defines the messages a channel-backed progress logger sends
//! to whoever renders the build log (the CLI, a test, a remote sink).
//!
//! Events are serialized as tagged enums so that they can be written as
//! JSON lines:
//! ```json
//! {
//!   "type": "blockOpened",
//!   "payload": {
//!     "name": "compile",
//!     "description": "Compile sources",
//!     "timestamp": "2026-10-18T10:00:00Z"
//!   }
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A block boundary written to the progress log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Event {
    /// A block has been opened, right before its process starts.
    BlockOpened {
        /// Machine identifier of the block.
        name: String,
        /// Human readable text shown for the block.
        description: String,
        timestamp: DateTime<Utc>,
    },

    /// A block has been closed after its process completed.
    BlockClosed {
        name: String,
        timestamp: DateTime<Utc>,
    },

    /// A plain message written inside the currently open block.
    Message {
        text: String,
        timestamp: DateTime<Utc>,
    },
}

impl Event {
    /// Create a `BlockOpened` event stamped with the current time.
    pub fn block_opened(name: impl Into<String>, description: impl Into<String>) -> Self {
        Event::BlockOpened {
            name: name.into(),
            description: description.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a `BlockClosed` event stamped with the current time.
    pub fn block_closed(name: impl Into<String>) -> Self {
        Event::BlockClosed {
            name: name.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a `Message` event stamped with the current time.
    pub fn message(text: impl Into<String>) -> Self {
        Event::Message {
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// When the event was produced.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Event::BlockOpened { timestamp, .. }
            | Event::BlockClosed { timestamp, .. }
            | Event::Message { timestamp, .. } => *timestamp,
        }
    }
}
