//! Progress logger publishing block events over a channel.

use crate::logger::{CloseBlock, ProgressLogger};
use bb_protocol::ipc::Event;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Sends [`Event`]s to a receiver that renders the build log.
///
/// The channel is unbounded so that logging never blocks a poll. Events sent
/// after the receiver was dropped are discarded.
#[derive(Debug, Clone)]
pub struct ChannelLogger {
    events_tx: UnboundedSender<Event>,
}

impl ChannelLogger {
    /// Create a logger sending into `events_tx`.
    pub fn new(events_tx: UnboundedSender<Event>) -> Self {
        Self { events_tx }
    }

    /// Create a logger together with the receiving end of its channel.
    pub fn channel() -> (Self, UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl ProgressLogger for ChannelLogger {
    fn open_block(&self, name: &str, description: &str) -> CloseBlock {
        let _ = self.events_tx.send(Event::block_opened(name, description));

        let events_tx = self.events_tx.clone();
        let name = name.to_string();
        Box::new(move || {
            let _ = events_tx.send(Event::block_closed(name));
        })
    }

    fn message(&self, text: &str) {
        let _ = self.events_tx.send(Event::message(text));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_events_are_sent_in_order() {
        let (logger, mut rx) = ChannelLogger::channel();

        let close = logger.open_block("compile", "Compile sources");
        logger.message("cc main.c");
        close();

        assert!(matches!(
            rx.try_recv().unwrap(),
            Event::BlockOpened { name, description, .. }
                if name == "compile" && description == "Compile sources"
        ));
        assert!(matches!(
            rx.try_recv().unwrap(),
            Event::Message { text, .. } if text == "cc main.c"
        ));
        assert!(matches!(
            rx.try_recv().unwrap(),
            Event::BlockClosed { name, .. } if name == "compile"
        ));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_receiver_is_ignored() {
        let (logger, rx) = ChannelLogger::channel();
        drop(rx);

        let close = logger.open_block("orphan", "orphan");
        close();
    }
}
