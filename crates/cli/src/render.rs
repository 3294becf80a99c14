//! Rendering of progress log events for the terminal.

use bb_protocol::ipc::Event;
use chrono::{DateTime, Utc};
use colored::Colorize;
use std::collections::HashMap;
use tokio::sync::mpsc::UnboundedReceiver;

/// Turns block events into printable lines.
///
/// Text mode indents nested output under the open block and prints the
/// elapsed time when a block closes. JSON mode prints one event per line.
#[derive(Default)]
pub struct Renderer {
    json: bool,
    opened: HashMap<String, DateTime<Utc>>,
    depth: usize,
}

impl Renderer {
    pub fn new(json: bool) -> Self {
        Self {
            json,
            ..Self::default()
        }
    }

    pub fn render(&mut self, event: &Event) -> String {
        if self.json {
            return serde_json::to_string(event).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"));
        }

        match event {
            Event::BlockOpened {
                name,
                description,
                timestamp,
            } => {
                let line = format!("{}{} {}", self.indent(), ">>".cyan().bold(), description.bold());
                self.opened.insert(name.clone(), *timestamp);
                self.depth += 1;
                line
            }
            Event::BlockClosed { name, timestamp } => {
                self.depth = self.depth.saturating_sub(1);
                let elapsed = self
                    .opened
                    .remove(name)
                    .map(|opened| (*timestamp - opened).num_milliseconds())
                    .unwrap_or_default();
                format!(
                    "{}{} {} {}",
                    self.indent(),
                    "<<".cyan(),
                    name,
                    format!("({elapsed} ms)").dimmed()
                )
            }
            Event::Message { text, .. } => format!("{}{}", self.indent(), text),
        }
    }

    fn indent(&self) -> String {
        "  ".repeat(self.depth)
    }
}

/// Print events until every sender has been dropped.
pub async fn print_events(mut rx: UnboundedReceiver<Event>, json: bool) {
    let mut renderer = Renderer::new(json);
    while let Some(event) = rx.recv().await {
        println!("{}", renderer.render(&event));
    }
}
