//! Shared journal of logger and process calls.

#![allow(dead_code)]

use bb_core::logger::{CloseBlock, ProgressLogger};
use bb_core::process::{BuildProcess, ProcessPoll, ProcessResult};
use bb_protocol::CompletionStatus;
use std::sync::{Arc, Mutex};

/// Ordered record of everything that happened during a test run.
///
/// Entries look like `open:compile`, `start:compile`, `poll:compile`,
/// `finish:compile`, `close:compile`.
#[derive(Clone, Default)]
pub struct Journal {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, entry: impl Into<String>) {
        self.entries.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    /// Number of entries equal to `entry`.
    #[allow(dead_code)]
    pub fn count(&self, entry: &str) -> usize {
        self.entries().iter().filter(|e| *e == entry).count()
    }
}

/// Progress logger writing block boundaries into a [`Journal`].
pub struct RecordingLogger {
    journal: Journal,
    descriptions: Mutex<Vec<(String, String)>>,
}

impl RecordingLogger {
    pub fn new(journal: Journal) -> Arc<Self> {
        Arc::new(Self {
            journal,
            descriptions: Mutex::new(Vec::new()),
        })
    }

    /// `(name, description)` pairs of every opened block.
    #[allow(dead_code)]
    pub fn descriptions(&self) -> Vec<(String, String)> {
        self.descriptions.lock().unwrap().clone()
    }
}

impl ProgressLogger for RecordingLogger {
    fn open_block(&self, name: &str, description: &str) -> CloseBlock {
        self.journal.record(format!("open:{name}"));
        self.descriptions
            .lock()
            .unwrap()
            .push((name.to_string(), description.to_string()));

        let journal = self.journal.clone();
        let name = name.to_string();
        Box::new(move || journal.record(format!("close:{name}")))
    }

    fn message(&self, text: &str) {
        self.journal.record(format!("message:{text}"));
    }
}

/// A process needing a fixed number of polls before it completes.
pub struct ScriptedProcess {
    name: String,
    journal: Journal,
    polls_needed: u32,
    polls: u32,
    status: CompletionStatus,
}

impl ScriptedProcess {
    /// Completes with `Success` on poll number `polls_needed`.
    pub fn succeeding(name: &str, journal: &Journal, polls_needed: u32) -> Self {
        Self::with_status(name, journal, polls_needed, CompletionStatus::Success)
    }

    pub fn with_status(name: &str, journal: &Journal, polls_needed: u32, status: CompletionStatus) -> Self {
        Self {
            name: name.to_string(),
            journal: journal.clone(),
            polls_needed: polls_needed.max(1),
            polls: 0,
            status,
        }
    }

    pub fn boxed(self) -> Box<dyn BuildProcess> {
        Box::new(self)
    }
}

impl BuildProcess for ScriptedProcess {
    fn start(&mut self) -> ProcessResult<()> {
        self.journal.record(format!("start:{}", self.name));
        Ok(())
    }

    fn poll(&mut self) -> ProcessResult<ProcessPoll> {
        self.journal.record(format!("poll:{}", self.name));
        self.polls += 1;
        if self.polls >= self.polls_needed {
            Ok(ProcessPoll::Ready(self.status))
        } else {
            Ok(ProcessPoll::Pending)
        }
    }

    fn finish(&mut self) -> ProcessResult<()> {
        self.journal.record(format!("finish:{}", self.name));
        Ok(())
    }

    fn interrupt(&mut self) {
        self.journal.record(format!("interrupt:{}", self.name));
        self.status = CompletionStatus::Interrupted;
        self.polls_needed = self.polls + 1;
    }
}

/// Poll `process` until it is ready, returning the status and poll count.
pub fn poll_to_completion(process: &mut dyn BuildProcess) -> (CompletionStatus, u32) {
    let mut polls = 0;
    loop {
        polls += 1;
        if let ProcessPoll::Ready(status) = process.poll().unwrap() {
            return (status, polls);
        }
        assert!(polls < 10_000, "process never completed");
    }
}
