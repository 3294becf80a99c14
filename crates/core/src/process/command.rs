//! Shell command executed as a build process.
//!
//! The command is spawned on `start` and checked with a non-blocking
//! `try_wait` on every poll, so a long running command never blocks the
//! host between polls.

use crate::process::{BuildProcess, ProcessError, ProcessPoll, ProcessResult};
use bb_protocol::CompletionStatus;
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus};
use tracing::{debug, warn};

/// Runs a command line through the platform shell.
///
/// Exit code 0 reports [`CompletionStatus::Success`], any other exit reports
/// [`CompletionStatus::Failed`]. A command killed through `interrupt`
/// reports [`CompletionStatus::Interrupted`]. Dropping the process before
/// the command exited kills and reaps it.
pub struct CommandProcess {
    command_line: String,
    working_dir: Option<PathBuf>,
    child: Option<Child>,
    exit: Option<CompletionStatus>,
    interrupted: bool,
}

impl CommandProcess {
    /// Create a process for `command_line`, run in the current directory.
    pub fn new(command_line: impl Into<String>) -> Self {
        Self {
            command_line: command_line.into(),
            working_dir: None,
            child: None,
            exit: None,
            interrupted: false,
        }
    }

    /// Run the command inside `dir`.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// The command line this process runs.
    pub fn command_line(&self) -> &str {
        &self.command_line
    }

    /// OS identifier of the spawned command, once started.
    pub fn id(&self) -> Option<u32> {
        self.child.as_ref().map(Child::id)
    }

    fn shell_command(&self) -> Command {
        let mut cmd = if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C");
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c");
            cmd
        };
        cmd.arg(&self.command_line);
        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }
        cmd
    }

    fn status_of(&self, exit: ExitStatus) -> CompletionStatus {
        if self.interrupted {
            CompletionStatus::Interrupted
        } else if exit.success() {
            CompletionStatus::Success
        } else {
            CompletionStatus::Failed
        }
    }
}

impl BuildProcess for CommandProcess {
    fn start(&mut self) -> ProcessResult<()> {
        if self.child.is_some() {
            return Err(ProcessError::AlreadyStarted);
        }

        debug!(command = %self.command_line, "Spawning command");
        let child = self
            .shell_command()
            .spawn()
            .map_err(|source| ProcessError::Spawn {
                command: self.command_line.clone(),
                source,
            })?;
        self.child = Some(child);
        Ok(())
    }

    fn poll(&mut self) -> ProcessResult<ProcessPoll> {
        if let Some(status) = self.exit {
            return Ok(ProcessPoll::Ready(status));
        }

        let child = self.child.as_mut().ok_or(ProcessError::NotStarted)?;
        let exit = child.try_wait().map_err(|source| ProcessError::Wait {
            command: self.command_line.clone(),
            source,
        })?;

        match exit {
            None => Ok(ProcessPoll::Pending),
            Some(exit) => {
                let status = self.status_of(exit);
                debug!(command = %self.command_line, code = ?exit.code(), %status, "Command exited");
                self.exit = Some(status);
                Ok(ProcessPoll::Ready(status))
            }
        }
    }

    fn interrupt(&mut self) {
        if self.exit.is_some() {
            return;
        }
        if let Some(child) = self.child.as_mut() {
            self.interrupted = true;
            if let Err(e) = child.kill() {
                warn!(command = %self.command_line, error = %e, "Failed to kill command");
            }
        }
    }
}

impl Drop for CommandProcess {
    fn drop(&mut self) {
        if self.exit.is_some() {
            return;
        }
        if let Some(mut child) = self.child.take() {
            debug!(command = %self.command_line, "Killing command left running");
            if let Err(e) = child.kill() {
                warn!(command = %self.command_line, error = %e, "Failed to kill command");
            }
            if let Err(e) = child.wait() {
                warn!(command = %self.command_line, error = %e, "Failed to reap command");
            }
        }
    }
}
