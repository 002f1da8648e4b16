use std::io::{self, BufRead, BufReader, Lines};
use std::process::{Child, ChildStdout, Command, Stdio};
use thiserror::Error;
use tracing::{debug, warn};

/// Failure at the subprocess boundary
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("no stdout pipe for '{command}'")]
    NoStdout { command: String },
}

/// Runs native command lines through the platform shell
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    shell_program: String,
}

impl CommandExecutor {
    pub fn new(shell_program: impl Into<String>) -> Self {
        Self {
            shell_program: shell_program.into(),
        }
    }

    // Flag that makes the shell treat the next argument as a command string
    fn command_flag() -> &'static str {
        if cfg!(windows) {
            "/C"
        } else {
            "-c"
        }
    }

    /// Spawn a command line and return a lazy stream of its stdout lines.
    ///
    /// stderr is inherited so the subprocess's error output reaches the user
    /// directly. The command line is handed to the shell verbatim; quoting,
    /// pipes and redirection are the shell's business.
    pub fn execute(&self, command_line: &str) -> Result<OutputLines, ProcessError> {
        debug!(
            "Spawning: {} {} {}",
            self.shell_program,
            Self::command_flag(),
            command_line
        );

        let mut child = Command::new(&self.shell_program)
            .arg(Self::command_flag())
            .arg(command_line)
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| ProcessError::Spawn {
                command: command_line.to_string(),
                source,
            })?;

        let stdout = child.stdout.take().ok_or_else(|| ProcessError::NoStdout {
            command: command_line.to_string(),
        })?;

        Ok(OutputLines {
            lines: Some(BufReader::new(stdout).lines()),
            child,
        })
    }
}

/// Lazy iterator over a subprocess's stdout lines
///
/// Dropping it releases the subprocess on every exit path: the pipe is
/// closed and the child reaped, whether the stream was fully consumed or
/// abandoned mid-read.
#[derive(Debug)]
pub struct OutputLines {
    lines: Option<Lines<BufReader<ChildStdout>>>,
    child: Child,
}

impl Iterator for OutputLines {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.as_mut()?.next()
    }
}

impl Drop for OutputLines {
    fn drop(&mut self) {
        // Drop the pipe before waiting, or a child still writing into a
        // full pipe would never exit.
        self.lines = None;

        match self.child.wait() {
            Ok(status) => debug!("Child exited: {}", status),
            Err(e) => warn!("Failed to reap child: {}", e),
        }
    }
}
