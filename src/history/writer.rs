//! History writer collaborator interface and its git implementation
//!
//! The orchestrator never builds shell command strings. Every operation is a
//! typed method, and the git implementation passes arguments as a vector so
//! commit messages and remote URLs are never interpolated into a shell line.

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use thiserror::Error;
use tracing::debug;

/// Errors raised by history writer operations
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The external tool could not be launched at all
    #[error("Failed to launch `{command}`: {source}")]
    Launch {
        /// Human-readable rendering of the attempted command
        command: String,
        /// Underlying launch failure
        #[source]
        source: std::io::Error,
    },

    /// The external tool ran but exited with a non-zero status
    #[error("`{command}` failed with {status}: {stderr}")]
    CommandFailed {
        /// Human-readable rendering of the failed command
        command: String,
        /// Exit status reported by the tool
        status: ExitStatus,
        /// Captured standard error text
        stderr: String,
    },
}

/// Typed operations against the version-control history
///
/// Each operation is synchronous and returns success or failure; the caller
/// decides whether a failure aborts the run. Implementations must not retry
/// internally.
pub trait HistoryWriter {
    /// Initialize a repository in the working directory if none exists yet
    fn init_if_absent(&mut self) -> Result<(), HistoryError>;

    /// Stage every pending change in the working directory
    fn stage_all(&mut self) -> Result<(), HistoryError>;

    /// Create a commit whose author timestamp is overridden to `timestamp`
    fn commit_with_timestamp(
        &mut self,
        message: &str,
        timestamp: NaiveDateTime,
    ) -> Result<(), HistoryError>;

    /// Register `url` as the `origin` remote
    fn configure_remote(&mut self, url: &str) -> Result<(), HistoryError>;

    /// Push the generated history to `origin/<branch>`, setting upstream
    fn push(&mut self, branch: &str) -> Result<(), HistoryError>;
}

/// History writer driving the system `git` binary
#[derive(Debug, Clone)]
pub struct GitHistoryWriter {
    work_dir: PathBuf,
}

impl GitHistoryWriter {
    /// Create a writer operating on the repository at `work_dir`
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self { work_dir: work_dir.into() }
    }

    /// Working directory this writer mutates
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    fn run_git(&self, args: &[&str]) -> Result<(), HistoryError> {
        let rendered = render_command("git", args);
        debug!("Running {}", rendered);

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.work_dir)
            .output()
            .map_err(|source| HistoryError::Launch { command: rendered.clone(), source })?;

        if !output.status.success() {
            return Err(HistoryError::CommandFailed {
                command: rendered,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(())
    }
}

impl HistoryWriter for GitHistoryWriter {
    fn init_if_absent(&mut self) -> Result<(), HistoryError> {
        if self.work_dir.join(".git").exists() {
            debug!("Repository already initialized at {}", self.work_dir.display());
            return Ok(());
        }
        self.run_git(&["init"])
    }

    fn stage_all(&mut self) -> Result<(), HistoryError> {
        self.run_git(&["add", "."])
    }

    fn commit_with_timestamp(
        &mut self,
        message: &str,
        timestamp: NaiveDateTime,
    ) -> Result<(), HistoryError> {
        let date = timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
        self.run_git(&["commit", "--date", &date, "-m", message])
    }

    fn configure_remote(&mut self, url: &str) -> Result<(), HistoryError> {
        self.run_git(&["remote", "add", "origin", url])
    }

    fn push(&mut self, branch: &str) -> Result<(), HistoryError> {
        self.run_git(&["push", "-u", "origin", branch])
    }
}

/// Render a program and its arguments for diagnostics
fn render_command(program: &str, args: &[&str]) -> String {
    let mut rendered = String::from(program);
    for arg in args {
        rendered.push(' ');
        if arg.contains(' ') {
            rendered.push('"');
            rendered.push_str(arg);
            rendered.push('"');
        } else {
            rendered.push_str(arg);
        }
    }
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_render_command_plain_args() {
        assert_eq!(render_command("git", &["add", "."]), "git add .");
    }

    #[test]
    fn test_render_command_quotes_spaced_args() {
        let rendered = render_command("git", &["commit", "-m", "Contribution: 2024-01-01 10:30"]);
        assert_eq!(rendered, "git commit -m \"Contribution: 2024-01-01 10:30\"");
    }

    #[test]
    fn test_writer_remembers_work_dir() {
        let writer = GitHistoryWriter::new("/tmp/some-repo");
        assert_eq!(writer.work_dir(), Path::new("/tmp/some-repo"));
    }

    #[test]
    fn test_launch_failure_is_reported() {
        // Pointing the writer at a directory that does not exist makes the
        // launch itself fail, without needing a git repository.
        let writer = GitHistoryWriter::new("/nonexistent/path/for/sure");
        let result = writer.run_git(&["status"]);

        match result {
            Err(HistoryError::Launch { command, .. }) => assert!(command.starts_with("git")),
            other => panic!("Expected Launch error, got {:?}", other),
        }
    }

    #[test]
    fn test_commit_timestamp_formatting() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        assert_eq!(timestamp.format("%Y-%m-%d %H:%M:%S").to_string(), "2024-03-09 14:05:00");
    }
}
