//! Git collaborator — branch name and working-tree status for the status line.
//!
//! Git is reached through the [`GitProbe`] trait so rendering can be tested
//! without spawning processes. Every query is bounded by a timeout and
//! degrades to an empty string on any failure.

mod status;

use std::future::Future;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

pub use status::GitStatusSummary;

/// Timeout for git commands to prevent hanging on unresponsive repos
pub const GIT_TIMEOUT: Duration = Duration::from_secs(3);

/// Read-only git queries used by the status line
pub trait GitProbe: Send + Sync {
    /// Current branch name; empty when detached, outside a repository or on failure
    fn current_branch(&self) -> impl Future<Output = String> + Send;

    /// `git status --porcelain` output; empty when clean or unavailable
    fn porcelain_status(&self) -> impl Future<Output = String> + Send;
}

/// Errors from running a git subprocess
#[derive(Debug, Error)]
pub enum GitError {
    /// git could not be started (e.g. not installed)
    #[error("failed to spawn git: {0}")]
    Spawn(#[from] std::io::Error),

    /// git did not finish within the timeout
    #[error("git timed out after {0:?}")]
    Timeout(Duration),

    /// git exited with a non-zero status
    #[error("git exited with {status}: {stderr}")]
    Failed {
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// [`GitProbe`] backed by the `git` command line
#[derive(Debug, Clone)]
pub struct GitCli {
    /// Upper bound for each git invocation
    timeout: Duration,
    /// Directory to run git in (process working directory when `None`)
    dir: Option<PathBuf>,
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl GitCli {
    /// Create a new GitCli with the default timeout of 3 seconds
    pub fn new() -> Self {
        Self::with_timeout(GIT_TIMEOUT)
    }

    /// Create a new GitCli with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout, dir: None }
    }

    /// Run git in `dir` instead of the process working directory
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    /// Configured per-command timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run a git command and return its stdout
    async fn run(&self, args: &[&str]) -> Result<String, GitError> {
        let mut command = Command::new("git");
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &self.dir {
            command.current_dir(dir);
        }

        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| GitError::Timeout(self.timeout))??;

        if !output.status.success() {
            return Err(GitError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run a git command, degrading to an empty string on failure
    async fn run_or_empty(&self, args: &[&str]) -> String {
        match self.run(args).await {
            Ok(stdout) => stdout,
            Err(e) => {
                debug!("git {}: {}", args.join(" "), e);
                String::new()
            }
        }
    }
}

impl GitProbe for GitCli {
    async fn current_branch(&self) -> String {
        self.run_or_empty(&["branch", "--show-current"])
            .await
            .trim()
            .to_string()
    }

    async fn porcelain_status(&self) -> String {
        trim_porcelain(&self.run_or_empty(&["status", "--porcelain"]).await)
    }
}

/// Strip trailing whitespace from porcelain output.
///
/// Leading spaces are kept: ` M` on the first line is an unstaged
/// modification, not a staged one.
fn trim_porcelain(stdout: &str) -> String {
    stdout.trim_end().to_string()
}
