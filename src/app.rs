//! One status line render: stdin in, one line out.

use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ccline_core::session::read_descriptor;
use ccline_core::{render_status_line, GitCli, GitProbe};
use tracing::debug;

use crate::config::Settings;

/// Status line application
pub struct App {
    settings: Settings,
}

impl App {
    /// Create a new application with validated settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Render from process stdin to process stdout using the git CLI
    pub async fn run(&self) -> Result<()> {
        let cwd = process_cwd();
        let git = GitCli::with_timeout(self.settings.git_timeout());

        let line = self.render(std::io::stdin(), &git, &cwd).await;

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", line).context("Failed to write status line")?;
        stdout.flush().context("Failed to flush stdout")
    }

    /// Render the status line for a descriptor read from `input`
    pub async fn render<R: Read, G: GitProbe>(&self, input: R, git: &G, cwd: &Path) -> String {
        let descriptor = read_descriptor(input);
        debug!(
            "Session descriptor {}",
            if descriptor.is_some() { "parsed" } else { "absent" }
        );

        render_status_line(
            descriptor.as_ref(),
            git,
            &self.settings.context_config(),
            cwd,
        )
        .await
    }
}

/// Process working directory, empty if it cannot be determined
fn process_cwd() -> PathBuf {
    match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            debug!("Failed to get current directory: {}", e);
            PathBuf::new()
        }
    }
}
