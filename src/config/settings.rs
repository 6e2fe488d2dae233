use anyhow::{Context, Result};
use ccline_core::usage::{ContextConfig, DEFAULT_BUFFER_RATIO, DEFAULT_SCALE_FACTOR};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Command line arguments
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Claude Code status line")]
pub struct Config {
    /// Enable debug logging (written to stderr)
    #[arg(short, long)]
    pub debug: bool,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Treat Claude Code autocompact as disabled (no reserved buffer, no scaling)
    #[arg(long)]
    pub no_autocompact: bool,

    /// Timeout for each git command in milliseconds
    #[arg(long)]
    pub git_timeout_ms: Option<u64>,
}

impl Config {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Application settings (from config file)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Context estimate tuning
    #[serde(default)]
    pub context: ContextSettings,

    /// Git query settings
    #[serde(default)]
    pub git: GitSettings,
}

/// Context estimate settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextSettings {
    /// Whether Claude Code autocompact is enabled
    /// (check `/context` for an "Autocompact buffer" line)
    #[serde(default = "default_autocompact_enabled")]
    pub autocompact_enabled: bool,

    /// Scale applied to transcript tokens while autocompact is enabled
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,

    /// Fraction of the context window reserved as autocompact buffer
    #[serde(default = "default_buffer_ratio")]
    pub buffer_ratio: f64,
}

fn default_autocompact_enabled() -> bool {
    true
}

fn default_scale_factor() -> f64 {
    DEFAULT_SCALE_FACTOR
}

fn default_buffer_ratio() -> f64 {
    DEFAULT_BUFFER_RATIO
}

impl Default for ContextSettings {
    fn default() -> Self {
        Self {
            autocompact_enabled: default_autocompact_enabled(),
            scale_factor: default_scale_factor(),
            buffer_ratio: default_buffer_ratio(),
        }
    }
}

/// Git query settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitSettings {
    /// Timeout for each git command in milliseconds
    #[serde(default = "default_git_timeout")]
    pub timeout_ms: u64,
}

fn default_git_timeout() -> u64 {
    3000
}

impl Default for GitSettings {
    fn default() -> Self {
        Self {
            timeout_ms: default_git_timeout(),
        }
    }
}

impl Settings {
    /// Load settings from config file or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        // Try custom path first
        if let Some(p) = path {
            if p.exists() {
                return Self::read_file(p);
            }
        }

        // Try default config locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("ccline/config.toml")),
            dirs::home_dir().map(|p| p.join(".ccline.toml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::read_file(path);
            }
        }

        // Return defaults if no config file found
        Ok(Self::default())
    }

    fn read_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Merge CLI config into settings (CLI takes precedence)
    pub fn merge_cli(&mut self, cli: &Config) {
        if cli.no_autocompact {
            self.context.autocompact_enabled = false;
        }
        if let Some(timeout) = cli.git_timeout_ms {
            self.git.timeout_ms = timeout;
        }
    }

    /// Validate and normalize settings values
    ///
    /// Out-of-range tuning values fall back to their defaults.
    pub fn validate(&mut self) {
        const MIN_GIT_TIMEOUT_MS: u64 = 1;

        if !(self.context.scale_factor.is_finite() && self.context.scale_factor > 0.0) {
            self.context.scale_factor = default_scale_factor();
        }
        if !(0.0..1.0).contains(&self.context.buffer_ratio) {
            self.context.buffer_ratio = default_buffer_ratio();
        }
        if self.git.timeout_ms < MIN_GIT_TIMEOUT_MS {
            self.git.timeout_ms = MIN_GIT_TIMEOUT_MS;
        }
    }

    /// Context estimate configuration for the core
    pub fn context_config(&self) -> ContextConfig {
        ContextConfig {
            autocompact_enabled: self.context.autocompact_enabled,
            scale_factor: self.context.scale_factor,
            buffer_ratio: self.context.buffer_ratio,
        }
    }

    /// Per-command git timeout
    pub fn git_timeout(&self) -> Duration {
        Duration::from_millis(self.git.timeout_ms)
    }
}
