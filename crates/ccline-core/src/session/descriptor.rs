//! Status-line session descriptor.
//!
//! Claude Code pipes one JSON object to the status-line command on every
//! render. Every field is optional at every level of nesting; unknown fields
//! are ignored.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

/// Context window size assumed when the descriptor does not provide one
pub const DEFAULT_CONTEXT_WINDOW_SIZE: u64 = 200_000;

/// `model` object of the descriptor
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub id: Option<String>,
}

/// `workspace` object of the descriptor
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WorkspaceInfo {
    #[serde(default)]
    pub project_dir: Option<String>,
}

/// `cost` object of the descriptor
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CostInfo {
    /// Accumulated session cost in USD (may be `null`)
    #[serde(default)]
    pub total_cost_usd: Option<f64>,
}

/// `context_window` object of the descriptor
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContextWindowInfo {
    #[serde(default)]
    pub context_window_size: Option<u64>,
}

/// Session descriptor (only fields we care about)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SessionDescriptor {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub transcript_path: Option<String>,
    #[serde(default)]
    pub model: Option<ModelInfo>,
    #[serde(default)]
    pub workspace: Option<WorkspaceInfo>,
    #[serde(default)]
    pub cost: Option<CostInfo>,
    #[serde(default)]
    pub context_window: Option<ContextWindowInfo>,
    #[serde(default)]
    pub cwd: Option<String>,
}

impl SessionDescriptor {
    /// Parse a descriptor from raw stdin content.
    ///
    /// Returns `None` for empty input, invalid JSON, non-object JSON or
    /// fields of the wrong type.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            debug!("Empty session descriptor");
            return None;
        }
        match serde_json::from_str(input) {
            Ok(descriptor) => Some(descriptor),
            Err(e) => {
                debug!("Unparsable session descriptor: {}", e);
                None
            }
        }
    }

    /// Model id, if present and non-empty
    pub fn model_id(&self) -> Option<&str> {
        non_empty(self.model.as_ref()?.id.as_deref())
    }

    /// Transcript path, if present and non-empty
    pub fn transcript_path(&self) -> Option<&Path> {
        non_empty(self.transcript_path.as_deref()).map(Path::new)
    }

    /// Workspace project directory, if present and non-empty
    pub fn project_dir(&self) -> Option<&str> {
        non_empty(self.workspace.as_ref()?.project_dir.as_deref())
    }

    /// Working directory reported by the host, if present and non-empty
    pub fn cwd(&self) -> Option<&str> {
        non_empty(self.cwd.as_deref())
    }

    /// Accumulated session cost in USD
    pub fn total_cost_usd(&self) -> Option<f64> {
        self.cost.as_ref()?.total_cost_usd
    }

    /// Context window size, falling back to the default for absent or zero
    pub fn window_size(&self) -> u64 {
        self.context_window
            .as_ref()
            .and_then(|c| c.context_window_size)
            .filter(|size| *size > 0)
            .unwrap_or(DEFAULT_CONTEXT_WINDOW_SIZE)
    }
}

/// Read a descriptor from a stream until end-of-stream.
///
/// Read errors are treated the same as absent input.
pub fn read_descriptor<R: Read>(mut reader: R) -> Option<SessionDescriptor> {
    let mut input = String::new();
    if let Err(e) = reader.read_to_string(&mut input) {
        debug!("Failed to read session descriptor: {}", e);
        return None;
    }
    SessionDescriptor::parse(&input)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
