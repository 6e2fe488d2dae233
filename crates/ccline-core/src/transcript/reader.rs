//! Transcript reader — finds the last usage-bearing line of a session `.jsonl`.
//!
//! The transcript is an append-only log, so only the latest turn's usage
//! reflects what currently occupies the context window. Lines are scanned
//! from the end of the file and the first one carrying `message.usage` wins.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::types::{TranscriptLine, UsageRecord};

/// Errors that can occur while reading a transcript
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// No transcript path was provided
    #[error("transcript path is empty")]
    EmptyPath,

    /// The transcript file does not exist
    #[error("transcript not found: {0:?}")]
    NotFound(PathBuf),

    /// The transcript exists but could not be read
    #[error("failed to read transcript {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read the most recent usage record from a transcript file.
///
/// Returns `Ok(None)` when the file is readable but no line carries usage.
pub fn read_last_usage(path: &Path) -> Result<Option<UsageRecord>, TranscriptError> {
    if path.as_os_str().is_empty() {
        return Err(TranscriptError::EmptyPath);
    }
    if !path.exists() {
        return Err(TranscriptError::NotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|source| TranscriptError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    Ok(find_last_usage(&content))
}

/// Most recent usage record from a transcript, or `None` if unavailable.
///
/// Never fails: a missing or unreadable file is the same as a transcript
/// without usage data.
pub fn last_usage(path: &Path) -> Option<UsageRecord> {
    match read_last_usage(path) {
        Ok(Some(usage)) => Some(usage),
        Ok(None) => {
            debug!("No usage record in transcript {:?}", path);
            None
        }
        Err(e) => {
            debug!("Transcript unavailable: {}", e);
            None
        }
    }
}

/// Scan transcript content from the last line to the first.
///
/// Lines that are not valid JSON (e.g. a partially written trailing line)
/// are skipped rather than aborting the scan.
fn find_last_usage(content: &str) -> Option<UsageRecord> {
    content
        .trim()
        .split('\n')
        .rev()
        .filter_map(|line| serde_json::from_str::<TranscriptLine>(line).ok())
        .find_map(|entry| entry.message.and_then(|m| m.usage))
}
