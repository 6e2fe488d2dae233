//! Transcript reading — locate the most recent token usage in a Claude Code
//! session `.jsonl` transcript.

mod reader;
mod types;

pub use reader::{last_usage, read_last_usage, TranscriptError};
pub use types::UsageRecord;
