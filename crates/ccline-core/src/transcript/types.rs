//! Transcript line shapes consumed by the reader.

use serde::Deserialize;

/// Token accounting for one assistant turn, as recorded in the transcript
///
/// Every counter is independently optional; an absent counter counts as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UsageRecord {
    #[serde(default)]
    pub input_tokens: Option<u64>,
    #[serde(default)]
    pub cache_creation_input_tokens: Option<u64>,
    #[serde(default)]
    pub cache_read_input_tokens: Option<u64>,
    #[serde(default)]
    pub output_tokens: Option<u64>,
}

impl UsageRecord {
    /// Tokens occupying the context window: cache reads plus fresh input.
    ///
    /// Cache creation and output tokens are not part of the steady-state
    /// context occupancy shown by `/context`.
    pub fn context_tokens(&self) -> u64 {
        self.cache_read_input_tokens
            .unwrap_or(0)
            .saturating_add(self.input_tokens.unwrap_or(0))
    }
}

/// One transcript line (only the fields we care about)
#[derive(Debug, Deserialize)]
pub(crate) struct TranscriptLine {
    #[serde(default)]
    pub message: Option<TranscriptMessage>,
}

/// The `message` object of a transcript line
#[derive(Debug, Deserialize)]
pub(crate) struct TranscriptMessage {
    #[serde(default)]
    pub usage: Option<UsageRecord>,
}
