//! Context-window usage estimation.
//!
//! Converts the last transcript usage record into the percentage Claude Code
//! shows in `/context`, including the autocompact buffer it reserves.

mod format;
mod scaler;

pub use format::{format_tokens, to_fixed};
pub use scaler::{
    estimate_context, ContextConfig, ContextEstimate, DEFAULT_BUFFER_RATIO, DEFAULT_SCALE_FACTOR,
};
