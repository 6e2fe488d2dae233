//! Core library for ccline.
//!
//! Turns a Claude Code status-line session descriptor into a single display
//! line: model, git branch and working-tree summary, project, estimated
//! context-window usage and session cost.

pub mod git;
pub mod render;
pub mod session;
pub mod statusline;
pub mod transcript;
pub mod usage;

pub use git::{GitCli, GitProbe, GitStatusSummary};
pub use render::StatusLine;
pub use session::{ModelFamily, SessionDescriptor};
pub use statusline::render_status_line;
pub use transcript::{last_usage, UsageRecord};
pub use usage::{estimate_context, format_tokens, ContextConfig, ContextEstimate};
