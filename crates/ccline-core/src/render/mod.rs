//! Presentation formatter — assembles the final status line.

use std::fmt;

use crate::git::GitStatusSummary;
use crate::session::ModelFamily;
use crate::usage::{to_fixed, ContextEstimate};

/// Glyph placed between segments
pub const SEPARATOR: &str = " │ ";

/// Facts shown in one status line render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusLine {
    pub model: ModelFamily,
    /// Current branch; the branch segment is omitted when `None` or empty
    pub branch: Option<String>,
    pub git_status: GitStatusSummary,
    pub project: String,
    /// Context estimate; both context segments are omitted when `None`
    pub context: Option<ContextEstimate>,
    /// Session cost in USD; shown as `$0.00` when `None`
    pub cost_usd: Option<f64>,
}

impl StatusLine {
    /// Segments in display order
    pub fn segments(&self) -> Vec<String> {
        let mut parts = Vec::with_capacity(6);

        parts.push(format!("{} {}", self.model.emoji(), self.model.label()));

        if let Some(branch) = self.branch.as_deref().filter(|b| !b.is_empty()) {
            if self.git_status.is_clean() {
                parts.push(format!("⎇ {}", branch));
            } else {
                parts.push(format!("⎇ {} {}", branch, self.git_status));
            }
        }

        parts.push(format!("📁 {}", self.project));

        if let Some(context) = &self.context {
            parts.push(format!("📐 {}%", context.used_percent));
            parts.push(format!("📊 {}", context.display_tokens));
        }

        parts.push(format!("💰 {}", format_cost(self.cost_usd)));

        parts
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments().join(SEPARATOR))
    }
}

/// Format a USD amount with two decimals, `$0.00` when absent.
///
/// Exact half-cent ties round up (`0.125` is `$0.13`).
pub fn format_cost(cost: Option<f64>) -> String {
    match cost {
        Some(cost) => format!("${}", to_fixed(cost, 2)),
        None => "$0.00".to_string(),
    }
}
