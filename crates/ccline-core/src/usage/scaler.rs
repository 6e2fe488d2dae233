//! Usage scaler — transcript tokens to a `/context`-compatible percentage.

use super::format::format_tokens;
use crate::transcript::UsageRecord;

/// Fraction of the context window Claude Code reserves as autocompact buffer
pub const DEFAULT_BUFFER_RATIO: f64 = 0.225;

/// Scale applied to transcript tokens when autocompact is enabled.
///
/// API-reported usage runs higher than the breakdown shown by `/context`;
/// this factor was measured empirically to line the two up.
pub const DEFAULT_SCALE_FACTOR: f64 = 0.83;

/// Tuning for the context estimate
#[derive(Debug, Clone, PartialEq)]
pub struct ContextConfig {
    /// Whether Claude Code's autocompact mode (and its reserved buffer) is on
    pub autocompact_enabled: bool,
    /// Scale applied to transcript tokens while autocompact is enabled
    pub scale_factor: f64,
    /// Fraction of the window reserved while autocompact is enabled
    pub buffer_ratio: f64,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            autocompact_enabled: true,
            scale_factor: DEFAULT_SCALE_FACTOR,
            buffer_ratio: DEFAULT_BUFFER_RATIO,
        }
    }
}

impl ContextConfig {
    /// Configuration for sessions with autocompact turned off
    pub fn without_autocompact() -> Self {
        Self {
            autocompact_enabled: false,
            ..Self::default()
        }
    }

    /// Scale factor actually applied (1.0 when autocompact is off)
    pub fn effective_scale(&self) -> f64 {
        if self.autocompact_enabled {
            self.scale_factor
        } else {
            1.0
        }
    }

    /// Tokens reserved by the autocompact buffer for a given window size
    pub fn reserved_tokens(&self, window_size: u64) -> u64 {
        if self.autocompact_enabled {
            (window_size as f64 * self.buffer_ratio).floor() as u64
        } else {
            0
        }
    }
}

/// Estimated context-window occupancy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextEstimate {
    /// Percentage of the window in use; not clamped, may exceed 100
    pub used_percent: u64,
    /// Scaled transcript tokens plus reserved buffer
    pub total_tokens: u64,
    /// `total_tokens` humanized for display (e.g. `"88.2k"`)
    pub display_tokens: String,
}

/// Estimate context usage from the last transcript usage record.
///
/// Returns `None` when there is no usage record, so callers can hide the
/// context segments instead of showing 0%.
pub fn estimate_context(
    usage: Option<&UsageRecord>,
    window_size: u64,
    config: &ContextConfig,
) -> Option<ContextEstimate> {
    let usage = usage?;
    if window_size == 0 {
        return None;
    }

    let raw = usage.context_tokens();
    let scaled = (raw as f64 * config.effective_scale()).floor() as u64;
    let total_tokens = scaled.saturating_add(config.reserved_tokens(window_size));

    let used_percent = (total_tokens as f64 / window_size as f64 * 100.0).round() as u64;

    Some(ContextEstimate {
        used_percent,
        total_tokens,
        display_tokens: format_tokens(total_tokens),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn usage(cache_read: u64, input: u64) -> UsageRecord {
        UsageRecord {
            input_tokens: Some(input),
            cache_read_input_tokens: Some(cache_read),
            ..Default::default()
        }
    }

    #[test]
    fn test_autocompact_estimate() {
        let estimate =
            estimate_context(Some(&usage(50_000, 2_000)), 200_000, &ContextConfig::default())
                .unwrap();

        // floor(52000 * 0.83) = 43160, floor(200000 * 0.225) = 45000
        assert_eq!(estimate.total_tokens, 88_160);
        assert_eq!(estimate.used_percent, 44);
        assert_eq!(estimate.display_tokens, "88.2k");
    }

    #[test]
    fn test_without_autocompact() {
        let estimate = estimate_context(
            Some(&usage(50_000, 2_000)),
            200_000,
            &ContextConfig::without_autocompact(),
        )
        .unwrap();

        assert_eq!(estimate.total_tokens, 52_000);
        assert_eq!(estimate.used_percent, 26);
        assert_eq!(estimate.display_tokens, "52.0k");
    }

    #[test]
    fn test_without_autocompact_ignores_custom_scale() {
        let config = ContextConfig {
            autocompact_enabled: false,
            scale_factor: 0.5,
            buffer_ratio: 0.5,
        };
        assert_eq!(config.effective_scale(), 1.0);
        assert_eq!(config.reserved_tokens(200_000), 0);
    }

    #[test]
    fn test_cache_creation_and_output_excluded() {
        let record = UsageRecord {
            input_tokens: Some(1_000),
            cache_creation_input_tokens: Some(80_000),
            cache_read_input_tokens: Some(9_000),
            output_tokens: Some(4_000),
        };
        let estimate =
            estimate_context(Some(&record), 100_000, &ContextConfig::without_autocompact())
                .unwrap();
        assert_eq!(estimate.total_tokens, 10_000);
        assert_eq!(estimate.used_percent, 10);
    }

    #[test]
    fn test_percent_not_clamped() {
        let estimate =
            estimate_context(Some(&usage(190_000, 0)), 200_000, &ContextConfig::default())
                .unwrap();

        // floor(190000 * 0.83) = 157700, + 45000 = 202700
        assert_eq!(estimate.total_tokens, 202_700);
        assert_eq!(estimate.used_percent, 101);
    }

    #[test]
    fn test_zero_usage_is_present_not_absent() {
        let estimate =
            estimate_context(Some(&UsageRecord::default()), 200_000, &ContextConfig::default())
                .unwrap();

        assert_eq!(estimate.total_tokens, 45_000);
        assert_eq!(estimate.used_percent, 23);
    }

    #[test]
    fn test_no_usage_is_absent() {
        assert_eq!(
            estimate_context(None, 200_000, &ContextConfig::default()),
            None
        );
    }

    #[test]
    fn test_rounds_half_up() {
        // 1_005 / 2_000 = 50.25% -> 50; 1_010 / 2_000 = 50.5% -> 51
        let config = ContextConfig::without_autocompact();
        let low = estimate_context(Some(&usage(1_005, 0)), 2_000, &config).unwrap();
        let high = estimate_context(Some(&usage(1_010, 0)), 2_000, &config).unwrap();
        assert_eq!(low.used_percent, 50);
        assert_eq!(high.used_percent, 51);
    }
}
