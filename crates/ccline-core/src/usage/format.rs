//! Humanized token counts.

/// Format a token count for display.
///
/// Exact below 1,000, one-decimal `k` below 1,000,000 and one-decimal `M`
/// above. The quotient is rounded with [`to_fixed`], so `999_999` is
/// `"1000.0k"` rather than switching tiers.
pub fn format_tokens(n: u64) -> String {
    if n < 1_000 {
        n.to_string()
    } else if n < 1_000_000 {
        format!("{}k", to_fixed(n as f64 / 1_000.0, 1))
    } else {
        format!("{}M", to_fixed(n as f64 / 1_000_000.0, 1))
    }
}

/// Format `value` with `digits` decimals, matching JavaScript `toFixed`.
///
/// Rounds to the nearest decimal of the exact binary value. Exact ties
/// (`0.125` to two places) round up instead of to even, so a value that
/// only looks like a tie (`1.15` is stored as `1.1499…`) still rounds down.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_sign_negative() && value != 0.0 {
        return format!("-{}", to_fixed(-value, digits));
    }

    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    // Zero residual means the product is exact, so a .5 fraction is a real tie
    let exact = value.mul_add(scale, -scaled) == 0.0;
    if exact && scaled.fract() == 0.5 && scaled < u64::MAX as f64 {
        let units = scaled.ceil() as u64;
        let pow = 10u64.pow(digits as u32);
        return if digits == 0 {
            units.to_string()
        } else {
            format!("{}.{:0width$}", units / pow, units % pow, width = digits)
        };
    }

    format!("{:.*}", digits, value)
}
