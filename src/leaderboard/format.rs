//! Display helpers: percentages, dollar amounts, addresses, colors, sparklines.

use rust_decimal::{Decimal, RoundingStrategy};

/// Row sparkline viewport.
pub const SPARK_ROW: SparkViewport = SparkViewport { width: 120.0, height: 36.0, pad: 2.0 };

/// Profile P&L curve viewport.
pub const SPARK_PROFILE: SparkViewport = SparkViewport { width: 640.0, height: 160.0, pad: 6.0 };

/// SVG viewport a spark series is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SparkViewport {
    pub width: f64,
    pub height: f64,
    pub pad: f64,
}

/// Fixed-point rendering of `x` with `dp` decimals, rounding half away from
/// zero on the exact binary value.
pub fn to_fixed(x: f64, dp: u32) -> String {
    let sign = if x < 0.0 { "-" } else { "" };
    let abs = x.abs();
    let digits = match Decimal::from_f64_retain(abs) {
        Some(d) => {
            let rounded = d.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.*}", dp as usize, rounded)
        }
        None => format!("{:.*}", dp as usize, abs),
    };
    format!("{sign}{digits}")
}

/// Format a percentage with an explicit `+` for gains.
pub fn fmt_pct(x: f64, dp: u32) -> String {
    let sign = if x > 0.0 { "+" } else { "" };
    format!("{sign}{}%", to_fixed(x, dp))
}

/// Format a dollar amount, abbreviating billions, millions and tens of thousands.
pub fn fmt_usd(x: f64) -> String {
    let abs = x.abs();
    let sign = if x < 0.0 { "-" } else { "" };

    if abs >= 1_000_000_000.0 {
        format!("{sign}${}B", to_fixed(abs / 1_000_000_000.0, 2))
    } else if abs >= 1_000_000.0 {
        format!("{sign}${}M", to_fixed(abs / 1_000_000.0, 2))
    } else if abs >= 10_000.0 {
        format!("{sign}${}k", to_fixed(abs / 1_000.0, 1))
    } else {
        format!("{sign}${}", to_fixed(abs, 2))
    }
}

/// First 6 and last 4 characters of an address.
pub fn short_addr(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    let head: String = chars.iter().take(6).collect();
    let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
    format!("{head}…{tail}")
}

/// Stable avatar color for a string.
pub fn hash_color(input: &str) -> String {
    let h = input
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
    let hue = i64::from(h).abs() % 360;
    format!("hsl({hue} 70% 45%)")
}

/// SVG path for a normalized series drawn into `view`.
pub fn spark_path(values: &[f64], view: SparkViewport) -> String {
    let Some(first) = values.first() else {
        return String::new();
    };

    let SparkViewport { width: w, height: h, pad } = view;
    let y = |v: f64| h - pad - v * (h - pad * 2.0);
    let step = if values.len() > 1 {
        (w - pad * 2.0) / (values.len() - 1) as f64
    } else {
        0.0
    };

    let mut d = format!("M {} {}", pad, y(*first));
    for (i, v) in values.iter().enumerate().skip(1) {
        d.push_str(&format!(" L {} {}", pad + i as f64 * step, y(*v)));
    }
    d
}

/// Thousands-separated integer, e.g. `1,234`.
pub fn fmt_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_pct() {
        assert_eq!(fmt_pct(12.345, 2), "+12.35%");
        assert_eq!(fmt_pct(-3.2, 2), "-3.20%");
        assert_eq!(fmt_pct(0.0, 2), "0.00%");
        assert_eq!(fmt_pct(-0.0, 2), "0.00%");
        assert_eq!(fmt_pct(57.6774, 1), "+57.7%");
    }

    #[test]
    fn test_fmt_usd() {
        assert_eq!(fmt_usd(12_345.0), "$12.3k");
        assert_eq!(fmt_usd(1_234_567.0), "$1.23M");
        assert_eq!(fmt_usd(-1_234_567.0), "-$1.23M");
        assert_eq!(fmt_usd(500.0), "$500.00");
        assert_eq!(fmt_usd(1_234.0), "$1234.00");
        assert_eq!(fmt_usd(2_500_000_000.0), "$2.50B");
        assert_eq!(fmt_usd(9_999.999), "$10000.00");
    }

    #[test]
    fn test_to_fixed_rounds_on_exact_value() {
        // 1.005 is stored just below the midpoint.
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(2046.68, 2), "2046.68");
    }

    #[test]
    fn test_short_addr() {
        let addr = "0xAB34567890123456789012345678901234CD12";
        assert_eq!(short_addr(addr), "0xAB34…CD12");
        assert_eq!(short_addr("0x1"), "0x1…0x1");
    }

    #[test]
    fn test_hash_color() {
        assert_eq!(hash_color("0x01a000000000000000000000000000000000000"), "hsl(184 70% 45%)");
        assert_eq!(hash_color("alpha_1"), "hsl(64 70% 45%)");
        assert_eq!(hash_color(""), "hsl(0 70% 45%)");
    }

    #[test]
    fn test_spark_path() {
        assert_eq!(spark_path(&[0.0, 0.5, 1.0], SPARK_ROW), "M 2 34 L 60 18 L 118 2");
        assert_eq!(
            spark_path(&[0.0, 0.25, 1.0, 0.5], SPARK_ROW),
            "M 2 34 L 40.666666666666664 26 L 79.33333333333333 2 L 118 18"
        );
        assert_eq!(spark_path(&[1.0], SPARK_ROW), "M 2 2");
        assert_eq!(spark_path(&[], SPARK_PROFILE), "");
    }

    #[test]
    fn test_fmt_count() {
        assert_eq!(fmt_count(0), "0");
        assert_eq!(fmt_count(999), "999");
        assert_eq!(fmt_count(1_234), "1,234");
        assert_eq!(fmt_count(1_234_567), "1,234,567");
    }
}
