//! Display-number formatting helpers.

/// Round half-up: `floor(x + 0.5)`.
///
/// Ties round toward positive infinity, which for negative inputs differs
/// from round-half-away-from-zero. All displayed quantities are physical
/// lengths and non-negative by the time they reach the report, so the
/// asymmetry is unreachable.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Format a quantity for the report.
///
/// Integer mode applies [`round_half_up`]; decimal mode shows exactly one
/// decimal place. Thousands separators are inserted in both modes.
pub fn format_quantity(value: f64, round_to_integer: bool) -> String {
    if round_to_integer {
        let rounded = round_half_up(value);
        let digits = rounded.unsigned_abs().to_string();
        let sign = if rounded < 0 { "-" } else { "" };
        format!("{sign}{}", group_thousands(&digits))
    } else {
        let fixed = format!("{:.1}", value);
        let (int_part, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "0"));
        let (sign, digits) = match int_part.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", int_part),
        };
        format!("{sign}{}.{frac}", group_thousands(digits))
    }
}

/// Insert a comma every three digits from the right.
fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== round_half_up ====================

    #[test]
    fn test_round_half_up_tie() {
        assert_eq!(round_half_up(2.5), 3);
    }

    #[test]
    fn test_round_half_up_below_tie() {
        assert_eq!(round_half_up(2.4), 2);
    }

    #[test]
    fn test_round_half_up_whole() {
        assert_eq!(round_half_up(2.0), 2);
    }

    #[test]
    fn test_round_half_up_large() {
        assert_eq!(round_half_up(4030.833333), 4031);
    }

    #[test]
    fn test_round_half_up_negative_tie_toward_positive() {
        // floor(-2.5 + 0.5) = -2: negative ties go toward +infinity.
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(-2.6), -3);
    }

    // ==================== format_quantity ====================

    #[test]
    fn test_decimal_mode_one_place() {
        assert_eq!(format_quantity(4007.5, false), "4,007.5");
        assert_eq!(format_quantity(15.0, false), "15.0");
    }

    #[test]
    fn test_decimal_mode_grouping() {
        assert_eq!(format_quantity(12100.0, false), "12,100.0");
        assert_eq!(format_quantity(1234567.8, false), "1,234,567.8");
    }

    #[test]
    fn test_integer_mode_rounds_half_up() {
        assert_eq!(format_quantity(4007.5, true), "4,008");
        assert_eq!(format_quantity(7.4, true), "7");
    }

    #[test]
    fn test_small_values_ungrouped() {
        assert_eq!(format_quantity(7.5, false), "7.5");
        assert_eq!(format_quantity(999.0, true), "999");
    }

    #[test]
    fn test_negative_value_keeps_sign_before_groups() {
        assert_eq!(format_quantity(-7915.0, false), "-7,915.0");
        assert_eq!(format_quantity(-7915.2, true), "-7,915");
    }
}
