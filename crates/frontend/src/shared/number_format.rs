//! Number formatting for axes, cards and grids

/// Axis label with magnitude suffix.
///
/// Values from one million up render as whole millions (`"3M"`), from one
/// thousand up as whole thousands (`"2K"`), anything smaller with one decimal.
/// Halves round away from zero, so `1500` is `"2K"` and `2_500_000` is `"3M"`.
pub fn format_magnitude(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{}M", (value / 1_000_000.0).round())
    } else if value >= 1_000.0 {
        format!("{}K", (value / 1_000.0).round())
    } else {
        format!("{:.1}", value)
    }
}

/// Period-over-period ratio as a signed percentage: `0.12` → `"+12%"`.
///
/// The ratio is scaled by 100 and rounded to `decimals` places before
/// printing, which removes floating point tails such as `10.000000000000002`.
/// Only strictly positive results get a `+`; a value that rounds to zero is
/// printed unsigned.
pub fn format_percent_delta(delta: f64, decimals: u8) -> String {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (delta * 100.0 * factor).round() / factor;
    let precision = decimals as usize;

    if rounded == 0.0 {
        format!("{:.*}%", precision, 0.0)
    } else if rounded > 0.0 {
        format!("+{:.*}%", precision, rounded)
    } else {
        format!("{:.*}%", precision, rounded)
    }
}

/// Same as [`format_percent_delta`], `"n/a"` when the server had no comparison base.
pub fn format_optional_delta(delta: Option<f64>, decimals: u8) -> String {
    match delta {
        Some(d) => format_percent_delta(d, decimals),
        None => "n/a".to_string(),
    }
}

/// Inserts a space every three digits of an integer string (sign aware).
fn group_thousands(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    format!("{}{}", sign, grouped)
}

/// Grouped number with a fixed number of decimals: `1234.5, 2` → `"1 234.50"`.
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);
    match formatted.split_once('.') {
        Some((integer, fraction)) => format!("{}.{}", group_thousands(integer), fraction),
        None => group_thousands(&formatted),
    }
}

/// Euro amount as shown in grids and cards: `"1 234.50 €"`.
pub fn format_money(value: f64) -> String {
    format!("{} €", format_number(value, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_magnitude_thresholds() {
        assert_eq!(format_magnitude(999.0), "999.0");
        assert_eq!(format_magnitude(12.34), "12.3");
        assert_eq!(format_magnitude(1_000.0), "1K");
        assert_eq!(format_magnitude(1_500.0), "2K");
        assert_eq!(format_magnitude(48_211.0), "48K");
        assert_eq!(format_magnitude(1_000_000.0), "1M");
        assert_eq!(format_magnitude(2_500_000.0), "3M");
    }

    #[test]
    fn test_format_percent_delta_sign() {
        assert_eq!(format_percent_delta(0.12, 0), "+12%");
        assert_eq!(format_percent_delta(-0.05, 0), "-5%");
        assert_eq!(format_percent_delta(0.0, 0), "0%");
    }

    #[test]
    fn test_format_percent_delta_has_no_float_tail() {
        assert_eq!(format_percent_delta(0.1, 0), "+10%");
        assert_eq!(format_percent_delta(0.1, 2), "+10.00%");
        assert_eq!(format_percent_delta(0.123, 1), "+12.3%");
    }

    #[test]
    fn test_tiny_negative_delta_rounds_to_unsigned_zero() {
        assert_eq!(format_percent_delta(-0.001, 0), "0%");
        assert_eq!(format_percent_delta(-0.001, 1), "-0.1%");
    }

    #[test]
    fn test_format_optional_delta() {
        assert_eq!(format_optional_delta(None, 0), "n/a");
        assert_eq!(format_optional_delta(Some(0.3), 0), "+30%");
    }

    #[test]
    fn test_format_number_and_money() {
        assert_eq!(format_number(1234567.891, 2), "1 234 567.89");
        assert_eq!(format_number(-1234.0, 0), "-1 234");
        assert_eq!(format_number(12.0, 0), "12");
        assert_eq!(format_money(2998.0), "2 998.00 €");
        assert_eq!(format_money(0.5), "0.50 €");
    }
}
