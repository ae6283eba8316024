//! Price and number formatting for the offer form.
//!
//! Display format is Italian: `.` as thousands separator, `,` as decimal
//! separator, always two decimals (`1.234,50`). The wire format stored in
//! hidden fields uses a plain dot and two decimals (`1234.50`).

/// Lenient number parsing with `parseFloat` semantics.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"12abc"` parses as `12.0`. Returns `None` when there is no numeric prefix
/// or the value is not finite.
///
/// # Examples
///
/// ```
/// use contracts::shared::price_format::parse_number;
/// assert_eq!(parse_number(" 12.5 €"), Some(12.5));
/// assert_eq!(parse_number("abc"), None);
/// ```
pub fn parse_number(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a number, treating unparsable text and zero as `default`.
///
/// Mirrors the `parseFloat(x) || default` idiom used for form fields where an
/// empty or zero value means "not set".
pub fn parse_number_or(text: &str, default: f64) -> f64 {
    parse_number(text).filter(|v| *v != 0.0).unwrap_or(default)
}

/// Round half up (towards positive infinity), like `Math.round`.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Magnitude rounded half up to cents, as `"1234.50"`, plus whether a minus
/// sign is needed. A value that rounds to zero carries no sign.
fn fixed_cents(value: f64) -> (bool, String) {
    let cents = round_half_up(value.abs() * 100.0);
    (value < 0.0 && cents > 0.0, format!("{:.2}", cents / 100.0))
}

/// Two-decimal wire representation, e.g. `12.5` -> `"12.50"`.
///
/// Ties round up like `toFixed(2)`, so `0.125` gives `"0.13"`.
pub fn to_fixed_2(value: f64) -> String {
    let (negative, digits) = fixed_cents(value);
    if negative {
        format!("-{}", digits)
    } else {
        digits
    }
}

/// Group the integer digits with `.` every three digits.
fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut result = String::new();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(*ch);
    }
    result
}

/// Format a price for display: `1234.5` -> `"1.234,50"`.
///
/// Non-finite values format as `"0,00"`. Rounding to cents happens before the
/// split into integer and decimal parts, so `1.999` becomes `"2,00"`.
pub fn format_price(value: f64) -> String {
    if !value.is_finite() {
        return "0,00".to_string();
    }

    let (negative, digits) = fixed_cents(value);
    let (integer_part, decimal_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    let sign = if negative { "-" } else { "" };

    format!("{}{},{}", sign, group_thousands(integer_part), decimal_part)
}

/// Format raw field text as a price; anything non-numeric yields `"0,00"`.
pub fn format_price_text(text: &str) -> String {
    parse_number(text)
        .map(format_price)
        .unwrap_or_else(|| "0,00".to_string())
}

/// Price followed by the euro sign, as used for line items.
pub fn format_euro(value: f64) -> String {
    format!("{} €", format_price(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_prefixes() {
        assert_eq!(parse_number("12"), Some(12.0));
        assert_eq!(parse_number("  -3.25"), Some(-3.25));
        assert_eq!(parse_number("12abc"), Some(12.0));
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number("1e3x"), Some(1000.0));
        assert_eq!(parse_number("1e"), Some(1.0));
        assert_eq!(parse_number("1,5"), Some(1.0));
    }

    #[test]
    fn test_parse_number_rejects() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("Infinity"), None);
    }

    #[test]
    fn test_parse_number_or_defaults() {
        assert_eq!(parse_number_or("", 1.0), 1.0);
        assert_eq!(parse_number_or("0", 1.0), 1.0);
        assert_eq!(parse_number_or("x", 0.0), 0.0);
        assert_eq!(parse_number_or("3", 1.0), 3.0);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1234.5), "1.234,50");
        assert_eq!(format_price(0.0), "0,00");
        assert_eq!(format_price(1234567.891), "1.234.567,89");
        assert_eq!(format_price(999.0), "999,00");
        assert_eq!(format_price(1.999), "2,00");
        assert_eq!(format_price(-1.5), "-1,50");
        assert_eq!(format_price(f64::NAN), "0,00");
        assert_eq!(format_price(f64::INFINITY), "0,00");
    }

    #[test]
    fn test_format_price_large_values() {
        assert_eq!(format_price(1e20), "100.000.000.000.000.000.000,00");
        assert_eq!(format_price(-25_000_000_000.5), "-25.000.000.000,50");
        assert_eq!(to_fixed_2(1e20), "100000000000000000000.00");
    }

    #[test]
    fn test_format_price_text_non_numeric() {
        assert_eq!(format_price_text("abc"), "0,00");
        assert_eq!(format_price_text(""), "0,00");
        assert_eq!(format_price_text("1234.5"), "1.234,50");
    }

    #[test]
    fn test_to_fixed_2() {
        assert_eq!(to_fixed_2(12.5), "12.50");
        assert_eq!(to_fixed_2(3.0), "3.00");
        assert_eq!(to_fixed_2(19.999), "20.00");
        assert_eq!(to_fixed_2(-2.5), "-2.50");
        assert_eq!(to_fixed_2(-0.001), "0.00");
    }

    #[test]
    fn test_to_fixed_2_rounds_ties_up() {
        assert_eq!(to_fixed_2(0.125), "0.13");
        assert_eq!(to_fixed_2(1.125), "1.13");
        assert_eq!(to_fixed_2(0.125), format_price(0.125).replace(',', "."));
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(17.8), 18.0);
        assert_eq!(round_half_up(17.5), 18.0);
        assert_eq!(round_half_up(-2.5), -2.0);
    }

    #[test]
    fn test_format_euro() {
        assert_eq!(format_euro(180.0), "180,00 €");
    }
}
