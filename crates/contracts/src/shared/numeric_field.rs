//! Normalisation of `<input type="number">` values on change.

use super::price_format::{parse_number, round_half_up, to_fixed_2};

/// How a number input is normalised, derived from its `step` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberStep {
    /// `step="0.01"` or `step="any"`: two decimals.
    Money,
    /// Anything else: rounded to an integer.
    Integer,
}

impl NumberStep {
    pub fn from_step_attr(step: &str) -> Self {
        match step {
            "0.01" | "any" => NumberStep::Money,
            _ => NumberStep::Integer,
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            NumberStep::Money => "0.01",
            NumberStep::Integer => "1",
        }
    }
}

/// Normalised text for `value`, or `None` when it is not a number and should
/// be left as typed.
pub fn normalize_number_input(value: &str, step: NumberStep) -> Option<String> {
    let parsed = parse_number(value)?;
    Some(match step {
        NumberStep::Money => to_fixed_2(parsed),
        NumberStep::Integer => {
            let rounded = round_half_up(parsed);
            if rounded == 0.0 {
                "0".to_string()
            } else {
                format!("{:.0}", rounded)
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_attr() {
        assert_eq!(NumberStep::from_step_attr("0.01"), NumberStep::Money);
        assert_eq!(NumberStep::from_step_attr("any"), NumberStep::Money);
        assert_eq!(NumberStep::from_step_attr("1"), NumberStep::Integer);
        assert_eq!(NumberStep::from_step_attr(""), NumberStep::Integer);
    }

    #[test]
    fn test_money_fields() {
        assert_eq!(normalize_number_input("12.5", NumberStep::Money).as_deref(), Some("12.50"));
        assert_eq!(normalize_number_input("7", NumberStep::Money).as_deref(), Some("7.00"));
        assert_eq!(normalize_number_input("0.125", NumberStep::Money).as_deref(), Some("0.13"));
    }

    #[test]
    fn test_integer_fields() {
        assert_eq!(normalize_number_input("2.5", NumberStep::Integer).as_deref(), Some("3"));
        assert_eq!(normalize_number_input("2.4", NumberStep::Integer).as_deref(), Some("2"));
        assert_eq!(normalize_number_input("-0.2", NumberStep::Integer).as_deref(), Some("0"));
    }

    #[test]
    fn test_non_numeric_left_alone() {
        assert_eq!(normalize_number_input("", NumberStep::Money), None);
        assert_eq!(normalize_number_input("abc", NumberStep::Integer), None);
    }
}
