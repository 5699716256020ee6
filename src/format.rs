//! Numeric text: the canonical operand form stored in the calculator state
//! and the display form produced for the screen.

use serde::{Deserialize, Serialize};

/// Display configuration for [`CalculatorState::output_with`](crate::CalculatorState::output_with).
///
/// The defaults mirror a classic pocket calculator: up to 8 fraction digits,
/// no thousands separator, and `"Error"` for the error state.
///
/// # Examples
///
/// ```
/// use calcfold::NumberFormat;
///
/// let fmt = NumberFormat::default().with_grouping(true);
/// assert_eq!(fmt.format("1234567.50"), "1,234,567.5");
/// assert_eq!(NumberFormat::default().format("2."), "2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct NumberFormat {
    /// Maximum digits shown after the decimal point. Extra digits are rounded.
    pub max_fraction_digits: usize,
    /// Insert `,` between groups of three integer digits.
    pub grouping: bool,
    /// Text shown when the calculator is in the error state.
    pub error_text: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        NumberFormat {
            max_fraction_digits: 8,
            grouping: false,
            error_text: "Error".to_string(),
        }
    }
}

impl NumberFormat {
    pub fn with_max_fraction_digits(mut self, digits: usize) -> Self {
        self.max_fraction_digits = digits;
        self
    }

    pub fn with_grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }

    pub fn with_error_text(mut self, text: impl Into<String>) -> Self {
        self.error_text = text.into();
        self
    }

    /// Format operand text for display.
    ///
    /// Rounds to `max_fraction_digits`, then drops trailing zeros and a bare
    /// trailing point, so `"3.50"` and `"3."` show as `"3.5"` and `"3"`.
    /// Text that does not parse as a number shows as `error_text`.
    pub fn format(&self, text: &str) -> String {
        let Some(value) = parse(text) else {
            return self.error_text.clone();
        };
        let fixed = format!("{:.*}", self.max_fraction_digits, value);
        let trimmed = trim_fraction(&fixed);
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) if rest == "0" => (false, rest),
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let digits = if self.grouping {
            group_thousands(digits)
        } else {
            digits.to_string()
        };
        if negative {
            format!("-{digits}")
        } else {
            digits
        }
    }
}

/// Parse operand text. Accepts the in-progress forms the keypad produces,
/// such as `"12."` and `"-0.5"`. Non-finite values are rejected.
pub(crate) fn parse(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Canonical operand text for a computed value: shortest round-trip
/// decimal, no exponent, `-0` folded into `0`.
pub(crate) fn canonical(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn trim_fraction(fixed: &str) -> &str {
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed
    }
}

fn group_thousands(digits: &str) -> String {
    let (int, frac) = match digits.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (digits, None),
    };
    let mut out = String::with_capacity(digits.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_integers_have_no_point() {
        assert_eq!(canonical(20.0), "20");
        assert_eq!(canonical(-3.0), "-3");
    }

    #[test]
    fn canonical_negative_zero() {
        assert_eq!(canonical(-0.0), "0");
    }

    #[test]
    fn canonical_keeps_full_precision() {
        assert_eq!(canonical(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(canonical(0.05), "0.05");
    }

    #[test]
    fn format_trims_trailing_artifacts() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.format("12."), "12");
        assert_eq!(fmt.format("0.500"), "0.5");
        assert_eq!(fmt.format("0.30000000000000004"), "0.3");
        assert_eq!(fmt.format("0"), "0");
    }

    #[test]
    fn format_rounds_to_fraction_limit() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.format("0.3333333333333333"), "0.33333333");
        assert_eq!(fmt.format("0.6666666666666666"), "0.66666667");
        let two = NumberFormat::default().with_max_fraction_digits(2);
        assert_eq!(two.format("1.005"), "1");
        assert_eq!(two.format("2.499"), "2.5");
    }

    #[test]
    fn format_tiny_negative_rounds_to_plain_zero() {
        let fmt = NumberFormat::default();
        assert_eq!(fmt.format("-0.000000001"), "0");
        assert_eq!(fmt.format("-0"), "0");
    }

    #[test]
    fn format_grouping() {
        let fmt = NumberFormat::default().with_grouping(true);
        assert_eq!(fmt.format("999"), "999");
        assert_eq!(fmt.format("1000"), "1,000");
        assert_eq!(fmt.format("-1234567.25"), "-1,234,567.25");
    }

    #[test]
    fn format_unparsable_is_error_text() {
        let fmt = NumberFormat::default().with_error_text("E");
        assert_eq!(fmt.format("abc"), "E");
        assert_eq!(fmt.format("inf"), "E");
    }
}
