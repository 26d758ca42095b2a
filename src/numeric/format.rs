// ============================================================================
// Format Classifier
// Shape predicates and canonicalization for decimal number strings
// ============================================================================
//
// The two shape predicates are the single source of truth for:
// - validating constructor input
// - deciding the output type of an arithmetic result
// - routing truncate/extend conversions between Integer and Decimal

use super::errors::{NumericError, NumericResult};

/// True if `value` is integer-shaped: an optional leading `-` followed by
/// one or more ASCII digits and nothing else.
#[inline]
pub fn is_integer_shape(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// True if `value` is decimal-shaped: an optional leading `-`, one or more
/// digits, a single `.`, and one or more digits.
#[inline]
pub fn is_decimal_shape(value: &str) -> bool {
    let unsigned = value.strip_prefix('-').unwrap_or(value);
    match unsigned.split_once('.') {
        Some((integer, fraction)) => {
            !integer.is_empty()
                && integer.bytes().all(|b| b.is_ascii_digit())
                && !fraction.is_empty()
                && fraction.bytes().all(|b| b.is_ascii_digit())
        },
        None => false,
    }
}

/// True if `value` matches either numeric shape.
#[inline]
pub fn is_number_shape(value: &str) -> bool {
    is_integer_shape(value) || is_decimal_shape(value)
}

// ============================================================================
// Conversions
// ============================================================================

/// Convert any valid number string into canonical integer shape.
///
/// Decimal-shaped input is truncated at the `.` (everything from the dot
/// onward is dropped, no rounding). Integer-shaped input passes through.
///
/// # Errors
/// Returns `InvalidNumberFormat` for any other input.
pub fn to_integer_shape(value: &str) -> NumericResult<String> {
    if is_decimal_shape(value) {
        let truncated = match value.split_once('.') {
            Some((integer, _fraction)) => integer,
            None => value,
        };
        return Ok(canonicalize_integer(truncated));
    }
    if is_integer_shape(value) {
        return Ok(canonicalize_integer(value));
    }
    Err(NumericError::InvalidNumberFormat)
}

/// Convert any valid number string into canonical decimal shape.
///
/// Integer-shaped input gets `.0` appended. Decimal-shaped input passes
/// through with its fractional digits intact.
///
/// # Errors
/// Returns `InvalidNumberFormat` for any other input.
pub fn to_decimal_shape(value: &str) -> NumericResult<String> {
    if is_integer_shape(value) {
        let mut extended = canonicalize_integer(value);
        extended.push_str(".0");
        return Ok(extended);
    }
    if is_decimal_shape(value) {
        return Ok(canonicalize_decimal(value));
    }
    Err(NumericError::InvalidNumberFormat)
}

// ============================================================================
// Canonicalization
// ============================================================================

/// Strip leading zeros down to a minimum length of 1.
///
/// Input must be digits only (no sign, no dot).
#[inline]
pub(crate) fn strip_leading_zeros(digits: &str) -> &str {
    let stripped = digits.trim_start_matches('0');
    if stripped.is_empty() {
        "0"
    } else {
        stripped
    }
}

/// Canonicalize an integer-shaped string: strip leading zeros of the
/// magnitude and drop the sign of a zero value (`"-0"` becomes `"0"`).
fn canonicalize_integer(value: &str) -> String {
    let (negative, unsigned) = split_sign(value);
    let magnitude = strip_leading_zeros(unsigned);
    if negative && magnitude != "0" {
        format!("-{}", magnitude)
    } else {
        magnitude.to_string()
    }
}

/// Canonicalize a decimal-shaped string: strip leading zeros of the
/// integer part, preserve the fractional digits exactly, and drop the
/// sign when the entire magnitude is zero (`"-0.00"` becomes `"0.00"`).
fn canonicalize_decimal(value: &str) -> String {
    let (negative, unsigned) = split_sign(value);
    let (integer, fraction) = match unsigned.split_once('.') {
        Some(parts) => parts,
        None => (unsigned, "0"),
    };
    let integer = strip_leading_zeros(integer);
    let zero_magnitude = integer == "0" && fraction.bytes().all(|b| b == b'0');
    if negative && !zero_magnitude {
        format!("-{}.{}", integer, fraction)
    } else {
        format!("{}.{}", integer, fraction)
    }
}

#[inline]
fn split_sign(value: &str) -> (bool, &str) {
    match value.strip_prefix('-') {
        Some(unsigned) => (true, unsigned),
        None => (false, value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_shape() {
        assert!(is_integer_shape("0"));
        assert!(is_integer_shape("42"));
        assert!(is_integer_shape("-7"));
        assert!(is_integer_shape("007"));

        assert!(!is_integer_shape(""));
        assert!(!is_integer_shape("-"));
        assert!(!is_integer_shape("1.5"));
        assert!(!is_integer_shape("12a"));
        assert!(!is_integer_shape("+3"));
        assert!(!is_integer_shape("--3"));
    }

    #[test]
    fn test_decimal_shape() {
        assert!(is_decimal_shape("0.0"));
        assert!(is_decimal_shape("19.99"));
        assert!(is_decimal_shape("-0.001"));

        assert!(!is_decimal_shape("42"));
        assert!(!is_decimal_shape(".5"));
        assert!(!is_decimal_shape("5."));
        assert!(!is_decimal_shape("1.2.3"));
        assert!(!is_decimal_shape("1,5"));
        assert!(!is_decimal_shape(""));
    }

    #[test]
    fn test_number_shape() {
        assert!(is_number_shape("12"));
        assert!(is_number_shape("-1.25"));
        assert!(!is_number_shape("12a"));
        assert!(!is_number_shape("1.2.3"));
    }

    #[test]
    fn test_to_integer_shape_truncates() {
        assert_eq!(to_integer_shape("19.99").unwrap(), "19");
        assert_eq!(to_integer_shape("-19.99").unwrap(), "-19");
        assert_eq!(to_integer_shape("42").unwrap(), "42");
    }

    #[test]
    fn test_to_integer_shape_normalizes() {
        assert_eq!(to_integer_shape("007").unwrap(), "7");
        assert_eq!(to_integer_shape("000").unwrap(), "0");
        assert_eq!(to_integer_shape("-0").unwrap(), "0");
        assert_eq!(to_integer_shape("-007").unwrap(), "-7");
        assert_eq!(to_integer_shape("-0.5").unwrap(), "0");
    }

    #[test]
    fn test_to_decimal_shape_extends() {
        assert_eq!(to_decimal_shape("4").unwrap(), "4.0");
        assert_eq!(to_decimal_shape("-4").unwrap(), "-4.0");
        assert_eq!(to_decimal_shape("2.5").unwrap(), "2.5");
    }

    #[test]
    fn test_to_decimal_shape_normalizes() {
        assert_eq!(to_decimal_shape("007.10").unwrap(), "7.10");
        assert_eq!(to_decimal_shape("-0.00").unwrap(), "0.00");
        assert_eq!(to_decimal_shape("-0.50").unwrap(), "-0.50");
    }

    #[test]
    fn test_conversions_reject_invalid() {
        for input in ["12a", "", "1.2.3", "one"] {
            assert_eq!(to_integer_shape(input), Err(NumericError::InvalidNumberFormat));
            assert_eq!(to_decimal_shape(input), Err(NumericError::InvalidNumberFormat));
        }
    }

    #[test]
    fn test_strip_leading_zeros() {
        assert_eq!(strip_leading_zeros("007"), "7");
        assert_eq!(strip_leading_zeros("0"), "0");
        assert_eq!(strip_leading_zeros("000"), "0");
        assert_eq!(strip_leading_zeros("10"), "10");
    }
}
