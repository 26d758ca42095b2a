// ============================================================================
// Decimal Splitter
// Splits a canonical number string into integer and fractional parts
// ============================================================================

use crate::numeric::{format, NumericError, NumericResult};

/// A number's integer and fractional parts as two independent digit
/// strings.
///
/// Built on demand from a canonical string and discarded after the
/// arithmetic call that needed it; never persisted.
///
/// Invariants: `integer_part` is never empty and carries at most one
/// leading `-`; `fractional_part` is digits only and defaults to `"0"`
/// when the source value has no fractional component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitNumber {
    pub integer_part: String,
    pub fractional_part: String,
}

impl SplitNumber {
    /// Split a canonical number string.
    ///
    /// Decimal-shaped input splits at its single `.`; integer-shaped
    /// input keeps the whole value as the integer part.
    ///
    /// # Errors
    /// Returns `InvalidNumberFormat` when `value` matches neither shape.
    pub fn split(value: &str) -> NumericResult<Self> {
        if !format::is_number_shape(value) {
            return Err(NumericError::InvalidNumberFormat);
        }
        match value.split_once('.') {
            Some((integer, fraction)) => Ok(Self {
                integer_part: integer.to_string(),
                fractional_part: fraction.to_string(),
            }),
            None => Ok(Self {
                integer_part: value.to_string(),
                fractional_part: "0".to_string(),
            }),
        }
    }

    /// Re-join the parts into a number string: the integer part alone
    /// when the fractional part is `"0"`, otherwise `integer.fraction`.
    pub fn join(&self) -> String {
        if self.fractional_part == "0" {
            self.integer_part.clone()
        } else {
            format!("{}.{}", self.integer_part, self.fractional_part)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_decimal() {
        let parts = SplitNumber::split("19.99").unwrap();
        assert_eq!(parts.integer_part, "19");
        assert_eq!(parts.fractional_part, "99");
    }

    #[test]
    fn test_split_integer_defaults_fraction() {
        let parts = SplitNumber::split("42").unwrap();
        assert_eq!(parts.integer_part, "42");
        assert_eq!(parts.fractional_part, "0");
    }

    #[test]
    fn test_split_negative_keeps_sign_on_integer_part() {
        let parts = SplitNumber::split("-3.25").unwrap();
        assert_eq!(parts.integer_part, "-3");
        assert_eq!(parts.fractional_part, "25");
    }

    #[test]
    fn test_split_rejects_invalid() {
        for input in ["12a", "", "1.2.3", ".5", "5."] {
            assert_eq!(SplitNumber::split(input), Err(NumericError::InvalidNumberFormat));
        }
    }

    #[test]
    fn test_split_join_round_trip() {
        for value in ["0", "42", "-7", "19.99", "-0.001", "3.1415926535"] {
            let parts = SplitNumber::split(value).unwrap();
            assert_eq!(parts.join(), value, "round trip failed for {}", value);
        }
    }

    #[test]
    fn test_join_collapses_zero_fraction() {
        // A "0" fraction re-joins as the integer part alone
        let parts = SplitNumber::split("10.0").unwrap();
        assert_eq!(parts.join(), "10");
    }
}
