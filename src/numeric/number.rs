// ============================================================================
// Numeric Value Types
// Integer and Decimal values backed by exact canonical digit strings
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::format;
use crate::interfaces::BigNumber;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Construction Input
// ============================================================================

/// Input accepted by the numeric value constructors.
///
/// Strings, native integers, native floats, and existing numeric values
/// all normalize to a string before shape validation. Float inputs use
/// `f64`'s `Display`, which always renders plain decimal notation;
/// non-finite floats render as non-number shapes and fail construction
/// with `InvalidNumberFormat`.
#[derive(Debug, Clone)]
pub enum NumericInput {
    Text(String),
    Int(i64),
    Float(f64),
}

impl NumericInput {
    fn into_text(self) -> String {
        match self {
            NumericInput::Text(text) => text,
            NumericInput::Int(value) => value.to_string(),
            NumericInput::Float(value) => value.to_string(),
        }
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        NumericInput::Text(value)
    }
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        NumericInput::Int(value)
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Float(value)
    }
}

impl From<&Integer> for NumericInput {
    fn from(value: &Integer) -> Self {
        NumericInput::Text(value.value().to_string())
    }
}

impl From<&Decimal> for NumericInput {
    fn from(value: &Decimal) -> Self {
        NumericInput::Text(value.value().to_string())
    }
}

impl From<&Number> for NumericInput {
    fn from(value: &Number) -> Self {
        NumericInput::Text(value.value().to_string())
    }
}

// ============================================================================
// Integer
// ============================================================================

/// Arbitrary-precision integer.
///
/// Holds one canonical string matching `-?digit+` with no redundant
/// leading zeros. Construction truncates any fractional component at the
/// decimal point (toward the point, no rounding): `"19.99"` becomes
/// `"19"`. Immutable after construction; arithmetic produces new values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Integer {
    value: String,
}

impl Integer {
    /// Build an integer from any accepted input.
    ///
    /// # Errors
    /// Returns `InvalidNumberFormat` when the normalized input matches
    /// neither numeric shape.
    ///
    /// # Example
    /// ```
    /// use decimal_engine::numeric::Integer;
    ///
    /// assert_eq!(Integer::new("19.99").unwrap().value(), "19");
    /// assert_eq!(Integer::new(-7i64).unwrap().value(), "-7");
    /// ```
    pub fn new<T: Into<NumericInput>>(value: T) -> NumericResult<Self> {
        let text = value.into().into_text();
        Ok(Self {
            value: format::to_integer_shape(&text)?,
        })
    }

    /// The canonical string form.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl BigNumber for Integer {
    fn value(&self) -> &str {
        &self.value
    }
}

impl FromStr for Integer {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

// ============================================================================
// Decimal
// ============================================================================

/// Arbitrary-precision decimal.
///
/// Holds one canonical string matching `-?digit+.digit+`. Construction
/// extends integer-shaped input with `.0` and preserves supplied
/// fractional digits exactly; only the integer part's leading zeros are
/// normalized. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Decimal {
    value: String,
}

impl Decimal {
    /// Build a decimal from any accepted input.
    ///
    /// # Errors
    /// Returns `InvalidNumberFormat` when the normalized input matches
    /// neither numeric shape.
    ///
    /// # Example
    /// ```
    /// use decimal_engine::numeric::Decimal;
    ///
    /// assert_eq!(Decimal::new("4").unwrap().value(), "4.0");
    /// assert_eq!(Decimal::new("007.25").unwrap().value(), "7.25");
    /// ```
    pub fn new<T: Into<NumericInput>>(value: T) -> NumericResult<Self> {
        let text = value.into().into_text();
        Ok(Self {
            value: format::to_decimal_shape(&text)?,
        })
    }

    /// The canonical string form.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl BigNumber for Decimal {
    fn value(&self) -> &str {
        &self.value
    }
}

impl FromStr for Decimal {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

// ============================================================================
// Number
// ============================================================================

/// A numeric value tagged by its shape.
///
/// The variant follows the canonical string: integer-shaped strings wrap
/// as `Integer`, decimal-shaped strings as `Decimal`. Arithmetic results
/// are re-classified through [`Number::classify`], which is what promotes
/// an integer sum to decimal (or collapses a zero-fraction decimal sum to
/// integer) independent of the operand types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    Integer(Integer),
    Decimal(Decimal),
}

impl Number {
    /// Build a number from any accepted input, keeping the input's own
    /// shape (no truncation or extension).
    ///
    /// # Errors
    /// Returns `InvalidNumberFormat` when the normalized input matches
    /// neither numeric shape.
    pub fn new<T: Into<NumericInput>>(value: T) -> NumericResult<Self> {
        let text = value.into().into_text();
        Self::classify(&text)
    }

    /// Classify a number string by shape and wrap it in the matching
    /// variant.
    ///
    /// # Errors
    /// Returns `InvalidNumberFormat` when `value` matches neither shape.
    pub fn classify(value: &str) -> NumericResult<Self> {
        if format::is_integer_shape(value) {
            return Ok(Number::Integer(Integer::new(value)?));
        }
        if format::is_decimal_shape(value) {
            return Ok(Number::Decimal(Decimal::new(value)?));
        }
        Err(NumericError::InvalidNumberFormat)
    }

    /// The canonical string form.
    #[inline]
    pub fn value(&self) -> &str {
        match self {
            Number::Integer(integer) => integer.value(),
            Number::Decimal(decimal) => decimal.value(),
        }
    }

    /// True when this value is integer-shaped.
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// True when this value is decimal-shaped.
    #[inline]
    pub fn is_decimal(&self) -> bool {
        matches!(self, Number::Decimal(_))
    }
}

impl BigNumber for Number {
    fn value(&self) -> &str {
        self.value()
    }
}

impl FromStr for Number {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl From<Integer> for Number {
    fn from(value: Integer) -> Self {
        Number::Integer(value)
    }
}

impl From<Decimal> for Number {
    fn from(value: Decimal) -> Self {
        Number::Decimal(value)
    }
}

// Infallible Add for ergonomics (panics on failure - use checked_add in production)
impl std::ops::Add for &Number {
    type Output = Number;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs).expect("Number addition failed")
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Number {
    /// Convert from `rust_decimal::Decimal`.
    ///
    /// This is intended for API boundaries only (accepting values from
    /// systems that already speak `rust_decimal`); the engine never
    /// computes in that representation.
    ///
    /// # Errors
    /// Returns `InvalidNumberFormat` if the rendered value does not
    /// match a numeric shape (does not happen for finite decimals).
    pub fn from_decimal(value: rust_decimal::Decimal) -> NumericResult<Self> {
        Self::classify(&value.to_string())
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// Returns `PrecisionLoss` when this value's digits exceed what a
    /// 96-bit `rust_decimal::Decimal` can hold exactly.
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::from_str_exact(self.value()).map_err(|_| NumericError::PrecisionLoss)
    }
}

// ============================================================================
// Tests
// ============================================================================
