// ============================================================================
// Big Number Interface
// Defines the arithmetic contract shared by all numeric value types
// ============================================================================

use crate::engine;
use crate::numeric::{Number, NumericError, NumericResult, Operation};

/// Polymorphic arithmetic contract implemented by `Integer`, `Decimal`,
/// and `Number`.
///
/// Every operation produces a new value; operands are never mutated.
/// Addition is the one operation with a defined algorithm: it runs the
/// digit-wise addition engine and re-classifies the normalized result
/// string, so the output type follows the result's shape rather than the
/// operand types. The remaining operations are declared extension points
/// and fail with `UnsupportedOperation` until an algorithm is designed
/// for them.
pub trait BigNumber {
    /// The canonical string form of this value.
    fn value(&self) -> &str;

    /// Add another value to this one.
    ///
    /// Integer + Integer always yields `Number::Integer`; any decimal
    /// operand yields `Number::Decimal` unless the fractional result
    /// cancels to zero.
    ///
    /// # Errors
    /// - `UnsupportedOperation(Subtract)` when the operand signs differ
    /// - `InvalidNumberFormat` if either canonical string is corrupt
    fn checked_add(&self, rhs: &dyn BigNumber) -> NumericResult<Number> {
        let combined = engine::add(self.value(), rhs.value())?;
        Number::classify(&combined)
    }

    /// Subtract another value from this one. Not yet supported.
    fn checked_sub(&self, _rhs: &dyn BigNumber) -> NumericResult<Number> {
        Err(NumericError::UnsupportedOperation(Operation::Subtract))
    }

    /// Multiply this value by another. Not yet supported.
    fn checked_mul(&self, _rhs: &dyn BigNumber) -> NumericResult<Number> {
        Err(NumericError::UnsupportedOperation(Operation::Multiply))
    }

    /// Divide this value by another. Not yet supported.
    fn checked_div(&self, _rhs: &dyn BigNumber) -> NumericResult<Number> {
        Err(NumericError::UnsupportedOperation(Operation::Divide))
    }

    /// Floor-divide this value by another. Not yet supported.
    fn checked_floor_div(&self, _rhs: &dyn BigNumber) -> NumericResult<Number> {
        Err(NumericError::UnsupportedOperation(Operation::FloorDivide))
    }

    /// Quotient and remainder of division by another value. Not yet
    /// supported.
    fn checked_divmod(&self, _rhs: &dyn BigNumber) -> NumericResult<(Number, Number)> {
        Err(NumericError::UnsupportedOperation(Operation::DivMod))
    }

    /// Raise this value to the given exponent. Not yet supported.
    fn checked_pow(&self, _exponent: &dyn BigNumber) -> NumericResult<Number> {
        Err(NumericError::UnsupportedOperation(Operation::Power))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Decimal, Integer};

    #[test]
    fn test_contract_is_object_safe() {
        let values: Vec<Box<dyn BigNumber>> = vec![
            Box::new(Integer::new("12").unwrap()),
            Box::new(Decimal::new("2.5").unwrap()),
        ];
        assert_eq!(values[0].value(), "12");
        assert_eq!(values[1].value(), "2.5");

        let total = values[0].checked_add(values[1].as_ref()).unwrap();
        assert_eq!(total.value(), "14.5");
    }

    #[test]
    fn test_unsupported_operations_signal() {
        let lhs = Integer::new(6i64).unwrap();
        let rhs = Integer::new(2i64).unwrap();

        assert_eq!(
            lhs.checked_sub(&rhs),
            Err(NumericError::UnsupportedOperation(Operation::Subtract))
        );
        assert_eq!(
            lhs.checked_mul(&rhs),
            Err(NumericError::UnsupportedOperation(Operation::Multiply))
        );
        assert_eq!(
            lhs.checked_div(&rhs),
            Err(NumericError::UnsupportedOperation(Operation::Divide))
        );
        assert_eq!(
            lhs.checked_floor_div(&rhs),
            Err(NumericError::UnsupportedOperation(Operation::FloorDivide))
        );
        assert_eq!(
            lhs.checked_divmod(&rhs),
            Err(NumericError::UnsupportedOperation(Operation::DivMod))
        );
        assert_eq!(
            lhs.checked_pow(&rhs),
            Err(NumericError::UnsupportedOperation(Operation::Power))
        );
    }
}
