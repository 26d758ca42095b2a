// ============================================================================
// Numeric Errors
// Error types for arbitrary-precision decimal operations
// ============================================================================

use std::fmt;

/// Arithmetic operations declared by the numeric contract but not yet
/// backed by an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Subtract,
    Multiply,
    Divide,
    FloorDivide,
    DivMod,
    Power,
}

impl Operation {
    /// Stable lowercase name, used in error messages and logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::FloorDivide => "floor-divide",
            Operation::DivMod => "divmod",
            Operation::Power => "power",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while constructing or combining numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input matches neither the integer nor the decimal shape
    InvalidNumberFormat,
    /// Pop attempted on an empty digit stack (digit bookkeeping bug)
    EmptyStack,
    /// Operation is declared by the contract but has no algorithm yet
    UnsupportedOperation(Operation),
    /// Value cannot be represented at an interop boundary without losing digits
    PrecisionLoss,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidNumberFormat => {
                write!(f, "invalid number format: value matches neither integer nor decimal shape")
            },
            NumericError::EmptyStack => {
                write!(f, "empty stack: pop attempted with no digits remaining")
            },
            NumericError::UnsupportedOperation(operation) => {
                write!(f, "unsupported operation: {} has no algorithm defined yet", operation)
            },
            NumericError::PrecisionLoss => {
                write!(f, "precision loss: value does not fit the interop decimal range")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::InvalidNumberFormat.to_string(),
            "invalid number format: value matches neither integer nor decimal shape"
        );
        assert_eq!(
            NumericError::EmptyStack.to_string(),
            "empty stack: pop attempted with no digits remaining"
        );
        assert_eq!(
            NumericError::UnsupportedOperation(Operation::Power).to_string(),
            "unsupported operation: power has no algorithm defined yet"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::InvalidNumberFormat, NumericError::InvalidNumberFormat);
        assert_ne!(NumericError::InvalidNumberFormat, NumericError::EmptyStack);
        assert_ne!(
            NumericError::UnsupportedOperation(Operation::Subtract),
            NumericError::UnsupportedOperation(Operation::Multiply)
        );
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(Operation::FloorDivide.as_str(), "floor-divide");
        assert_eq!(Operation::DivMod.to_string(), "divmod");
    }
}
