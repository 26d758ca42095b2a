// ============================================================================
// Decimal Engine Library
// Arbitrary-precision decimal arithmetic over exact digit strings
// ============================================================================

//! # Decimal Engine
//!
//! An arbitrary-precision decimal number engine. Values are exact digit
//! sequences, never machine floats, so arithmetic carries no binary
//! rounding error at any magnitude.
//!
//! ## Features
//!
//! - **Exact representation**: one canonical string per value, integer
//!   (`-?digit+`) or decimal (`-?digit+.digit+`) shaped
//! - **Digit-stack addition**: two least-significant-first passes linked
//!   by a single carry, O(n) in total digit count
//! - **Shape-driven typing**: results re-classify as `Integer` or
//!   `Decimal` from the result string, not the operand types
//! - **Flexible construction**: from strings, native integers, native
//!   floats, or other numeric values
//! - **Pure computation**: no I/O, no shared state; values are immutable
//!   and safe to read from any thread
//!
//! ## Example
//!
//! ```rust
//! use decimal_engine::prelude::*;
//!
//! // Construction validates and canonicalizes
//! let price = Integer::new("12")?;
//! let fee = Decimal::new("2.5")?;
//!
//! // Addition promotes by result shape
//! let total = price.checked_add(&fee)?;
//! assert_eq!(total.value(), "14.5");
//! assert!(total.is_decimal());
//!
//! // A cancelled fraction collapses back to integer
//! let sum = Decimal::new("9.9")?.checked_add(&Decimal::new("0.1")?)?;
//! assert_eq!(sum.value(), "10");
//! assert!(sum.is_integer());
//! # Ok::<(), decimal_engine::numeric::NumericError>(())
//! ```

pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::engine::SplitNumber;
    pub use crate::interfaces::BigNumber;
    pub use crate::numeric::{
        Decimal, Integer, Number, NumericError, NumericInput, NumericResult, Operation,
    };
    pub use crate::utils::DigitStack;
}
