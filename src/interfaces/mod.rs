// ============================================================================
// Interfaces Module
// Contracts shared by the numeric value types
// ============================================================================

mod big_number;

pub use big_number::BigNumber;
