// ============================================================================
// Addition Engine
// Digit-wise addition over canonical number strings with carry propagation
// ============================================================================
//
// Two stack passes linked by a single carry value:
// 1. fractional pass over the decimal-place-aligned fractional parts
// 2. integer pass over the integer parts, seeded with the outgoing carry
//
// The result is a normalized number string; the caller re-classifies it
// into the right value type.

use super::splitter::SplitNumber;
use crate::numeric::format::strip_leading_zeros;
use crate::numeric::{NumericError, NumericResult, Operation};
use crate::utils::DigitStack;

/// Add two canonical number strings and return the normalized result
/// string.
///
/// Same-sign operands add magnitudes and keep the shared sign. Combining
/// values of different sign needs subtraction logic, which is an open
/// extension point.
///
/// # Errors
/// - `InvalidNumberFormat` when either operand matches neither shape
/// - `UnsupportedOperation(Subtract)` when the operand signs differ
pub fn add(lhs: &str, rhs: &str) -> NumericResult<String> {
    let lhs_negative = lhs.starts_with('-');
    let rhs_negative = rhs.starts_with('-');

    let lhs_parts = SplitNumber::split(lhs.strip_prefix('-').unwrap_or(lhs))?;
    let rhs_parts = SplitNumber::split(rhs.strip_prefix('-').unwrap_or(rhs))?;

    if lhs_negative != rhs_negative {
        return Err(NumericError::UnsupportedOperation(Operation::Subtract));
    }

    let fractional = add_fractional_parts(&lhs_parts.fractional_part, &rhs_parts.fractional_part)?;
    let integer = add_integer_parts(&lhs_parts.integer_part, &rhs_parts.integer_part, fractional.carry)?;

    tracing::debug!(
        "digit-wise addition: integer parts {}+{}, fractional parts {}+{}, carry into integer pass {}",
        lhs_parts.integer_part,
        rhs_parts.integer_part,
        lhs_parts.fractional_part,
        rhs_parts.fractional_part,
        fractional.carry,
    );

    let magnitude = SplitNumber {
        integer_part: integer,
        fractional_part: fractional.digits,
    }
    .join();

    if lhs_negative && magnitude != "0" {
        Ok(format!("-{}", magnitude))
    } else {
        Ok(magnitude)
    }
}

/// Outcome of the fractional pass: the fractional digit string plus the
/// carry handed to the integer pass.
struct FractionalSum {
    digits: String,
    carry: u32,
}

/// Fractional pass. The shorter part is padded with trailing zeros so
/// tenths add with tenths and hundredths with hundredths, then both parts
/// walk through digit stacks least-significant-first.
///
/// An all-zero result collapses to `"0"` so the caller can promote the
/// sum to integer shape; any other leading zeros are significant decimal
/// places and stay.
fn add_fractional_parts(lhs: &str, rhs: &str) -> NumericResult<FractionalSum> {
    let width = lhs.len().max(rhs.len());
    let lhs_stack = DigitStack::from_decimal_digits(&pad_decimal_places(lhs, width))?;
    let rhs_stack = DigitStack::from_decimal_digits(&pad_decimal_places(rhs, width))?;

    let (result, carry) = add_digit_pairs(lhs_stack, rhs_stack, 0)?;
    let digits = drain_to_string(result)?;

    let digits = if digits.bytes().all(|b| b == b'0') {
        "0".to_string()
    } else {
        digits
    };

    Ok(FractionalSum { digits, carry })
}

/// Integer pass: the same digit-pair/carry procedure, seeded with the
/// carry that left the fractional pass. A final non-zero carry becomes
/// one extra most-significant digit.
fn add_integer_parts(lhs: &str, rhs: &str, seed_carry: u32) -> NumericResult<String> {
    let lhs_stack = DigitStack::from_decimal_digits(lhs)?;
    let rhs_stack = DigitStack::from_decimal_digits(rhs)?;

    let (mut result, carry) = add_digit_pairs(lhs_stack, rhs_stack, seed_carry)?;
    if carry > 0 {
        result.push(carry as u8);
    }

    let digits = drain_to_string(result)?;
    Ok(strip_leading_zeros(&digits).to_string())
}

/// Pop and add digit pairs from both stacks while both have digits, then
/// consume the longer stack's remaining digits with the running carry.
/// Emits least-significant digits first onto the result stack and returns
/// it with the final carry.
fn add_digit_pairs(
    mut lhs: DigitStack,
    mut rhs: DigitStack,
    mut carry: u32,
) -> NumericResult<(DigitStack, u32)> {
    let pairs = lhs.len().min(rhs.len());
    let remainder = lhs.len().max(rhs.len()) - pairs;

    let mut result = DigitStack::new();
    for _ in 0..pairs {
        let digit_sum = carry + u32::from(lhs.pop()?) + u32::from(rhs.pop()?);
        result.push((digit_sum % 10) as u8);
        carry = digit_sum / 10;
    }

    let mut longer = if lhs.is_empty() { rhs } else { lhs };
    for _ in 0..remainder {
        let digit_sum = carry + u32::from(longer.pop()?);
        result.push((digit_sum % 10) as u8);
        carry = digit_sum / 10;
    }

    Ok((result, carry))
}

/// Pop a result stack end-to-end, rebuilding the digits in left-to-right
/// (most-significant-first) order.
fn drain_to_string(mut stack: DigitStack) -> NumericResult<String> {
    let mut digits = String::with_capacity(stack.len());
    while !stack.is_empty() {
        let digit = stack.pop()?;
        digits.push(char::from(b'0' + digit));
    }
    Ok(digits)
}

/// Pad a fractional digit string with trailing zeros to `width` decimal
/// places.
fn pad_decimal_places(fraction: &str, width: usize) -> String {
    format!("{:0<width$}", fraction, width = width)
}
