// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_engine::prelude::*;

fn main() -> NumericResult<()> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Decimal Engine Example ===\n");

    // Construction from different input kinds
    println!("Constructing values...");
    let from_string = Integer::new("12")?;
    let from_native = Integer::new(30i64)?;
    let from_float = Decimal::new(2.5f64)?;
    println!("  Integer::new(\"12\")  -> {}", from_string);
    println!("  Integer::new(30)    -> {}", from_native);
    println!("  Decimal::new(2.5)   -> {}", from_float);

    // Canonicalization and conversion
    println!("\nCanonicalization...");
    println!("  Integer::new(\"007\")   -> {}", Integer::new("007")?);
    println!("  Integer::new(\"19.99\") -> {} (truncated)", Integer::new("19.99")?);
    println!("  Decimal::new(\"4\")     -> {} (extended)", Decimal::new("4")?);

    // Addition with type promotion
    println!("\n=== Addition ===");
    let integer_sum = from_string.checked_add(&from_native)?;
    println!("  12 + 30   = {} (integer: {})", integer_sum, integer_sum.is_integer());

    let mixed_sum = from_string.checked_add(&from_float)?;
    println!("  12 + 2.5  = {} (decimal: {})", mixed_sum, mixed_sum.is_decimal());

    let collapsed = Decimal::new("9.9")?.checked_add(&Decimal::new("0.1")?)?;
    println!("  9.9 + 0.1 = {} (fraction cancelled, back to integer)", collapsed);

    // Beyond native integer range
    println!("\n=== Arbitrary Precision ===");
    let huge: Number = "340282366920938463463374607431768211455".parse()?;
    let bigger = huge.checked_add(&Number::new("1")?)?;
    println!("  u128::MAX + 1 = {}", bigger);

    // Declared-but-unsupported operations signal instead of guessing
    println!("\n=== Extension Points ===");
    match from_string.checked_mul(&from_native) {
        Ok(product) => println!("  12 * 30 = {}", product),
        Err(error) => println!("  12 * 30 -> {}", error),
    }
    match Number::new("-2")?.checked_add(&Number::new("3")?) {
        Ok(sum) => println!("  -2 + 3  = {}", sum),
        Err(error) => println!("  -2 + 3  -> {}", error),
    }

    Ok(())
}
