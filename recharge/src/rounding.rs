//! Currency rounding
//!
//! `Decimal::round_dp` uses banker's rounding. Money here is rounded half
//! up instead: a value exactly halfway between two cents moves away from
//! zero, so `0.005` becomes `0.01` and `-0.005` becomes `-0.01`.

use crate::constants::CURRENCY_SCALE;
use crate::error::{RechargeError, Result};
use rust_decimal::{Decimal, RoundingStrategy};

/// Quantize a value to exactly two fractional digits, rounding half up
///
/// The result always has a scale of 2, including values that needed no
/// rounding (`50` becomes `50.00`).
///
/// # Errors
/// Returns `ArithmeticOverflow` when the value is too large to carry two
/// fractional digits (above roughly 7.9e26).
///
/// # Examples
/// ```
/// use recharge::rounding::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// # fn main() -> recharge::Result<()> {
/// let d = |s: &str| Decimal::from_str(s).unwrap();
///
/// assert_eq!(round_to_cents(d("123.454"))?, d("123.45"));
/// assert_eq!(round_to_cents(d("123.455"))?, d("123.46"));
/// assert_eq!(round_to_cents(d("-123.455"))?, d("-123.46"));
/// assert_eq!(round_to_cents(d("50"))?.to_string(), "50.00");
/// # Ok(())
/// # }
/// ```
pub fn round_to_cents(value: Decimal) -> Result<Decimal> {
    quantize(value, CURRENCY_SCALE)
}

/// Quantize a value to exactly `scale` fractional digits, rounding half up
pub(crate) fn quantize(value: Decimal, scale: u32) -> Result<Decimal> {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    // round_dp only ever lowers the scale; pad back up with trailing zeros
    rounded.rescale(scale);
    // rescale stops early when the mantissa cannot hold the extra zeros
    if rounded.scale() != scale {
        return Err(RechargeError::overflow("quantization"));
    }
    Ok(rounded)
}
