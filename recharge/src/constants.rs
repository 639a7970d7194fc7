//! Calculation constants
//!
//! Defaults and fixed divisors used by the fee calculator.

use rust_decimal::Decimal;

/// Default fee percentage applied when none is configured (2.5%)
pub const DEFAULT_FEE_PERCENT: Decimal = Decimal::from_parts(25, 0, 0, false, 1);

/// Default flat promo bonus (none)
pub const DEFAULT_PROMO_BONUS: Decimal = Decimal::ZERO;

/// Divisor that turns a percentage into a rate (2.5 -> 0.025)
pub const PERCENT_DIVISOR: Decimal = Decimal::ONE_HUNDRED;

/// Number of fractional digits in a currency amount (cents)
pub const CURRENCY_SCALE: u32 = 2;
