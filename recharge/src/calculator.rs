//! Fee-and-bonus calculator
//!
//! Computes what a user actually receives for a payment:
//!
//! ```text
//! fee      = amount * fee_percent / 100
//! received = round_half_up(amount - fee + promo_bonus, 2)
//! ```
//!
//! All arithmetic is exact decimal arithmetic. Nothing is rounded until the
//! final result, which is always quantized to cents.

use crate::config::FeeConfig;
use crate::constants::PERCENT_DIVISOR;
use crate::conversion::IntoDecimal;
use crate::error::{RechargeError, Result};
use crate::rounding::round_to_cents;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

/// Every intermediate value of one recharge calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RechargeBreakdown {
    /// The payment amount as converted from the caller's input
    pub amount: Decimal,
    /// Exact fee deducted from the amount, before any rounding
    pub fee: Decimal,
    /// Flat bonus credited after the fee
    pub promo_bonus: Decimal,
    /// Net amount received, quantized to two fractional digits
    pub received: Decimal,
}

/// Calculate what a user receives after the fee and promo bonus
///
/// `fee_percent` is a percentage (2.5 means 2.5%). Use
/// [`FeeConfig::received_amount`] with `FeeConfig::default()` for the
/// standard 2.5% fee and no bonus.
///
/// Negative amounts, negative bonuses and percentages outside `[0, 100]`
/// are accepted and computed as given.
///
/// # Errors
/// Returns `InvalidInput` naming the first argument that is not a decimal
/// number, or `ArithmeticOverflow` if an intermediate value or the result
/// quantized to cents exceeds the decimal range.
///
/// # Example
/// ```
/// use recharge::calculate_received_amount;
/// use rust_decimal::Decimal;
///
/// # fn main() -> recharge::Result<()> {
/// let received = calculate_received_amount(200, 2.0, 5)?;
/// assert_eq!(received, Decimal::from(201));
/// assert_eq!(received.to_string(), "201.00");
/// # Ok(())
/// # }
/// ```
pub fn calculate_received_amount(
    amount: impl IntoDecimal,
    fee_percent: impl IntoDecimal,
    promo_bonus: impl IntoDecimal,
) -> Result<Decimal> {
    let amount = amount.into_decimal("amount")?;
    let config = FeeConfig::new(
        fee_percent.into_decimal("fee_percent")?,
        promo_bonus.into_decimal("promo_bonus")?,
    );
    config.received_amount(amount)
}

impl FeeConfig {
    /// Net amount received for `amount` under this configuration
    ///
    /// # Example
    /// ```
    /// use recharge::FeeConfig;
    ///
    /// # fn main() -> recharge::Result<()> {
    /// let received = FeeConfig::default().received_amount(100)?;
    /// assert_eq!(received.to_string(), "97.50");
    /// # Ok(())
    /// # }
    /// ```
    pub fn received_amount(&self, amount: impl IntoDecimal) -> Result<Decimal> {
        self.breakdown(amount).map(|breakdown| breakdown.received)
    }

    /// Run the calculation and keep every intermediate value
    pub fn breakdown(&self, amount: impl IntoDecimal) -> Result<RechargeBreakdown> {
        let amount = amount.into_decimal("amount")?;

        if !self.has_standard_fee_percent() {
            warn!(
                fee_percent = %self.fee_percent,
                "Fee percentage outside [0, 100]; computing as given"
            );
        }

        let fee = amount
            .checked_mul(self.fee_percent)
            .ok_or_else(|| RechargeError::overflow("fee multiplication"))?
            .checked_div(PERCENT_DIVISOR)
            .ok_or_else(|| RechargeError::overflow("fee division"))?;

        let unrounded = amount
            .checked_sub(fee)
            .ok_or_else(|| RechargeError::overflow("fee deduction"))?
            .checked_add(self.promo_bonus)
            .ok_or_else(|| RechargeError::overflow("promo bonus addition"))?;

        let received = round_to_cents(unrounded)?;

        debug!(
            %amount,
            fee_percent = %self.fee_percent,
            promo_bonus = %self.promo_bonus,
            %fee,
            %received,
            "Calculated received amount"
        );

        Ok(RechargeBreakdown {
            amount,
            fee,
            promo_bonus: self.promo_bonus,
            received,
        })
    }
}
