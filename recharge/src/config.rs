//! Fee configuration
//!
//! `FeeConfig` holds the two optional knobs of a recharge calculation,
//! the percentage fee and the flat promo bonus. Unset options fall back
//! to 2.5% and 0, both when built in code and when deserialized from a
//! host application's configuration. Deserialized values go through the
//! same conversion as calculator arguments, so the JSON number `1.234`
//! and the string `"1.234"` give the same decimal.

use crate::constants::{DEFAULT_FEE_PERCENT, DEFAULT_PROMO_BONUS, PERCENT_DIVISOR};
use crate::conversion::IntoDecimal;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};

/// Percentage fee and promo bonus applied to a payment
///
/// # Example
/// ```
/// use recharge::FeeConfig;
/// use rust_decimal::Decimal;
///
/// # fn main() -> recharge::Result<()> {
/// let config = FeeConfig::default().with_promo_bonus(5)?;
/// assert_eq!(config.fee_percent, Decimal::new(25, 1));
/// assert_eq!(config.promo_bonus, Decimal::from(5));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeConfig {
    /// Fee as a percentage of the amount (2.5 means 2.5%)
    #[serde(deserialize_with = "deserialize_fee_percent")]
    pub fee_percent: Decimal,

    /// Flat amount credited after the fee is deducted
    #[serde(deserialize_with = "deserialize_promo_bonus")]
    pub promo_bonus: Decimal,
}

/// A decimal config value as written by the host: text or a JSON number
#[derive(Deserialize)]
#[serde(untagged)]
enum DecimalValue {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
}

impl DecimalValue {
    fn into_decimal<E: de::Error>(self, field: &'static str) -> std::result::Result<Decimal, E> {
        match self {
            Self::Text(text) => text.into_decimal(field),
            Self::Signed(value) => value.into_decimal(field),
            Self::Unsigned(value) => value.into_decimal(field),
            Self::Float(value) => value.into_decimal(field),
        }
        .map_err(E::custom)
    }
}

fn deserialize_fee_percent<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Decimal, D::Error> {
    DecimalValue::deserialize(deserializer)?.into_decimal("fee_percent")
}

fn deserialize_promo_bonus<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Decimal, D::Error> {
    DecimalValue::deserialize(deserializer)?.into_decimal("promo_bonus")
}

impl FeeConfig {
    /// Create a configuration from already-exact decimals
    #[must_use]
    pub const fn new(fee_percent: Decimal, promo_bonus: Decimal) -> Self {
        Self {
            fee_percent,
            promo_bonus,
        }
    }

    /// Replace the fee percentage, keeping the current promo bonus
    pub fn with_fee_percent(self, fee_percent: impl IntoDecimal) -> Result<Self> {
        Ok(Self {
            fee_percent: fee_percent.into_decimal("fee_percent")?,
            ..self
        })
    }

    /// Replace the promo bonus, keeping the current fee percentage
    pub fn with_promo_bonus(self, promo_bonus: impl IntoDecimal) -> Result<Self> {
        Ok(Self {
            promo_bonus: promo_bonus.into_decimal("promo_bonus")?,
            ..self
        })
    }

    /// Whether the fee percentage lies within `[0, 100]`
    ///
    /// Values outside this range are still honored by the calculator.
    #[must_use]
    pub fn has_standard_fee_percent(&self) -> bool {
        self.fee_percent >= Decimal::ZERO && self.fee_percent <= PERCENT_DIVISOR
    }
}

impl Default for FeeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FEE_PERCENT, DEFAULT_PROMO_BONUS)
    }
}
