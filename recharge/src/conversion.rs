//! Exact conversion of caller inputs into decimals
//!
//! Every argument to the calculator passes through [`IntoDecimal`]. Binary
//! floats are converted through their shortest round-trip text form rather
//! than their exact binary expansion, so `33.333_f64` becomes exactly
//! `33.333` and not `33.33299999999999840838...`.
//!
//! Text is trimmed and may use plain (`"12.50"`) or scientific (`"1.25e1"`)
//! notation. Anything else is rejected with [`RechargeError::InvalidInput`].
//! Numbers too large for the decimal range are [`RechargeError::ArithmeticOverflow`].

use crate::error::{RechargeError, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

/// A value that can be converted into an exact decimal
///
/// `field` names the argument being converted and is carried into the
/// error when conversion fails.
///
/// # Example
/// ```
/// use recharge::IntoDecimal;
/// use rust_decimal::Decimal;
///
/// let from_float = 33.333_f64.into_decimal("amount").unwrap();
/// assert_eq!(from_float.to_string(), "33.333");
///
/// let from_text = " 1.5e2 ".into_decimal("amount").unwrap();
/// assert_eq!(from_text, Decimal::from(150));
///
/// assert!("abc".into_decimal("amount").is_err());
/// ```
pub trait IntoDecimal {
    /// Convert `self` into a decimal, naming `field` on failure
    fn into_decimal(self, field: &'static str) -> Result<Decimal>;
}

impl IntoDecimal for Decimal {
    fn into_decimal(self, _field: &'static str) -> Result<Decimal> {
        Ok(self)
    }
}

impl IntoDecimal for &Decimal {
    fn into_decimal(self, _field: &'static str) -> Result<Decimal> {
        Ok(*self)
    }
}

macro_rules! impl_into_decimal_for_int {
    ($($int:ty),* $(,)?) => {
        $(
            impl IntoDecimal for $int {
                fn into_decimal(self, _field: &'static str) -> Result<Decimal> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_decimal_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoDecimal for f64 {
    fn into_decimal(self, field: &'static str) -> Result<Decimal> {
        if !self.is_finite() {
            return Err(RechargeError::invalid_input(field, self.to_string()));
        }
        parse_decimal(field, &self.to_string())
    }
}

impl IntoDecimal for f32 {
    fn into_decimal(self, field: &'static str) -> Result<Decimal> {
        if !self.is_finite() {
            return Err(RechargeError::invalid_input(field, self.to_string()));
        }
        parse_decimal(field, &self.to_string())
    }
}

impl IntoDecimal for &str {
    fn into_decimal(self, field: &'static str) -> Result<Decimal> {
        parse_decimal(field, self)
    }
}

impl IntoDecimal for String {
    fn into_decimal(self, field: &'static str) -> Result<Decimal> {
        parse_decimal(field, &self)
    }
}

impl IntoDecimal for &String {
    fn into_decimal(self, field: &'static str) -> Result<Decimal> {
        parse_decimal(field, self)
    }
}

/// Numbers with more integer digits than this cannot be represented
const MAX_POINT: i64 = 29;

/// Numbers whose first significant digit lies beyond this many fractional
/// places round to zero at the decimal's 28-digit scale limit
const MIN_POINT: i64 = -29;

/// Syntactically valid numeric text, normalized to plain notation
///
/// `digits` holds the significant digits without leading zeros and `point`
/// is the position of the decimal point counted from the first of them.
#[derive(Debug, PartialEq, Eq)]
struct NumericText {
    negative: bool,
    digits: String,
    point: i64,
}

impl NumericText {
    /// Accepts `[+-]digits[.digits][(e|E)[+-]digits]` with at least one mantissa digit
    fn parse(text: &str) -> Option<Self> {
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.strip_prefix('+').unwrap_or(text)),
        };
        let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => (mantissa, exponent.parse::<i64>().ok()?),
            None => (unsigned, 0),
        };
        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let is_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction)
        {
            return None;
        }

        let all_digits = format!("{whole}{fraction}");
        let significant = all_digits.trim_start_matches('0');
        let skipped = i64::try_from(all_digits.len().checked_sub(significant.len())?).ok()?;
        let point = i64::try_from(whole.len())
            .ok()?
            .checked_add(exponent)?
            .checked_sub(skipped)?;

        Some(Self {
            negative,
            digits: significant.to_string(),
            point,
        })
    }

    /// Convert to a decimal, rounding digits beyond the 28-digit scale limit
    ///
    /// Returns `None` when the integer part does not fit.
    fn to_decimal(&self) -> Option<Decimal> {
        if self.digits.is_empty() || self.point < MIN_POINT {
            return Some(Decimal::ZERO);
        }
        if self.point > MAX_POINT {
            return None;
        }

        let len = i64::try_from(self.digits.len()).ok()?;
        let plain = if self.point <= 0 {
            let zeros = "0".repeat(usize::try_from(self.point.checked_neg()?).ok()?);
            format!("0.{zeros}{}", self.digits)
        } else if self.point >= len {
            let zeros = "0".repeat(usize::try_from(self.point.checked_sub(len)?).ok()?);
            format!("{}{zeros}", self.digits)
        } else {
            let (whole, fraction) = self.digits.split_at(usize::try_from(self.point).ok()?);
            format!("{whole}.{fraction}")
        };
        let signed = if self.negative { format!("-{plain}") } else { plain };

        Decimal::from_str_exact(&signed)
            .or_else(|_| Decimal::from_str(&signed))
            .ok()
    }
}

/// Parse decimal text in plain or scientific notation
///
/// Digits are kept exactly when the decimal representation can hold them.
/// Fractional digits beyond its 28-digit scale limit are rounded away,
/// which never affects a value at cent precision.
///
/// # Errors
/// Returns `InvalidInput` when `text` is empty or not a number, and
/// `ArithmeticOverflow` when its integer part exceeds the decimal range
pub(crate) fn parse_decimal(field: &'static str, text: &str) -> Result<Decimal> {
    let numeric =
        NumericText::parse(text.trim()).ok_or_else(|| RechargeError::invalid_input(field, text))?;
    numeric
        .to_decimal()
        .ok_or_else(|| RechargeError::overflow("decimal conversion"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_float_goes_through_text() {
        let value = 33.333_f64.into_decimal("amount").unwrap();
        assert_eq!(value, dec!(33.333));
        assert_eq!(value.scale(), 3);

        assert_eq!(1.234_f64.into_decimal("fee_percent").unwrap(), dec!(1.234));
        assert_eq!(0.1_f32.into_decimal("amount").unwrap(), dec!(0.1));
    }

    #[test]
    fn test_non_finite_floats_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let error = value.into_decimal("amount").unwrap_err();
            assert!(error.is_invalid_input());
        }
    }

    #[test]
    fn test_integers() {
        assert_eq!(100_i32.into_decimal("amount").unwrap(), dec!(100));
        assert_eq!((-7_i64).into_decimal("amount").unwrap(), dec!(-7));
        assert_eq!(u64::MAX.into_decimal("amount").unwrap(), Decimal::from(u64::MAX));
    }

    #[test]
    fn test_text_forms() {
        assert_eq!("97.50".into_decimal("amount").unwrap(), dec!(97.50));
        assert_eq!("  12.5\n".into_decimal("amount").unwrap(), dec!(12.5));
        assert_eq!("-3".into_decimal("amount").unwrap(), dec!(-3));
        assert_eq!("1.5e2".into_decimal("amount").unwrap(), dec!(150));
        assert_eq!("25E-1".into_decimal("amount").unwrap(), dec!(2.5));
        assert_eq!(
            String::from("0.005").into_decimal("amount").unwrap(),
            dec!(0.005)
        );
    }

    #[test]
    fn test_bad_text_names_field() {
        let error = "abc".into_decimal("promo_bonus").unwrap_err();
        assert_eq!(error, RechargeError::invalid_input("promo_bonus", "abc"));

        assert!("".into_decimal("amount").is_err());
        assert!("   ".into_decimal("amount").is_err());
        assert!("1.2.3".into_decimal("amount").is_err());
        assert!("NaN".into_decimal("amount").is_err());
    }

    #[test]
    fn test_text_edge_forms() {
        assert_eq!(".5".into_decimal("amount").unwrap(), dec!(0.5));
        assert_eq!("1.".into_decimal("amount").unwrap(), dec!(1));
        assert_eq!("+2".into_decimal("amount").unwrap(), dec!(2));
        assert_eq!("007.10".into_decimal("amount").unwrap().to_string(), "7.10");
        assert_eq!("1e+2".into_decimal("amount").unwrap(), dec!(100));
        assert_eq!("-0.5E1".into_decimal("amount").unwrap(), dec!(-5));

        for bad in [".", "-", "e5", "1e", "1e2.5", "--1", "1_000", "0x10"] {
            assert!(bad.into_decimal("amount").unwrap_err().is_invalid_input(), "{bad}");
        }
    }

    #[test]
    fn test_excess_precision_rounds_instead_of_failing() {
        let tiny = "0.00000000000000000000000000000001"
            .into_decimal("amount")
            .unwrap();
        assert_eq!(tiny, Decimal::ZERO);

        assert_eq!(1e-30_f64.into_decimal("amount").unwrap(), Decimal::ZERO);
        assert_eq!("1e-30".into_decimal("promo_bonus").unwrap(), Decimal::ZERO);

        let near_one = "1.00000000000000000000000000000001"
            .into_decimal("amount")
            .unwrap();
        assert_eq!(near_one, dec!(1));
    }

    #[test]
    fn test_decimal_range_limits() {
        let max = "79228162514264337593543950335".into_decimal("amount").unwrap();
        assert_eq!(max, Decimal::MAX);
        assert_eq!(
            "1e28".into_decimal("amount").unwrap().to_string(),
            "10000000000000000000000000000"
        );

        let error = "79228162514264337593543950336".into_decimal("amount").unwrap_err();
        assert_eq!(error, RechargeError::overflow("decimal conversion"));
        assert_eq!(
            "1e29".into_decimal("amount").unwrap_err(),
            RechargeError::overflow("decimal conversion")
        );
        assert!(!1e300_f64.into_decimal("amount").unwrap_err().is_invalid_input());
    }
}
