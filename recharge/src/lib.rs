//! Recharge - exact-decimal fee and promo bonus calculation
//!
//! This crate computes the net amount a user receives when topping up an
//! account: a percentage fee is deducted from the payment, a flat promo
//! bonus is added, and the result is rounded half up to cents.
//!
//! - Exact base-10 arithmetic via [`rust_decimal::Decimal`], never `f64`
//! - Float inputs converted through their shortest text form (`33.333` stays `33.333`)
//! - Results always carry exactly two fractional digits
//!
//! # Example Usage
//!
//! ```
//! use recharge::{calculate_received_amount, FeeConfig};
//!
//! # fn main() -> recharge::Result<()> {
//! // Explicit fee and bonus
//! let received = calculate_received_amount(200, 2.0, 5)?;
//! assert_eq!(received.to_string(), "201.00");
//!
//! // Default 2.5% fee, no bonus
//! let received = FeeConfig::default().received_amount(100)?;
//! assert_eq!(received.to_string(), "97.50");
//!
//! // Override one option, keep the other default
//! let config = FeeConfig::default().with_promo_bonus("1.50")?;
//! assert_eq!(config.received_amount(40)?.to_string(), "40.50");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod calculator;
pub mod config;
pub mod constants;
pub mod conversion;
pub mod error;
pub mod rounding;

// Re-export commonly used items
pub use calculator::{calculate_received_amount, RechargeBreakdown};
pub use config::FeeConfig;
pub use conversion::IntoDecimal;
pub use error::{RechargeError, Result};
pub use rounding::round_to_cents;

// Re-export the decimal type used throughout the public API
pub use rust_decimal::Decimal;
