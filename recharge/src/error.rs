//! Error types for recharge calculations
//!
//! The calculator has two failure modes. An argument can fail to convert
//! into a decimal number, or an intermediate result can exceed the range
//! of the 96-bit decimal mantissa.
//!
//! # Example
//!
//! ```rust
//! use recharge::{calculate_received_amount, RechargeError};
//!
//! match calculate_received_amount("ten dollars", 2.5, 0) {
//!     Ok(received) => println!("User receives {received}"),
//!     Err(RechargeError::InvalidInput { field, value }) => {
//!         println!("Rejected {field}: {value:?}");
//!     }
//!     Err(other) => println!("Other error: {other}"),
//! }
//! ```

use thiserror::Error;

/// Result type for recharge operations
pub type Result<T> = std::result::Result<T, RechargeError>;

/// Errors that can occur while computing a received amount
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RechargeError {
    /// An argument could not be converted into a decimal number
    #[error("Invalid {field}: {value:?} is not a decimal number")]
    InvalidInput {
        /// Name of the offending argument (`amount`, `fee_percent`, `promo_bonus`)
        field: &'static str,
        /// The rejected input, rendered as text
        value: String,
    },

    /// An intermediate result does not fit in the decimal representation
    #[error("Arithmetic overflow during {operation}")]
    ArithmeticOverflow {
        /// The step that overflowed
        operation: &'static str,
    },
}

impl RechargeError {
    /// Build an `InvalidInput` error for the given argument name
    pub fn invalid_input(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            value: value.into(),
        }
    }

    /// Build an `ArithmeticOverflow` error for the given step
    #[must_use]
    pub const fn overflow(operation: &'static str) -> Self {
        Self::ArithmeticOverflow { operation }
    }

    /// Returns true when the error was caused by unparseable input
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
