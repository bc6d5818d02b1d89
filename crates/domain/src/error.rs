//! Domain error types.

use thiserror::Error;

/// Errors raised while building or interpreting domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The payment-method tag is not one of the supported methods.
    #[error("Unsupported payment method: {0}")]
    UnsupportedPaymentMethod(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },

    /// Invalid price.
    #[error("Invalid price: {price} (must not be negative)")]
    NegativePrice { price: i64 },

    /// An amount does not fit in the money representation.
    #[error("Amount overflow while computing {operation}")]
    AmountOverflow { operation: &'static str },
}
