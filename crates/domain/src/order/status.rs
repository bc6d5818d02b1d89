//! Order status lifecycle.

use serde::{Deserialize, Serialize};

/// The status of an order as it moves through the processing workflow.
///
/// Status transitions within one processing call:
/// ```text
/// Pending ──► Validated ──► PaymentProcessed ──► Completed
///    │            │                │
///    └────────────┴────────────────┴──► Failed
/// ```
///
/// `Shipped` and `Cancelled` are part of the model but never assigned by the
/// workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order was created and not processed yet.
    #[default]
    Pending,

    /// Order passed structural validation.
    Validated,

    /// Payment step succeeded.
    PaymentProcessed,

    /// Order left the warehouse.
    Shipped,

    /// Every workflow step succeeded (terminal state).
    Completed,

    /// A workflow step failed or faulted (terminal state).
    Failed,

    /// Order was cancelled (terminal state).
    Cancelled,
}

impl OrderStatus {
    /// Every declared status, in lifecycle order.
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Pending,
        OrderStatus::Validated,
        OrderStatus::PaymentProcessed,
        OrderStatus::Shipped,
        OrderStatus::Completed,
        OrderStatus::Failed,
        OrderStatus::Cancelled,
    ];

    /// Returns true if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Completed | OrderStatus::Failed | OrderStatus::Cancelled
        )
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Validated => "VALIDATED",
            OrderStatus::PaymentProcessed => "PAYMENT_PROCESSED",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Failed => "FAILED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
