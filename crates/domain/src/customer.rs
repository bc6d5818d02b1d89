//! Customer fixture data.

use serde::{Deserialize, Serialize};

use crate::order::{CustomerId, Money};

/// A customer placing orders.
///
/// Customers are read-only while orders are processed; one value is shared by
/// reference across every order of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer identifier.
    pub id: CustomerId,

    /// Display name.
    pub name: String,

    /// Where notifications are sent.
    pub email: String,

    /// Premium customers get a larger discount.
    pub is_premium: bool,

    /// Spending ceiling checked by credit-card payments on large amounts.
    pub credit_limit: Money,
}

impl Customer {
    /// Creates a regular customer with no credit limit.
    pub fn new(
        id: impl Into<CustomerId>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            is_premium: false,
            credit_limit: Money::zero(),
        }
    }

    /// Marks the customer as premium.
    pub fn premium(mut self) -> Self {
        self.is_premium = true;
        self
    }

    /// Sets the credit limit.
    pub fn with_credit_limit(mut self, credit_limit: Money) -> Self {
        self.credit_limit = credit_limit;
        self
    }
}
