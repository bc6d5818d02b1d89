//! Order entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

use super::{CustomerId, Money, OrderId, OrderItem, OrderStatus, PaymentMethod};

/// An order awaiting or undergoing processing.
///
/// Everything except the status is fixed at construction. The status is
/// rewritten in place by the processing workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier.
    id: OrderId,

    /// Customer who placed the order.
    customer_id: CustomerId,

    /// Items in the order, in the order they were given.
    items: Vec<OrderItem>,

    /// Total amount as declared when the order was placed.
    total_amount: Money,

    /// Current status of the order.
    status: OrderStatus,

    /// When the order was created.
    created_at: DateTime<Utc>,

    /// How the order is paid for.
    payment_method: PaymentMethod,
}

impl Order {
    /// Creates a pending order stamped with the current time.
    pub fn new(
        id: impl Into<OrderId>,
        customer_id: impl Into<CustomerId>,
        items: Vec<OrderItem>,
        total_amount: Money,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
            total_amount,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            payment_method,
        }
    }

    /// Creates a pending order whose total is the sum of its item prices.
    ///
    /// Fails with [`DomainError::AmountOverflow`] when a line total or the sum
    /// does not fit.
    pub fn from_items(
        id: impl Into<OrderId>,
        customer_id: impl Into<CustomerId>,
        items: Vec<OrderItem>,
        payment_method: PaymentMethod,
    ) -> Result<Self, DomainError> {
        let line_totals = items
            .iter()
            .map(OrderItem::total_price)
            .collect::<Result<Vec<_>, _>>()?;
        let total = Money::checked_sum(line_totals).ok_or(DomainError::AmountOverflow {
            operation: "order total",
        })?;
        Ok(Self::new(id, customer_id, items, total, payment_method))
    }

    /// Replaces the creation timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Moves the order to `status`.
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }
}

// Query methods
impl Order {
    /// Returns the order ID.
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// Returns the customer ID.
    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    /// Returns the items in their original order.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Returns the number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the order has items.
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    /// Returns the declared total amount.
    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Returns the current status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the payment method.
    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    /// Returns true if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_items() -> Vec<OrderItem> {
        vec![
            OrderItem::new("P001", "Laptop", 2, Money::from_dollars(1200)),
            OrderItem::new("P002", "Mouse", 5, Money::from_dollars(25)),
        ]
    }

    #[test]
    fn test_new_order_is_pending() {
        let order = Order::new(
            "ORD001",
            "CUST001",
            sample_items(),
            Money::from_dollars(2525),
            PaymentMethod::CreditCard,
        );

        assert_eq!(order.id().as_str(), "ORD001");
        assert_eq!(order.customer_id().as_str(), "CUST001");
        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.item_count(), 2);
        assert!(order.has_items());
        assert!(!order.is_terminal());
    }

    #[test]
    fn test_items_keep_given_order() {
        let order =
            Order::from_items("ORD001", "CUST001", sample_items(), PaymentMethod::PayPal).unwrap();
        let ids: Vec<&str> = order.items().iter().map(|i| i.product_id.as_str()).collect();
        assert_eq!(ids, vec!["P001", "P002"]);
    }

    #[test]
    fn test_from_items_sums_prices() {
        let order =
            Order::from_items("ORD001", "CUST001", sample_items(), PaymentMethod::PayPal).unwrap();
        assert_eq!(order.total_amount(), Money::from_dollars(2525));
    }

    #[test]
    fn test_from_items_rejects_overflowing_line() {
        let items = vec![OrderItem::new("P001", "Gold", 100, Money::from_cents(i64::MAX / 50))];
        let result = Order::from_items("ORD001", "CUST001", items, PaymentMethod::PayPal);
        assert_eq!(
            result,
            Err(DomainError::AmountOverflow {
                operation: "line total"
            })
        );
    }

    #[test]
    fn test_from_items_rejects_overflowing_sum() {
        let items = vec![
            OrderItem::new("P001", "Gold", 1, Money::from_cents(i64::MAX)),
            OrderItem::new("P002", "Silver", 1, Money::from_cents(1)),
        ];
        let result = Order::from_items("ORD001", "CUST001", items, PaymentMethod::PayPal);
        assert_eq!(
            result,
            Err(DomainError::AmountOverflow {
                operation: "order total"
            })
        );
    }

    #[test]
    fn test_declared_total_is_kept() {
        let order = Order::new(
            "ORD009",
            "CUST001",
            sample_items(),
            Money::zero(),
            PaymentMethod::BankTransfer,
        );
        assert_eq!(order.total_amount(), Money::zero());
    }

    #[test]
    fn test_set_status() {
        let mut order =
            Order::from_items("ORD001", "CUST001", sample_items(), PaymentMethod::CreditCard)
                .unwrap();
        order.set_status(OrderStatus::Failed);
        assert_eq!(order.status(), OrderStatus::Failed);
        assert!(order.is_terminal());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let created = Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap();
        let order = Order::from_items("ORD002", "CUST001", sample_items(), PaymentMethod::PayPal)
            .unwrap()
            .with_created_at(created);

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["payment_method"], "paypal");
        assert_eq!(json["status"], "PENDING");

        let back: Order = serde_json::from_value(json).unwrap();
        assert_eq!(back, order);
        assert_eq!(back.created_at(), created);
    }
}
