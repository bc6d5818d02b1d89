//! Sample customer and orders used by the demonstration.

use domain::{Customer, Money, Order, OrderItem, PaymentMethod};

/// Premium customer with a 10000 credit limit.
pub fn customer() -> Customer {
    Customer::new("CUST001", "Juan Pérez", "juan.perez@empresa.com")
        .premium()
        .with_credit_limit(Money::from_dollars(10_000))
}

/// Credit-card order totalling 2525.
pub fn credit_card_order() -> Order {
    Order::new(
        "ORD001",
        "CUST001",
        vec![
            OrderItem::new("P001", "Laptop Dell XPS 15", 2, Money::from_dollars(1200)),
            OrderItem::new("P002", "Mouse Logitech MX Master", 5, Money::from_dollars(25)),
        ],
        Money::from_dollars(2525),
        PaymentMethod::CreditCard,
    )
}

/// PayPal order totalling 350.
pub fn paypal_order() -> Order {
    Order::new(
        "ORD002",
        "CUST001",
        vec![OrderItem::new("P003", "Monitor Samsung 4K", 1, Money::from_dollars(350))],
        Money::from_dollars(350),
        PaymentMethod::PayPal,
    )
}

/// Bank-transfer order totalling 450.
pub fn bank_transfer_order() -> Order {
    Order::new(
        "ORD003",
        "CUST001",
        vec![OrderItem::new("P004", "Mechanical Keyboard RGB", 3, Money::from_dollars(150))],
        Money::from_dollars(450),
        PaymentMethod::BankTransfer,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::OrderStatus;

    #[test]
    fn test_fixture_totals() {
        assert_eq!(credit_card_order().total_amount(), Money::from_dollars(2525));
        assert_eq!(paypal_order().total_amount(), Money::from_dollars(350));
        assert_eq!(bank_transfer_order().total_amount(), Money::from_dollars(450));
    }

    #[test]
    fn test_declared_totals_match_line_totals() {
        for order in [credit_card_order(), paypal_order(), bank_transfer_order()] {
            let line_totals = order.items().iter().map(|item| item.total_price().unwrap());
            assert_eq!(Money::checked_sum(line_totals), Some(order.total_amount()));
        }
    }

    #[test]
    fn test_fixtures_start_pending_and_cover_every_method() {
        let orders = [credit_card_order(), paypal_order(), bank_transfer_order()];
        let methods: Vec<PaymentMethod> = orders.iter().map(Order::payment_method).collect();
        assert_eq!(methods, PaymentMethod::ALL.to_vec());
        assert!(orders.iter().all(|o| o.status() == OrderStatus::Pending));
        assert!(orders.iter().all(|o| o.customer_id() == &customer().id));
    }
}
