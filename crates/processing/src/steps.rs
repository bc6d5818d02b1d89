//! Common steps shared by every payment variant.

use domain::{Customer, Money, Order, OrderStatus};

use crate::context::StepContext;
use crate::error::StepError;

/// Largest quantity of a single item that stock can cover.
pub const MAX_STOCK_PER_ITEM: u32 = 100;

/// Discount granted to premium customers, in percent of the total.
pub const PREMIUM_DISCOUNT_PERCENT: u32 = 15;

/// Discount granted to regular customers, in percent of the total.
pub const REGULAR_DISCOUNT_PERCENT: u32 = 5;

/// Invoice issued once payment went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    /// `INV-` followed by the order ID.
    pub id: String,
    pub subtotal: Money,
    pub discount: Money,
    pub total: Money,
}

/// Checks that the order has items and a positive total.
///
/// Sets `Validated` on success and `Failed` otherwise.
pub fn validate_order(order: &mut Order, ctx: &mut StepContext<'_>) -> bool {
    ctx.info("Validating order...");

    if !order.has_items() {
        ctx.error("Error: the order has no items");
        order.set_status(OrderStatus::Failed);
        return false;
    }

    if !order.total_amount().is_positive() {
        ctx.error("Error: the order total is invalid");
        order.set_status(OrderStatus::Failed);
        return false;
    }

    order.set_status(OrderStatus::Validated);
    ctx.info("Order validated");
    true
}

/// Checks that no item exceeds [`MAX_STOCK_PER_ITEM`].
///
/// Leaves the status untouched on success and sets `Failed` otherwise.
pub fn check_inventory(order: &mut Order, ctx: &mut StepContext<'_>) -> bool {
    ctx.info("Checking product availability...");

    let short = order
        .items()
        .iter()
        .find(|item| item.quantity > MAX_STOCK_PER_ITEM)
        .map(|item| item.product_name.clone());

    if let Some(product_name) = short {
        ctx.error(format!("Insufficient stock for {product_name}"));
        order.set_status(OrderStatus::Failed);
        return false;
    }

    ctx.info("Products available");
    true
}

/// Returns the discount percentage a customer is entitled to.
pub fn discount_percent(customer: &Customer) -> u32 {
    if customer.is_premium {
        PREMIUM_DISCOUNT_PERCENT
    } else {
        REGULAR_DISCOUNT_PERCENT
    }
}

/// Computes the discount without emitting anything.
pub fn discount_for(order: &Order, customer: &Customer) -> Result<Money, StepError> {
    order
        .total_amount()
        .checked_percentage(discount_percent(customer))
        .ok_or(StepError::AmountOverflow {
            operation: "discount",
        })
}

/// Computes and announces the customer's discount.
pub fn calculate_discount(
    order: &Order,
    customer: &Customer,
    ctx: &mut StepContext<'_>,
) -> Result<Money, StepError> {
    ctx.info("Calculating discounts...");

    let discount = discount_for(order, customer)?;
    if customer.is_premium {
        ctx.info(format!("Premium discount applied: {discount}"));
    } else {
        ctx.info(format!("Regular discount applied: {discount}"));
    }

    Ok(discount)
}

/// Returns the amount the customer pays: total minus discount.
pub fn final_amount(order: &Order, discount: Money) -> Result<Money, StepError> {
    order
        .total_amount()
        .checked_sub(discount)
        .ok_or(StepError::AmountOverflow {
            operation: "final amount",
        })
}

/// Issues the invoice for the order.
pub fn generate_invoice(
    order: &Order,
    _customer: &Customer,
    discount: Money,
    ctx: &mut StepContext<'_>,
) -> Result<Invoice, StepError> {
    ctx.info("Generating invoice...");

    let invoice = Invoice {
        id: format!("INV-{}", order.id()),
        subtotal: order.total_amount(),
        discount,
        total: final_amount(order, discount)?,
    };

    ctx.info(format!("Invoice generated: {}", invoice.id));
    ctx.info(format!("   Subtotal: {}", invoice.subtotal));
    ctx.info(format!("   Discount: -{}", invoice.discount));
    ctx.info(format!("   Total: {}", invoice.total));

    Ok(invoice)
}

/// Sends the generic processed-order notification.
pub fn notify_customer(order: &Order, customer: &Customer, ctx: &mut StepContext<'_>) {
    ctx.info("Sending customer notification...");
    ctx.info(format!("Email sent to {}", customer.email));
    ctx.info(format!("   Subject: Your order {} has been processed", order.id()));
}
