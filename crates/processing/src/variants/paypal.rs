//! PayPal payments.

use domain::{Customer, Money, Order, OrderStatus, PaymentMethod};

use crate::context::StepContext;
use crate::error::StepError;
use crate::steps::final_amount;
use crate::variant::PaymentVariant;

/// Base of the checkout URL the customer is redirected to.
pub const CHECKOUT_BASE_URL: &str = "https://paypal.com/checkout";

/// Length of the synthetic transaction ID.
pub const TRANSACTION_ID_LEN: usize = 12;

/// Pays the order through PayPal. Authorization always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayPalVariant;

impl PayPalVariant {
    /// Creates the variant.
    pub fn new() -> Self {
        Self
    }

    /// Returns the checkout URL for an order.
    pub fn authorization_url(order: &Order) -> String {
        format!("{CHECKOUT_BASE_URL}/{}", order.id())
    }
}

impl PaymentVariant for PayPalVariant {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::PayPal
    }

    fn before_processing(
        &self,
        _order: &Order,
        _customer: &Customer,
        ctx: &mut StepContext<'_>,
    ) -> Result<(), StepError> {
        ctx.info("Verifying the customer's PayPal account...");
        ctx.info("PayPal account verified");
        Ok(())
    }

    fn process_payment(
        &self,
        order: &mut Order,
        _customer: &Customer,
        discount: Money,
        ctx: &mut StepContext<'_>,
    ) -> Result<bool, StepError> {
        ctx.info("Processing PayPal payment...");

        let amount = final_amount(order, discount)?;

        ctx.info("Generating PayPal authorization URL...");
        ctx.info(format!("URL generated: {}", Self::authorization_url(order)));
        ctx.info(format!("Redirecting to PayPal to authorize {amount}"));

        ctx.info("Waiting for user authorization...");
        ctx.info("Payment authorized by PayPal");
        let transaction_id = ctx.next_code(TRANSACTION_ID_LEN);
        ctx.info(format!("Transaction ID: {transaction_id}"));

        order.set_status(OrderStatus::PaymentProcessed);
        Ok(true)
    }

    fn send_payment_confirmation(
        &self,
        _order: &Order,
        customer: &Customer,
        ctx: &mut StepContext<'_>,
    ) -> Result<(), StepError> {
        ctx.info("Sending PayPal confirmation...");
        ctx.info(format!("PayPal receipt sent to {}", customer.email));
        ctx.info("Details are available in your PayPal account");
        Ok(())
    }
}
