//! Maps payment-method tags to variants.

use domain::{Customer, Order, PaymentMethod};

use crate::context::StepContext;
use crate::error::Result;
use crate::variant::PaymentVariant;
use crate::variants::{BankTransferVariant, CreditCardVariant, PayPalVariant};
use crate::workflow::{self, OrderProcessor};

/// Returns the variant for a payment method.
pub fn variant_for(method: PaymentMethod) -> Box<dyn PaymentVariant> {
    match method {
        PaymentMethod::CreditCard => Box::new(CreditCardVariant::new()),
        PaymentMethod::PayPal => Box::new(PayPalVariant::new()),
        PaymentMethod::BankTransfer => Box::new(BankTransferVariant::new()),
    }
}

/// Returns the variant for a wire tag such as `credit-card`.
///
/// Unknown tags are rejected with
/// [`DomainError::UnsupportedPaymentMethod`](domain::DomainError::UnsupportedPaymentMethod).
pub fn select_variant(tag: &str) -> Result<Box<dyn PaymentVariant>> {
    let method: PaymentMethod = tag.parse()?;
    Ok(variant_for(method))
}

/// Builds a processor for a wire tag.
pub fn create_processor(tag: &str) -> Result<OrderProcessor> {
    select_variant(tag).map(OrderProcessor::new)
}

/// Picks the variant from the order's payment method and runs the workflow.
#[tracing::instrument(skip_all, fields(payment_method = %order.payment_method()))]
pub fn process_order(order: &mut Order, customer: &Customer, ctx: &mut StepContext<'_>) -> bool {
    let variant = variant_for(order.payment_method());
    workflow::process_order(&*variant, order, customer, ctx)
}
