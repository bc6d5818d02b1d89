//! Credit-card payments.

use domain::{Customer, Money, Order, OrderStatus, PaymentMethod};

use crate::context::StepContext;
use crate::error::StepError;
use crate::steps::final_amount;
use crate::variant::PaymentVariant;

/// Charges above this amount are checked against the customer's credit limit.
pub const CREDIT_CHECK_THRESHOLD: Money = Money::from_dollars(5000);

/// Length of the synthetic authorization code, without the `AUTH-` prefix.
pub const AUTH_CODE_LEN: usize = 9;

/// Pays the order with the customer's credit card.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardVariant;

impl CreditCardVariant {
    /// Creates the variant.
    pub fn new() -> Self {
        Self
    }
}

impl PaymentVariant for CreditCardVariant {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::CreditCard
    }

    fn before_processing(
        &self,
        _order: &Order,
        _customer: &Customer,
        ctx: &mut StepContext<'_>,
    ) -> Result<(), StepError> {
        ctx.info("Verifying card security data...");
        ctx.info("Card security check completed");
        Ok(())
    }

    fn process_payment(
        &self,
        order: &mut Order,
        customer: &Customer,
        discount: Money,
        ctx: &mut StepContext<'_>,
    ) -> Result<bool, StepError> {
        ctx.info("Processing credit card payment...");

        let amount = final_amount(order, discount)?;

        if amount > CREDIT_CHECK_THRESHOLD {
            ctx.info("High amount detected, additional verification required");
            ctx.info("Checking credit limit...");

            if amount > customer.credit_limit {
                ctx.error("Insufficient credit limit");
                order.set_status(OrderStatus::Failed);
                return Ok(false);
            }
        }

        let auth_code = ctx.next_code(AUTH_CODE_LEN);
        ctx.info(format!("Charge of {amount} processed successfully"));
        ctx.info(format!("Bank authorization: AUTH-{auth_code}"));

        order.set_status(OrderStatus::PaymentProcessed);
        Ok(true)
    }

    fn send_payment_confirmation(
        &self,
        _order: &Order,
        _customer: &Customer,
        ctx: &mut StepContext<'_>,
    ) -> Result<(), StepError> {
        ctx.info("Sending card charge confirmation...");
        ctx.info("Confirmation sent: the charge will appear on your statement");
        Ok(())
    }
}
