//! Bank-transfer payments.

use domain::{Customer, Money, Order, OrderStatus, PaymentMethod};

use crate::context::StepContext;
use crate::error::StepError;
use crate::steps::final_amount;
use crate::variant::PaymentVariant;

/// Receiving bank.
pub const BANK_NAME: &str = "International Business Bank";

/// Receiving account number.
pub const ACCOUNT_NUMBER: &str = "1234-5678-9012-3456";

/// SWIFT routing code of the receiving bank.
pub const SWIFT_CODE: &str = "EMPBANK2025";

/// Account holder shown on the instructions.
pub const BENEFICIARY: &str = "Commercial Company Inc.";

const RULE: &str = "─────────────────────────────────────────────";

/// Pays the order by bank transfer.
///
/// The narrative says the order stays pending until the money arrives, but the
/// status is still set to `PaymentProcessed` and the workflow completes the
/// order in the same call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BankTransferVariant;

impl BankTransferVariant {
    /// Creates the variant.
    pub fn new() -> Self {
        Self
    }

    /// Returns the transfer reference for an order.
    pub fn reference(order: &Order) -> String {
        format!("ORD-{}", order.id())
    }
}

impl PaymentVariant for BankTransferVariant {
    fn method(&self) -> PaymentMethod {
        PaymentMethod::BankTransfer
    }

    fn process_payment(
        &self,
        order: &mut Order,
        _customer: &Customer,
        discount: Money,
        ctx: &mut StepContext<'_>,
    ) -> Result<bool, StepError> {
        ctx.info("Processing bank transfer...");

        let amount = final_amount(order, discount)?;

        ctx.info("Generating transfer instructions...");
        ctx.info(RULE);
        ctx.info("TRANSFER DETAILS:");
        ctx.info(format!("   Bank: {BANK_NAME}"));
        ctx.info(format!("   Account: {ACCOUNT_NUMBER}"));
        ctx.info(format!("   SWIFT: {SWIFT_CODE}"));
        ctx.info(format!("   Amount: {amount}"));
        ctx.info(format!("   Reference: {}", Self::reference(order)));
        ctx.info(format!("   Beneficiary: {BENEFICIARY}"));
        ctx.info(RULE);

        ctx.info("The order will remain pending until the transfer is received");
        ctx.info("Estimated confirmation time: 24-48 hours");

        order.set_status(OrderStatus::PaymentProcessed);
        ctx.info("Payment instructions generated");
        Ok(true)
    }

    fn send_payment_confirmation(
        &self,
        _order: &Order,
        customer: &Customer,
        ctx: &mut StepContext<'_>,
    ) -> Result<(), StepError> {
        ctx.info("Emailing transfer instructions...");
        ctx.info(format!("Instructions sent to {}", customer.email));
        ctx.info("A downloadable receipt is attached");
        Ok(())
    }

    fn after_processing(
        &self,
        _order: &Order,
        _customer: &Customer,
        ctx: &mut StepContext<'_>,
    ) -> Result<(), StepError> {
        ctx.info("Scheduling follow-up reminder...");
        ctx.info("A reminder will be sent in 24 hours if the payment is not confirmed");
        Ok(())
    }
}
