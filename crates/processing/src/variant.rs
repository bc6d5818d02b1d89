//! The capability a payment variant supplies to the workflow.

use domain::{Customer, Money, Order, PaymentMethod};

use crate::context::StepContext;
use crate::error::StepError;

/// Variant-specific steps of the order-processing workflow.
///
/// Implementors provide the two mandatory steps and may override the two
/// hooks, which default to doing nothing. The order in which the steps run is
/// owned by [`crate::workflow::process_order`] and cannot be changed here.
pub trait PaymentVariant: Send + Sync {
    /// The payment method this variant handles.
    fn method(&self) -> PaymentMethod;

    /// Charges the order.
    ///
    /// On success the variant sets the status to `PaymentProcessed` and
    /// returns `Ok(true)`. A declined payment sets `Failed` and returns
    /// `Ok(false)`. `Err` is reserved for faults.
    fn process_payment(
        &self,
        order: &mut Order,
        customer: &Customer,
        discount: Money,
        ctx: &mut StepContext<'_>,
    ) -> Result<bool, StepError>;

    /// Sends the variant-flavoured payment confirmation.
    fn send_payment_confirmation(
        &self,
        order: &Order,
        customer: &Customer,
        ctx: &mut StepContext<'_>,
    ) -> Result<(), StepError>;

    /// Runs before validation.
    fn before_processing(
        &self,
        _order: &Order,
        _customer: &Customer,
        _ctx: &mut StepContext<'_>,
    ) -> Result<(), StepError> {
        Ok(())
    }

    /// Runs after the customer was notified, only when every prior step succeeded.
    fn after_processing(
        &self,
        _order: &Order,
        _customer: &Customer,
        _ctx: &mut StepContext<'_>,
    ) -> Result<(), StepError> {
        Ok(())
    }
}
