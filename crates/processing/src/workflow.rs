//! The order-processing template.
//!
//! [`process_order`] owns the step sequence. Variants only fill in the steps
//! marked [`StepKind::Variant`](crate::step::StepKind::Variant) and may
//! override the hooks; they cannot reorder, skip or repeat anything.

use std::sync::Arc;
use std::time::Instant;

use common::{IdGenerator, OutputSink, UuidIdGenerator};
use domain::{Customer, Order, OrderStatus, PaymentMethod};

use crate::context::StepContext;
use crate::error::{ProcessingError, Result, StepError};
use crate::step::Step;
use crate::steps;
use crate::variant::PaymentVariant;

/// Runs the full workflow for one order.
///
/// Returns `true` and leaves the order `Completed` when every step succeeded.
/// Any business failure or fault leaves the order `Failed` and returns
/// `false`; faults additionally emit an error line naming the order. Nothing
/// is retried and a terminal order is processed again from the start.
#[tracing::instrument(
    skip_all,
    fields(order_id = %order.id(), payment_method = %variant.method())
)]
pub fn process_order(
    variant: &dyn PaymentVariant,
    order: &mut Order,
    customer: &Customer,
    ctx: &mut StepContext<'_>,
) -> bool {
    let method = variant.method().as_str();
    metrics::counter!("orders_processed_total", "payment_method" => method).increment(1);
    let started = Instant::now();

    ctx.info(format!("=== Processing order {} ===", order.id()));

    let outcome = run_steps(variant, order, customer, ctx);

    metrics::histogram!("order_processing_duration_seconds", "payment_method" => method)
        .record(started.elapsed().as_secs_f64());

    match outcome {
        Ok(true) => {
            order.set_status(OrderStatus::Completed);
            ctx.info(format!("Order {} processed successfully", order.id()));
            metrics::counter!("orders_completed_total", "payment_method" => method).increment(1);
            tracing::info!(total = %order.total_amount(), "order completed");
            true
        }
        Ok(false) => {
            order.set_status(OrderStatus::Failed);
            metrics::counter!("orders_failed_total", "payment_method" => method).increment(1);
            tracing::warn!("order rejected");
            false
        }
        Err(err) => {
            tracing::error!(error = %err, "order processing faulted");
            ctx.error(format!("Error processing order {}: {err}", order.id()));
            order.set_status(OrderStatus::Failed);
            metrics::counter!("orders_failed_total", "payment_method" => method).increment(1);
            false
        }
    }
}

/// Runs the nine steps in order, stopping at the first failure or fault.
fn run_steps(
    variant: &dyn PaymentVariant,
    order: &mut Order,
    customer: &Customer,
    ctx: &mut StepContext<'_>,
) -> Result<bool> {
    enter(Step::BeforeProcessing);
    variant
        .before_processing(order, customer, ctx)
        .map_err(fault(Step::BeforeProcessing))?;

    enter(Step::ValidateOrder);
    if !steps::validate_order(order, ctx) {
        return Ok(false);
    }

    enter(Step::CheckInventory);
    if !steps::check_inventory(order, ctx) {
        return Ok(false);
    }

    enter(Step::CalculateDiscount);
    let discount =
        steps::calculate_discount(order, customer, ctx).map_err(fault(Step::CalculateDiscount))?;

    enter(Step::ProcessPayment);
    if !variant
        .process_payment(order, customer, discount, ctx)
        .map_err(fault(Step::ProcessPayment))?
    {
        return Ok(false);
    }

    enter(Step::GenerateInvoice);
    let invoice = steps::generate_invoice(order, customer, discount, ctx)
        .map_err(fault(Step::GenerateInvoice))?;
    tracing::debug!(invoice = %invoice.id, total = %invoice.total, "invoice issued");

    enter(Step::SendPaymentConfirmation);
    variant
        .send_payment_confirmation(order, customer, ctx)
        .map_err(fault(Step::SendPaymentConfirmation))?;

    enter(Step::NotifyCustomer);
    steps::notify_customer(order, customer, ctx);

    enter(Step::AfterProcessing);
    variant
        .after_processing(order, customer, ctx)
        .map_err(fault(Step::AfterProcessing))?;

    Ok(true)
}

fn enter(step: Step) {
    tracing::debug!(step = %step, position = step.position(), kind = %step.kind(), "step started");
}

fn fault(step: Step) -> impl FnOnce(StepError) -> ProcessingError {
    move |source| ProcessingError::step_fault(step, source)
}

/// A payment variant bound to an identifier generator.
///
/// This is the object callers hold on to: build it once, then feed it orders.
pub struct OrderProcessor {
    variant: Box<dyn PaymentVariant>,
    ids: Arc<dyn IdGenerator>,
}

impl OrderProcessor {
    /// Creates a processor drawing codes from random UUIDs.
    pub fn new(variant: Box<dyn PaymentVariant>) -> Self {
        Self {
            variant,
            ids: Arc::new(UuidIdGenerator::new()),
        }
    }

    /// Creates a processor from a concrete variant.
    pub fn from_variant<V: PaymentVariant + 'static>(variant: V) -> Self {
        Self::new(Box::new(variant))
    }

    /// Replaces the identifier generator.
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Returns the wrapped variant.
    pub fn variant(&self) -> &dyn PaymentVariant {
        &*self.variant
    }

    /// Returns the payment method this processor handles.
    pub fn method(&self) -> PaymentMethod {
        self.variant.method()
    }

    /// Processes an order, writing every line to `sink`.
    pub fn process_order(
        &self,
        order: &mut Order,
        customer: &Customer,
        sink: &mut dyn OutputSink,
    ) -> bool {
        let mut ctx = StepContext::new(sink, self.ids.as_ref());
        process_order(&*self.variant, order, customer, &mut ctx)
    }
}

impl std::fmt::Debug for OrderProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderProcessor")
            .field("method", &self.method())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{CapturedOutput, SequentialIdGenerator};
    use domain::{Money, OrderItem};

    /// Variant that records which of its steps ran and can be told to fault.
    #[derive(Default)]
    struct Scripted {
        fault_in_payment: bool,
        fault_in_after: bool,
    }

    impl PaymentVariant for Scripted {
        fn method(&self) -> PaymentMethod {
            PaymentMethod::PayPal
        }

        fn before_processing(
            &self,
            _order: &Order,
            _customer: &Customer,
            ctx: &mut StepContext<'_>,
        ) -> std::result::Result<(), StepError> {
            ctx.info("scripted: before");
            Ok(())
        }

        fn process_payment(
            &self,
            order: &mut Order,
            _customer: &Customer,
            _discount: Money,
            ctx: &mut StepContext<'_>,
        ) -> std::result::Result<bool, StepError> {
            if self.fault_in_payment {
                return Err(StepError::fault("gateway unreachable"));
            }
            ctx.info("scripted: payment");
            order.set_status(OrderStatus::PaymentProcessed);
            Ok(true)
        }

        fn send_payment_confirmation(
            &self,
            _order: &Order,
            _customer: &Customer,
            ctx: &mut StepContext<'_>,
        ) -> std::result::Result<(), StepError> {
            ctx.info("scripted: confirmation");
            Ok(())
        }

        fn after_processing(
            &self,
            _order: &Order,
            _customer: &Customer,
            ctx: &mut StepContext<'_>,
        ) -> std::result::Result<(), StepError> {
            if self.fault_in_after {
                return Err(StepError::fault("reminder queue full"));
            }
            ctx.info("scripted: after");
            Ok(())
        }
    }

    fn order() -> Order {
        Order::from_items(
            "ORD900",
            "CUST001",
            vec![OrderItem::new("P001", "Laptop", 1, Money::from_dollars(100))],
            PaymentMethod::PayPal,
        )
        .unwrap()
    }

    fn customer() -> Customer {
        Customer::new("CUST001", "Jane Doe", "jane@example.com")
    }

    fn run(variant: &dyn PaymentVariant, order: &mut Order) -> (bool, CapturedOutput) {
        let mut out = CapturedOutput::new();
        let ids = SequentialIdGenerator::new();
        let mut ctx = StepContext::new(&mut out, &ids);
        let ok = process_order(variant, order, &customer(), &mut ctx);
        (ok, out)
    }

    fn position_of(out: &CapturedOutput, needle: &str) -> usize {
        out.lines()
            .iter()
            .position(|line| line.text.contains(needle))
            .unwrap_or(usize::MAX)
    }

    #[test]
    fn test_steps_run_in_fixed_order() {
        let mut order = order();
        let (ok, out) = run(&Scripted::default(), &mut order);

        assert!(ok);
        assert_eq!(order.status(), OrderStatus::Completed);

        let markers = [
            "=== Processing order ORD900 ===",
            "scripted: before",
            "Validating order",
            "Checking product availability",
            "Calculating discounts",
            "scripted: payment",
            "Generating invoice",
            "scripted: confirmation",
            "Sending customer notification",
            "scripted: after",
            "Order ORD900 processed successfully",
        ];
        let positions: Vec<usize> = markers.iter().map(|m| position_of(&out, m)).collect();
        assert!(positions.iter().all(|&p| p != usize::MAX));
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_fault_is_contained_and_reported() {
        let mut order = order();
        let variant = Scripted {
            fault_in_payment: true,
            ..Scripted::default()
        };
        let (ok, out) = run(&variant, &mut order);

        assert!(!ok);
        assert_eq!(order.status(), OrderStatus::Failed);
        let error = out.errors().last().unwrap();
        assert!(error.text.starts_with("Error processing order ORD900:"));
        assert!(error.text.contains("process_payment"));
        assert!(error.text.contains("gateway unreachable"));
        assert!(!out.contains("Generating invoice"));
    }

    #[test]
    fn test_fault_in_last_hook_overrides_completion() {
        let mut order = order();
        let variant = Scripted {
            fault_in_after: true,
            ..Scripted::default()
        };
        let (ok, out) = run(&variant, &mut order);

        assert!(!ok);
        assert_eq!(order.status(), OrderStatus::Failed);
        assert!(out.contains("Sending customer notification"));
        assert!(!out.contains("processed successfully"));
    }

    #[test]
    fn test_business_failure_stops_before_discount() {
        let mut order = Order::new("ORD901", "CUST001", vec![], Money::zero(), PaymentMethod::PayPal);
        let (ok, out) = run(&Scripted::default(), &mut order);

        assert!(!ok);
        assert_eq!(order.status(), OrderStatus::Failed);
        assert!(out.contains("scripted: before"));
        assert!(!out.contains("Calculating discounts"));
        assert!(!out.contains("Error processing order"));
    }

    #[test]
    fn test_processor_uses_injected_ids() {
        let processor = OrderProcessor::from_variant(crate::variants::PayPalVariant::new())
            .with_id_generator(Arc::new(SequentialIdGenerator::new()));
        let mut out = CapturedOutput::new();
        let mut order = order();

        assert!(processor.process_order(&mut order, &customer(), &mut out));
        assert_eq!(processor.method(), PaymentMethod::PayPal);
        assert!(out.contains("Transaction ID: 000000000001"));
    }

    #[test]
    fn test_processor_accepts_closure_sink() {
        let processor = OrderProcessor::from_variant(Scripted::default());
        let mut count = 0usize;
        let mut sink = |_line: common::OutputLine| count += 1;
        let mut order = order();

        assert!(processor.process_order(&mut order, &customer(), &mut sink));
        assert!(count > 10);
    }
}
