//! The order-processing demonstration.

use std::sync::Arc;

use common::{IdGenerator, OutputLine, OutputSink};
use processing::{BankTransferVariant, OrderProcessor, PayPalVariant, StepContext, selector};
use serde::{Deserialize, Serialize};

use crate::fixtures;

const DOUBLE_RULE: &str = "════════════════════════════════════════════════════════════════";
const HEAVY_RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Tally of the orders a run processed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub processed: usize,
    pub completed: usize,
    pub failed: usize,
}

impl RunSummary {
    /// Records the outcome of one order.
    pub fn record(&mut self, completed: bool) {
        self.processed += 1;
        if completed {
            self.completed += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Processes the three fixture orders and narrates the result into `sink`.
///
/// The first order goes through the selector, the other two through
/// processors built directly from their variants.
#[tracing::instrument(skip_all)]
pub fn run_with_pattern(sink: &mut dyn OutputSink, ids: Arc<dyn IdGenerator>) -> RunSummary {
    let customer = fixtures::customer();
    let mut summary = RunSummary::default();

    banner(sink);

    heading(sink, "APPROACH 1: Using the selector (recommended)");
    let mut order = fixtures::credit_card_order();
    {
        let mut ctx = StepContext::new(&mut *sink, ids.as_ref());
        summary.record(selector::process_order(&mut order, &customer, &mut ctx));
    }

    heading(sink, "APPROACH 2: Direct construction");
    let paypal = OrderProcessor::from_variant(PayPalVariant::new()).with_id_generator(ids.clone());
    let mut order = fixtures::paypal_order();
    summary.record(paypal.process_order(&mut order, &customer, sink));

    let bank = OrderProcessor::from_variant(BankTransferVariant::new()).with_id_generator(ids);
    let mut order = fixtures::bank_transfer_order();
    summary.record(bank.process_order(&mut order, &customer, sink));

    closing(sink, &summary);

    tracing::info!(
        processed = summary.processed,
        completed = summary.completed,
        failed = summary.failed,
        "demonstration finished"
    );
    summary
}

fn emit(sink: &mut dyn OutputSink, text: impl Into<String>) {
    sink.emit(OutputLine::info(text));
}

fn banner(sink: &mut dyn OutputSink) {
    emit(sink, "╔════════════════════════════════════════════════════════════════╗");
    emit(sink, "║     ORDER PROCESSING SYSTEM - WITH TEMPLATE METHOD             ║");
    emit(sink, "╚════════════════════════════════════════════════════════════════╝");
    emit(sink, "");
    emit(sink, "BENEFITS OF THIS APPROACH:");
    emit(sink, "   • No duplicated code");
    emit(sink, "   • A single place to change common logic");
    emit(sink, "   • The processing flow is guaranteed to be consistent");
    emit(sink, "   • New payment methods are easy to add");
    emit(sink, "   • Open/Closed and DRY");
    emit(sink, "");
}

fn heading(sink: &mut dyn OutputSink, title: &str) {
    emit(sink, HEAVY_RULE);
    emit(sink, title);
    emit(sink, HEAVY_RULE);
}

fn closing(sink: &mut dyn OutputSink, summary: &RunSummary) {
    emit(sink, "");
    emit(sink, DOUBLE_RULE);
    emit(sink, "SUMMARY:");
    emit(sink, format!("   • Total orders processed: {}", summary.processed));
    emit(sink, format!("   • Completed: {}", summary.completed));
    emit(sink, format!("   • Failed: {}", summary.failed));
    emit(sink, "   • Duplicated code: 0 lines");
    emit(sink, "   • Maintainability: HIGH");
    emit(sink, "   • Extensibility: HIGH");
    emit(sink, "   • Lines of code per processor: ~30 (vs ~120 without the pattern)");
    emit(sink, "");
    emit(sink, "To add a new payment method:");
    emit(sink, "   1. Create a type that implements PaymentVariant");
    emit(sink, "   2. Implement only process_payment() and send_payment_confirmation()");
    emit(sink, "   3. Done: every common step is reused automatically");
    emit(sink, DOUBLE_RULE);
}
