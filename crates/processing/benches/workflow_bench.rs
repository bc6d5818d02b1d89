use std::sync::Arc;

use common::{CapturedOutput, OutputLine, SequentialIdGenerator};
use criterion::{Criterion, criterion_group, criterion_main};
use domain::{Customer, Money, Order, OrderItem, PaymentMethod};
use processing::{OrderProcessor, create_processor};

fn customer() -> Customer {
    Customer::new("CUST001", "Bench Customer", "bench@example.com")
        .premium()
        .with_credit_limit(Money::from_dollars(10_000))
}

fn order(method: PaymentMethod) -> Order {
    Order::from_items(
        "ORD-BENCH",
        "CUST001",
        vec![
            OrderItem::new("P001", "Laptop", 2, Money::from_dollars(1200)),
            OrderItem::new("P002", "Mouse", 5, Money::from_dollars(25)),
        ],
        method,
    )
    .unwrap()
}

fn bench_process_per_variant(c: &mut Criterion) {
    let customer = customer();

    for method in PaymentMethod::ALL {
        let processor = OrderProcessor::new(processing::variant_for(method))
            .with_id_generator(Arc::new(SequentialIdGenerator::new()));

        c.bench_function(&format!("processing/{method}"), |b| {
            b.iter(|| {
                let mut order = order(method);
                let mut out = CapturedOutput::new();
                processor.process_order(&mut order, &customer, &mut out)
            });
        });
    }
}

fn bench_discarding_sink(c: &mut Criterion) {
    let customer = customer();
    let processor = OrderProcessor::from_variant(processing::CreditCardVariant::new());

    c.bench_function("processing/credit-card_discarding_sink", |b| {
        b.iter(|| {
            let mut order = order(PaymentMethod::CreditCard);
            let mut sink = |_line: OutputLine| {};
            processor.process_order(&mut order, &customer, &mut sink)
        });
    });
}

fn bench_selector(c: &mut Criterion) {
    c.bench_function("processing/create_processor", |b| {
        b.iter(|| create_processor("bank-transfer").is_ok());
    });
}

criterion_group!(
    benches,
    bench_process_per_variant,
    bench_discarding_sink,
    bench_selector
);
criterion_main!(benches);
