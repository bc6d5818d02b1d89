//! Order processing with a fixed step sequence and pluggable payment variants.
//!
//! Every order goes through the same nine steps:
//! 1. `before_processing` hook
//! 2. Validate the order
//! 3. Check inventory
//! 4. Calculate the customer discount
//! 5. Process the payment (variant)
//! 6. Generate the invoice
//! 7. Send the payment confirmation (variant)
//! 8. Notify the customer
//! 9. `after_processing` hook
//!
//! The sequence lives in [`workflow::process_order`]. A payment method only
//! implements [`PaymentVariant`]; adding one never touches the sequence.

pub mod context;
pub mod error;
pub mod selector;
pub mod step;
pub mod steps;
pub mod variant;
pub mod variants;
pub mod workflow;

pub use context::StepContext;
pub use error::{ProcessingError, Result, StepError};
pub use selector::{create_processor, select_variant, variant_for};
pub use step::{Step, StepKind};
pub use steps::Invoice;
pub use variant::PaymentVariant;
pub use variants::{BankTransferVariant, CreditCardVariant, PayPalVariant};
pub use workflow::{OrderProcessor, process_order};
