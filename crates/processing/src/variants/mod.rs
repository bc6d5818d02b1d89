//! Concrete payment variants.

pub mod bank_transfer;
pub mod credit_card;
pub mod paypal;

pub use bank_transfer::BankTransferVariant;
pub use credit_card::CreditCardVariant;
pub use paypal::PayPalVariant;
