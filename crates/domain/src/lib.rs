//! Domain model for the order-processing workflow.
//!
//! This crate holds passive data only:
//! - Order, its items and its status lifecycle
//! - Customer fixture data
//! - Money and the closed set of payment methods

pub mod customer;
pub mod error;
pub mod order;

pub use customer::Customer;
pub use error::DomainError;
pub use order::{
    CustomerId, Money, Order, OrderId, OrderItem, OrderStatus, PaymentMethod, ProductId,
};
