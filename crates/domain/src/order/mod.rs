//! Order entity and related types.

mod model;
mod payment_method;
mod status;
mod value_objects;

pub use model::Order;
pub use payment_method::PaymentMethod;
pub use status::OrderStatus;
pub use value_objects::{CustomerId, Money, OrderId, OrderItem, ProductId};
