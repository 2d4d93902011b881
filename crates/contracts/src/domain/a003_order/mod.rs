pub mod aggregate;

pub use aggregate::{mock_orders, Order, OrderItem, OrderStatus, PaymentMethod, PaymentStatus};
