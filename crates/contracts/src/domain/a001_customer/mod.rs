pub mod aggregate;

pub use aggregate::{mock_customers, Customer};
