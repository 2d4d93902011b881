pub mod aggregate;

pub use aggregate::{mock_products, Product, TaxSettings, DEFAULT_TAX_RATE};
