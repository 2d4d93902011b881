pub mod aggregate;

pub use aggregate::{mock_promotions, DiscountType, Promotion, PromotionStatus};
