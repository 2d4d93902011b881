pub mod a001_customer;
pub mod a002_credit;
pub mod a003_order;
pub mod a004_product;
pub mod a005_promotion;
pub mod a006_delivery;
pub mod a007_user;
