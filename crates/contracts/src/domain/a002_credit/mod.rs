pub mod aggregate;

pub use aggregate::{
    mock_credit_accounts, CreditAccount, CreditSettings, UtilizationLevel, DEFAULT_CREDIT_LIMIT,
    DEFAULT_PAYMENT_TERMS,
};
