pub mod checkout;
pub mod customer;
pub mod types;
pub mod utils;
