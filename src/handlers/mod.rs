pub mod checkout;
pub mod helpers;
pub mod products;
pub mod success;
