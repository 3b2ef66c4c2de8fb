pub mod checkout;
pub mod client;
pub mod products;

pub use client::{build_http_client, set_silent, Method, StripeClient};
pub use products::{load_product, load_products};
