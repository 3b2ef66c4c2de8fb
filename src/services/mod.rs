pub mod product_cache;
pub mod product_service;

pub use product_cache::{CacheLookup, ProductCache};
pub use product_service::product_view;
