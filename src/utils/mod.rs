// Display formatting
pub mod currency;

// URL handling utilities
pub mod url_builder;

pub use currency::format_brl;
pub use url_builder::absolute_url;
