pub mod error_template;
pub mod home_template;
pub mod product_template;
pub mod success_template;

pub use error_template::ErrorTemplate;
pub use home_template::HomeTemplate;
pub use product_template::ProductTemplate;
pub use success_template::SuccessTemplate;
