pub mod app_state;
pub mod checkout;
pub mod product_view;
pub mod stripe_object;
pub mod stripe_product;
pub mod success_view;

pub use app_state::AppState;
pub use checkout::{CheckoutRequest, CheckoutResponse, CheckoutSession, CustomerDetails, ErrorBody, LineItem};
pub use product_view::ProductView;
pub use stripe_object::{Expandable, StripeList};
pub use stripe_product::{StripePrice, StripeProduct};
pub use success_view::SuccessView;
