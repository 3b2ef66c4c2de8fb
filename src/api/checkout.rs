use crate::error::ShopError;
use crate::models::CheckoutSession;

use super::client::{Method, StripeClient};

impl StripeClient {
    /// Create a hosted payment session for a single unit of `price_id`.
    pub async fn create_checkout_session(
        &self,
        price_id: &str,
        success_url: &str,
        cancel_url: &str,
    ) -> Result<CheckoutSession, ShopError> {
        let params = vec![
            ("mode".into(), "payment".into()),
            ("success_url".into(), success_url.to_string()),
            ("cancel_url".into(), cancel_url.to_string()),
            ("line_items[0][price]".into(), price_id.to_string()),
            ("line_items[0][quantity]".into(), "1".into()),
        ];
        self.call(Method::Post, "/v1/checkout/sessions", &params).await
    }

    /// Retrieve a session with its purchased products expanded.
    pub async fn retrieve_checkout_session(&self, session_id: &str) -> Result<CheckoutSession, ShopError> {
        let endpoint = format!("/v1/checkout/sessions/{}", urlencoding::encode(session_id));
        let params = vec![("expand[]".into(), "line_items.data.price.product".into())];
        self.call(Method::Get, &endpoint, &params).await
    }
}
