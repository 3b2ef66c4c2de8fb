use serde::Serialize;

use crate::models::checkout::CheckoutSession;

/// What the confirmation page shows after a completed checkout.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SuccessView {
    pub customer_name: String,
    pub product_name: String,
    pub image_url: String,
}

impl SuccessView {
    pub fn from_session(session: &CheckoutSession) -> Self {
        let customer_name = session
            .customer_details
            .as_ref()
            .and_then(|c| c.name.clone())
            .unwrap_or_default();

        let product = session
            .line_items
            .as_ref()
            .and_then(|items| items.data.first())
            .and_then(|item| item.price.as_ref())
            .and_then(|price| price.product.as_ref())
            .and_then(|p| p.as_object());

        SuccessView {
            customer_name,
            product_name: product.map(|p| p.name.clone()).unwrap_or_default(),
            image_url: product
                .and_then(|p| p.images.first().cloned())
                .unwrap_or_default(),
        }
    }
}
