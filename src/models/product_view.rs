use serde::{Deserialize, Serialize};

use crate::error::ShopError;
use crate::models::stripe_product::StripeProduct;
use crate::utils::format_brl;

/// View model rendered by the product page.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub description: String,
    /// Price already formatted for display, e.g. `R$ 79,90`.
    pub price: String,
    pub default_price_id: String,
}

impl ProductView {
    /// Shape a product retrieved with `expand[]=default_price`.
    pub fn from_stripe(product: &StripeProduct) -> Result<Self, ShopError> {
        let price = product
            .default_price
            .as_ref()
            .ok_or_else(|| ShopError::MissingDefaultPrice(product.id.clone()))?
            .as_object()
            .ok_or_else(|| {
                ShopError::InvalidResponse(format!(
                    "default_price of {} was not expanded",
                    product.id
                ))
            })?;

        Ok(ProductView {
            id: product.id.clone(),
            name: product.name.clone(),
            image_url: product.images.first().cloned().unwrap_or_default(),
            description: product.description.clone().unwrap_or_default(),
            price: format_brl(price.unit_amount),
            default_price_id: price.id.clone(),
        })
    }
}
