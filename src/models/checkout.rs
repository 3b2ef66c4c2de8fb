use serde::{Deserialize, Serialize};

use crate::models::stripe_object::StripeList;
use crate::models::stripe_product::StripePrice;

/// Body posted by the buy button.
#[derive(Deserialize, Debug, Default)]
pub struct CheckoutRequest {
    #[serde(rename = "priceId", default)]
    pub price_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct CheckoutResponse {
    #[serde(rename = "checkoutUrl")]
    pub checkout_url: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

/// Subset of a Stripe checkout session object
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CheckoutSession {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub customer_details: Option<CustomerDetails>,
    #[serde(default)]
    pub line_items: Option<StripeList<LineItem>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CustomerDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LineItem {
    #[serde(default)]
    pub price: Option<StripePrice>,
    #[serde(default)]
    pub quantity: Option<u64>,
}
