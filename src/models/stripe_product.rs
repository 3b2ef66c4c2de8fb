use serde::{Deserialize, Serialize};

use crate::models::stripe_object::Expandable;

/// Subset of a Stripe product object used by the storefront
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StripeProduct {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub default_price: Option<Expandable<StripePrice>>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StripePrice {
    pub id: String,
    /// Amount in the smallest currency unit (centavos for BRL).
    #[serde(default)]
    pub unit_amount: Option<i64>,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub product: Option<Expandable<Box<StripeProduct>>>,
}
