use serde::{Deserialize, Serialize};

/// A Stripe field that is either a bare id or the expanded object.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(untagged)]
pub enum Expandable<T> {
    Object(T),
    Id(String),
}

impl<T> Expandable<T> {
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Expandable::Object(o) => Some(o),
            Expandable::Id(_) => None,
        }
    }
}

/// Envelope returned by Stripe list endpoints.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StripeList<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
}
