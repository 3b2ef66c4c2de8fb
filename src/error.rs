/// Error types for catalog access and page rendering
use axum::http::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to Stripe or rendering a page
#[derive(Debug, Error)]
pub enum ShopError {
    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failure reaching the provider
    #[error("Network error: {0}")]
    Network(String),

    /// The provider answered with an error envelope
    #[error("Stripe error ({status}): {message}")]
    Stripe {
        status: u16,
        /// Provider error code, e.g. `resource_missing`
        code: Option<String>,
        message: String,
    },

    #[error("Not found: {0}")]
    NotFound(String),

    /// Product has no default price and cannot be bought
    #[error("Product {0} has no default price")]
    MissingDefaultPrice(String),

    /// The provider answered with a body we could not interpret
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl ShopError {
    /// HTTP status used when this error reaches a client.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ShopError::NotFound(_) | ShopError::MissingDefaultPrice(_) => StatusCode::NOT_FOUND,
            ShopError::Stripe { code, status, .. } => {
                if code.as_deref() == Some("resource_missing") || *status == 404 {
                    StatusCode::NOT_FOUND
                } else {
                    StatusCode::BAD_GATEWAY
                }
            }
            ShopError::Network(_) | ShopError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            ShopError::Config(_) | ShopError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Status for a failed checkout request. Any failure on the provider's
    /// side is a bad gateway, even when Stripe reports the price as missing.
    pub fn checkout_status(&self) -> StatusCode {
        match self {
            ShopError::Stripe { .. } | ShopError::Network(_) | ShopError::InvalidResponse(_) => {
                StatusCode::BAD_GATEWAY
            }
            other => other.status_code(),
        }
    }

    /// Message safe to return in a JSON error body.
    pub fn client_message(&self) -> String {
        match self {
            ShopError::Stripe { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ShopError {
    fn from(e: reqwest::Error) -> Self {
        ShopError::Network(e.to_string())
    }
}
