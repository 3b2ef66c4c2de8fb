use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::models::{AppState, CheckoutRequest, CheckoutResponse};
use crate::utils::absolute_url;

use super::helpers::json_error;

pub const CHECKOUT_SESSION_PLACEHOLDER: &str = "{CHECKOUT_SESSION_ID}";

/// `POST /api/checkout`: create a hosted checkout session for `priceId`.
pub async fn checkout_post(
    State(state): State<AppState>,
    body: Result<Json<CheckoutRequest>, JsonRejection>,
) -> Response {
    let price_id = match body {
        Ok(Json(req)) => req.price_id.unwrap_or_default(),
        Err(rejection) => {
            tracing::debug!(%rejection, "unreadable checkout body");
            String::new()
        }
    };
    let price_id = price_id.trim();
    if price_id.is_empty() {
        return json_error(StatusCode::BAD_REQUEST, "Price not found.");
    }

    let base = &state.config.public_base_url;
    let success_url = absolute_url(
        base,
        &format!("/success?session_id={}", CHECKOUT_SESSION_PLACEHOLDER),
    );
    let cancel_url = absolute_url(base, "/");

    match state
        .stripe
        .create_checkout_session(price_id, &success_url, &cancel_url)
        .await
    {
        Ok(session) => match session.url {
            Some(checkout_url) => {
                tracing::info!(session_id = %session.id, price_id, "checkout session created");
                (StatusCode::CREATED, Json(CheckoutResponse { checkout_url })).into_response()
            }
            None => {
                tracing::error!(session_id = %session.id, "checkout session has no url");
                json_error(StatusCode::BAD_GATEWAY, "Checkout session has no redirect URL.")
            }
        },
        Err(e) => {
            tracing::error!(%e, price_id, "failed to create checkout session");
            json_error(e.checkout_status(), e.client_message())
        }
    }
}
