use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

// Embed the default stylesheet in the binary
pub const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

pub fn build_router(state: AppState) -> Router {
    // Serve the custom stylesheet if one was provided, otherwise the embedded default
    let stylesheet_content = state
        .custom_css
        .clone()
        .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    let stylesheet = Router::new()
        .route(
            "/static/styles.css",
            get(move || {
                let css = stylesheet_content.clone();
                async move { ([(CONTENT_TYPE, "text/css")], css) }
            }),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        ));

    Router::new()
        .route("/", get(handlers::products::home_get))
        .route("/product/:id", get(handlers::products::product_get))
        .route("/api/checkout", post(handlers::checkout::checkout_post))
        .route("/success", get(handlers::success::success_get))
        .merge(stylesheet)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
