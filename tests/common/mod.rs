#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use serde_json::json;

use ignite_shop::config::Config;
use ignite_shop::AppState;

pub const SECRET_KEY: &str = "sk_test_123";
pub const PUBLIC_BASE_URL: &str = "http://shop.test";

/// How `GET /v1/products/:id` answers after its first call.
#[derive(Clone, Copy, Debug, Default)]
pub enum ProductMode {
    #[default]
    Normal,
    /// Later calls answer 500.
    FailAfterFirst,
    /// Later calls stall for the given time before answering.
    SlowAfterFirst(Duration),
    /// Every call stalls for the given time before answering.
    Slow(Duration),
}

/// In-memory stand-in for the Stripe endpoints the shop calls.
#[derive(Clone, Default)]
pub struct MockStripe {
    pub mode: Arc<Mutex<ProductMode>>,
    pub product_calls: Arc<AtomicUsize>,
    pub checkout_forms: Arc<Mutex<Vec<HashMap<String, String>>>>,
    pub queries: Arc<Mutex<Vec<String>>>,
}

impl MockStripe {
    pub fn with_mode(mode: ProductMode) -> Self {
        let mock = MockStripe::default();
        *mock.mode.lock().unwrap() = mode;
        mock
    }

    pub fn product_calls(&self) -> usize {
        self.product_calls.load(Ordering::SeqCst)
    }

    pub fn last_checkout_form(&self) -> Option<HashMap<String, String>> {
        self.checkout_forms.lock().unwrap().last().cloned()
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/v1/products", get(list_products))
            .route("/v1/products/:id", get(retrieve_product))
            .route("/v1/checkout/sessions", post(create_session))
            .route("/v1/checkout/sessions/:id", get(retrieve_session))
            .with_state(self.clone())
    }
}

fn stripe_error(status: StatusCode, code: Option<&str>, message: &str) -> Response {
    (
        status,
        Json(json!({
            "error": { "type": "invalid_request_error", "code": code, "message": message }
        })),
    )
        .into_response()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", SECRET_KEY))
        .unwrap_or(false)
}

fn product_json(id: &str, unit_amount: i64) -> serde_json::Value {
    json!({
        "id": id,
        "object": "product",
        "active": true,
        "name": "Camiseta Beyond the Limits",
        "description": "Camiseta <em>leve</em> e confortável",
        "images": ["https://files.stripe.com/links/camiseta.png"],
        "default_price": {
            "id": "price_1",
            "object": "price",
            "currency": "brl",
            "unit_amount": unit_amount
        }
    })
}

async fn retrieve_product(
    State(mock): State<MockStripe>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> Response {
    if !authorized(&headers) {
        return stripe_error(StatusCode::UNAUTHORIZED, None, "Invalid API Key provided");
    }
    mock.queries.lock().unwrap().push(query.unwrap_or_default());
    let calls = mock.product_calls.fetch_add(1, Ordering::SeqCst);
    let mode = *mock.mode.lock().unwrap();
    match mode {
        ProductMode::Normal => {}
        ProductMode::FailAfterFirst if calls > 0 => {
            return stripe_error(StatusCode::INTERNAL_SERVER_ERROR, None, "Something went wrong");
        }
        ProductMode::SlowAfterFirst(delay) if calls > 0 => tokio::time::sleep(delay).await,
        ProductMode::Slow(delay) => tokio::time::sleep(delay).await,
        _ => {}
    }
    match id.as_str() {
        "prod_1" => {
            let amount = if calls == 0 { 7990 } else { 8990 };
            Json(product_json("prod_1", amount)).into_response()
        }
        "prod_noprice" => Json(json!({
            "id": "prod_noprice",
            "name": "Sem preço",
            "images": [],
            "default_price": null
        }))
        .into_response(),
        _ => stripe_error(StatusCode::NOT_FOUND, Some("resource_missing"), "No such product"),
    }
}

async fn list_products(
    headers: HeaderMap,
    Query(q): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return stripe_error(StatusCode::UNAUTHORIZED, None, "Invalid API Key provided");
    }
    // Two pages: the cursor after the first page is its last product id.
    match q.get("starting_after").map(String::as_str) {
        None => Json(json!({
            "object": "list",
            "has_more": true,
            "data": [
                product_json("prod_1", 7990),
                { "id": "prod_noprice", "name": "Sem preço", "images": [], "default_price": null }
            ]
        }))
        .into_response(),
        Some("prod_noprice") => Json(json!({
            "object": "list",
            "has_more": false,
            "data": [{
                "id": "prod_2",
                "name": "Camiseta Ignite Lab",
                "images": [],
                "default_price": { "id": "price_2", "currency": "brl", "unit_amount": 12990 }
            }]
        }))
        .into_response(),
        Some(_) => stripe_error(StatusCode::BAD_REQUEST, Some("resource_missing"), "No such object"),
    }
}

async fn create_session(
    State(mock): State<MockStripe>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return stripe_error(StatusCode::UNAUTHORIZED, None, "Invalid API Key provided");
    }
    let price = form.get("line_items[0][price]").cloned().unwrap_or_default();
    mock.checkout_forms.lock().unwrap().push(form);
    if price != "price_1" {
        return stripe_error(StatusCode::BAD_REQUEST, Some("resource_missing"), "No such price");
    }
    Json(json!({
        "id": "cs_test_1",
        "object": "checkout.session",
        "url": "https://checkout.stripe.com/c/pay/cs_test_1"
    }))
    .into_response()
}

async fn retrieve_session(Path(id): Path<String>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return stripe_error(StatusCode::UNAUTHORIZED, None, "Invalid API Key provided");
    }
    if id != "cs_test_1" {
        return stripe_error(StatusCode::NOT_FOUND, Some("resource_missing"), "No such checkout.session");
    }
    Json(json!({
        "id": "cs_test_1",
        "object": "checkout.session",
        "url": null,
        "customer_details": { "name": "Diego Fernandes", "email": "diego@example.com" },
        "line_items": {
            "object": "list",
            "data": [{
                "quantity": 1,
                "price": {
                    "id": "price_1",
                    "unit_amount": 7990,
                    "currency": "brl",
                    "product": product_json("prod_1", 7990)
                }
            }]
        }
    }))
    .into_response()
}

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn config(stripe_url: &str, secret_key: &str, revalidate: Duration, http_timeout: Duration) -> Config {
    Config {
        stripe_api_base_url: stripe_url.to_string(),
        stripe_secret_key: secret_key.to_string(),
        public_base_url: PUBLIC_BASE_URL.to_string(),
        revalidate,
        http_timeout,
    }
}

/// Start a mock Stripe and the shop pointed at it.
pub async fn start_shop(revalidate: Duration) -> (String, MockStripe) {
    start_shop_with_key(SECRET_KEY, revalidate).await
}

pub async fn start_shop_with_key(secret_key: &str, revalidate: Duration) -> (String, MockStripe) {
    let (shop, mock, _state) =
        start_shop_with(MockStripe::default(), secret_key, revalidate, Duration::from_secs(5)).await;
    (shop, mock)
}

/// Start the shop against `mock`, also returning its state for cache inspection.
pub async fn start_shop_with(
    mock: MockStripe,
    secret_key: &str,
    revalidate: Duration,
    http_timeout: Duration,
) -> (String, MockStripe, AppState) {
    ignite_shop::api::set_silent(true);
    let stripe_url = spawn(mock.router()).await;
    let state = AppState::from_config(config(&stripe_url, secret_key, revalidate, http_timeout)).unwrap();
    let shop_url = spawn(ignite_shop::build_router(state.clone())).await;
    (shop_url, mock, state)
}

/// Poll `cond` every 20ms for up to two seconds.
pub async fn eventually<F: FnMut() -> bool>(mut cond: F) -> bool {
    for _ in 0..100 {
        if cond() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    cond()
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
