use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use yansi::Paint;

use crate::error::ShopError;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// HTTP client used for every Stripe call. Requests that outlive `timeout`
/// fail with `ShopError::Network`.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, ShopError> {
    reqwest::Client::builder()
        .user_agent(format!("IgniteShop/{}", env!("CARGO_PKG_VERSION")))
        .timeout(timeout)
        .build()
        .map_err(|e| ShopError::Config(format!("failed to create HTTP client: {}", e)))
}

/// Thin client for the Stripe REST API.
/// Requests are form-encoded and authenticated with the secret key as a bearer token.
#[derive(Clone)]
pub struct StripeClient {
    http: reqwest::Client,
    base_url: String,
    secret_key: String,
}

pub enum Method {
    Get,
    Post,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl StripeClient {
    pub fn new(http: reqwest::Client, base_url: &str, secret_key: &str) -> Self {
        StripeClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            secret_key: secret_key.to_string(),
        }
    }

    pub fn has_secret_key(&self) -> bool {
        !self.secret_key.is_empty()
    }

    /// Send a request and decode the body into `T`.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<T, ShopError> {
        if !self.has_secret_key() {
            return Err(ShopError::Config("STRIPE_SECRET_KEY is not configured".into()));
        }

        self.log_request(&method, endpoint, params);

        let url = format!("{}{}", self.base_url, endpoint);
        let req = match method {
            Method::Get => self.http.get(&url).query(params),
            Method::Post => self.http.post(&url).form(params),
        };
        let resp = req.bearer_auth(&self.secret_key).send().await?;
        let status = resp.status();
        let body: Value = resp
            .json()
            .await
            .map_err(|e| ShopError::InvalidResponse(e.to_string()))?;

        let json_str = serde_json::to_string(&body).unwrap_or_default();
        log_output(format!("Response:\n{}", Paint::new(json_str).rgb(100, 100, 100)));

        if !status.is_success() {
            return Err(stripe_error(status.as_u16(), &body));
        }
        serde_json::from_value(body).map_err(|e| ShopError::InvalidResponse(e.to_string()))
    }

    fn log_request(&self, method: &Method, endpoint: &str, params: &[(String, String)]) {
        tracing::debug!(method = method.as_str(), endpoint, "stripe request");

        let pairs = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<String>>();

        let mut url_for_log = format!("{}{}", self.base_url, endpoint);
        let mut parts = Vec::new();
        parts.push(Paint::new("curl").green().bold().to_string());
        parts.push(format!("-X {}", Paint::new(method.as_str()).yellow().bold()));
        match method {
            Method::Get if !pairs.is_empty() => {
                url_for_log = format!("{}?{}", url_for_log, pairs.join("&"));
            }
            Method::Post => {
                for p in &pairs {
                    parts.push(format!("{} '{}'", Paint::new("-d").blue(), p));
                }
            }
            _ => {}
        }
        parts.insert(2, format!("'{}'", Paint::new(&url_for_log).cyan()));
        parts.push(format!(
            "{} {}",
            Paint::new("-H").magenta(),
            Paint::new("'Authorization: Bearer sk_***'").magenta()
        ));
        log_output(format!("Request:\n{}", parts.join(" ")));
    }
}

/// Turn a Stripe `{ "error": { ... } }` envelope into a `ShopError`.
fn stripe_error(status: u16, body: &Value) -> ShopError {
    let err = body.get("error");
    let message = err
        .and_then(|e| e.get("message"))
        .and_then(|m| m.as_str())
        .unwrap_or("Unknown Stripe error")
        .to_string();
    let code = err
        .and_then(|e| e.get("code"))
        .and_then(|c| c.as_str())
        .map(str::to_string);
    ShopError::Stripe { status, code, message }
}
