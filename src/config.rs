use std::env;
use std::path::Path;
use std::time::Duration;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STRIPE_API_BASE_URL: &str = "https://api.stripe.com";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_REVALIDATE_SECONDS: u64 = 60 * 60;
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;
pub const SITE_NAME: &str = "Ignite Shop";

/// Runtime configuration resolved from the environment.
#[derive(Clone, Debug)]
pub struct Config {
    pub stripe_api_base_url: String,
    pub stripe_secret_key: String,
    pub public_base_url: String,
    pub revalidate: Duration,
    /// Upper bound for a single Stripe request, connect included.
    pub http_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            stripe_api_base_url: get_stripe_api_base_url(),
            stripe_secret_key: get_stripe_secret_key(),
            public_base_url: get_public_base_url(),
            revalidate: get_revalidate(),
            http_timeout: get_http_timeout(),
        }
    }
}

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_stripe_api_base_url() -> String {
    sanitize_base_url(
        &env::var("STRIPE_API_BASE_URL").unwrap_or_default(),
        DEFAULT_STRIPE_API_BASE_URL,
    )
}

pub fn get_stripe_secret_key() -> String {
    env::var("STRIPE_SECRET_KEY").unwrap_or_default().trim().to_string()
}

pub fn get_public_base_url() -> String {
    sanitize_base_url(
        &env::var("PUBLIC_BASE_URL").unwrap_or_default(),
        DEFAULT_PUBLIC_BASE_URL,
    )
}

pub fn get_revalidate() -> Duration {
    Duration::from_secs(parse_revalidate_seconds(
        &env::var("REVALIDATE_SECONDS").unwrap_or_default(),
    ))
}

pub fn get_http_timeout() -> Duration {
    let raw = env::var("STRIPE_TIMEOUT_SECONDS").unwrap_or_default();
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Duration::from_secs(secs),
        _ => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECONDS),
    }
}

/// Parse a revalidation window in seconds, falling back to one hour.
pub fn parse_revalidate_seconds(raw: &str) -> u64 {
    raw.trim().parse().unwrap_or(DEFAULT_REVALIDATE_SECONDS)
}

pub fn sanitize_base_url(raw: &str, fallback: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
