use crate::api::{build_http_client, StripeClient};
use crate::config::Config;
use crate::error::ShopError;
use crate::services::ProductCache;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub stripe: StripeClient,
    pub product_cache: ProductCache,
    pub custom_css: Option<String>,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self, ShopError> {
        let http = build_http_client(config.http_timeout)?;
        let stripe = StripeClient::new(
            http,
            &config.stripe_api_base_url,
            &config.stripe_secret_key,
        );
        let product_cache = ProductCache::new(config.revalidate);
        Ok(AppState {
            config,
            stripe,
            product_cache,
            custom_css: None,
        })
    }
}
