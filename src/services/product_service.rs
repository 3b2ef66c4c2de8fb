use std::time::Instant;

use crate::api::load_product;
use crate::error::ShopError;
use crate::models::{AppState, ProductView};

use super::product_cache::CacheLookup;

/// Resolve the view model for a product page.
///
/// The first request for a product blocks on Stripe and caches the result;
/// concurrent first requests wait on that same fetch. Within the revalidation
/// window the cached view is served as is; after it the stale view is served
/// while a single background task refetches it. Failed fetches are never
/// cached, and a failed refresh keeps the stale view.
pub async fn product_view(state: &AppState, product_id: &str) -> Result<ProductView, ShopError> {
    match state.product_cache.lookup(product_id, Instant::now()) {
        CacheLookup::Fresh(view) => Ok(view),
        CacheLookup::Stale(view) => {
            spawn_refresh(state, product_id);
            Ok(view)
        }
        CacheLookup::Miss => {
            let slot = state.product_cache.fetch_slot(product_id);
            let _held = slot.acquire().await;
            // Another request may have filled the cache while we waited.
            if let CacheLookup::Fresh(view) | CacheLookup::Stale(view) =
                state.product_cache.lookup(product_id, Instant::now())
            {
                return Ok(view);
            }
            let view = load_product(&state.stripe, product_id).await?;
            state.product_cache.store(view.clone(), Instant::now());
            tracing::info!(product_id, "product page generated");
            Ok(view)
        }
    }
}

fn spawn_refresh(state: &AppState, product_id: &str) {
    let cache = state.product_cache.clone();
    let Some(slot) = cache.try_refresh(product_id) else {
        return;
    };
    let stripe = state.stripe.clone();
    let product_id = product_id.to_string();
    tokio::spawn(async move {
        let _slot = slot;
        match load_product(&stripe, &product_id).await {
            Ok(view) => {
                cache.store(view, Instant::now());
                tracing::info!(%product_id, "product page revalidated");
            }
            Err(e) => tracing::warn!(%product_id, %e, "revalidation failed; keeping stale page"),
        }
    });
}
