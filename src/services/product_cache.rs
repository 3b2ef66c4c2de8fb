use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::models::ProductView;

#[derive(Clone)]
struct CachedProduct {
    view: ProductView,
    fetched_at: Instant,
}

/// Result of looking a product up in the cache.
#[derive(Debug, PartialEq)]
pub enum CacheLookup {
    Fresh(ProductView),
    /// Past its revalidation window; still servable while a refresh runs.
    Stale(ProductView),
    Miss,
}

type FetchLock = Arc<tokio::sync::Mutex<()>>;

/// Rendered product view models kept for a revalidation window.
#[derive(Clone)]
pub struct ProductCache {
    entries: Arc<Mutex<HashMap<String, CachedProduct>>>,
    refreshing: Arc<Mutex<HashSet<String>>>,
    fetching: Arc<Mutex<HashMap<String, FetchLock>>>,
    ttl: Duration,
}

/// Held while a background refresh runs; dropping it frees the slot.
pub struct RefreshSlot {
    refreshing: Arc<Mutex<HashSet<String>>>,
    product_id: String,
}

impl Drop for RefreshSlot {
    fn drop(&mut self) {
        let mut refreshing = self.refreshing.lock().unwrap_or_else(|e| e.into_inner());
        refreshing.remove(&self.product_id);
    }
}

/// Shared by every request that misses on the same product, so only one
/// of them fetches. Dropping the last holder forgets the lock.
pub struct FetchSlot {
    fetching: Arc<Mutex<HashMap<String, FetchLock>>>,
    product_id: String,
    lock: FetchLock,
}

impl FetchSlot {
    pub async fn acquire(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.lock.lock().await
    }
}

impl Drop for FetchSlot {
    fn drop(&mut self) {
        let mut fetching = self.fetching.lock().unwrap_or_else(|e| e.into_inner());
        // The map holds one reference and this slot another.
        if Arc::strong_count(&self.lock) <= 2 {
            fetching.remove(&self.product_id);
        }
    }
}

impl ProductCache {
    pub fn new(ttl: Duration) -> Self {
        ProductCache {
            entries: Arc::new(Mutex::new(HashMap::new())),
            refreshing: Arc::new(Mutex::new(HashSet::new())),
            fetching: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    pub fn lookup(&self, product_id: &str, now: Instant) -> CacheLookup {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        match entries.get(product_id) {
            Some(entry) if now.saturating_duration_since(entry.fetched_at) < self.ttl => {
                CacheLookup::Fresh(entry.view.clone())
            }
            Some(entry) => CacheLookup::Stale(entry.view.clone()),
            None => CacheLookup::Miss,
        }
    }

    pub fn store(&self, view: ProductView, now: Instant) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(view.id.clone(), CachedProduct { view, fetched_at: now });
    }

    /// Claim the refresh slot for a product, or `None` if a refresh is already running.
    pub fn try_refresh(&self, product_id: &str) -> Option<RefreshSlot> {
        let mut refreshing = self.refreshing.lock().unwrap_or_else(|e| e.into_inner());
        if !refreshing.insert(product_id.to_string()) {
            return None;
        }
        Some(RefreshSlot {
            refreshing: self.refreshing.clone(),
            product_id: product_id.to_string(),
        })
    }

    pub fn is_refreshing(&self, product_id: &str) -> bool {
        self.refreshing
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(product_id)
    }

    /// Join (or open) the first-fetch slot for a product.
    pub fn fetch_slot(&self, product_id: &str) -> FetchSlot {
        let mut fetching = self.fetching.lock().unwrap_or_else(|e| e.into_inner());
        let lock = fetching
            .entry(product_id.to_string())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone();
        FetchSlot {
            fetching: self.fetching.clone(),
            product_id: product_id.to_string(),
            lock,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
