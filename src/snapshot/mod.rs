//! Category snapshot (C8): a lock-free, immutable pointer swap so
//! `GET /api/categories` never blocks behind the cache or the store.

use arc_swap::ArcSwap;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::Cache;
use crate::domain::Category;
use crate::store::Store;

pub struct CategorySnapshot {
    current: ArcSwap<Vec<Category>>,
}

impl CategorySnapshot {
    pub fn empty() -> Self {
        Self {
            current: ArcSwap::from_pointee(Vec::new()),
        }
    }

    pub fn get(&self) -> Arc<Vec<Category>> {
        self.current.load_full()
    }

    /// Atomically replaces the visible snapshot. `refresh` is the only
    /// production caller; exposed standalone so the swap itself (readers
    /// never observe a torn list) is testable without a live store/cache.
    pub fn set(&self, categories: Vec<Category>) {
        self.current.store(Arc::new(categories));
    }

    /// Re-reads the static category rows from the store and overlays the
    /// cache's live quantity counters, then atomically swaps the pointer.
    /// Never observed mid-update: readers always see one complete list.
    pub async fn refresh(&self, store: &Store, cache: &Cache) -> anyhow::Result<()> {
        let mut categories = store.list_categories().await?;
        let ids: Vec<i64> = categories.iter().map(|c| c.id).collect();
        let live = cache.get_quantities(&ids).await?;
        for (category, cached) in categories.iter_mut().zip(live) {
            if let Some(q) = cached {
                category.quantity = q;
            }
        }
        self.set(categories);
        Ok(())
    }

    pub fn spawn_refresh_loop(
        self: Arc<Self>,
        store: Arc<Store>,
        cache: Arc<Cache>,
        interval: Duration,
    ) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                if let Err(err) = self.refresh(&store, &cache).await {
                    tracing::warn!(error = %err, "category snapshot refresh failed");
                }
            }
        })
    }
}
