//! Admission HTTP server (C4) entrypoint.

use std::sync::Arc;

use concert_tickets::admission::state::AppState;
use concert_tickets::cache::Cache;
use concert_tickets::queue::Queue;
use concert_tickets::settings::Settings;
use concert_tickets::snapshot::CategorySnapshot;
use concert_tickets::store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    let _guard = concert_tickets::logging::init_logging(&settings);

    let store = Arc::new(Store::connect(&settings.db.url, settings.db.max_connections).await?);
    let cache = Arc::new(Cache::connect(&settings.cache.url).await?);
    let queue = Arc::new(Queue::connect(&settings.queue.url, &settings.queue.stream_name).await?);

    let snapshot = Arc::new(CategorySnapshot::empty());
    snapshot.refresh(&store, &cache).await?;
    snapshot.clone().spawn_refresh_loop(
        store.clone(),
        cache.clone(),
        std::time::Duration::from_secs(settings.cron.category_refresh.interval_secs),
    );

    let state = Arc::new(AppState {
        store,
        cache,
        queue,
        snapshot,
        settings: Arc::new(settings.clone()),
    });

    concert_tickets::admission::run_server(&settings.server.host, settings.server.port, state).await
}
