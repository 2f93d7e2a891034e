//! Inventory aggregator (C5) entrypoint.

use concert_tickets::aggregator;
use concert_tickets::queue::Queue;
use concert_tickets::settings::Settings;
use concert_tickets::store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    let _guard = concert_tickets::logging::init_logging(&settings);

    let store = Store::connect(&settings.db.url, settings.db.max_connections).await?;
    let queue = Queue::connect(&settings.queue.url, &settings.queue.stream_name).await?;

    tracing::info!("inventory aggregator starting");
    aggregator::run(
        &queue,
        &store,
        &settings.queue.category.consumer,
        &settings.queue.category,
    )
    .await
}
