//! Order-event consumers (C6) entrypoint: completion, seat assignment,
//! and the create-confirmation email, run concurrently in one process.

use concert_tickets::assigner;
use concert_tickets::queue::Queue;
use concert_tickets::settings::Settings;
use concert_tickets::store::Store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    let _guard = concert_tickets::logging::init_logging(&settings);

    let store = Store::connect(&settings.db.url, settings.db.max_connections).await?;
    let queue = Queue::connect(&settings.queue.url, &settings.queue.stream_name).await?;

    tracing::info!("order event consumers starting");
    tokio::try_join!(
        assigner::run_order_create_consumer(&queue, &settings.queue.order),
        assigner::run_order_complete_consumer(&queue, &store, &settings.queue.order),
        assigner::run_assign_ticket_consumer(&queue, &store, &settings.queue.order),
    )?;
    Ok(())
}
