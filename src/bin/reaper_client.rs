//! Periodic external trigger for the expiry reaper (C7): polls
//! `client.cancel_url` every `client.cancel_interval_secs`, the way the
//! original wires an external cron caller rather than an in-process timer.

use concert_tickets::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load()?;
    let _guard = concert_tickets::logging::init_logging(&settings);

    let client = reqwest::Client::new();
    let mut ticker =
        tokio::time::interval(std::time::Duration::from_secs(settings.client.cancel_interval_secs));

    tracing::info!(url = %settings.client.cancel_url, "reaper client starting");
    loop {
        ticker.tick().await;
        match client.post(&settings.client.cancel_url).send().await {
            Ok(resp) => tracing::info!(status = %resp.status(), "cancel sweep triggered"),
            Err(err) => tracing::warn!(error = %err, "cancel sweep trigger failed"),
        }
    }
}
