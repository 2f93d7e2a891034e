//! Runtime configuration: YAML file plus `APP__SECTION__KEY` env overrides.

use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DbSettings {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    pub url: String,
    #[serde(default = "default_email_lock_ttl_secs")]
    pub email_lock_ttl_secs: u64,
}

fn default_email_lock_ttl_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConsumerSettings {
    pub max_deliver: i64,
    pub ack_wait_secs: u64,
    pub batch_size: usize,
    pub batch_wait_ms: u64,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryAggregatorSettings {
    #[serde(flatten)]
    pub consumer: ConsumerSettings,
    pub increment_category_quantity_interval_ms: u64,
    pub increment_category_quantity_batch_size: usize,
    pub increment_category_quantity_channel_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueueSettings {
    pub url: String,
    pub stream_name: String,
    pub order: ConsumerSettings,
    pub category: CategoryAggregatorSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderSettings {
    pub expired_after_secs: u64,
    pub bulk_cancel_size: i64,
}

impl OrderSettings {
    pub fn expired_after(&self) -> Duration {
        Duration::from_secs(self.expired_after_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRefreshSettings {
    pub interval_secs: u64,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CronSettings {
    pub category_refresh: CategoryRefreshSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientSettings {
    pub cancel_interval_secs: u64,
    pub cancel_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub db: DbSettings,
    pub cache: CacheSettings,
    pub queue: QueueSettings,
    pub order: OrderSettings,
    pub cron: CronSettings,
    pub client: ClientSettings,
    #[serde(default)]
    pub log_json: bool,
}

impl Settings {
    /// Load from `config/default.yaml` (or the path in `APP_CONFIG`), then
    /// layer `APP__SECTION__KEY`-style environment overrides on top.
    pub fn load() -> Result<Self, config::ConfigError> {
        let path = std::env::var("APP_CONFIG").unwrap_or_else(|_| "config/default.yaml".into());
        config::Config::builder()
            .add_source(config::File::with_name(&path))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}
