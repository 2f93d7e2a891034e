use std::sync::Arc;

use crate::cache::Cache;
use crate::queue::Queue;
use crate::settings::Settings;
use crate::snapshot::CategorySnapshot;
use crate::store::Store;

/// Shared admission-service state (C4).
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub cache: Arc<Cache>,
    pub queue: Arc<Queue>,
    pub snapshot: Arc<CategorySnapshot>,
    pub settings: Arc<Settings>,
}
