//! Inventory aggregator (C5): coalesces many small per-category quantity
//! deltas (individual admissions, bulk reaper compensations) into one
//! periodic batched write to the durable store, instead of one DB
//! round-trip per order.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_nats::jetstream::{AckKind, Message};
use futures::StreamExt;

use crate::queue::{
    Queue,
    messages::{
        BulkIncrementCategoryQuantity, CATEGORY_WILDCARD, IncrementCategoryQuantity,
        SUBJECT_CATEGORY_INCREMENT,
    },
};
use crate::settings::{CategoryAggregatorSettings, ConsumerSettings};
use crate::store::Store;

#[derive(Default)]
struct Pending {
    deltas: HashMap<i64, i64>,
    messages: Vec<Message>,
}

/// Drops categories whose coalesced delta nets to zero — boundary scenario
/// 5 requires a `+0` entry to be skipped from the batch entirely, not sent
/// as a no-op update.
pub fn nonzero_deltas(deltas: HashMap<i64, i64>) -> Vec<(i64, i64)> {
    deltas.into_iter().filter(|(_, delta)| *delta != 0).collect()
}

pub struct Aggregator {
    pending: Mutex<Pending>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self {
            pending: Mutex::new(Pending::default()),
        }
    }

    /// Folds every `(category_id, delta)` pair from one message into the
    /// running totals, then records the message once so it is acked after
    /// the next flush. Returns the number of coalesced messages so far.
    fn add(&self, deltas: impl IntoIterator<Item = (i64, i64)>, message: Message) -> usize {
        let mut pending = self.pending.lock().unwrap();
        for (category_id, delta) in deltas {
            *pending.deltas.entry(category_id).or_insert(0) += delta;
        }
        pending.messages.push(message);
        pending.messages.len()
    }

    fn take(&self) -> Pending {
        std::mem::take(&mut self.pending.lock().unwrap())
    }

    /// Applies everything coalesced so far to the store in one transaction,
    /// then acks the underlying JetStream messages only after the write
    /// commits — a crash before ack just redelivers the same deltas, which
    /// is safe to re-apply since they are additive, not absolute.
    async fn flush(&self, store: &Store) -> anyhow::Result<usize> {
        let pending = self.take();
        let items = nonzero_deltas(pending.deltas);
        if items.is_empty() {
            for message in pending.messages {
                if let Err(err) = message.ack().await {
                    tracing::warn!(error = ?err, "failed to ack coalesced message");
                }
            }
            return Ok(0);
        }
        store.bulk_increment_quantity(&items).await?;
        for message in pending.messages {
            if let Err(err) = message.ack().await {
                tracing::warn!(error = ?err, "failed to ack coalesced message");
            }
        }
        Ok(items.len())
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs the aggregator against both the single-order and bulk subjects,
/// flushing on whichever comes first: the batch size or the interval.
pub async fn run(
    queue: &Queue,
    store: &Store,
    consumer_settings: &ConsumerSettings,
    batch_settings: &CategoryAggregatorSettings,
) -> anyhow::Result<()> {
    let aggregator = std::sync::Arc::new(Aggregator::new());
    let consumer = queue
        .consumer("category-aggregator", CATEGORY_WILDCARD, consumer_settings)
        .await?;

    let flush_interval = Duration::from_millis(batch_settings.increment_category_quantity_interval_ms);
    let batch_size = batch_settings.increment_category_quantity_batch_size;

    let agg_for_ticker = aggregator.clone();
    let ticker_store = store.clone();
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(flush_interval);
        loop {
            ticker.tick().await;
            if let Err(err) = agg_for_ticker.flush(&ticker_store).await {
                tracing::warn!(error = %err, "periodic aggregator flush failed");
            }
        }
    });

    let mut messages = consumer.messages().await?;
    while let Some(message) = messages.next().await {
        let message = match message {
            Ok(m) => m,
            Err(err) => {
                tracing::warn!(error = %err, "aggregator consumer error");
                continue;
            }
        };

        let delta = if message.subject.as_str() == SUBJECT_CATEGORY_INCREMENT {
            serde_json::from_slice::<IncrementCategoryQuantity>(&message.payload)
                .ok()
                .map(|m| vec![(m.category_id, m.quantity)])
        } else {
            serde_json::from_slice::<BulkIncrementCategoryQuantity>(&message.payload)
                .ok()
                .map(|m| m.items.into_iter().map(|i| (i.category_id, i.quantity)).collect())
        };

        let Some(deltas) = delta else {
            tracing::error!(subject = %message.subject, "dropping unparseable aggregator message");
            let _ = message.ack_with(AckKind::Term).await;
            continue;
        };

        let count = aggregator.add(deltas, message);

        if count >= batch_size
            && let Err(err) = aggregator.flush(store).await
        {
            tracing::warn!(error = %err, "batch-size-triggered aggregator flush failed");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_zero_net_deltas() {
        let mut deltas = HashMap::new();
        deltas.insert(1, -10);
        deltas.insert(2, 0);
        let mut items = nonzero_deltas(deltas);
        items.sort();
        assert_eq!(items, vec![(1, -10)]);
    }

    #[test]
    fn all_zero_map_yields_empty_batch() {
        let mut deltas = HashMap::new();
        deltas.insert(2, 0);
        assert!(nonzero_deltas(deltas).is_empty());
    }
}
