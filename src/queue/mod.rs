//! Durable at-least-once work queue (C3): a NATS JetStream work-queue
//! stream, mirroring `common/jetstream` from the original service.

pub mod messages;

use async_nats::jetstream::{
    self,
    consumer::{AckPolicy, pull::Config as PullConfig},
    stream::{Config as StreamConfig, RetentionPolicy},
};
use serde::Serialize;
use std::time::Duration;

use crate::settings::ConsumerSettings;

#[derive(Clone)]
pub struct Queue {
    ctx: jetstream::Context,
    stream_name: String,
}

impl Queue {
    pub async fn connect(url: &str, stream_name: &str) -> anyhow::Result<Self> {
        let client = async_nats::connect(url).await?;
        let ctx = jetstream::new(client);
        let queue = Self {
            ctx,
            stream_name: stream_name.to_string(),
        };
        queue.ensure_stream().await?;
        Ok(queue)
    }

    /// Creates the work-queue stream if absent. `WorkQueuePolicy` ensures a
    /// message is delivered to exactly one durable consumer and removed
    /// once acked, matching `jetstream.CreateQueueStream` in the original.
    async fn ensure_stream(&self) -> anyhow::Result<()> {
        self.ctx
            .get_or_create_stream(StreamConfig {
                name: self.stream_name.clone(),
                retention: RetentionPolicy::WorkQueue,
                subjects: vec![messages::ALL_WILDCARD.to_string()],
                max_bytes: 5 * 1024 * 1024,
                ..Default::default()
            })
            .await?;
        Ok(())
    }

    pub async fn publish<T: Serialize>(&self, subject: &str, payload: &T) -> anyhow::Result<()> {
        let bytes = serde_json::to_vec(payload)?;
        self.ctx
            .publish(subject.to_string(), bytes.into())
            .await?
            .await?;
        Ok(())
    }

    /// Binds (creating if absent) a durable pull consumer filtered to
    /// `filter_subject`, configured from `settings`.
    pub async fn consumer(
        &self,
        durable_name: &str,
        filter_subject: &str,
        settings: &ConsumerSettings,
    ) -> anyhow::Result<jetstream::consumer::PullConsumer> {
        let stream = self.ctx.get_stream(&self.stream_name).await?;
        let consumer = stream
            .get_or_create_consumer(
                durable_name,
                PullConfig {
                    durable_name: Some(durable_name.to_string()),
                    filter_subject: filter_subject.to_string(),
                    ack_policy: AckPolicy::Explicit,
                    max_deliver: settings.max_deliver,
                    ack_wait: Duration::from_secs(settings.ack_wait_secs),
                    ..Default::default()
                },
            )
            .await?;
        Ok(consumer)
    }
}

/// Pulls messages from `consumer` forever, deserializing each as `T` and
/// handing it to `handle`. Errors from `handle` propagate through
/// `AppError::is_retryable`: retryable errors nak for redelivery,
/// everything else (including a parse failure) is termed — redelivering a
/// message that can never succeed just wastes the consumer's max-deliver
/// budget before it dead-letters anyway.
pub async fn run_consumer<T, F, Fut>(
    consumer: jetstream::consumer::PullConsumer,
    mut handle: F,
) -> anyhow::Result<()>
where
    T: for<'de> serde::Deserialize<'de>,
    F: FnMut(T) -> Fut,
    Fut: std::future::Future<Output = Result<(), crate::error::AppError>>,
{
    use async_nats::jetstream::AckKind;
    use futures::StreamExt;

    let mut messages = consumer.messages().await?;
    while let Some(message) = messages.next().await {
        let message = match message {
            Ok(m) => m,
            Err(err) => {
                tracing::warn!(error = %err, "consumer pull error");
                continue;
            }
        };

        let Ok(payload) = serde_json::from_slice::<T>(&message.payload) else {
            tracing::error!(subject = %message.subject, "dropping unparseable message");
            let _ = message.ack_with(AckKind::Term).await;
            continue;
        };

        match handle(payload).await {
            Ok(()) => {
                if let Err(err) = message.ack().await {
                    tracing::warn!(error = ?err, "ack failed");
                }
            }
            Err(err) if err.is_retryable() => {
                tracing::warn!(error = %err, "retryable failure, nak for redelivery");
                let _ = message.ack_with(AckKind::Nak(None)).await;
            }
            Err(err) => {
                tracing::error!(error = %err, "non-retryable failure, terminating message");
                let _ = message.ack_with(AckKind::Term).await;
            }
        }
    }
    Ok(())
}
