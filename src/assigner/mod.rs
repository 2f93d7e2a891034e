//! Order-event consumers (C6): payment completion, seat assignment, and
//! the order-create confirmation email, grouped the way the original
//! groups all three under one event handler.

use crate::email;
use crate::error::AppError;
use crate::queue::{
    Queue, run_consumer,
    messages::{
        AssignTicketRowCol, OrderCompleted, OrderCreated, SUBJECT_EMAIL_SEND,
        SUBJECT_ORDER_ASSIGN_TICKET,
    },
};
use crate::settings::ConsumerSettings;
use crate::store::{Store, orders};

/// `events.order.create` → send the order confirmation email.
pub async fn run_order_create_consumer(
    queue: &Queue,
    settings: &ConsumerSettings,
) -> anyhow::Result<()> {
    let consumer = queue
        .consumer("order-create", crate::queue::messages::SUBJECT_ORDER_CREATE, settings)
        .await?;
    let queue = queue.clone();
    run_consumer::<OrderCreated, _, _>(consumer, move |created| {
        let queue = queue.clone();
        async move {
            let message =
                email::order_confirmation(&created.name, &created.email, &created.payment_code, created.price);
            queue
                .publish(SUBJECT_EMAIL_SEND, &message)
                .await
                .map_err(|e| AppError::TransientIo(e.to_string()))
        }
    })
    .await
}

/// `events.order.complete` → payment callback landed. Idempotent: if the
/// order is no longer pending (already completed by a redelivered copy of
/// this same message) this is a no-op, not an error.
pub async fn run_order_complete_consumer(
    queue: &Queue,
    store: &Store,
    settings: &ConsumerSettings,
) -> anyhow::Result<()> {
    let consumer = queue
        .consumer(
            "order-complete",
            crate::queue::messages::SUBJECT_ORDER_COMPLETE,
            settings,
        )
        .await?;
    let queue = queue.clone();
    let store = store.clone();
    run_consumer::<OrderCompleted, _, _>(consumer, move |completed| {
        let queue = queue.clone();
        let store = store.clone();
        async move {
            let order = store
                .find_pending_order_by_external_id(&completed.external_id)
                .await
                .map_err(AppError::from)?;
            let Some(order) = order else {
                return Ok(());
            };
            let completed_now = store
                .complete_order(&completed.external_id)
                .await
                .map_err(AppError::from)?;
            if !completed_now {
                return Ok(());
            }
            queue
                .publish(
                    SUBJECT_ORDER_ASSIGN_TICKET,
                    &AssignTicketRowCol {
                        order_id: order.id,
                        category_id: order.category_id,
                    },
                )
                .await
                .map_err(|e| AppError::TransientIo(e.to_string()))
        }
    })
    .await
}

/// `events.order.assign_ticket_row_col` → allocate the physical seat and
/// commit it together with the order update in one transaction.
pub async fn run_assign_ticket_consumer(
    queue: &Queue,
    store: &Store,
    settings: &ConsumerSettings,
) -> anyhow::Result<()> {
    let consumer = queue.consumer("order-assign-ticket", SUBJECT_ORDER_ASSIGN_TICKET, settings).await?;
    let queue = queue.clone();
    let store = store.clone();
    run_consumer::<AssignTicketRowCol, _, _>(consumer, move |assign| {
        let queue = queue.clone();
        let store = store.clone();
        async move {
            let mut tx = store.pool().begin().await.map_err(AppError::from)?;
            let (row, col) = crate::store::categories::decrement_seat_cursor(&mut tx, assign.category_id).await?;
            let applied = orders::assign_ticket_seat(&mut tx, assign.order_id, row, col)
                .await
                .map_err(AppError::from)?;
            tx.commit().await.map_err(AppError::from)?;

            if !applied {
                // Already assigned by a redelivered copy of this message.
                return Ok(());
            }

            let order = orders::find_order_by_id(store.pool(), assign.order_id)
                .await
                .map_err(AppError::from)?
                .ok_or_else(|| AppError::Unknown("assigned order vanished".into()))?;
            let message = email::ticket_assigned(&order.name, &order.email, row, col);
            queue
                .publish(SUBJECT_EMAIL_SEND, &message)
                .await
                .map_err(|e| AppError::TransientIo(e.to_string()))
        }
    })
    .await
}
