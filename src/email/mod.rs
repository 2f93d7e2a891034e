//! Outbound email collaborator: rendering is in scope, delivery is not
//! (no SMTP client — the `send_email` subject is consumed by a logging
//! sink until a real provider is wired in).

use crate::domain::order::format_idr;
use crate::queue::messages::SendEmail;
use rust_decimal::Decimal;

pub fn order_confirmation(name: &str, email: &str, payment_code: &str, price: Decimal) -> SendEmail {
    SendEmail {
        to: email.to_string(),
        subject: "Your ticket order is confirmed".to_string(),
        body: format!(
            "Hi {name}, your order is confirmed. Please pay {} using code {payment_code}.",
            format_idr(price)
        ),
    }
}

pub fn ticket_assigned(name: &str, email: &str, row: i32, col: i32) -> SendEmail {
    SendEmail {
        to: email.to_string(),
        subject: "Your seat is ready".to_string(),
        body: format!("Hi {name}, your seat is row {row}, seat {col}. See you there!"),
    }
}

pub fn order_cancelled(name: &str, email: &str) -> SendEmail {
    SendEmail {
        to: email.to_string(),
        subject: "Your ticket order was cancelled".to_string(),
        body: format!("Hi {name}, your order expired before payment and has been cancelled."),
    }
}

/// Logging-only sink. Swap for a real SMTP/provider client without touching
/// callers — they only ever see a `SendEmail` value on the queue.
pub async fn deliver(message: &SendEmail) {
    tracing::info!(to = %message.to, subject = %message.subject, "email delivered (stub)");
}
