//! Crate-wide error type and its HTTP/queue conversions.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

/// The five error kinds every handler (HTTP or queue) ultimately resolves to.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: String,
        /// Per-field messages, e.g. `{"category_id": "not found"}`, surfaced
        /// as the HTTP response's `data` when present.
        fields: Option<serde_json::Value>,
    },

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    TransientIo(String),

    #[error("{0}")]
    LogicViolation(String),

    #[error("{0}")]
    Unknown(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            fields: None,
        }
    }

    /// Validation failure with a per-field breakdown, e.g. from
    /// `validator::ValidationErrors`.
    pub fn validation_fields(msg: impl Into<String>, fields: serde_json::Value) -> Self {
        Self::Validation {
            message: msg.into(),
            fields: Some(fields),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::TransientIo(_) | AppError::LogicViolation(_) | AppError::Unknown(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// What a queue consumer should do with this error: redeliver (nak) or
    /// drop-and-log (ack, since retrying a poison message cannot help).
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::TransientIo(_))
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<serde_json::Value>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        tracing::warn!(error = %self, status = %status, "request failed");
        let data = match &self {
            AppError::Validation { fields, .. } => fields.clone(),
            _ => None,
        };
        let body = ErrorBody {
            error: self.to_string(),
            data,
        };
        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::TransientIo(format!("store error: {err}"))
    }
}

impl From<redis::RedisError> for AppError {
    fn from(err: redis::RedisError) -> Self {
        AppError::TransientIo(format!("cache error: {err}"))
    }
}

impl From<async_nats::jetstream::context::PublishError> for AppError {
    fn from(err: async_nats::jetstream::context::PublishError) -> Self {
        AppError::TransientIo(format!("queue publish error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_transient_io_is_retryable() {
        assert!(AppError::TransientIo("x".into()).is_retryable());
        assert!(!AppError::validation("x").is_retryable());
        assert!(!AppError::Conflict("x".into()).is_retryable());
        assert!(!AppError::LogicViolation("x".into()).is_retryable());
        assert!(!AppError::Unknown("x".into()).is_retryable());
    }

    #[test]
    fn status_codes_match_kind() {
        assert_eq!(AppError::validation("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::Conflict("x".into()).status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::TransientIo("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::LogicViolation("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn validation_fields_round_trip_into_response_data() {
        let err = AppError::validation_fields(
            "validation failed",
            serde_json::json!({"category_id": "not found"}),
        );
        match err {
            AppError::Validation { fields, .. } => {
                assert_eq!(fields, Some(serde_json::json!({"category_id": "not found"})));
            }
            _ => panic!("expected Validation"),
        }
    }
}
