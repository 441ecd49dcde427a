//! Error types for the sales service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors raised by the payment gateway.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("Payment rejected: {0}")]
    Rejected(String),

    #[error("Payment gateway unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised by cart and reservation storage.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by the sales operations.
#[derive(Debug, thiserror::Error)]
pub enum SalesError {
    #[error("No such product: {0}")]
    NoSuchProduct(String),

    #[error("Price total out of range")]
    PriceOverflow,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Payment registration failed: {0}")]
    PaymentRegistration(#[from] PaymentError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SalesError {
    fn status_code(&self) -> StatusCode {
        match self {
            SalesError::NoSuchProduct(_) => StatusCode::NOT_FOUND,
            SalesError::PriceOverflow => StatusCode::UNPROCESSABLE_ENTITY,
            SalesError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            SalesError::PaymentRegistration(_) => StatusCode::BAD_GATEWAY,
            SalesError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for SalesError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
