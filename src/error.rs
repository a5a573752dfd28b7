//! Error types for the key space explorer
//!
//! Provides unified error handling using thiserror.

use alloy_primitives::U256;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Key Error Enum ==
/// Reasons an exponent produced no key record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    /// Exponent is outside `[1, MAX_EXPONENT)`
    #[error("Exponent out of range: {0}")]
    OutOfRange(U256),

    /// The exponent was in range but the crypto layer rejected it
    #[error("Key derivation failed for {exponent}: {reason}")]
    Derivation { exponent: U256, reason: String },
}

// == Balance Error Enum ==
/// Failures of the external balance lookup.
#[derive(Error, Debug)]
pub enum BalanceError {
    /// Transport failure, including timeouts
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Service answered with a non-200 status
    #[error("Unexpected status: {0}")]
    Status(u16),

    /// Body did not contain a balance for the requested address
    #[error("Malformed response: {0}")]
    Malformed(String),
}

// == API Error Enum ==
/// Errors surfaced by the HTTP layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Path segment is not a usable exponent
    #[error("Invalid Key")]
    InvalidKey,

    /// Exponent parsed but falls outside the key space
    #[error("Invalid Key, not in range 1-{0}")]
    OutOfRange(U256),

    /// Crypto layer failed for an in-range exponent
    #[error("Key generation failed")]
    KeyGeneration,

    /// Unknown route
    #[error("File not found")]
    NotFound,
}

impl From<KeyError> for ApiError {
    fn from(err: KeyError) -> Self {
        match err {
            KeyError::OutOfRange(_) => {
                ApiError::OutOfRange(crate::keys::MAX_EXPONENT - U256::from(1u64))
            }
            KeyError::Derivation { .. } => ApiError::KeyGeneration,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidKey | ApiError::OutOfRange(_) => StatusCode::BAD_REQUEST,
            ApiError::KeyGeneration => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
