//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and a stable
/// machine-readable error code.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from database operations
/// - **Authentication Errors**: Bad admin credentials or session tokens
/// - **Activation Errors**: Wrong key, stale session, banned user
/// - **Signal Errors**: Market closed, cooldown still running
/// - **Validation Errors**: Invalid request data
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Admin credentials or session token are missing or invalid.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Submitted activation key matches no active key record.
    ///
    /// Returns HTTP 422 Unprocessable Entity. Clients surface this as a
    /// blocking "Wrong Activation Key" notification.
    #[error("Wrong activation key")]
    KeyMismatch,

    /// No activated user exists for the presented (name, key) pair.
    ///
    /// Returns HTTP 404 Not Found. A client holding a cached session that
    /// gets this response must discard the session and re-activate.
    #[error("User not found")]
    UserNotFound,

    /// The activated user has been banned by an admin.
    ///
    /// Returns HTTP 403 Forbidden. The activation record stays intact;
    /// unbanning restores access with no re-activation.
    #[error("User is banned")]
    UserBanned,

    /// Weekend signal request for a pair without the "(OTC)" marker.
    ///
    /// Returns HTTP 422 Unprocessable Entity.
    #[error("Real market is off")]
    MarketClosed,

    /// A signal for the same (pair, kind) was generated too recently.
    ///
    /// Returns HTTP 429 Too Many Requests. Carries the remaining wait in
    /// whole seconds.
    #[error("Signal already running, retry in {0}s")]
    CooldownActive(i64),

    /// Requested activation key record does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Activation key not found")]
    KeyNotFound,

    /// Requested broker record does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Broker not found")]
    BrokerNotFound,

    /// Requested review record does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Review not found")]
    ReviewNotFound,

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("Invalid request")]
    InvalidRequest(String),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `InvalidCredentials` → 401 Unauthorized
/// - `UserNotFound` / `KeyNotFound` / `BrokerNotFound` / `ReviewNotFound` → 404 Not Found
/// - `KeyMismatch` / `MarketClosed` → 422 Unprocessable Entity
/// - `UserBanned` → 403 Forbidden
/// - `CooldownActive` → 429 Too Many Requests
/// - `InvalidRequest` → 400 Bad Request
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            AppError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "invalid_credentials",
                self.to_string(),
            ),
            AppError::KeyMismatch => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "wrong_activation_key",
                self.to_string(),
            ),
            AppError::UserNotFound => (StatusCode::NOT_FOUND, "user_not_found", self.to_string()),
            AppError::UserBanned => (StatusCode::FORBIDDEN, "user_banned", self.to_string()),
            AppError::MarketClosed => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "market_closed",
                self.to_string(),
            ),
            AppError::CooldownActive(_) => (
                StatusCode::TOO_MANY_REQUESTS,
                "signal_cooldown",
                self.to_string(),
            ),
            AppError::KeyNotFound => (
                StatusCode::NOT_FOUND,
                "activation_key_not_found",
                self.to_string(),
            ),
            AppError::BrokerNotFound => {
                (StatusCode::NOT_FOUND, "broker_not_found", self.to_string())
            }
            AppError::ReviewNotFound => {
                (StatusCode::NOT_FOUND, "review_not_found", self.to_string())
            }
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        // Build JSON response body
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // Return the response with status code and JSON body
        (status, body).into_response()
    }
}
