//! Public activation workflow handlers.
//!
//! These are the two endpoints a visitor's browser talks to:
//! - `POST /api/v1/activation` - submit name + key, become activated
//! - `POST /api/v1/activation/status` - replay a persisted session and learn
//!   the current ban state
//!
//! The client is expected to persist `{name, key}` locally after a
//! successful activation and clear it whenever the status check returns 404.

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::error::AppError;
use crate::models::activated_user::{ActivateRequest, StatusRequest, StatusResponse};
use crate::services::activation_service;
use crate::state::AppState;

/// Activate a visitor with a name and an activation key.
///
/// # Endpoint
///
/// `POST /api/v1/activation`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Rohan",
///   "key": "7KQ2M9XA"
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: the new activated-user record
/// - **Error (400)**: empty name; form state is preserved client-side
/// - **Error (422)**: wrong activation key; no state change
///
/// A successful activation consumes the key (single-use kinds deactivate)
/// and creates the user record in one request.
pub async fn activate(
    State(state): State<AppState>,
    Json(request): Json<ActivateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = activation_service::activate(&state.pool, &request.name, &request.key).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Check the status of a persisted activation session.
///
/// # Endpoint
///
/// `POST /api/v1/activation/status`
///
/// # Response
///
/// - **Success (200 OK)**: `{ "activated": true, "is_banned": ..., "activated_at": ... }`
/// - **Error (404)**: no record matches the (name, key) pair; the session
///   is stale and the client must discard it and re-activate
///
/// The ban flag is re-read from the registry on every call, so an admin ban
/// or unban is visible on the next check with no push channel.
pub async fn status(
    State(state): State<AppState>,
    Json(request): Json<StatusRequest>,
) -> Result<Json<StatusResponse>, AppError> {
    let user = activation_service::find_status(&state.pool, &request.name, &request.key)
        .await?
        .ok_or(AppError::UserNotFound)?;

    Ok(Json(user.into()))
}
