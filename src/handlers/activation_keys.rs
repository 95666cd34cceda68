//! Admin activation key management handlers.
//!
//! This module implements the key registry endpoints:
//! - GET /api/v1/admin/keys - list all keys
//! - POST /api/v1/admin/keys - create a key (custom or generated token)
//! - PUT /api/v1/admin/keys/:id - edit a key
//! - DELETE /api/v1/admin/keys/:id - delete a key
//!
//! All routes sit behind the admin session middleware.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::activation_key::{ActivationKey, CreateKeyRequest, UpdateKeyRequest};
use crate::services::key_service;
use crate::state::AppState;

/// List all activation keys, newest first.
///
/// # Endpoint
///
/// `GET /api/v1/admin/keys`
pub async fn list_keys(State(state): State<AppState>) -> Result<Json<Vec<ActivationKey>>, AppError> {
    let keys = key_service::list_keys(&state.pool).await?;

    Ok(Json(keys))
}

/// Create a new activation key.
///
/// # Endpoint
///
/// `POST /api/v1/admin/keys`
///
/// # Request Body
///
/// ```json
/// {
///   "kind": "single_use",
///   "duration": "2d"
/// }
/// ```
///
/// Omitting `key` asks the server for a generated 8-character token.
///
/// # Response
///
/// - **Success (201 Created)**: the new key record, including the token
/// - **Error (400)**: malformed duration or empty custom key
pub async fn create_key(
    State(state): State<AppState>,
    Json(request): Json<CreateKeyRequest>,
) -> Result<impl IntoResponse, AppError> {
    let key = key_service::create_key(&state.pool, request).await?;

    Ok((StatusCode::CREATED, Json(key)))
}

/// Edit an existing activation key.
///
/// # Endpoint
///
/// `PUT /api/v1/admin/keys/{id}`
///
/// Replaces token, kind, duration and active flag. `used_count` and
/// `created_at` are immutable.
pub async fn update_key(
    State(state): State<AppState>,
    Path(key_id): Path<Uuid>,
    Json(request): Json<UpdateKeyRequest>,
) -> Result<Json<ActivationKey>, AppError> {
    let key = key_service::update_key(&state.pool, key_id, request).await?;

    Ok(Json(key))
}

/// Delete an activation key.
///
/// # Endpoint
///
/// `DELETE /api/v1/admin/keys/{id}`
///
/// Unconditional: activated users keep working because they hold a copy of
/// the key string, not a reference. Returns 204 No Content.
pub async fn delete_key(
    State(state): State<AppState>,
    Path(key_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    key_service::delete_key(&state.pool, key_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
