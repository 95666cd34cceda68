//! Admin activated-user management handlers.
//!
//! This module implements the user registry endpoints:
//! - GET /api/v1/admin/users - list all activated users
//! - POST /api/v1/admin/users/:id/ban - set the ban flag
//! - POST /api/v1/admin/users/:id/unban - clear the ban flag
//!
//! There is deliberately no delete: activation records are permanent and a
//! ban is the only suppression mechanism.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::activated_user::ActivatedUser;
use crate::services::activation_service;
use crate::state::AppState;

/// List all activated users, newest first.
///
/// # Endpoint
///
/// `GET /api/v1/admin/users`
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivatedUser>>, AppError> {
    let users = activation_service::list_users(&state.pool).await?;

    Ok(Json(users))
}

/// Ban a user.
///
/// # Endpoint
///
/// `POST /api/v1/admin/users/{id}/ban`
///
/// Idempotent; banning an already banned user is a no-op. The ban is
/// observed by the public side on its next status or signal request.
/// Returns 204 No Content.
pub async fn ban_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    activation_service::set_banned(&state.pool, user_id, true).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Unban a user.
///
/// # Endpoint
///
/// `POST /api/v1/admin/users/{id}/unban`
///
/// Restores signal access without re-activation. Returns 204 No Content.
pub async fn unban_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    activation_service::set_banned(&state.pool, user_id, false).await?;

    Ok(StatusCode::NO_CONTENT)
}
