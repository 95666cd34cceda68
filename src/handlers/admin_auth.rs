//! Admin console login and logout handlers.
//!
//! The admin console is protected by a single static credential pair from
//! configuration. Login mints a random bearer token and stores its SHA-256
//! hash; the auth middleware matches that hash on every admin request.

use axum::{Extension, Json, extract::State, http::StatusCode};

use crate::error::AppError;
use crate::middleware::auth::{AdminContext, hash_token};
use crate::models::admin_session::{LoginRequest, LoginResponse};
use crate::state::AppState;

/// Log into the admin console.
///
/// # Endpoint
///
/// `POST /api/v1/admin/login`
///
/// # Request Body
///
/// ```json
/// {
///   "username": "admin",
///   "password": "secret"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: `{ "token": "<64 hex chars>" }`. The token is
///   shown only once; the server keeps its hash
/// - **Error (401)**: username or password does not match the configured pair
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if request.username != state.config.admin_username
        || request.password != state.config.admin_password
    {
        tracing::warn!("Rejected admin login for username {:?}", request.username);
        return Err(AppError::InvalidCredentials);
    }

    // 32 random bytes, presented as 64 hex characters
    let token = {
        let bytes: [u8; 32] = rand::random();
        hex::encode(bytes)
    };

    sqlx::query("INSERT INTO admin_sessions (token_hash) VALUES ($1)")
        .bind(hash_token(&token))
        .execute(&state.pool)
        .await?;

    tracing::info!("Admin session opened");

    Ok(Json(LoginResponse { token }))
}

/// Log out of the admin console.
///
/// # Endpoint
///
/// `POST /api/v1/admin/logout`
///
/// Deletes the presented session; the token stops working immediately.
/// Returns 204 No Content.
pub async fn logout(
    State(state): State<AppState>,
    Extension(admin): Extension<AdminContext>,
) -> Result<StatusCode, AppError> {
    sqlx::query("DELETE FROM admin_sessions WHERE id = $1")
        .bind(admin.session_id)
        .execute(&state.pool)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
