//! Admin session authentication middleware.
//!
//! This middleware intercepts every admin console request to:
//! 1. Extract the session token from the Authorization header
//! 2. Hash it and verify a matching session exists in the database
//! 3. Inject the session context into the request
//! 4. Reject unauthorized requests with HTTP 401
//!
//! Tokens are minted by the login handler; only their SHA-256 hashes are
//! stored. Clients hold the raw token and replay it per request; there is no
//! client-side authenticated flag the server trusts.

use crate::{error::AppError, models::admin_session::AdminSession, state::AppState};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Session context attached to authenticated admin requests.
///
/// This struct is inserted into the request's extension map and can be
/// extracted by route handlers that need the session identity (logout does).
#[derive(Debug, Clone)]
pub struct AdminContext {
    /// ID of the authenticated admin session
    pub session_id: Uuid,
}

/// Hash a session token the way it is stored in `admin_sessions`.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// Admin authentication middleware function.
///
/// # Flow
///
/// 1. Extract `Authorization: Bearer <token>` header from request
/// 2. Hash the `<token>` using SHA-256
/// 3. Query database for a session with a matching hash
/// 4. If found: inject `AdminContext` into request, call next handler
/// 5. If not found: return 401 Unauthorized error
///
/// # Headers
///
/// Expected header format:
/// ```
/// Authorization: Bearer abc123xyz
/// ```
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Step 1: Extract Authorization header
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::InvalidCredentials)?;

    // Step 2: Extract Bearer token
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(AppError::InvalidCredentials)?;

    // Step 3: Lookup hashed token in database
    let session = sqlx::query_as::<_, AdminSession>(
        "SELECT id, token_hash, created_at FROM admin_sessions WHERE token_hash = $1",
    )
    .bind(hash_token(token))
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::InvalidCredentials)?;

    // Step 4: Inject context into request extensions
    // Route handlers can now extract this using Extension<AdminContext>
    request.extensions_mut().insert(AdminContext {
        session_id: session.id,
    });

    // Step 5: Call the next middleware/handler
    Ok(next.run(request).await)
}
