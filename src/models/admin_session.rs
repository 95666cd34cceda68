//! Admin console session model and login types.
//!
//! The admin console authenticates with a single static credential pair from
//! configuration. A successful login mints a random bearer token; only its
//! SHA-256 hash is stored, and every admin request is matched by hash.
//! Sessions never expire; logout is the only way a token dies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents an admin session record from the database.
///
/// # Database Table
///
/// Maps to the `admin_sessions` table with columns:
/// - `id`: Unique identifier (UUID)
/// - `token_hash`: SHA-256 hash of the bearer token (64 hex characters)
/// - `created_at`: When the session was opened
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AdminSession {
    /// Unique identifier for this session
    pub id: Uuid,

    /// SHA-256 hash of the actual bearer token
    ///
    /// When a request comes in with "Bearer abc123", we:
    /// 1. Hash "abc123" with SHA-256
    /// 2. Look up this hash in the database
    /// 3. If found, treat the request as authenticated
    pub token_hash: String,

    /// Timestamp when this session was created
    pub created_at: DateTime<Utc>,
}

/// Request body for the admin login endpoint.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response body for a successful admin login.
///
/// The token is only ever returned here; the server keeps just its hash.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent `/api/v1/admin/*` requests
    pub token: String,
}
