//! Activated user data models and API request/response types.
//!
//! An activated user is the durable record of one successful activation.
//! Users are never deleted; admins can only flip the ban flag. The public
//! side identifies a user by the (name, activation_key) pair; no id-based
//! lookup is exposed outside the admin console.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents an activated user record from the database.
///
/// # Database Table
///
/// Maps to the `activated_users` table. `name` is not unique: two people may
/// activate under the same display name with different keys, and the same
/// name with the same unlimited key produces distinct records per activation.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ActivatedUser {
    /// Unique identifier for this user record
    pub id: Uuid,

    /// Free-text display name entered at activation
    pub name: String,

    /// Copy of the key string used at activation time, not a foreign key:
    /// deleting the key record does not touch this field
    pub activation_key: String,

    /// Timestamp of the activation, immutable
    pub activated_at: DateTime<Utc>,

    /// Admin-set flag suppressing the signal workflow for this user
    pub is_banned: bool,
}

/// Request body for the public activation endpoint.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Rohan",
///   "key": "7KQ2M9XA"
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct ActivateRequest {
    /// Display name; must be non-empty after trimming
    pub name: String,

    /// Activation key token, matched case-insensitively
    pub key: String,
}

/// Request body for the session status check.
///
/// Clients re-submit the (name, key) pair they persisted locally after a
/// successful activation.
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub name: String,
    pub key: String,
}

/// Response body for the session status check.
///
/// # JSON Example
///
/// ```json
/// {
///   "activated": true,
///   "is_banned": false,
///   "activated_at": "2025-08-20T10:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// Always true in a 200 response; a stale session is a 404 instead
    pub activated: bool,

    /// Current ban flag, re-read from the registry on every call
    pub is_banned: bool,

    /// When the matching activation happened
    pub activated_at: DateTime<Utc>,
}

impl From<ActivatedUser> for StatusResponse {
    fn from(user: ActivatedUser) -> Self {
        Self {
            activated: true,
            is_banned: user.is_banned,
            activated_at: user.activated_at,
        }
    }
}
