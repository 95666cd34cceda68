//! Activation key data models and API request/response types.
//!
//! This module defines:
//! - `ActivationKey`: Database entity for a shared-secret activation token
//! - `KeyKind`: consumption policy (single-use vs unlimited)
//! - `CreateKeyRequest` / `UpdateKeyRequest`: admin form bodies
//!
//! # Key Lifecycle
//!
//! Keys are created by an admin, consumed (counted, and for single-use kinds
//! deactivated) by successful activation, and deleted by an admin. Nothing
//! ever reactivates a consumed single-use key except an explicit admin edit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Consumption policy of an activation key.
///
/// Stored as lowercase text in the `kind` column.
///
/// - `SingleUse`: deactivated by its first successful validation
/// - `Unlimited`: validates any number of times; only `used_count` grows
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    SingleUse,
    Unlimited,
}

/// Represents an activation key record from the database.
///
/// # Database Table
///
/// Maps to the `activation_keys` table.
///
/// # Matching
///
/// The `key` string is matched case-insensitively during validation. It is
/// intended to be unique but the table does not enforce uniqueness.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct ActivationKey {
    /// Unique identifier for this key record
    pub id: Uuid,

    /// The token users submit to activate (e.g., "7KQ2M9XA")
    pub key: String,

    /// Consumption policy
    pub kind: KeyKind,

    /// Intended validity window, as a quantity string ("30m", "2d") or the
    /// sentinel "NT" for no time limit.
    ///
    /// Stored and format-validated at creation, but no gating path reads it
    /// yet; nothing sweeps or expires keys based on it.
    pub duration: String,

    /// Timestamp when the key was created, immutable
    pub created_at: DateTime<Utc>,

    /// Number of successful validations against this key
    pub used_count: i32,

    /// Whether the key can still validate
    ///
    /// False for single-use keys after their first successful validation.
    pub is_active: bool,
}

/// Request body for creating a new activation key.
///
/// # JSON Example
///
/// ```json
/// {
///   "kind": "single_use",
///   "duration": "2d",
///   "key": "VIPACCESS"  // optional; omitted means server-generated
/// }
/// ```
///
/// # Validation
///
/// - `duration`: Required, "NT" or digits followed by one of s/m/h/d
/// - `key`: Optional; when present it must be non-empty, when absent the
///   server generates an 8-character uppercase alphanumeric token
#[derive(Debug, Deserialize)]
pub struct CreateKeyRequest {
    /// Consumption policy for the new key
    pub kind: KeyKind,

    /// Validity window string ("NT", "30m", ...)
    pub duration: String,

    /// Caller-supplied token; None requests a generated one
    #[serde(default)]
    pub key: Option<String>,
}

/// Request body for editing an existing activation key.
///
/// All fields are replaced; `used_count` and `created_at` are not editable.
#[derive(Debug, Deserialize)]
pub struct UpdateKeyRequest {
    pub kind: KeyKind,
    pub duration: String,
    pub key: String,
    pub is_active: bool,
}
