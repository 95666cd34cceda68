//! Activation service - key validation and user gating workflow.
//!
//! This service implements the transition from "unactivated visitor" to
//! "activated user":
//!
//! 1. The visitor submits a display name and an activation key
//! 2. The key is matched case-insensitively against active key records and
//!    consumed in one atomic statement
//! 3. A durable activated-user record is created; the client persists the
//!    (name, key) pair as its session
//! 4. Every later status or signal request re-resolves that pair here, so
//!    admin bans propagate on the next check without any push channel
//!
//! # Atomicity
//!
//! Key consumption is a single conditional UPDATE, not a read followed by a
//! write, so two concurrent validations of the same single-use key cannot
//! both succeed: the second request re-evaluates `is_active` after the first
//! commits and finds the key already consumed.

use crate::db::DbPool;
use crate::error::AppError;
use crate::models::activated_user::ActivatedUser;
use uuid::Uuid;

/// Validate and consume an activation key.
///
/// Matches `submitted_key` case-insensitively against active key records.
/// On a match, increments `used_count` and, for single-use kinds, clears
/// `is_active`, both in the same statement.
///
/// Returns whether any key matched. Callers never learn *which* record
/// matched; the workflow only needs the boolean.
///
/// # Duplicate Keys
///
/// Key strings are intended unique but not enforced unique. If duplicates
/// exist, one validation consumes every active record with that string.
pub async fn validate_key(pool: &DbPool, submitted_key: &str) -> Result<bool, AppError> {
    if submitted_key.trim().is_empty() {
        return Ok(false);
    }

    // Conditional update doubles as the match check: zero affected rows
    // means no active key carries this string. Under concurrent validation
    // of a single-use key the row lock serializes the two statements and
    // the loser sees is_active = false.
    let result = sqlx::query(
        r#"
        UPDATE activation_keys
        SET used_count = used_count + 1,
            is_active = (kind <> 'single_use')
        WHERE LOWER(key) = LOWER($1) AND is_active = true
        "#,
    )
    .bind(submitted_key)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Activate a visitor: validate the key and create the user record.
///
/// # Process
///
/// 1. Reject an empty display name ("name required")
/// 2. Validate and consume the key
/// 3. Insert the activated-user record with `is_banned = false`
///
/// # Errors
///
/// - `InvalidRequest`: name is empty after trimming; no key is consumed
/// - `KeyMismatch`: the key matched no active record; no state change
///
/// # Returns
///
/// The created user record. The client is expected to persist
/// `{name, key}` locally and replay it on future status checks.
pub async fn activate(pool: &DbPool, name: &str, key: &str) -> Result<ActivatedUser, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidRequest(
            "Please enter your name".to_string(),
        ));
    }

    if !validate_key(pool, key).await? {
        return Err(AppError::KeyMismatch);
    }

    // The key is consumed at this point. Record the activation with the key
    // string exactly as submitted - status checks match on it verbatim.
    let user = sqlx::query_as::<_, ActivatedUser>(
        r#"
        INSERT INTO activated_users (name, activation_key)
        VALUES ($1, $2)
        RETURNING *
        "#,
    )
    .bind(name)
    .bind(key)
    .fetch_one(pool)
    .await?;

    tracing::info!("Activated user {} ({})", user.name, user.id);

    Ok(user)
}

/// Resolve the activation status for a persisted (name, key) session.
///
/// Exact match on both fields. `None` means the session is stale (the
/// record was never created or referenced a different pair) and the caller
/// should discard its cached session.
///
/// If several records match (same name activated twice with an unlimited
/// key), the most recent activation wins.
pub async fn find_status(
    pool: &DbPool,
    name: &str,
    key: &str,
) -> Result<Option<ActivatedUser>, AppError> {
    if name.is_empty() || key.is_empty() {
        return Ok(None);
    }

    let user = sqlx::query_as::<_, ActivatedUser>(
        r#"
        SELECT * FROM activated_users
        WHERE name = $1 AND activation_key = $2
        ORDER BY activated_at DESC
        LIMIT 1
        "#,
    )
    .bind(name)
    .bind(key)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Resolve a session and require it to be activated and not banned.
///
/// This is the gate in front of the signal workflow.
///
/// # Errors
///
/// - `UserNotFound`: stale session, client must re-activate
/// - `UserBanned`: admin has banned this user
pub async fn require_active_user(
    pool: &DbPool,
    name: &str,
    key: &str,
) -> Result<ActivatedUser, AppError> {
    let user = find_status(pool, name, key)
        .await?
        .ok_or(AppError::UserNotFound)?;

    if user.is_banned {
        return Err(AppError::UserBanned);
    }

    Ok(user)
}

/// List all activated users, newest first.
pub async fn list_users(pool: &DbPool) -> Result<Vec<ActivatedUser>, AppError> {
    let users = sqlx::query_as::<_, ActivatedUser>(
        "SELECT * FROM activated_users ORDER BY activated_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Set or clear the ban flag on a user record.
///
/// Unconditional and idempotent: re-banning an already banned user changes
/// nothing. The activation record itself is untouched, so an unban restores
/// access without re-activation.
pub async fn set_banned(pool: &DbPool, user_id: Uuid, banned: bool) -> Result<(), AppError> {
    let result = sqlx::query("UPDATE activated_users SET is_banned = $1 WHERE id = $2")
        .bind(banned)
        .bind(user_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::UserNotFound);
    }

    tracing::info!(
        "User {} {}",
        user_id,
        if banned { "banned" } else { "unbanned" }
    );

    Ok(())
}
