//! Key registry service - CRUD over activation key records.
//!
//! This service handles:
//! - Listing, creating, editing and deleting activation keys
//! - Random key token generation
//! - Duration format validation
//!
//! Key *consumption* (the validate-and-count step of activation) lives in
//! `activation_service`; this module only manages the records themselves.

use rand::Rng;

use crate::db::DbPool;
use crate::error::AppError;
use crate::models::activation_key::{ActivationKey, CreateKeyRequest, UpdateKeyRequest};
use uuid::Uuid;

/// Alphabet for generated key tokens: uppercase letters and digits only.
const KEY_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated key tokens.
const KEY_LENGTH: usize = 8;

/// List all activation keys, newest first.
pub async fn list_keys(pool: &DbPool) -> Result<Vec<ActivationKey>, AppError> {
    let keys = sqlx::query_as::<_, ActivationKey>(
        "SELECT * FROM activation_keys ORDER BY created_at DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(keys)
}

/// Create a new activation key.
///
/// # Process
///
/// 1. Validate the duration format
/// 2. Use the caller-supplied token, or generate an 8-character one
/// 3. Insert with `used_count = 0`, `is_active = true`
///
/// # Errors
///
/// - `InvalidRequest`: empty/malformed duration, or an explicitly supplied
///   empty key
pub async fn create_key(
    pool: &DbPool,
    request: CreateKeyRequest,
) -> Result<ActivationKey, AppError> {
    validate_duration(&request.duration)?;

    let token = match request.key {
        Some(custom) => {
            if custom.trim().is_empty() {
                return Err(AppError::InvalidRequest(
                    "Custom key must not be empty".to_string(),
                ));
            }
            custom
        }
        None => generate_key_token(),
    };

    let key = sqlx::query_as::<_, ActivationKey>(
        r#"
        INSERT INTO activation_keys (key, kind, duration)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(&token)
    .bind(request.kind)
    .bind(&request.duration)
    .fetch_one(pool)
    .await?;

    tracing::info!("Created {:?} activation key {}", key.kind, key.id);

    Ok(key)
}

/// Replace the editable fields of an activation key.
///
/// `used_count` and `created_at` are immutable; an admin edit can rename the
/// token, change the kind or duration, and flip `is_active` (e.g., to
/// manually revive a consumed single-use key).
pub async fn update_key(
    pool: &DbPool,
    key_id: Uuid,
    request: UpdateKeyRequest,
) -> Result<ActivationKey, AppError> {
    validate_duration(&request.duration)?;

    if request.key.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "Key must not be empty".to_string(),
        ));
    }

    let key = sqlx::query_as::<_, ActivationKey>(
        r#"
        UPDATE activation_keys
        SET key = $1, kind = $2, duration = $3, is_active = $4
        WHERE id = $5
        RETURNING *
        "#,
    )
    .bind(&request.key)
    .bind(request.kind)
    .bind(&request.duration)
    .bind(request.is_active)
    .bind(key_id)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::KeyNotFound)?;

    Ok(key)
}

/// Delete an activation key unconditionally.
///
/// No referential check is made against activated users: their records hold
/// a copy of the key string, not a foreign key, and stay valid after the key
/// record is gone.
pub async fn delete_key(pool: &DbPool, key_id: Uuid) -> Result<(), AppError> {
    let result = sqlx::query("DELETE FROM activation_keys WHERE id = $1")
        .bind(key_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::KeyNotFound);
    }

    Ok(())
}

/// Generate a random 8-character key token.
///
/// # Output
///
/// Uniformly random characters from `[A-Z0-9]`, e.g. "7KQ2M9XA".
pub fn generate_key_token() -> String {
    let mut rng = rand::rng();
    (0..KEY_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..KEY_CHARSET.len());
            KEY_CHARSET[idx] as char
        })
        .collect()
}

/// Validate a key duration string.
///
/// # Accepted Forms
///
/// - `"NT"`: no time limit
/// - `<digits><unit>` with unit in `{s, m, h, d}`, e.g. "45s", "30m", "12h", "7d"
///
/// The value is only format-checked; no gating path enforces it as an
/// expiry.
pub fn validate_duration(duration: &str) -> Result<(), AppError> {
    if duration == "NT" {
        return Ok(());
    }

    let valid = duration
        .strip_suffix(['s', 'm', 'h', 'd'])
        .is_some_and(|value| !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()));

    if valid {
        Ok(())
    } else {
        Err(AppError::InvalidRequest(format!(
            "Invalid duration '{}': expected NT or <number><s|m|h|d>",
            duration
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_token_has_fixed_length_and_charset() {
        for _ in 0..200 {
            let token = generate_key_token();
            assert_eq!(token.len(), 8);
            assert!(
                token
                    .bytes()
                    .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()),
                "unexpected character in token {}",
                token
            );
        }
    }

    #[test]
    fn generated_tokens_vary() {
        let first = generate_key_token();
        // 36^8 possibilities; 20 draws colliding with the first every time
        // would mean the RNG is broken.
        let all_same = (0..20).all(|_| generate_key_token() == first);
        assert!(!all_same);
    }

    #[test]
    fn duration_accepts_sentinel_and_unit_forms() {
        for ok in ["NT", "45s", "30m", "12h", "7d", "999d", "1s"] {
            assert!(validate_duration(ok).is_ok(), "{} should be valid", ok);
        }
    }

    #[test]
    fn duration_rejects_malformed_strings() {
        for bad in ["", "NTx", "nt", "30", "m", "30w", "-5m", "3.5h", "30 m", "d30"] {
            assert!(validate_duration(bad).is_err(), "{} should be invalid", bad);
        }
    }
}
