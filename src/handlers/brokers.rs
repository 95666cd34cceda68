//! Broker referral listing handlers.
//!
//! This module implements the broker registry endpoints:
//! - GET /api/v1/brokers - public listing
//! - POST /api/v1/admin/brokers - create
//! - PUT /api/v1/admin/brokers/:id - replace
//! - DELETE /api/v1/admin/brokers/:id - delete

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::broker::{Broker, BrokerRequest};
use crate::state::AppState;

/// Maximum number of free-text attributes per broker.
const MAX_ATTRIBUTES: usize = 3;

/// List all brokers, newest first.
///
/// # Endpoint
///
/// `GET /api/v1/brokers` (public, no authentication)
pub async fn list_brokers(State(state): State<AppState>) -> Result<Json<Vec<Broker>>, AppError> {
    let brokers =
        sqlx::query_as::<_, Broker>("SELECT * FROM brokers ORDER BY created_at DESC")
            .fetch_all(&state.pool)
            .await?;

    Ok(Json(brokers))
}

/// Create a new broker listing.
///
/// # Endpoint
///
/// `POST /api/v1/admin/brokers`
///
/// # Response
///
/// - **Success (201 Created)**: the new broker record
/// - **Error (400)**: empty name, more than 3 attributes, or a link that is
///   not an http(s) URL
pub async fn create_broker(
    State(state): State<AppState>,
    Json(request): Json<BrokerRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_broker(&request)?;

    let broker = sqlx::query_as::<_, Broker>(
        r#"
        INSERT INTO brokers (name, description, image_url, attributes, signup_link)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(&request.name)
    .bind(&request.description)
    .bind(&request.image_url)
    .bind(&request.attributes)
    .bind(&request.signup_link)
    .fetch_one(&state.pool)
    .await?;

    Ok((StatusCode::CREATED, Json(broker)))
}

/// Replace an existing broker listing.
///
/// # Endpoint
///
/// `PUT /api/v1/admin/brokers/{id}`
pub async fn update_broker(
    State(state): State<AppState>,
    Path(broker_id): Path<Uuid>,
    Json(request): Json<BrokerRequest>,
) -> Result<Json<Broker>, AppError> {
    validate_broker(&request)?;

    let broker = sqlx::query_as::<_, Broker>(
        r#"
        UPDATE brokers
        SET name = $1, description = $2, image_url = $3, attributes = $4, signup_link = $5
        WHERE id = $6
        RETURNING *
        "#,
    )
    .bind(&request.name)
    .bind(&request.description)
    .bind(&request.image_url)
    .bind(&request.attributes)
    .bind(&request.signup_link)
    .bind(broker_id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::BrokerNotFound)?;

    Ok(Json(broker))
}

/// Delete a broker listing.
///
/// # Endpoint
///
/// `DELETE /api/v1/admin/brokers/{id}`
///
/// Returns 204 No Content.
pub async fn delete_broker(
    State(state): State<AppState>,
    Path(broker_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM brokers WHERE id = $1")
        .bind(broker_id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::BrokerNotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Validate a broker write request.
///
/// # Rules
///
/// - Name must be non-empty
/// - At most 3 attributes
/// - Image and signup links must be http(s) URLs
fn validate_broker(request: &BrokerRequest) -> Result<(), AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "Broker name must not be empty".to_string(),
        ));
    }

    if request.attributes.len() > MAX_ATTRIBUTES {
        return Err(AppError::InvalidRequest(format!(
            "At most {} attributes are allowed",
            MAX_ATTRIBUTES
        )));
    }

    validate_http_url(&request.image_url, "image_url")?;
    validate_http_url(&request.signup_link, "signup_link")?;

    Ok(())
}

/// Validate that a field is a parseable http(s) URL.
pub(crate) fn validate_http_url(value: &str, field: &str) -> Result<(), AppError> {
    let parsed = url::Url::parse(value)
        .map_err(|_| AppError::InvalidRequest(format!("{} is not a valid URL", field)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(AppError::InvalidRequest(format!(
            "{} must use http or https",
            field
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(attributes: Vec<&str>) -> BrokerRequest {
        BrokerRequest {
            name: "Quotex".to_string(),
            description: String::new(),
            image_url: "https://example.com/logo.png".to_string(),
            attributes: attributes.into_iter().map(String::from).collect(),
            signup_link: "https://example.com/signup".to_string(),
        }
    }

    #[test]
    fn accepts_up_to_three_attributes() {
        assert!(validate_broker(&request(vec![])).is_ok());
        assert!(validate_broker(&request(vec!["a", "b", "c"])).is_ok());
    }

    #[test]
    fn rejects_four_attributes() {
        assert!(validate_broker(&request(vec!["a", "b", "c", "d"])).is_err());
    }

    #[test]
    fn rejects_empty_name_and_bad_urls() {
        let mut r = request(vec![]);
        r.name = "  ".to_string();
        assert!(validate_broker(&r).is_err());

        let mut r = request(vec![]);
        r.signup_link = "not a url".to_string();
        assert!(validate_broker(&r).is_err());

        let mut r = request(vec![]);
        r.image_url = "ftp://example.com/logo.png".to_string();
        assert!(validate_broker(&r).is_err());
    }
}
