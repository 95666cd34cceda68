//! Review gallery handlers.
//!
//! This module implements the review registry endpoints:
//! - GET /api/v1/reviews - public listing, newest first
//! - POST /api/v1/admin/reviews - create
//! - PUT /api/v1/admin/reviews/:id - replace
//! - DELETE /api/v1/admin/reviews/:id - delete

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::handlers::brokers::validate_http_url;
use crate::models::review::{Review, ReviewRequest};
use crate::state::AppState;

/// List all reviews, newest first.
///
/// # Endpoint
///
/// `GET /api/v1/reviews` (public, no authentication)
pub async fn list_reviews(State(state): State<AppState>) -> Result<Json<Vec<Review>>, AppError> {
    let reviews =
        sqlx::query_as::<_, Review>("SELECT * FROM reviews ORDER BY created_at DESC")
            .fetch_all(&state.pool)
            .await?;

    Ok(Json(reviews))
}

/// Create a new review entry.
///
/// # Endpoint
///
/// `POST /api/v1/admin/reviews`
///
/// # Response
///
/// - **Success (201 Created)**: the new review record
/// - **Error (400)**: empty title or a media URL that is not http(s)
pub async fn create_review(
    State(state): State<AppState>,
    Json(request): Json<ReviewRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_review(&request)?;

    let review = sqlx::query_as::<_, Review>(
        r#"
        INSERT INTO reviews (title, title_bn, media_url, kind, review_link)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(&request.title)
    .bind(&request.title_bn)
    .bind(&request.media_url)
    .bind(request.kind)
    .bind(&request.review_link)
    .fetch_one(&state.pool)
    .await?;

    Ok((StatusCode::CREATED, Json(review)))
}

/// Replace an existing review entry.
///
/// # Endpoint
///
/// `PUT /api/v1/admin/reviews/{id}`
pub async fn update_review(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
    Json(request): Json<ReviewRequest>,
) -> Result<Json<Review>, AppError> {
    validate_review(&request)?;

    let review = sqlx::query_as::<_, Review>(
        r#"
        UPDATE reviews
        SET title = $1, title_bn = $2, media_url = $3, kind = $4, review_link = $5
        WHERE id = $6
        RETURNING *
        "#,
    )
    .bind(&request.title)
    .bind(&request.title_bn)
    .bind(&request.media_url)
    .bind(request.kind)
    .bind(&request.review_link)
    .bind(review_id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or(AppError::ReviewNotFound)?;

    Ok(Json(review))
}

/// Delete a review entry.
///
/// # Endpoint
///
/// `DELETE /api/v1/admin/reviews/{id}`
///
/// Returns 204 No Content.
pub async fn delete_review(
    State(state): State<AppState>,
    Path(review_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
        .bind(review_id)
        .execute(&state.pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::ReviewNotFound);
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Validate a review write request.
fn validate_review(request: &ReviewRequest) -> Result<(), AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "Review title must not be empty".to_string(),
        ));
    }

    validate_http_url(&request.media_url, "media_url")?;

    // The review link is optional; validate only when present.
    if !request.review_link.is_empty() {
        validate_http_url(&request.review_link, "review_link")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::review::MediaKind;

    fn request() -> ReviewRequest {
        ReviewRequest {
            title: "Great payout".to_string(),
            title_bn: String::new(),
            media_url: "https://example.com/proof.png".to_string(),
            kind: MediaKind::Image,
            review_link: String::new(),
        }
    }

    #[test]
    fn accepts_minimal_review() {
        assert!(validate_review(&request()).is_ok());
    }

    #[test]
    fn rejects_empty_title() {
        let mut r = request();
        r.title = String::new();
        assert!(validate_review(&r).is_err());
    }

    #[test]
    fn rejects_non_http_media_url() {
        let mut r = request();
        r.media_url = "file:///etc/passwd".to_string();
        assert!(validate_review(&r).is_err());
    }

    #[test]
    fn review_link_is_validated_only_when_present() {
        let mut r = request();
        r.review_link = "nope".to_string();
        assert!(validate_review(&r).is_err());

        r.review_link = "https://example.com/full-review".to_string();
        assert!(validate_review(&r).is_ok());
    }
}
