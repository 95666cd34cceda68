//! Review gallery data models and API request/response types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Media type of a review entry.
///
/// Stored as lowercase text in the `kind` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

/// Represents a review record from the database.
///
/// # Database Table
///
/// Maps to the `reviews` table. Titles carry an English and a Bengali
/// variant; both are stored as plain data, the server does no localization.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Review {
    /// Unique identifier for this review
    pub id: Uuid,

    /// English title
    pub title: String,

    /// Bengali title variant
    pub title_bn: String,

    /// URL of the screenshot or video
    pub media_url: String,

    /// Whether the media is an image or a video
    pub kind: MediaKind,

    /// Link to the full review or original post
    pub review_link: String,

    /// Timestamp when the review was added; public listing sorts newest first
    pub created_at: DateTime<Utc>,
}

/// Request body for creating or replacing a review.
///
/// # Validation
///
/// - `title`: Required, non-empty
/// - `media_url`: Must parse as an http(s) URL
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub title: String,

    #[serde(default)]
    pub title_bn: String,

    pub media_url: String,

    pub kind: MediaKind,

    #[serde(default)]
    pub review_link: String,
}
