//! Broker referral data models and API request/response types.
//!
//! Brokers are the partner listings shown on the public landing page. The
//! registry is plain CRUD with light write-time validation; nothing else in
//! the system references broker records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a broker record from the database.
///
/// # Database Table
///
/// Maps to the `brokers` table. `attributes` holds up to 3 free-text
/// marketing bullet points ("Fast Withdrawal", "Min Deposit $10", ...),
/// capped at write time and by a table CHECK constraint.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Broker {
    /// Unique identifier for this broker
    pub id: Uuid,

    /// Display name of the broker
    pub name: String,

    /// Short marketing description
    pub description: String,

    /// Logo/banner image URL
    pub image_url: String,

    /// Up to 3 free-text attribute strings
    pub attributes: Vec<String>,

    /// Referral signup URL
    pub signup_link: String,

    /// Timestamp when the broker was added
    pub created_at: DateTime<Utc>,
}

/// Request body for creating or replacing a broker.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Quotex",
///   "description": "Popular binary options broker",
///   "image_url": "https://example.com/quotex.png",
///   "attributes": ["Fast Withdrawal", "Min Deposit $10"],
///   "signup_link": "https://example.com/signup?ref=123"
/// }
/// ```
///
/// # Validation
///
/// - `name`: Required, non-empty
/// - `attributes`: At most 3 entries
/// - `image_url` / `signup_link`: Must parse as http(s) URLs
#[derive(Debug, Deserialize)]
pub struct BrokerRequest {
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub image_url: String,

    #[serde(default)]
    pub attributes: Vec<String>,

    pub signup_link: String,
}
