//! Signal workflow types.
//!
//! Signals are randomized, cosmetic output. They are generated on demand,
//! returned to the caller, and never persisted. The types here are the wire
//! contract of the `/api/v1/signals` endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which generation mode the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    /// One immediate signal with a 1–5 minute "next candle" value.
    /// Cooldown: 3 minutes per (pair, kind).
    Live,
    /// Seven signals with entry times spread over the next 3 hours.
    /// Cooldown: 5 minutes per (pair, kind).
    Future,
}

/// Suggested trade direction. Uniformly random, no market input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
}

/// Request body for signal generation.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Rohan",
///   "key": "7KQ2M9XA",
///   "pair": "EUR/USD (OTC)",
///   "kind": "live",
///   "provider": "AnacondaX"
/// }
/// ```
///
/// The (name, key) pair is the client's persisted activation session; it is
/// re-resolved against the user registry on every request, so a fresh ban
/// takes effect immediately.
#[derive(Debug, Deserialize)]
pub struct GenerateSignalsRequest {
    pub name: String,
    pub key: String,

    /// Currency pair label; pairs containing "(OTC)" are exempt from the
    /// weekend market-closed rule
    pub pair: String,

    pub kind: SignalKind,

    /// Provider/software name shown alongside the signal; free text,
    /// must be non-empty
    pub provider: String,
}

/// One generated signal.
///
/// Live signals carry `minutes_to_next_candle`; future signals carry
/// `entry_time`. The unused field is omitted from the JSON.
#[derive(Debug, Clone, Serialize)]
pub struct Signal {
    pub pair: String,

    pub direction: Direction,

    pub provider: String,

    /// Minutes until the candle this signal targets (live signals only, 1–5)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes_to_next_candle: Option<u8>,

    /// 24-hour "HH:MM" entry time (future signals only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_time: Option<String>,

    /// When this batch was generated
    pub generated_at: DateTime<Utc>,
}
