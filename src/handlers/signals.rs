//! Signal generation handler.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::error::AppError;
use crate::models::signal::{GenerateSignalsRequest, Signal};
use crate::services::{activation_service, signal_service};
use crate::state::AppState;

/// Generate a batch of signals for an activated user.
///
/// # Endpoint
///
/// `POST /api/v1/signals`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Rohan",
///   "key": "7KQ2M9XA",
///   "pair": "EUR/USD (OTC)",
///   "kind": "future",
///   "provider": "AnacondaX"
/// }
/// ```
///
/// # Response
///
/// - **Success (200 OK)**: one signal (`live`) or seven (`future`)
/// - **Error (404)**: stale session, client must re-activate
/// - **Error (403)**: user is banned
/// - **Error (422)**: weekend and the pair has no "(OTC)" marker
/// - **Error (429)**: cooldown for this (pair, kind) is still running
/// - **Error (400)**: empty pair or provider
///
/// # Gating
///
/// The (name, key) session is resolved against the user registry on every
/// request; the ban check happens before any cooldown state is touched.
pub async fn generate_signals(
    State(state): State<AppState>,
    Json(request): Json<GenerateSignalsRequest>,
) -> Result<Json<Vec<Signal>>, AppError> {
    let user =
        activation_service::require_active_user(&state.pool, &request.name, &request.key).await?;

    let signals = signal_service::generate(
        &state.cooldowns,
        &request.pair,
        request.kind,
        &request.provider,
        Utc::now(),
    )?;

    tracing::info!(
        "Generated {} {:?} signal(s) for {} on {}",
        signals.len(),
        request.kind,
        user.name,
        request.pair
    );

    Ok(Json(signals))
}
