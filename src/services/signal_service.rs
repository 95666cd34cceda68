//! Signal service - randomized trade-direction output with cooldowns.
//!
//! Signals are cosmetic, uniformly random output with no market input and no
//! seed control. The service enforces two refusal rules before generating:
//!
//! - **Cooldown**: a new generation for the same (pair, kind) pair is refused
//!   until 3 minutes (live) / 5 minutes (future) have passed since the last
//!   one. Cooldowns are independent per (pair, kind) key, not global.
//! - **Market hours**: on Saturday and Sunday, pairs without the "(OTC)"
//!   marker are treated as closed.
//!
//! Cooldown state lives in an in-memory map owned by the server process and
//! shared through application state; it resets on restart.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};
use rand::Rng;

use crate::error::AppError;
use crate::models::signal::{Direction, Signal, SignalKind};

/// Marker substring flagging a pair as always-open.
const OTC_MARKER: &str = "(OTC)";

/// Number of signals in a future batch.
const FUTURE_BATCH_SIZE: usize = 7;

/// Shared cooldown state, keyed by (pair, kind).
///
/// Cloning is cheap; all clones share the same map. The mutex is held only
/// for the map probe, never across an await point.
#[derive(Debug, Clone, Default)]
pub struct CooldownTracker {
    last_generated: Arc<Mutex<HashMap<(String, SignalKind), DateTime<Utc>>>>,
}

impl CooldownTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the cooldown for (pair, kind) and, if clear, mark `now` as the
    /// latest generation time in the same critical section.
    ///
    /// # Errors
    ///
    /// `CooldownActive` with the remaining wait in whole seconds when the
    /// previous generation for this exact key is still within the window.
    pub fn try_begin(
        &self,
        pair: &str,
        kind: SignalKind,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let window = cooldown_window(kind);
        let mut map = self
            .last_generated
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let key = (pair.to_string(), kind);
        if let Some(last) = map.get(&key) {
            let elapsed = now - *last;
            if elapsed < window {
                return Err(AppError::CooldownActive((window - elapsed).num_seconds()));
            }
        }

        map.insert(key, now);
        Ok(())
    }
}

/// Cooldown window for a signal kind.
fn cooldown_window(kind: SignalKind) -> Duration {
    match kind {
        SignalKind::Live => Duration::minutes(3),
        SignalKind::Future => Duration::minutes(5),
    }
}

/// Whether generation must be refused as "real market is off".
///
/// True on Saturday/Sunday for any pair not carrying the OTC marker.
pub fn is_market_closed(pair: &str, now: DateTime<Utc>) -> bool {
    let weekend = matches!(now.weekday(), Weekday::Sat | Weekday::Sun);
    weekend && !pair.contains(OTC_MARKER)
}

/// Run the full signal workflow for one request.
///
/// # Process
///
/// 1. Validate pair/provider presence
/// 2. Cooldown check (and mark)
/// 3. Market-hours check
/// 4. Generate the batch
///
/// The caller is responsible for the activation gate; this function assumes
/// an activated, unbanned user.
pub fn generate(
    cooldowns: &CooldownTracker,
    pair: &str,
    kind: SignalKind,
    provider: &str,
    now: DateTime<Utc>,
) -> Result<Vec<Signal>, AppError> {
    if pair.trim().is_empty() {
        return Err(AppError::InvalidRequest(
            "Select a currency pair".to_string(),
        ));
    }
    if provider.trim().is_empty() {
        return Err(AppError::InvalidRequest("Select a provider".to_string()));
    }

    // Market check runs before the cooldown is marked: a refused weekend
    // request must not start a cooldown window.
    if is_market_closed(pair, now) {
        return Err(AppError::MarketClosed);
    }

    cooldowns.try_begin(pair, kind, now)?;

    let signals = match kind {
        SignalKind::Live => vec![generate_live(pair, provider, now)],
        SignalKind::Future => generate_future(pair, provider, now),
    };

    Ok(signals)
}

/// One live signal: random direction, 1–5 minutes to the next candle.
fn generate_live(pair: &str, provider: &str, now: DateTime<Utc>) -> Signal {
    let mut rng = rand::rng();
    Signal {
        pair: pair.to_string(),
        direction: random_direction(&mut rng),
        provider: provider.to_string(),
        minutes_to_next_candle: Some(rng.random_range(1..=5)),
        entry_time: None,
        generated_at: now,
    }
}

/// Seven future signals with entry times uniform in [now+10min, now+3h],
/// sorted non-decreasing by their "HH:MM" entry-time string.
fn generate_future(pair: &str, provider: &str, now: DateTime<Utc>) -> Vec<Signal> {
    let mut rng = rand::rng();
    let start = now + Duration::minutes(10);
    let span_seconds = (Duration::hours(3) - Duration::minutes(10)).num_seconds();

    let mut signals: Vec<Signal> = (0..FUTURE_BATCH_SIZE)
        .map(|_| {
            let entry = start + Duration::seconds(rng.random_range(0..=span_seconds));
            Signal {
                pair: pair.to_string(),
                direction: random_direction(&mut rng),
                provider: provider.to_string(),
                minutes_to_next_candle: None,
                entry_time: Some(entry.format("%H:%M").to_string()),
                generated_at: now,
            }
        })
        .collect();

    // String sort, matching how the entry times are presented. Batches that
    // straddle midnight wrap to "00:xx" and sort before the evening entries.
    signals.sort_by(|a, b| a.entry_time.cmp(&b.entry_time));
    signals
}

fn random_direction<R: Rng>(rng: &mut R) -> Direction {
    if rng.random_bool(0.5) {
        Direction::Up
    } else {
        Direction::Down
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // 2025-08-20 is a Wednesday, 2025-08-23 a Saturday, 2025-08-24 a Sunday.
    fn wednesday_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 20, 12, 0, 0).unwrap()
    }

    fn saturday_noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 8, 23, 12, 0, 0).unwrap()
    }

    #[test]
    fn market_closed_on_weekend_for_non_otc_pair() {
        assert!(is_market_closed("EUR/USD", saturday_noon()));
        assert!(is_market_closed(
            "GBP/JPY",
            Utc.with_ymd_and_hms(2025, 8, 24, 9, 30, 0).unwrap()
        ));
    }

    #[test]
    fn market_open_on_weekend_for_otc_pair() {
        assert!(!is_market_closed("EUR/USD (OTC)", saturday_noon()));
    }

    #[test]
    fn market_open_on_weekday_regardless_of_pair() {
        assert!(!is_market_closed("EUR/USD", wednesday_noon()));
        assert!(!is_market_closed("EUR/USD (OTC)", wednesday_noon()));
    }

    #[test]
    fn live_cooldown_refuses_within_three_minutes() {
        let tracker = CooldownTracker::new();
        let t0 = wednesday_noon();

        assert!(tracker.try_begin("EUR/USD", SignalKind::Live, t0).is_ok());

        let refused = tracker.try_begin("EUR/USD", SignalKind::Live, t0 + Duration::seconds(179));
        match refused {
            Err(AppError::CooldownActive(remaining)) => assert_eq!(remaining, 1),
            other => panic!("expected cooldown refusal, got {:?}", other),
        }

        // Exactly at the window boundary the next generation is allowed.
        assert!(
            tracker
                .try_begin("EUR/USD", SignalKind::Live, t0 + Duration::seconds(180))
                .is_ok()
        );
    }

    #[test]
    fn future_cooldown_is_five_minutes() {
        let tracker = CooldownTracker::new();
        let t0 = wednesday_noon();

        assert!(tracker.try_begin("EUR/USD", SignalKind::Future, t0).is_ok());
        assert!(
            tracker
                .try_begin("EUR/USD", SignalKind::Future, t0 + Duration::seconds(299))
                .is_err()
        );
        assert!(
            tracker
                .try_begin("EUR/USD", SignalKind::Future, t0 + Duration::seconds(300))
                .is_ok()
        );
    }

    #[test]
    fn cooldowns_are_independent_per_pair_and_kind() {
        let tracker = CooldownTracker::new();
        let t0 = wednesday_noon();

        assert!(tracker.try_begin("EUR/USD", SignalKind::Live, t0).is_ok());
        // Same pair, other kind - independent key.
        assert!(tracker.try_begin("EUR/USD", SignalKind::Future, t0).is_ok());
        // Other pair, same kind - also independent.
        assert!(tracker.try_begin("GBP/USD", SignalKind::Live, t0).is_ok());
        // The original key is still cooling down.
        assert!(
            tracker
                .try_begin("EUR/USD", SignalKind::Live, t0 + Duration::seconds(1))
                .is_err()
        );
    }

    #[test]
    fn live_generation_produces_one_signal_with_bounded_candle_minutes() {
        let tracker = CooldownTracker::new();
        for i in 0..50 {
            // Distinct pairs sidestep the cooldown between iterations.
            let pair = format!("PAIR{}/USD", i);
            let signals =
                generate(&tracker, &pair, SignalKind::Live, "AnacondaX", wednesday_noon())
                    .unwrap();
            assert_eq!(signals.len(), 1);
            let minutes = signals[0].minutes_to_next_candle.unwrap();
            assert!((1..=5).contains(&minutes), "minutes out of range: {}", minutes);
            assert!(signals[0].entry_time.is_none());
        }
    }

    #[test]
    fn future_generation_produces_seven_sorted_signals_in_window() {
        let tracker = CooldownTracker::new();
        let now = wednesday_noon();
        let signals =
            generate(&tracker, "EUR/USD", SignalKind::Future, "AnacondaX", now).unwrap();

        assert_eq!(signals.len(), 7);

        let times: Vec<&str> = signals
            .iter()
            .map(|s| s.entry_time.as_deref().unwrap())
            .collect();

        // Non-decreasing by string.
        assert!(times.windows(2).all(|w| w[0] <= w[1]), "unsorted: {:?}", times);

        // Noon start keeps the whole window inside one day, so the string
        // bounds are exact: [12:10, 15:00].
        for time in &times {
            assert!(*time >= "12:10" && *time <= "15:00", "out of window: {}", time);
        }

        for signal in &signals {
            assert!(signal.minutes_to_next_candle.is_none());
            assert_eq!(signal.pair, "EUR/USD");
            assert_eq!(signal.provider, "AnacondaX");
        }
    }

    #[test]
    fn generate_rejects_missing_selections() {
        let tracker = CooldownTracker::new();
        let now = wednesday_noon();

        assert!(matches!(
            generate(&tracker, "", SignalKind::Live, "AnacondaX", now),
            Err(AppError::InvalidRequest(_))
        ));
        assert!(matches!(
            generate(&tracker, "EUR/USD", SignalKind::Live, "  ", now),
            Err(AppError::InvalidRequest(_))
        ));
    }

    #[test]
    fn weekend_refusal_does_not_start_a_cooldown() {
        let tracker = CooldownTracker::new();

        assert!(matches!(
            generate(&tracker, "EUR/USD", SignalKind::Live, "AnacondaX", saturday_noon()),
            Err(AppError::MarketClosed)
        ));

        // Monday after: the refused attempt must not have marked the key.
        let monday = Utc.with_ymd_and_hms(2025, 8, 25, 9, 0, 0).unwrap();
        assert!(generate(&tracker, "EUR/USD", SignalKind::Live, "AnacondaX", monday).is_ok());
    }
}
