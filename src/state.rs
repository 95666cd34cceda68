//! Shared application state.
//!
//! One value of `AppState` is built at startup and cloned into every handler
//! via Axum's `State` extractor. It owns the only two pieces of shared
//! mutable data in the system: the database pool and the in-memory signal
//! cooldown map. There are no module-level caches.

use crate::config::Config;
use crate::db::DbPool;
use crate::services::signal_service::CooldownTracker;

/// Application state shared across all handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: DbPool,

    /// Signal generation cooldowns, keyed by (pair, kind)
    pub cooldowns: CooldownTracker,

    /// Loaded configuration (admin credentials live here)
    pub config: Config,
}

impl AppState {
    pub fn new(pool: DbPool, config: Config) -> Self {
        Self {
            pool,
            cooldowns: CooldownTracker::new(),
            config,
        }
    }
}
