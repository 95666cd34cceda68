//! LumenTrade Signal Platform - Main Application Entry Point
//!
//! This is a REST API server backing a trading-signals marketing site. It
//! owns four registries (activation keys, activated users, brokers, reviews),
//! the activation/gating workflow, the randomized signal generator, and the
//! admin console session gate.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Admin Authentication**: static credential pair, SHA-256 hashed session tokens
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

mod config;
mod db;
mod error;
mod handlers;
mod middleware;
mod models;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    let server_port = config.server_port;
    let state = AppState::new(pool, config);

    // Admin console routes (session-token protected)
    let admin_routes = Router::new()
        // Activation key registry
        .route("/api/v1/admin/keys", get(handlers::activation_keys::list_keys))
        .route("/api/v1/admin/keys", post(handlers::activation_keys::create_key))
        .route(
            "/api/v1/admin/keys/{id}",
            put(handlers::activation_keys::update_key),
        )
        .route(
            "/api/v1/admin/keys/{id}",
            delete(handlers::activation_keys::delete_key),
        )
        // Activated user registry
        .route("/api/v1/admin/users", get(handlers::activated_users::list_users))
        .route(
            "/api/v1/admin/users/{id}/ban",
            post(handlers::activated_users::ban_user),
        )
        .route(
            "/api/v1/admin/users/{id}/unban",
            post(handlers::activated_users::unban_user),
        )
        // Broker registry (writes)
        .route("/api/v1/admin/brokers", post(handlers::brokers::create_broker))
        .route(
            "/api/v1/admin/brokers/{id}",
            put(handlers::brokers::update_broker),
        )
        .route(
            "/api/v1/admin/brokers/{id}",
            delete(handlers::brokers::delete_broker),
        )
        // Review registry (writes)
        .route("/api/v1/admin/reviews", post(handlers::reviews::create_review))
        .route(
            "/api/v1/admin/reviews/{id}",
            put(handlers::reviews::update_review),
        )
        .route(
            "/api/v1/admin/reviews/{id}",
            delete(handlers::reviews::delete_review),
        )
        .route("/api/v1/admin/logout", post(handlers::admin_auth::logout))
        // Apply session authentication middleware to all routes in this group
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::auth_middleware,
        ));

    // Combine admin routes with public routes
    let app = Router::new()
        // Public routes (no authentication required)
        .route("/health", get(handlers::health::health_check))
        .route("/api/v1/brokers", get(handlers::brokers::list_brokers))
        .route("/api/v1/reviews", get(handlers::reviews::list_reviews))
        .route("/api/v1/activation", post(handlers::activation::activate))
        .route("/api/v1/activation/status", post(handlers::activation::status))
        .route("/api/v1/signals", post(handlers::signals::generate_signals))
        .route("/api/v1/admin/login", post(handlers::admin_auth::login))
        // Merge admin routes
        .merge(admin_routes)
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Share application state with all handlers via State extraction
        .with_state(state);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
