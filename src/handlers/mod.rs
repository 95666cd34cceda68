//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Performs business logic (database queries, validation)
//! 3. Returns HTTP response (JSON, status code)

/// Public activation and session status endpoints
pub mod activation;
/// Admin CRUD over activated users (list, ban, unban)
pub mod activated_users;
/// Admin CRUD over activation keys
pub mod activation_keys;
/// Admin login/logout
pub mod admin_auth;
/// Broker referral listing endpoints
pub mod brokers;
/// Health check endpoint
pub mod health;
/// Review gallery endpoints
pub mod reviews;
/// Signal generation endpoint
pub mod signals;
