//! HTTP middleware.

/// Admin session authentication middleware
pub mod auth;
