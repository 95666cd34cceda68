//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables.

/// Activated user model
pub mod activated_user;
/// Activation key model
pub mod activation_key;
/// Admin console session model
pub mod admin_session;
/// Broker referral model
pub mod broker;
/// Review gallery model
pub mod review;
/// Generated signal types (not persisted)
pub mod signal;
