//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They handle key validation, activation gating, and signal generation.

pub mod activation_service;
pub mod key_service;
pub mod signal_service;
