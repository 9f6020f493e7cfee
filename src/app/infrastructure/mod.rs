//! Infrastructure layer - external integrations and utilities.
//!
//! - Platform-specific detection
//! - Error types

pub mod error;
pub mod platform;
