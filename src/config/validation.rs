//! Configuration validation.
//!
//! Serde handles syntax; this module checks values. Every problem is
//! reported, not just the first.

use std::net::IpAddr;

use crate::config::schema::Settings;

/// A single semantic problem with a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("server.port must be non-zero")]
    ZeroPort,

    #[error("server.host '{0}' is not an IP address")]
    InvalidHost(String),

    #[error("server.request_timeout_secs must be greater than zero")]
    ZeroRequestTimeout,
}

/// Validate settings, collecting every error found.
pub fn validate_settings(settings: &Settings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if settings.server.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    if settings.server.host.parse::<IpAddr>().is_err() {
        errors.push(ValidationError::InvalidHost(settings.server.host.clone()));
    }

    if settings.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
