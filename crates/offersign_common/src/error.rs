// --- File: crates/offersign_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared across the Offersign crates.
///
/// Integration crates define their own error enums and convert into this one
/// for uniform reporting at the HTTP edge.
#[derive(Error, Debug)]
pub enum OffersignError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during authentication or authorization
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during an external service call
    #[error("{service_name} error: {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for OffersignError {
    fn status_code(&self) -> u16 {
        match self {
            OffersignError::HttpError(_) => 500,
            // Provider responses we fail to parse are still provider failures.
            OffersignError::ParseError(_) => 500,
            OffersignError::ConfigError(_) => 500,
            OffersignError::AuthError(_) => 401,
            OffersignError::ValidationError(_) => 400,
            OffersignError::ExternalServiceError { .. } => 500,
            OffersignError::InternalError(_) => 500,
        }
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> OffersignError {
    OffersignError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> OffersignError {
    OffersignError::ValidationError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> OffersignError {
    OffersignError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}
