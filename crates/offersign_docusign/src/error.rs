// --- File: crates/offersign_docusign/src/error.rs ---
use offersign_common::{
    config_error, external_service_error, validation_error, HttpStatusCode, OffersignError,
};
use thiserror::Error;

/// DocuSign-specific error types.
#[derive(Error, Debug)]
pub enum DocusignError {
    /// Error occurred during a DocuSign API request
    #[error("DocuSign API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Token exchange or user-info lookup was rejected by the provider
    #[error("DocuSign authentication failed: {0}")]
    AuthError(String),

    /// Error returned by the envelope API
    #[error("DocuSign API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Error parsing a DocuSign API response
    #[error("Failed to parse DocuSign API response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Inbound request failed validation
    #[error("Invalid send-offer request: {0}")]
    ValidationError(String),

    /// Missing or incomplete DocuSign configuration
    #[error("DocuSign configuration missing or incomplete")]
    ConfigError,
}

/// Convert DocusignError to OffersignError
impl From<DocusignError> for OffersignError {
    fn from(err: DocusignError) -> Self {
        match err {
            DocusignError::RequestError(e) => {
                OffersignError::HttpError(format!("DocuSign request error: {}", e))
            }
            DocusignError::AuthError(msg) => external_service_error("DocuSign authentication", msg),
            DocusignError::ApiError { message, .. } => external_service_error("DocuSign", message),
            DocusignError::ParseError(e) => {
                OffersignError::ParseError(format!("DocuSign response parse error: {}", e))
            }
            DocusignError::ValidationError(msg) => validation_error(msg),
            DocusignError::ConfigError => {
                config_error("DocuSign configuration missing or incomplete")
            }
        }
    }
}

/// Every provider-side failure surfaces as a plain 500 at the edge; only
/// caller mistakes map to 400.
impl HttpStatusCode for DocusignError {
    fn status_code(&self) -> u16 {
        match self {
            DocusignError::RequestError(_) => 500,
            DocusignError::AuthError(_) => 500,
            DocusignError::ApiError { .. } => 500,
            DocusignError::ParseError(_) => 500,
            DocusignError::ValidationError(_) => 400,
            DocusignError::ConfigError => 500,
        }
    }
}

/// Pulls a human-readable message out of a provider error body.
///
/// The envelope API reports `{"errorCode", "message"}`; the OAuth endpoints
/// report `{"error"}`. Anything unparseable is surfaced raw.
pub(crate) fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json_body) => json_body
            .get("message")
            .or_else(|| json_body.get("error"))
            .and_then(|m| m.as_str())
            .unwrap_or(body)
            .to_string(),
        Err(_) => body.to_string(),
    }
}
