//! Error types for the studio site core.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The filtering, routing, and phone modules never fail; these errors belong to the
//! layers around them (configuration, content loading, and email delivery).

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when talking to the email delivery provider.
#[derive(Error, Debug)]
pub enum EmailApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Provider returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to encode or parse JSON
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// API key rejected
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Provider rejected the message payload
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while loading blog content.
#[derive(Error, Debug)]
pub enum ContentError {
    /// Content file could not be read
    #[error("Failed to read content from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Content file is not a valid post collection
    #[error("Failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two posts share the same id
    #[error("Duplicate post id: {0}")]
    DuplicateId(String),
}

/// Errors surfaced by the form submission services.
#[derive(Error, Debug)]
pub enum SubmissionError {
    /// The submitted form failed schema validation
    #[error("Invalid form data: {0}")]
    Validation(#[from] ValidationError),

    /// The business notification could not be delivered
    #[error("Email delivery failed: {0}")]
    Delivery(#[from] EmailApiError),
}

impl SubmissionError {
    /// Message safe to show to the person who submitted the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Please check your form data and try again.",
            Self::Delivery(_) => {
                "We could not send your message right now. Please try again in a few minutes."
            }
        }
    }
}

/// Convenience type alias for Results with EmailApiError
pub type EmailApiResult<T> = Result<T, EmailApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ContentError
pub type ContentResult<T> = Result<T, ContentError>;

/// Convenience type alias for Results with SubmissionError
pub type SubmissionResult<T> = Result<T, SubmissionError>;
