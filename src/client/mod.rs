//! HTTP client for the transactional email provider.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication and maps
//! provider status codes onto `EmailApiError`.

mod async_wrapper;
pub use async_wrapper::{AsyncEmailClient, AsyncEmailClientImpl};

use crate::config::Config;
use crate::error::{EmailApiError, EmailApiResult};
use crate::metrics::{HttpTimer, Metrics};
use crate::models::{OutboundEmail, SendEmailResponse};
use std::sync::Arc;
use std::time::Duration;

/// HTTP client for a Resend-compatible email API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct EmailClient {
    /// Provider base URL
    base_url: String,

    /// API key sent as a bearer token
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl EmailClient {
    /// Create a new EmailClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.email_api_url.clone(),
            api_key: config.email_api_key.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create an EmailClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Share a metrics collector with the rest of the application.
    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Send one message and return the provider's message id.
    pub fn send(&self, email: &OutboundEmail) -> EmailApiResult<String> {
        let url = self.build_url("/emails");
        let body = serde_json::to_value(email).map_err(EmailApiError::JsonError)?;

        tracing::debug!(to = ?email.to, cc = ?email.cc, subject = %email.subject, "POST {}", url);

        let timer = HttpTimer::new(self.metrics.clone());
        let response = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(body);

        let response = match response {
            Ok(response) => {
                timer.complete();
                response
            }
            Err(e) => {
                timer.complete_with_error();
                let err = self.map_error(e);
                tracing::error!("POST {} - Error: {:?}", url, err);
                return Err(err);
            }
        };

        let response_body = response
            .into_string()
            .map_err(|e| EmailApiError::HttpError(e.to_string()))?;
        let ack: SendEmailResponse =
            serde_json::from_str(&response_body).map_err(EmailApiError::JsonError)?;

        self.metrics.record_email_sent();
        tracing::debug!(id = %ack.id, "Email accepted by provider");
        Ok(ack.id)
    }

    /// Map a ureq error to an EmailApiError.
    fn map_error(&self, error: ureq::Error) -> EmailApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 | 403 => EmailApiError::Unauthorized,
                    422 => EmailApiError::InvalidRequest(message),
                    429 => EmailApiError::RateLimitExceeded,
                    _ => EmailApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    EmailApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    EmailApiError::Timeout
                } else {
                    EmailApiError::HttpError(transport.to_string())
                }
            }
        }
    }
}
