//! Async wrapper around synchronous EmailClient.
//!
//! This module provides an async interface to the synchronous EmailClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::EmailClient;
use crate::error::{EmailApiError, EmailApiResult};
use crate::models::OutboundEmail;
use async_trait::async_trait;
use std::sync::Arc;

/// Async email delivery, the seam services depend on.
#[async_trait]
pub trait AsyncEmailClient: Send + Sync {
    /// Deliver one message, returning the provider's message id.
    async fn send(&self, email: &OutboundEmail) -> EmailApiResult<String>;
}

/// Async wrapper around synchronous EmailClient.
#[derive(Clone)]
pub struct AsyncEmailClientImpl {
    client: Arc<EmailClient>,
}

impl AsyncEmailClientImpl {
    pub fn new(client: EmailClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncEmailClient for AsyncEmailClientImpl {
    async fn send(&self, email: &OutboundEmail) -> EmailApiResult<String> {
        let client = self.client.clone();
        let email = email.clone();

        tokio::task::spawn_blocking(move || client.send(&email))
            .await
            .map_err(|e| EmailApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
