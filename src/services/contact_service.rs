//! Contact form service.
//!
//! Validates an inquiry, routes it, and dispatches the business notification
//! followed by the client confirmation.

use crate::client::AsyncEmailClient;
use crate::domain::InquiryForm;
use crate::error::SubmissionResult;
use crate::metrics::Metrics;
use crate::notifications::{inquiry_confirmation, inquiry_notification, NotificationContext};
use crate::routing::{route, RoutingDecision};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// What happened to a contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionOutcome {
    /// Where the inquiry was routed
    pub decision: RoutingDecision,

    /// Provider id of the business notification
    pub notification_id: String,

    /// Whether the client confirmation was accepted by the provider
    pub confirmation_sent: bool,
}

/// Contact service trait for business operations.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Handle one contact form submission.
    ///
    /// Fails if the form is invalid or the business notification cannot be
    /// delivered. A failed client confirmation does not fail the submission;
    /// it is reported through `confirmation_sent`.
    async fn submit(&self, form: InquiryForm) -> SubmissionResult<SubmissionOutcome>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    email_client: Arc<dyn AsyncEmailClient>,
    context: NotificationContext,
    metrics: Metrics,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    pub fn new(
        email_client: Arc<dyn AsyncEmailClient>,
        context: NotificationContext,
        metrics: Metrics,
    ) -> Self {
        Self {
            email_client,
            context,
            metrics,
        }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn submit(&self, form: InquiryForm) -> SubmissionResult<SubmissionOutcome> {
        let inquiry = form.validate().map_err(|e| {
            tracing::debug!("Rejected contact form: {}", e);
            e
        })?;

        let decision = route(&inquiry);
        self.metrics.record_routed(decision.mailbox);
        tracing::info!(
            mailbox = %decision.mailbox,
            cc = ?decision.cc,
            priority = ?decision.priority,
            project_type = %inquiry.project_type(),
            "Routed contact inquiry"
        );

        let notification =
            inquiry_notification(&self.context, &inquiry, &decision, chrono::Utc::now());
        let notification_id = self.email_client.send(&notification).await.map_err(|e| {
            tracing::error!(mailbox = %decision.mailbox, "Failed to send inquiry notification: {}", e);
            e
        })?;

        let confirmation = inquiry_confirmation(&self.context, &inquiry, &decision);
        let confirmation_sent = match self.email_client.send(&confirmation).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Inquiry notification sent but client confirmation failed: {}", e);
                self.metrics.record_confirmation_failure();
                false
            }
        };

        Ok(SubmissionOutcome {
            decision,
            notification_id,
            confirmation_sent,
        })
    }
}
