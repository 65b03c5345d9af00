//! Careers application service.

use crate::client::AsyncEmailClient;
use crate::domain::JobApplicationForm;
use crate::error::SubmissionResult;
use crate::metrics::Metrics;
use crate::notifications::{application_confirmation, application_notification, NotificationContext};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

/// What happened to a job application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationOutcome {
    pub notification_id: String,
    pub confirmation_sent: bool,
}

/// Application service trait for business operations.
#[async_trait]
pub trait ApplicationService: Send + Sync {
    /// Validate and forward a job application to the `info` mailbox.
    async fn submit(&self, form: JobApplicationForm) -> SubmissionResult<ApplicationOutcome>;
}

/// Default implementation of ApplicationService.
pub struct ApplicationServiceImpl {
    email_client: Arc<dyn AsyncEmailClient>,
    context: NotificationContext,
    metrics: Metrics,
}

impl ApplicationServiceImpl {
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
impl ApplicationService for ApplicationServiceImpl {
    async fn submit(&self, form: JobApplicationForm) -> SubmissionResult<ApplicationOutcome> {
        let application = form.validate()?;
        tracing::info!(position = %application.position(), "Received job application");

        let notification =
            application_notification(&self.context, &application, chrono::Utc::now());
        let notification_id = self.email_client.send(&notification).await.map_err(|e| {
            tracing::error!(
                position = %application.position(),
                "Failed to forward job application: {}",
                e
            );
            e
        })?;
        self.metrics.record_application();

        let confirmation = application_confirmation(&self.context, &application);
        let confirmation_sent = match self.email_client.send(&confirmation).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Application forwarded but applicant confirmation failed: {}", e);
                self.metrics.record_confirmation_failure();
                false
            }
        };

        Ok(ApplicationOutcome {
            notification_id,
            confirmation_sent,
        })
    }
}
