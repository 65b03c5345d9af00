//! Integration tests for the contact and careers submission services.

mod mocks;

use mocks::MockEmailClient;
use std::sync::Arc;
use studio_site_core::client::AsyncEmailClient;
use studio_site_core::notifications::NotificationContext;
use studio_site_core::{
    ApplicationService, ApplicationServiceImpl, ContactService, ContactServiceImpl,
    EmailApiError, InquiryForm, JobApplicationForm, MailboxRole, Metrics, Priority, ResumeUpload,
    SubmissionError, ValidationError,
};

fn contact_service(mock: &MockEmailClient, metrics: &Metrics) -> ContactServiceImpl {
    ContactServiceImpl::new(
        Arc::new(mock.clone()) as Arc<dyn AsyncEmailClient>,
        NotificationContext::default(),
        metrics.clone(),
    )
}

fn application_service(mock: &MockEmailClient, metrics: &Metrics) -> ApplicationServiceImpl {
    ApplicationServiceImpl::new(
        Arc::new(mock.clone()) as Arc<dyn AsyncEmailClient>,
        NotificationContext::default(),
        metrics.clone(),
    )
}

fn inquiry_form(project_type: &str, message: &str) -> InquiryForm {
    InquiryForm {
        full_name: "Dana Whitfield".to_string(),
        email: "dana@example.com".to_string(),
        project_type: project_type.to_string(),
        message: message.to_string(),
        ..Default::default()
    }
}

fn application_form() -> JobApplicationForm {
    JobApplicationForm {
        full_name: "Sam Okafor".to_string(),
        email: "sam@example.com".to_string(),
        phone: "+44 965 090 2468".to_string(),
        position: "Senior Frontend Engineer".to_string(),
        linkedin_url: Some("https://www.linkedin.com/in/sam-okafor".to_string()),
        portfolio_url: None,
        cover_letter: Some("I have shipped design systems for five years.".to_string()),
        resume: Some(ResumeUpload {
            file_name: "Sam_Okafor_CV.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            size_bytes: 180_000,
        }),
    }
}

#[tokio::test]
async fn test_contact_routes_and_sends_both_messages() {
    let mock = MockEmailClient::new();
    let metrics = Metrics::new();
    let service = contact_service(&mock, &metrics);

    let outcome = service
        .submit(inquiry_form("web-development", "I need a refund on my invoice"))
        .await
        .unwrap();

    assert_eq!(outcome.decision.mailbox, MailboxRole::Accounts);
    assert_eq!(outcome.decision.cc, Some(MailboxRole::Info));
    assert_eq!(outcome.notification_id, "mock-email-1");
    assert!(outcome.confirmation_sent);

    let sent = mock.sent();
    assert_eq!(sent.len(), 2);

    assert_eq!(sent[0].to, vec!["accounts@brightforge.studio"]);
    assert_eq!(sent[0].cc, vec!["info@brightforge.studio"]);
    assert_eq!(sent[0].reply_to.as_deref(), Some("dana@example.com"));

    assert_eq!(sent[1].to, vec!["dana@example.com"]);
    assert!(sent[1].cc.is_empty());

    assert_eq!(metrics.routed_total(MailboxRole::Accounts), 1);
    assert_eq!(metrics.confirmation_failures_total(), 0);
}

#[tokio::test]
async fn test_contact_info_has_no_cc() {
    let mock = MockEmailClient::new();
    let service = contact_service(&mock, &Metrics::new());

    let outcome = service
        .submit(inquiry_form("web-development", "hello, love your work"))
        .await
        .unwrap();

    assert_eq!(outcome.decision.mailbox, MailboxRole::Info);
    let sent = mock.sent();
    assert_eq!(sent[0].to, vec!["info@brightforge.studio"]);
    assert!(sent[0].cc.is_empty());
}

#[tokio::test]
async fn test_contact_urgent_subject() {
    let mock = MockEmailClient::new();
    let service = contact_service(&mock, &Metrics::new());

    let mut form = inquiry_form("maintenance", "our checkout page is down");
    form.timeline = Some("urgent".to_string());
    let outcome = service.submit(form).await.unwrap();

    assert_eq!(outcome.decision.priority, Priority::High);
    assert!(mock.sent()[0].subject.starts_with("[URGENT] "));
}

#[tokio::test]
async fn test_contact_validation_failure_sends_nothing() {
    let mock = MockEmailClient::new();
    let metrics = Metrics::new();
    let service = contact_service(&mock, &metrics);

    let mut form = inquiry_form("other", "hello, love your work");
    form.email = "not-an-email".to_string();
    let result = service.submit(form).await;

    assert!(matches!(
        result,
        Err(SubmissionError::Validation(ValidationError::InvalidEmail(_)))
    ));
    assert_eq!(mock.send_count(), 0);
    assert_eq!(metrics.routed_total(MailboxRole::Info), 0);
}

#[tokio::test]
async fn test_contact_notification_failure_fails_submission() {
    let mock = MockEmailClient::new();
    mock.fail_nth(0, EmailApiError::RateLimitExceeded);
    let service = contact_service(&mock, &Metrics::new());

    let result = service
        .submit(inquiry_form("other", "hello, love your work"))
        .await;

    match result {
        Err(e @ SubmissionError::Delivery(EmailApiError::RateLimitExceeded)) => {
            assert!(e.user_message().contains("try again"));
        }
        other => panic!("Expected delivery error, got {:?}", other),
    }
    // No confirmation is attempted after the notification fails
    assert_eq!(mock.send_count(), 1);
}

#[tokio::test]
async fn test_contact_confirmation_failure_is_reported() {
    let mock = MockEmailClient::new();
    mock.fail_nth(1, EmailApiError::Timeout);
    let metrics = Metrics::new();
    let service = contact_service(&mock, &metrics);

    let outcome = service
        .submit(inquiry_form("other", "hello, love your work"))
        .await
        .unwrap();

    assert!(!outcome.confirmation_sent);
    assert_eq!(outcome.notification_id, "mock-email-1");
    assert_eq!(mock.send_count(), 2);
    assert_eq!(metrics.confirmation_failures_total(), 1);
}

#[tokio::test]
async fn test_application_goes_to_info() {
    let mock = MockEmailClient::new();
    let metrics = Metrics::new();
    let service = application_service(&mock, &metrics);

    let outcome = service.submit(application_form()).await.unwrap();

    assert!(outcome.confirmation_sent);
    let sent = mock.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].to, vec!["info@brightforge.studio"]);
    assert_eq!(sent[0].reply_to.as_deref(), Some("sam@example.com"));
    assert!(sent[0].subject.contains("Senior Frontend Engineer"));
    assert!(sent[0].html.contains("Sam_Okafor_CV.pdf"));
    assert_eq!(sent[1].to, vec!["sam@example.com"]);
    assert_eq!(metrics.applications_total(), 1);
}

#[tokio::test]
async fn test_application_rejects_oversized_resume() {
    let mock = MockEmailClient::new();
    let service = application_service(&mock, &Metrics::new());

    let mut form = application_form();
    if let Some(resume) = form.resume.as_mut() {
        resume.size_bytes = 6 * 1024 * 1024;
    }
    let result = service.submit(form).await;

    assert!(matches!(
        result,
        Err(SubmissionError::Validation(ValidationError::FileTooLarge { .. }))
    ));
    assert_eq!(mock.send_count(), 0);
}

#[tokio::test]
async fn test_application_notification_failure_fails_submission() {
    let mock = MockEmailClient::new();
    mock.fail_nth(0, EmailApiError::ApiError {
        status: 503,
        message: "Service Unavailable".to_string(),
    });
    let metrics = Metrics::new();
    let service = application_service(&mock, &metrics);

    let result = service.submit(application_form()).await;

    assert!(matches!(
        result,
        Err(SubmissionError::Delivery(EmailApiError::ApiError { status: 503, .. }))
    ));
    assert_eq!(mock.send_count(), 1);
    assert_eq!(metrics.applications_total(), 0);
}

#[tokio::test]
async fn test_application_confirmation_failure_is_reported() {
    let mock = MockEmailClient::new();
    mock.fail_nth(1, EmailApiError::Unauthorized);
    let metrics = Metrics::new();
    let service = application_service(&mock, &metrics);

    let outcome = service.submit(application_form()).await.unwrap();

    assert!(!outcome.confirmation_sent);
    assert_eq!(metrics.applications_total(), 1);
    assert_eq!(metrics.confirmation_failures_total(), 1);
}
