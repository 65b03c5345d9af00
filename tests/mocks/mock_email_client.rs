use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use studio_site_core::client::AsyncEmailClient;
use studio_site_core::error::{EmailApiError, EmailApiResult};
use studio_site_core::models::OutboundEmail;

/// Mock email client for testing.
///
/// Records every message it is asked to send. Failures can be queued so that
/// the n-th send call fails while the others succeed.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockEmailClient {
    sent: Arc<Mutex<Vec<OutboundEmail>>>,
    outcomes: Arc<Mutex<VecDeque<Option<EmailApiError>>>>,
}

#[allow(dead_code)]
impl MockEmailClient {
    /// Create a mock where every send succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the result of the next send call: `None` succeeds, `Some` fails.
    pub fn push_outcome(&self, outcome: Option<EmailApiError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    /// Make the next send calls succeed then fail with `error`.
    pub fn fail_nth(&self, n: usize, error: EmailApiError) {
        for _ in 0..n {
            self.push_outcome(None);
        }
        self.push_outcome(Some(error));
    }

    /// Every message passed to `send`, in call order, including failed ones.
    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn send_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl AsyncEmailClient for MockEmailClient {
    async fn send(&self, email: &OutboundEmail) -> EmailApiResult<String> {
        let attempt = {
            let mut sent = self.sent.lock().unwrap();
            sent.push(email.clone());
            sent.len()
        };

        match self.outcomes.lock().unwrap().pop_front().flatten() {
            Some(error) => Err(error),
            None => Ok(format!("mock-email-{}", attempt)),
        }
    }
}
