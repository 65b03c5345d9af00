//! Basic metrics instrumentation for email delivery and form handling.
//!
//! Provides counters and duration tracking for provider requests, plus
//! per-mailbox routing counts.

use crate::routing::MailboxRole;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector shared by the email client and the services.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of HTTP requests made to the provider
    http_requests_total: Arc<AtomicU64>,

    /// Total number of failed provider requests
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all provider requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Emails accepted by the provider
    emails_sent_total: Arc<AtomicU64>,

    /// Client confirmations that could not be sent
    confirmation_failures_total: Arc<AtomicU64>,

    /// Inquiries routed per mailbox, indexed like `MailboxRole::ALL`
    routed_total: Arc<[AtomicU64; 3]>,

    /// Job applications forwarded
    applications_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
            emails_sent_total: Arc::new(AtomicU64::new(0)),
            confirmation_failures_total: Arc::new(AtomicU64::new(0)),
            routed_total: Arc::new([AtomicU64::new(0), AtomicU64::new(0), AtomicU64::new(0)]),
            applications_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a provider request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a failed provider request.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_email_sent(&self) {
        self.emails_sent_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_confirmation_failure(&self) {
        self.confirmation_failures_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record where an inquiry was routed.
    pub fn record_routed(&self, mailbox: MailboxRole) {
        self.routed_total[Self::slot(mailbox)].fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_application(&self) {
        self.applications_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average provider request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    pub fn emails_sent_total(&self) -> u64 {
        self.emails_sent_total.load(Ordering::Relaxed)
    }

    pub fn confirmation_failures_total(&self) -> u64 {
        self.confirmation_failures_total.load(Ordering::Relaxed)
    }

    /// Inquiries routed to `mailbox` so far.
    pub fn routed_total(&self, mailbox: MailboxRole) -> u64 {
        self.routed_total[Self::slot(mailbox)].load(Ordering::Relaxed)
    }

    pub fn applications_total(&self) -> u64 {
        self.applications_total.load(Ordering::Relaxed)
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            http_requests_total: self.http_requests_total(),
            http_errors_total: self.http_errors_total(),
            http_duration_avg_ms: self.http_duration_avg_ms(),
            emails_sent_total: self.emails_sent_total(),
            confirmation_failures_total: self.confirmation_failures_total(),
            routed_info_total: self.routed_total(MailboxRole::Info),
            routed_accounts_total: self.routed_total(MailboxRole::Accounts),
            routed_newsletter_total: self.routed_total(MailboxRole::Newsletter),
            applications_total: self.applications_total(),
        }
    }

    fn slot(mailbox: MailboxRole) -> usize {
        match mailbox {
            MailboxRole::Info => 0,
            MailboxRole::Accounts => 1,
            MailboxRole::Newsletter => 2,
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub http_requests_total: u64,
    pub http_errors_total: u64,
    pub http_duration_avg_ms: f64,
    pub emails_sent_total: u64,
    pub confirmation_failures_total: u64,
    pub routed_info_total: u64,
    pub routed_accounts_total: u64,
    pub routed_newsletter_total: u64,
    pub applications_total: u64,
}

/// Helper for timing provider requests.
pub struct HttpTimer {
    start: Instant,
    metrics: Metrics,
}

impl HttpTimer {
    /// Start timing a request.
    pub fn new(metrics: Metrics) -> Self {
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing and record the duration.
    pub fn complete(self) {
        self.metrics.record_http_request(self.start.elapsed());
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        self.metrics.record_http_request(self.start.elapsed());
        self.metrics.record_http_error();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert_eq!(metrics.http_requests_total(), 0);
        assert_eq!(metrics.emails_sent_total(), 0);
        assert_eq!(metrics.routed_total(MailboxRole::Info), 0);
    }

    #[test]
    fn test_average_duration() {
        let metrics = Metrics::new();
        metrics.record_http_request(Duration::from_millis(100));
        metrics.record_http_request(Duration::from_millis(200));
        assert_eq!(metrics.http_requests_total(), 2);
        assert_eq!(metrics.http_duration_total_ms(), 300);
        assert_eq!(metrics.http_duration_avg_ms(), 150.0);
    }

    #[test]
    fn test_routed_per_mailbox() {
        let metrics = Metrics::new();
        metrics.record_routed(MailboxRole::Accounts);
        metrics.record_routed(MailboxRole::Accounts);
        metrics.record_routed(MailboxRole::Newsletter);

        let summary = metrics.summary();
        assert_eq!(summary.routed_accounts_total, 2);
        assert_eq!(summary.routed_newsletter_total, 1);
        assert_eq!(summary.routed_info_total, 0);
    }

    #[test]
    fn test_http_timer_with_error() {
        let metrics = Metrics::new();
        let timer = HttpTimer::new(metrics.clone());
        timer.complete_with_error();

        assert_eq!(metrics.http_requests_total(), 1);
        assert_eq!(metrics.http_errors_total(), 1);
    }

    #[test]
    fn test_concurrent_access() {
        let metrics = Metrics::new();
        let handles: Vec<_> = (0..2)
            .map(|_| {
                let m = metrics.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        m.record_email_sent();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(metrics.emails_sent_total(), 200);
    }
}
