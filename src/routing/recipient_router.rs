//! Keyword-based recipient selection for contact inquiries.
//!
//! Rules are evaluated in a fixed order and the first match wins:
//! 1. consulting projects, or billing vocabulary in the message → `accounts`
//! 2. marketing vocabulary in the message → `newsletter`
//! 3. everything else → `info`
//!
//! Any inquiry routed away from `info` copies `info`.

use super::mailbox::MailboxRole;
use crate::domain::{Inquiry, ProjectType, Timeline};
use serde::Serialize;

/// Message words that send an inquiry to accounts.
pub const ACCOUNTS_KEYWORDS: [&str; 5] = ["invoice", "payment", "billing", "accounting", "refund"];

/// Message words that send an inquiry to the newsletter team.
pub const NEWSLETTER_KEYWORDS: [&str; 4] = ["newsletter", "marketing", "subscribe", "unsubscribe"];

/// Urgency of the outbound notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Normal,
    High,
}

impl Priority {
    /// Prefix for the notification subject line.
    pub fn subject_prefix(&self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::High => "[URGENT] ",
        }
    }

    /// Promised response time shown to the client.
    pub fn response_time(&self) -> &'static str {
        match self {
            Self::Normal => "within 24 hours",
            Self::High => "within 4 business hours",
        }
    }
}

/// Where an inquiry goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoutingDecision {
    pub mailbox: MailboxRole,
    pub cc: Option<MailboxRole>,
    pub priority: Priority,
}

impl RoutingDecision {
    fn to(mailbox: MailboxRole, priority: Priority) -> Self {
        let cc = match mailbox {
            MailboxRole::Info => None,
            _ => Some(MailboxRole::Info),
        };
        Self {
            mailbox,
            cc,
            priority,
        }
    }
}

/// Pick the mailbox, CC, and priority for a validated inquiry.
pub fn route(inquiry: &Inquiry) -> RoutingDecision {
    let priority = match inquiry.timeline() {
        Some(Timeline::Urgent) => Priority::High,
        _ => Priority::Normal,
    };
    RoutingDecision::to(
        select_mailbox(inquiry.project_type(), inquiry.message()),
        priority,
    )
}

/// Mailbox selection on its own, for callers that only have the raw fields.
pub fn select_mailbox(project_type: ProjectType, message: &str) -> MailboxRole {
    let message = message.to_lowercase();

    if project_type == ProjectType::Consulting || mentions_any(&message, &ACCOUNTS_KEYWORDS) {
        MailboxRole::Accounts
    } else if mentions_any(&message, &NEWSLETTER_KEYWORDS) {
        MailboxRole::Newsletter
    } else {
        MailboxRole::Info
    }
}

fn mentions_any(message: &str, words: &[&str]) -> bool {
    words.iter().any(|w| message.contains(w))
}
