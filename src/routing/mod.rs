//! Contact inquiry routing.
//!
//! A pure, total function from a validated [`Inquiry`](crate::domain::Inquiry)
//! to exactly one mailbox, an optional CC, and a priority flag.

pub mod mailbox;
pub mod recipient_router;

pub use mailbox::MailboxRole;
pub use recipient_router::{
    route, select_mailbox, Priority, RoutingDecision, ACCOUNTS_KEYWORDS, NEWSLETTER_KEYWORDS,
};
