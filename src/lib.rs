//! Studio Site Core - business rules behind the Brightforge Studio website.
//!
//! The site's pages are rendered elsewhere; this library holds the logic they
//! call into and the plumbing around it.
//!
//! # Architecture
//!
//! - **blog**: category normalization, listing filters, and popular tags
//! - **routing**: inquiry → mailbox selection with CC and priority
//! - **phone**: per-country phone formatting, validation, and field state
//! - **domain**: validated value objects for contact and careers forms
//! - **models**: blog posts and outbound email payloads
//! - **notifications**: notification and confirmation messages
//! - **client**: HTTP client for the email provider
//! - **repositories**: blog post sources
//! - **services**: submission and listing orchestration
//! - **config**: configuration from environment variables
//! - **error**: error types
//! - **metrics**: delivery and routing counters

pub mod blog;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod notifications;
pub mod phone;
pub mod repositories;
pub mod routing;
pub mod services;

pub use blog::{FilterOutcome, FilterQuery};
pub use client::{AsyncEmailClient, AsyncEmailClientImpl, EmailClient};
pub use config::Config;
pub use domain::{
    EmailAddress, Inquiry, InquiryForm, JobApplication, JobApplicationForm, ProjectType,
    ResumeUpload, Timeline, ValidationError,
};
pub use error::{ConfigError, ContentError, EmailApiError, SubmissionError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{ContentItem, OutboundEmail};
pub use phone::{CountryPhoneSpec, PhoneField, PhoneParseResult};
pub use routing::{MailboxRole, Priority, RoutingDecision};
pub use services::{
    ApplicationService, ApplicationServiceImpl, BlogListing, BlogService, BlogServiceImpl,
    ContactService, ContactServiceImpl, SubmissionOutcome,
};
