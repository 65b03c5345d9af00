//! Application service layer.
//!
//! Services sit between the site's request handlers and the pure modules:
//! they validate input, call the filtering/routing logic, and talk to the
//! content source and the email provider.

mod application_service;
mod blog_service;
mod contact_service;

pub use application_service::{ApplicationOutcome, ApplicationService, ApplicationServiceImpl};
pub use blog_service::{BlogListing, BlogService, BlogServiceImpl};
pub use contact_service::{ContactService, ContactServiceImpl, SubmissionOutcome};
