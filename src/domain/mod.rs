//! Domain value objects and validated form types.
//!
//! Raw form submissions (`InquiryForm`, `JobApplicationForm`) only become
//! usable `Inquiry` / `JobApplication` values through their `validate`
//! methods, so everything downstream can assume the field bounds hold.

pub mod application;
pub mod email;
pub mod errors;
pub mod inquiry;

pub use application::{JobApplication, JobApplicationForm, ResumeUpload};
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use inquiry::{Inquiry, InquiryForm, ProjectType, Timeline};
