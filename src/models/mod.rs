//! Data models exchanged with external collaborators.
//!
//! Blog posts come from the content source; outbound emails go to the
//! delivery provider.

pub mod email;
pub mod post;

pub use email::{OutboundEmail, SendEmailResponse};
pub use post::ContentItem;
