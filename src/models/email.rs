//! Outbound email payload in the delivery provider's wire format.

use serde::{Deserialize, Serialize};

/// One message handed to the email provider.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OutboundEmail {
    /// Sender, e.g. `Brightforge Studio <noreply@brightforge.studio>`
    pub from: String,

    pub to: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,

    pub subject: String,

    pub html: String,
}

/// Provider acknowledgement of an accepted message.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SendEmailResponse {
    /// Provider-assigned message id
    pub id: String,
}
