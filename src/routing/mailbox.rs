//! Mailbox roles and their addresses.

use serde::Serialize;
use std::fmt;

/// Named destination inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailboxRole {
    Info,
    Accounts,
    Newsletter,
}

impl MailboxRole {
    pub const ALL: [MailboxRole; 3] = [Self::Info, Self::Accounts, Self::Newsletter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Accounts => "accounts",
            Self::Newsletter => "newsletter",
        }
    }

    /// Fixed address for this role.
    pub fn address(&self) -> &'static str {
        match self {
            Self::Info => "info@brightforge.studio",
            Self::Accounts => "accounts@brightforge.studio",
            Self::Newsletter => "newsletter@brightforge.studio",
        }
    }
}

impl fmt::Display for MailboxRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
