//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating submitted form data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was missing or blank.
    Required(&'static str),

    /// A field is shorter than its minimum length (in characters).
    TooShort { field: &'static str, min: usize },

    /// A field is longer than its maximum length (in characters).
    TooLong { field: &'static str, max: usize },

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// A value is not one of the accepted options for its field.
    UnknownOption { field: &'static str, value: String },

    /// A link field does not hold an http(s) URL.
    InvalidUrl { field: &'static str, value: String },

    /// The uploaded file is empty.
    EmptyFile,

    /// The uploaded file exceeds the size limit.
    FileTooLarge { size_bytes: u64, max_bytes: u64 },

    /// The uploaded file type is not accepted.
    UnsupportedFileType(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required(field) => write!(f, "{} is required", field),
            Self::TooShort { field, min } => {
                write!(f, "{} must be at least {} characters", field, min)
            }
            Self::TooLong { field, max } => {
                write!(f, "{} must be at most {} characters", field, max)
            }
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::UnknownOption { field, value } => {
                write!(f, "Unknown {} option: {}", field, value)
            }
            Self::InvalidUrl { field, value } => write!(f, "Invalid {} URL: {}", field, value),
            Self::EmptyFile => write!(f, "Uploaded file is empty"),
            Self::FileTooLarge {
                size_bytes,
                max_bytes,
            } => write!(
                f,
                "Uploaded file is {} bytes, the limit is {} bytes",
                size_bytes, max_bytes
            ),
            Self::UnsupportedFileType(name) => {
                write!(f, "Unsupported file type: {} (accepted: PDF, DOC, DOCX)", name)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check that a trimmed field's character count lies within `[min, max]`.
pub(crate) fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len == 0 && min > 0 {
        return Err(ValidationError::Required(field));
    }
    if len < min {
        return Err(ValidationError::TooShort { field, min });
    }
    if len > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}
