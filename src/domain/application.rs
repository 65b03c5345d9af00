//! Careers job application: raw submission and its validated form.

use super::email::EmailAddress;
use super::errors::{check_length, ValidationError};
use super::inquiry::{is_valid_full_number, non_blank, FULL_NAME_MAX, FULL_NAME_MIN};
use serde::{Deserialize, Serialize};

/// Largest resume accepted (5 MiB).
pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

/// Resume file extensions accepted, lowercase.
pub const RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

pub const POSITION_MAX: usize = 100;
pub const COVER_LETTER_MAX: usize = 5000;

/// Metadata of the file picked in the resume upload input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeUpload {
    pub file_name: String,
    #[serde(default)]
    pub content_type: String,
    pub size_bytes: u64,
}

impl ResumeUpload {
    /// Lowercased extension of the file name, if it has one.
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
    }

    /// Gate the upload on size and file type.
    ///
    /// # Errors
    ///
    /// `EmptyFile`, `FileTooLarge`, or `UnsupportedFileType`.
    pub fn check(&self) -> Result<(), ValidationError> {
        if self.size_bytes == 0 {
            return Err(ValidationError::EmptyFile);
        }
        if self.size_bytes > MAX_RESUME_BYTES {
            return Err(ValidationError::FileTooLarge {
                size_bytes: self.size_bytes,
                max_bytes: MAX_RESUME_BYTES,
            });
        }
        match self.extension() {
            Some(ext) if RESUME_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
            _ => Err(ValidationError::UnsupportedFileType(self.file_name.clone())),
        }
    }
}

/// Job application exactly as submitted by the browser.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobApplicationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub cover_letter: Option<String>,
    pub resume: Option<ResumeUpload>,
}

impl JobApplicationForm {
    /// Validate the application.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found, checking fields in form order.
    pub fn validate(self) -> Result<JobApplication, ValidationError> {
        let full_name = self.full_name.trim().to_string();
        check_length("fullName", &full_name, FULL_NAME_MIN, FULL_NAME_MAX)?;

        let email = EmailAddress::new(self.email)?;

        let phone = self.phone.trim().to_string();
        if phone.is_empty() {
            return Err(ValidationError::Required("phone"));
        }
        if !is_valid_full_number(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        let position = self.position.trim().to_string();
        check_length("position", &position, 1, POSITION_MAX)?;

        let linkedin_url = checked_url("linkedinUrl", self.linkedin_url)?;
        let portfolio_url = checked_url("portfolioUrl", self.portfolio_url)?;

        let cover_letter = non_blank(self.cover_letter);
        if let Some(ref letter) = cover_letter {
            check_length("coverLetter", letter, 0, COVER_LETTER_MAX)?;
        }

        let resume = self.resume.ok_or(ValidationError::Required("resume"))?;
        resume.check()?;

        Ok(JobApplication {
            full_name,
            email,
            phone,
            position,
            linkedin_url,
            portfolio_url,
            cover_letter,
            resume,
        })
    }
}

/// A validated job application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    full_name: String,
    email: EmailAddress,
    phone: String,
    position: String,
    linkedin_url: Option<String>,
    portfolio_url: Option<String>,
    cover_letter: Option<String>,
    resume: ResumeUpload,
}

impl JobApplication {
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn linkedin_url(&self) -> Option<&str> {
        self.linkedin_url.as_deref()
    }

    pub fn portfolio_url(&self) -> Option<&str> {
        self.portfolio_url.as_deref()
    }

    pub fn cover_letter(&self) -> Option<&str> {
        self.cover_letter.as_deref()
    }

    pub fn resume(&self) -> &ResumeUpload {
        &self.resume
    }
}

fn checked_url(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, ValidationError> {
    match non_blank(value) {
        Some(url) if url.starts_with("https://") || url.starts_with("http://") => Ok(Some(url)),
        Some(url) => Err(ValidationError::InvalidUrl { field, value: url }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resume(name: &str, size: u64) -> ResumeUpload {
        ResumeUpload {
            file_name: name.to_string(),
            content_type: "application/pdf".to_string(),
            size_bytes: size,
        }
    }

    fn form() -> JobApplicationForm {
        JobApplicationForm {
            full_name: "Sam Rivera".to_string(),
            email: "sam@example.com".to_string(),
            phone: "+1 (415) 555-0100".to_string(),
            position: "Senior Rust Engineer".to_string(),
            resume: Some(resume("sam-rivera.pdf", 120_000)),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_application() {
        let app = form().validate().unwrap();
        assert_eq!(app.position(), "Senior Rust Engineer");
        assert_eq!(app.resume().extension().as_deref(), Some("pdf"));
    }

    #[test]
    fn test_resume_required() {
        let mut f = form();
        f.resume = None;
        assert_eq!(f.validate(), Err(ValidationError::Required("resume")));
    }

    #[test]
    fn test_resume_size_gate() {
        assert_eq!(resume("cv.pdf", 0).check(), Err(ValidationError::EmptyFile));
        assert!(resume("cv.pdf", MAX_RESUME_BYTES).check().is_ok());
        assert!(matches!(
            resume("cv.pdf", MAX_RESUME_BYTES + 1).check(),
            Err(ValidationError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn test_resume_type_gate() {
        assert!(resume("CV.DOCX", 10).check().is_ok());
        assert!(resume("cv.doc", 10).check().is_ok());
        assert!(resume("cv.exe", 10).check().is_err());
        assert!(resume("cv", 10).check().is_err());
        assert!(resume("cv.", 10).check().is_err());
    }

    #[test]
    fn test_phone_required_and_valid() {
        let mut f = form();
        f.phone = "  ".to_string();
        assert_eq!(f.validate(), Err(ValidationError::Required("phone")));

        let mut f = form();
        f.phone = "555".to_string();
        assert!(matches!(f.validate(), Err(ValidationError::InvalidPhone(_))));
    }

    #[test]
    fn test_urls_must_be_http() {
        let mut f = form();
        f.linkedin_url = Some("linkedin.com/in/sam".to_string());
        assert!(matches!(
            f.validate(),
            Err(ValidationError::InvalidUrl {
                field: "linkedinUrl",
                ..
            })
        ));

        let mut f = form();
        f.portfolio_url = Some("https://sam.dev".to_string());
        assert_eq!(f.validate().unwrap().portfolio_url(), Some("https://sam.dev"));
    }
}
