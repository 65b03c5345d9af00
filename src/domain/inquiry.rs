//! Contact-form inquiry: raw submission and its validated form.

use super::email::EmailAddress;
use super::errors::{check_length, ValidationError};
use crate::phone;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const FULL_NAME_MIN: usize = 2;
pub const FULL_NAME_MAX: usize = 100;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 2000;
pub const COMPANY_MAX: usize = 100;
pub const BUDGET_MAX: usize = 50;

/// Kind of project the visitor is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    WebDevelopment,
    MobileApp,
    #[serde(rename = "e-commerce")]
    ECommerce,
    #[serde(rename = "ui-ux-design")]
    UiUxDesign,
    Consulting,
    Maintenance,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 7] = [
        Self::WebDevelopment,
        Self::MobileApp,
        Self::ECommerce,
        Self::UiUxDesign,
        Self::Consulting,
        Self::Maintenance,
        Self::Other,
    ];

    /// Form value for this option.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WebDevelopment => "web-development",
            Self::MobileApp => "mobile-app",
            Self::ECommerce => "e-commerce",
            Self::UiUxDesign => "ui-ux-design",
            Self::Consulting => "consulting",
            Self::Maintenance => "maintenance",
            Self::Other => "other",
        }
    }

    /// Human-readable label used in notifications.
    pub fn label(&self) -> &'static str {
        match self {
            Self::WebDevelopment => "Web Development",
            Self::MobileApp => "Mobile App",
            Self::ECommerce => "E-Commerce",
            Self::UiUxDesign => "UI/UX Design",
            Self::Consulting => "Consulting",
            Self::Maintenance => "Maintenance & Support",
            Self::Other => "Other",
        }
    }

    /// Parse a form value.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value.trim())
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How soon the visitor wants to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Timeline {
    #[serde(rename = "urgent")]
    Urgent,
    #[serde(rename = "1-month")]
    WithinMonth,
    #[serde(rename = "1-3-months")]
    OneToThreeMonths,
    #[serde(rename = "3-6-months")]
    ThreeToSixMonths,
    #[serde(rename = "flexible")]
    Flexible,
}

impl Timeline {
    pub const ALL: [Timeline; 5] = [
        Self::Urgent,
        Self::WithinMonth,
        Self::OneToThreeMonths,
        Self::ThreeToSixMonths,
        Self::Flexible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::WithinMonth => "1-month",
            Self::OneToThreeMonths => "1-3-months",
            Self::ThreeToSixMonths => "3-6-months",
            Self::Flexible => "flexible",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Urgent => "ASAP (urgent)",
            Self::WithinMonth => "Within 1 month",
            Self::OneToThreeMonths => "1-3 months",
            Self::ThreeToSixMonths => "3-6 months",
            Self::Flexible => "Flexible",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value.trim())
    }
}

/// Contact form exactly as submitted by the browser.
///
/// Missing fields deserialize to empty values so that validation, not JSON
/// parsing, reports what is wrong.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InquiryForm {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub project_type: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub message: String,
}

impl InquiryForm {
    /// Validate the submission, producing an [`Inquiry`] the router can trust.
    ///
    /// # Errors
    ///
    /// Returns the first `ValidationError` found, checking fields in form order.
    pub fn validate(self) -> Result<Inquiry, ValidationError> {
        let full_name = self.full_name.trim().to_string();
        check_length("fullName", &full_name, FULL_NAME_MIN, FULL_NAME_MAX)?;

        let email = EmailAddress::new(self.email)?;

        let phone = match non_blank(self.phone) {
            Some(p) if is_valid_full_number(&p) => Some(p),
            Some(p) => return Err(ValidationError::InvalidPhone(p)),
            None => None,
        };

        let company = non_blank(self.company);
        if let Some(ref c) = company {
            check_length("company", c, 0, COMPANY_MAX)?;
        }

        let project_type = match self.project_type.trim() {
            "" => return Err(ValidationError::Required("projectType")),
            value => ProjectType::parse(value).ok_or_else(|| ValidationError::UnknownOption {
                field: "projectType",
                value: value.to_string(),
            })?,
        };

        let budget = non_blank(self.budget);
        if let Some(ref b) = budget {
            check_length("budget", b, 0, BUDGET_MAX)?;
        }

        let timeline = match non_blank(self.timeline) {
            Some(value) => Some(Timeline::parse(&value).ok_or(
                ValidationError::UnknownOption {
                    field: "timeline",
                    value,
                },
            )?),
            None => None,
        };

        let message = self.message.trim().to_string();
        check_length("message", &message, MESSAGE_MIN, MESSAGE_MAX)?;

        Ok(Inquiry {
            full_name,
            email,
            phone,
            company,
            project_type,
            budget,
            timeline,
            message,
        })
    }
}

/// A schema-validated contact inquiry.
///
/// Only obtainable through [`InquiryForm::validate`], so holding one proves
/// every field bound was checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    full_name: String,
    email: EmailAddress,
    phone: Option<String>,
    company: Option<String>,
    project_type: ProjectType,
    budget: Option<String>,
    timeline: Option<Timeline>,
    message: String,
}

impl Inquiry {
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    pub fn budget(&self) -> Option<&str> {
        self.budget.as_deref()
    }

    pub fn timeline(&self) -> Option<Timeline> {
        self.timeline
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Validate a submitted phone value, ignoring its dial code if it has one.
pub(crate) fn is_valid_full_number(value: &str) -> bool {
    let local = phone::parse_full_number(value, None).remainder;
    phone::validate(&phone::sanitize_input(&local))
}

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
