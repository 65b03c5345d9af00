//! Notification and confirmation messages for form submissions.
//!
//! Messages are deliberately plain: a heading, a field table, and the
//! submitted text. Every user-supplied value is HTML-escaped.

use crate::config::Config;
use crate::domain::{Inquiry, JobApplication};
use crate::models::OutboundEmail;
use crate::routing::{MailboxRole, RoutingDecision};
use chrono::{DateTime, Utc};

const SITE_NAME: &str = "Brightforge Studio";

/// Sender identity and links shared by every message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationContext {
    pub from: String,
    pub site_url: String,
}

impl NotificationContext {
    pub fn from_config(config: &Config) -> Self {
        Self {
            from: config.email_from.clone(),
            site_url: config.site_url.clone(),
        }
    }
}

impl Default for NotificationContext {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Notification for the mailbox the inquiry was routed to.
pub fn inquiry_notification(
    ctx: &NotificationContext,
    inquiry: &Inquiry,
    decision: &RoutingDecision,
    submitted_at: DateTime<Utc>,
) -> OutboundEmail {
    let subject = format!(
        "{}New {} inquiry from {}",
        decision.priority.subject_prefix(),
        inquiry.project_type().label(),
        inquiry.full_name()
    );

    let mut rows = vec![
        ("Name", inquiry.full_name().to_string()),
        ("Email", inquiry.email().to_string()),
        ("Project type", inquiry.project_type().label().to_string()),
    ];
    if let Some(phone) = inquiry.phone() {
        rows.push(("Phone", phone.to_string()));
    }
    if let Some(company) = inquiry.company() {
        rows.push(("Company", company.to_string()));
    }
    if let Some(budget) = inquiry.budget() {
        rows.push(("Budget", budget.to_string()));
    }
    if let Some(timeline) = inquiry.timeline() {
        rows.push(("Timeline", timeline.label().to_string()));
    }
    rows.push(("Routed to", decision.mailbox.to_string()));
    rows.push(("Submitted", format_timestamp(submitted_at)));

    let html = format!(
        "<h2>{}</h2>{}<h3>Message</h3><p>{}</p><p>Please respond {}.</p>",
        escape_html(&subject),
        field_table(&rows),
        multiline(inquiry.message()),
        decision.priority.response_time()
    );

    OutboundEmail {
        from: ctx.from.clone(),
        to: vec![decision.mailbox.address().to_string()],
        cc: decision
            .cc
            .iter()
            .map(|role| role.address().to_string())
            .collect(),
        reply_to: Some(inquiry.email().to_string()),
        subject,
        html,
    }
}

/// Confirmation sent back to the person who submitted the inquiry.
pub fn inquiry_confirmation(
    ctx: &NotificationContext,
    inquiry: &Inquiry,
    decision: &RoutingDecision,
) -> OutboundEmail {
    let html = format!(
        "<p>Hi {},</p>\
         <p>Thanks for reaching out to {}. We received your message about \
         <strong>{}</strong> and will get back to you {}.</p>\
         <blockquote>{}</blockquote>\
         <p>In the meantime, have a look at our recent work at <a href=\"{}\">{}</a>.</p>",
        escape_html(first_name(inquiry.full_name())),
        SITE_NAME,
        inquiry.project_type().label(),
        decision.priority.response_time(),
        multiline(inquiry.message()),
        escape_html(&ctx.site_url),
        escape_html(&ctx.site_url),
    );

    OutboundEmail {
        from: ctx.from.clone(),
        to: vec![inquiry.email().to_string()],
        cc: Vec::new(),
        reply_to: Some(decision.mailbox.address().to_string()),
        subject: format!("Thanks for contacting {}", SITE_NAME),
        html,
    }
}

/// Notification for a job application. Applications always go to `info`.
pub fn application_notification(
    ctx: &NotificationContext,
    application: &JobApplication,
    submitted_at: DateTime<Utc>,
) -> OutboundEmail {
    let subject = format!(
        "New application: {} - {}",
        application.position(),
        application.full_name()
    );

    let resume = application.resume();
    let mut rows = vec![
        ("Name", application.full_name().to_string()),
        ("Email", application.email().to_string()),
        ("Phone", application.phone().to_string()),
        ("Position", application.position().to_string()),
    ];
    if let Some(url) = application.linkedin_url() {
        rows.push(("LinkedIn", url.to_string()));
    }
    if let Some(url) = application.portfolio_url() {
        rows.push(("Portfolio", url.to_string()));
    }
    rows.push((
        "Resume",
        format!("{} ({} KB)", resume.file_name, resume.size_bytes.div_ceil(1024)),
    ));
    rows.push(("Submitted", format_timestamp(submitted_at)));

    let cover_letter = application
        .cover_letter()
        .map(|letter| format!("<h3>Cover letter</h3><p>{}</p>", multiline(letter)))
        .unwrap_or_default();

    OutboundEmail {
        from: ctx.from.clone(),
        to: vec![MailboxRole::Info.address().to_string()],
        cc: Vec::new(),
        reply_to: Some(application.email().to_string()),
        html: format!(
            "<h2>{}</h2>{}{}",
            escape_html(&subject),
            field_table(&rows),
            cover_letter
        ),
        subject,
    }
}

/// Confirmation sent to the applicant.
pub fn application_confirmation(
    ctx: &NotificationContext,
    application: &JobApplication,
) -> OutboundEmail {
    OutboundEmail {
        from: ctx.from.clone(),
        to: vec![application.email().to_string()],
        cc: Vec::new(),
        reply_to: Some(MailboxRole::Info.address().to_string()),
        subject: format!("We received your application - {}", SITE_NAME),
        html: format!(
            "<p>Hi {},</p>\
             <p>Thank you for applying for the <strong>{}</strong> role at {}. \
             Our team reviews every application and will contact you if your \
             profile is a match.</p>",
            escape_html(first_name(application.full_name())),
            escape_html(application.position()),
            SITE_NAME,
        ),
    }
}

/// Escape text for inclusion in HTML element content or attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn multiline(text: &str) -> String {
    escape_html(text).replace('\n', "<br>")
}

fn field_table(rows: &[(&str, String)]) -> String {
    let body: String = rows
        .iter()
        .map(|(label, value)| {
            format!(
                "<tr><td><strong>{}</strong></td><td>{}</td></tr>",
                label,
                escape_html(value)
            )
        })
        .collect();
    format!("<table>{}</table>", body)
}

fn first_name(full_name: &str) -> &str {
    full_name.split_whitespace().next().unwrap_or(full_name)
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M UTC").to_string()
}
