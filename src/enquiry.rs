//! Enquiry submission.
//!
//! Validates a submitted enquiry, turns it into one email and hands it to the
//! email provider. The HTTP binding lives in [`crate::server`]; everything
//! here is independent of axum so it can be driven directly in tests.
//!
//! ## Outcome Table
//!
//! | Condition | Status | Body |
//! |-----------|--------|------|
//! | name, email or projectType empty | 400 | `Missing required fields.` |
//! | no provider API key | 500 | `Missing email provider API key.` |
//! | no sender address | 500 | `Missing sender email address.` |
//! | provider rejects | 500 | provider's message |
//! | transport failure or malformed body | 500 | stringified error |
//! | sent | 200 | `Enquiry sent successfully.` |
//!
//! Checks run top to bottom; the provider is only contacted once every check
//! has passed. There is no retry and no idempotency: submitting the same
//! enquiry twice sends two emails.

use maud::html;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::EmailConfig;
use crate::email::{EmailError, EmailMessage, EmailProvider, Mailbox};

pub const SUCCESS_MESSAGE: &str = "Enquiry sent successfully.";
const NOT_PROVIDED: &str = "N/A";

/// A prospective customer's project request.
///
/// Wire keys are camelCase except `Timeline`, which the site's forms have
/// always sent capitalised; lower-case `timeline` is accepted too. Missing
/// and `null` keys read as empty strings; numbers and booleans are read as
/// their text, so a phone number sent unquoted still arrives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Enquiry {
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub project_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub property_location: String,
    #[serde(deserialize_with = "lenient_string")]
    pub project_description: String,
    #[serde(deserialize_with = "lenient_string")]
    pub preferred_contact: String,
    #[serde(rename = "Timeline", alias = "timeline", deserialize_with = "lenient_string")]
    pub timeline: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

#[derive(Error, Debug)]
pub enum EnquiryError {
    #[error("Missing required fields.")]
    MissingFields,
    #[error("Missing email provider API key.")]
    MissingApiKey,
    #[error("Missing sender email address.")]
    MissingSender,
    #[error("{0}")]
    Provider(String),
    #[error("{0}")]
    Unexpected(String),
}

impl EnquiryError {
    /// HTTP status for this failure.
    pub fn status(&self) -> u16 {
        match self {
            EnquiryError::MissingFields => 400,
            _ => 500,
        }
    }
}

impl From<EmailError> for EnquiryError {
    fn from(err: EmailError) -> Self {
        match err {
            EmailError::Rejected { message, .. } => EnquiryError::Provider(message),
            other => EnquiryError::Unexpected(other.to_string()),
        }
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn or_not_provided(value: &str) -> &str {
    if blank(value) { NOT_PROVIDED } else { value }
}

impl Enquiry {
    /// Server-side required-field check.
    pub fn validate(&self) -> Result<(), EnquiryError> {
        if blank(&self.name) || blank(&self.email) || blank(&self.project_type) {
            return Err(EnquiryError::MissingFields);
        }
        Ok(())
    }

    pub fn subject(&self) -> String {
        format!("New Enquiry from {} ({})", self.name, self.project_type)
    }

    /// HTML body listing every field. Values are escaped; blank optional
    /// fields show as `N/A`.
    pub fn html_body(&self) -> String {
        let rows = [
            ("Name", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Phone", or_not_provided(&self.phone)),
            ("Project Type", self.project_type.as_str()),
            ("Property Location", or_not_provided(&self.property_location)),
            ("Project Description", or_not_provided(&self.project_description)),
            ("Preferred Contact", or_not_provided(&self.preferred_contact)),
            ("Timeline", or_not_provided(&self.timeline)),
        ];
        html! {
            h2 { "New Project Enquiry" }
            @for (label, value) in rows {
                p { strong { (label) ":" } " " (value) }
            }
        }
        .into_string()
    }
}

/// Build the email for an enquiry: to and from the business address, with
/// replies going to the submitter.
pub fn compose_email(enquiry: &Enquiry, sender: &str, recipient_name: &str) -> EmailMessage {
    EmailMessage {
        sender: Mailbox {
            email: sender.to_string(),
            name: None,
        },
        to: vec![Mailbox {
            email: sender.to_string(),
            name: Some(recipient_name.to_string()),
        }],
        subject: enquiry.subject(),
        html_content: enquiry.html_body(),
        reply_to: Mailbox {
            email: enquiry.email.clone(),
            name: Some(enquiry.name.clone()),
        },
    }
}

/// Validate, compose and send one enquiry.
pub async fn submit(
    enquiry: &Enquiry,
    config: &EmailConfig,
    provider: &dyn EmailProvider,
) -> Result<&'static str, EnquiryError> {
    enquiry.validate()?;

    let api_key = config
        .api_key
        .as_deref()
        .filter(|key| !blank(key))
        .ok_or(EnquiryError::MissingApiKey)?;
    let sender = config
        .sender_email
        .as_deref()
        .filter(|sender| !blank(sender))
        .ok_or(EnquiryError::MissingSender)?;

    let message = compose_email(enquiry, sender, &config.recipient_name);
    match provider.send(api_key, &message).await {
        Ok(()) => {
            info!(project_type = %enquiry.project_type, "enquiry sent");
            Ok(SUCCESS_MESSAGE)
        }
        Err(e) => {
            warn!(error = %e, "email provider refused enquiry");
            Err(e.into())
        }
    }
}
