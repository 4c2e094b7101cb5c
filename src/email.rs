//! Transactional email provider.
//!
//! Enquiries leave the site as one email through Brevo's SMTP API:
//!
//! ```text
//! POST {api_url}
//! api-key: {api_key}
//! {"sender": {"email": ..}, "to": [{"email": .., "name": ..}],
//!  "subject": .., "htmlContent": .., "replyTo": {"email": .., "name": ..}}
//! ```
//!
//! Any 2xx is a success. Failure bodies usually carry a `message`, which is
//! surfaced verbatim so the submitter sees the provider's reason.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::config::EmailConfig;

const DEFAULT_REJECTION: &str = "Failed to send enquiry.";

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message}")]
    Rejected { status: u16, message: String },
    #[error("Invalid email API URL: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mailbox {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One outgoing email, serialized in the provider's wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailMessage {
    pub sender: Mailbox,
    pub to: Vec<Mailbox>,
    pub subject: String,
    pub html_content: String,
    pub reply_to: Mailbox,
}

/// Delivery of a composed message.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, api_key: &str, message: &EmailMessage) -> Result<(), EmailError>;
}

#[derive(Clone)]
pub struct BrevoClient {
    api_url: Url,
    client: reqwest::Client,
}

impl std::fmt::Debug for BrevoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BrevoClient")
            .field("api_url", &self.api_url.as_str())
            .finish()
    }
}

impl BrevoClient {
    pub fn new(config: &EmailConfig) -> Result<Self, EmailError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            api_url: Url::parse(&config.api_url)?,
            client,
        })
    }
}

#[async_trait]
impl EmailProvider for BrevoClient {
    async fn send(&self, api_key: &str, message: &EmailMessage) -> Result<(), EmailError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .header("api-key", api_key)
            .header(ACCEPT, "application/json")
            .json(message)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(EmailError::Rejected {
            status: status.as_u16(),
            message: rejection_message(&body),
        })
    }
}

/// The provider's `message`, else the whole JSON body, else a stock message.
fn rejection_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(parsed) => match parsed.get("message").and_then(Value::as_str) {
            Some(message) if !message.is_empty() => message.to_string(),
            _ => parsed.to_string(),
        },
        Err(_) => DEFAULT_REJECTION.to_string(),
    }
}
