//! Enquiry form state.
//!
//! [`EnquiryForm`] is the state machine behind every enquiry form on the
//! site. The browser binding in `static/enquiry.js` follows the same
//! transitions; the `enquire` CLI command drives this type directly.
//!
//! ```text
//!            begin_submit() ok               settle(Ok)
//!   Idle ───────────────────────▶ InFlight ─────────────▶ Idle (fields reset)
//!    ▲  │                            │
//!    │  └─ begin_submit() err        │ settle(Err)
//!    │     (stays Idle, no request)  ▼
//!    └──────────────────────────── Idle (fields kept)
//! ```
//!
//! While in flight a second `begin_submit` is refused, which is what keeps a
//! double-click from sending two emails. The server itself does not
//! deduplicate.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;
use url::Url;

use crate::enquiry::Enquiry;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("A submission is already in progress")]
    InFlight,
    #[error("{0}")]
    Incomplete(&'static str),
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("{message}")]
    Endpoint { status: u16, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// A transient message shown after a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub description: &'static str,
}

impl Notification {
    pub fn success() -> Self {
        Self {
            kind: NotificationKind::Success,
            title: "Done",
            description: "Your enquiry has been sent successfully.",
        }
    }

    pub fn failure() -> Self {
        Self {
            kind: NotificationKind::Failure,
            title: "Failed to send enquiry",
            description: "Please try again later.",
        }
    }
}

/// Sends a validated payload to the enquiry endpoint.
#[async_trait]
pub trait EnquiryTransport: Send + Sync {
    async fn post(&self, enquiry: &Enquiry) -> Result<String, TransportError>;
}

#[derive(Debug)]
pub struct EnquiryForm {
    initial: Enquiry,
    fields: Enquiry,
    in_flight: bool,
}

impl EnquiryForm {
    /// A blank form with `default_project_type` preselected.
    pub fn new(default_project_type: &str) -> Self {
        let initial = Enquiry {
            project_type: default_project_type.to_string(),
            ..Enquiry::default()
        };
        Self {
            fields: initial.clone(),
            initial,
            in_flight: false,
        }
    }

    pub fn fields(&self) -> &Enquiry {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut Enquiry {
        &mut self.fields
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Run the client-side checks and enter the in-flight state.
    ///
    /// Returns the payload to send. On error nothing changes and no request
    /// should be made.
    pub fn begin_submit(&mut self) -> Result<Enquiry, FormError> {
        if self.in_flight {
            return Err(FormError::InFlight);
        }
        if self.fields.project_type.trim().is_empty() {
            return Err(FormError::Incomplete("Please select a service type"));
        }
        if self.fields.name.trim().is_empty() || self.fields.email.trim().is_empty() {
            return Err(FormError::Incomplete("Please fill in all required fields"));
        }
        self.in_flight = true;
        Ok(self.fields.clone())
    }

    /// Leave the in-flight state with the endpoint's answer.
    ///
    /// Success clears the fields back to their initial values; failure keeps
    /// them so the visitor can retry.
    pub fn settle<T, E>(&mut self, outcome: &Result<T, E>) -> Notification {
        self.in_flight = false;
        match outcome {
            Ok(_) => {
                self.fields = self.initial.clone();
                Notification::success()
            }
            Err(_) => Notification::failure(),
        }
    }

    /// `begin_submit`, post, `settle`.
    pub async fn submit(
        &mut self,
        transport: &dyn EnquiryTransport,
    ) -> Result<Notification, FormError> {
        let payload = self.begin_submit()?;
        let outcome = transport.post(&payload).await;
        if let Err(e) = &outcome {
            warn!(error = %e, "enquiry submission failed");
        }
        Ok(self.settle(&outcome))
    }
}

// ============================================================================
// HTTP transport
// ============================================================================

#[derive(Debug, Deserialize)]
struct EndpointReply {
    message: Option<String>,
    error: Option<String>,
}

/// Posts enquiries to a running site's `/api/send-email`.
#[derive(Debug, Clone)]
pub struct EndpointTransport {
    endpoint: Url,
    client: reqwest::Client,
}

impl EndpointTransport {
    /// `site` is the site's base URL, e.g. `http://127.0.0.1:3000`.
    pub fn new(site: &str, timeout: Duration) -> Result<Self, TransportError> {
        let endpoint = Url::parse(site)?.join("/api/send-email")?;
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { endpoint, client })
    }
}

#[async_trait]
impl EnquiryTransport for EndpointTransport {
    async fn post(&self, enquiry: &Enquiry) -> Result<String, TransportError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(enquiry)
            .send()
            .await?;
        let status = response.status();
        let reply: Option<EndpointReply> = response.json().await.ok();
        if status.is_success() {
            Ok(reply.and_then(|r| r.message).unwrap_or_default())
        } else {
            Err(TransportError::Endpoint {
                status: status.as_u16(),
                message: reply
                    .and_then(|r| r.error)
                    .unwrap_or_else(|| status.to_string()),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::jane_doe;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingTransport {
        calls: AtomicUsize,
        succeed: bool,
    }

    impl CountingTransport {
        fn new(succeed: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                succeed,
            }
        }
    }

    #[async_trait]
    impl EnquiryTransport for CountingTransport {
        async fn post(&self, _enquiry: &Enquiry) -> Result<String, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.succeed {
                Ok("Enquiry sent successfully.".to_string())
            } else {
                Err(TransportError::Endpoint {
                    status: 500,
                    message: "boom".to_string(),
                })
            }
        }
    }

    fn filled_form() -> EnquiryForm {
        let mut form = EnquiryForm::new("Furniture");
        *form.fields_mut() = Enquiry {
            phone: "07700 900123".to_string(),
            ..jane_doe()
        };
        form
    }

    #[test]
    fn new_form_preselects_default_project_type() {
        let form = EnquiryForm::new("Kitchen Carpentry");
        assert_eq!(form.fields().project_type, "Kitchen Carpentry");
        assert_eq!(form.fields().name, "");
        assert!(!form.is_in_flight());
    }

    #[test]
    fn begin_submit_requires_project_type_first() {
        let mut form = EnquiryForm::new("Furniture");
        form.fields_mut().project_type.clear();
        assert_eq!(
            form.begin_submit(),
            Err(FormError::Incomplete("Please select a service type"))
        );
        assert!(!form.is_in_flight());
    }

    #[test]
    fn begin_submit_requires_name_and_email() {
        let mut form = EnquiryForm::new("Furniture");
        form.fields_mut().name = "Jane Doe".to_string();
        assert_eq!(
            form.begin_submit(),
            Err(FormError::Incomplete("Please fill in all required fields"))
        );
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.begin_submit(), Err(FormError::InFlight));
    }

    #[test]
    fn success_resets_fields_to_initial_values() {
        let mut form = filled_form();
        form.fields_mut().project_type = "Commercial".to_string();
        form.begin_submit().unwrap();
        let note = form.settle::<(), ()>(&Ok(()));

        assert_eq!(note, Notification::success());
        assert_eq!(note.title, "Done");
        assert_eq!(form.fields(), &Enquiry {
            project_type: "Furniture".to_string(),
            ..Enquiry::default()
        });
        assert!(!form.is_in_flight());
    }

    #[test]
    fn failure_keeps_fields_for_retry() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        let note = form.settle::<(), ()>(&Err(()));

        assert_eq!(note.kind, NotificationKind::Failure);
        assert_eq!(note.title, "Failed to send enquiry");
        assert_eq!(note.description, "Please try again later.");
        assert_eq!(form.fields().name, "Jane Doe");
        assert!(!form.is_in_flight());
    }

    #[tokio::test]
    async fn submit_posts_once_and_settles() {
        let transport = CountingTransport::new(true);
        let mut form = filled_form();
        let note = form.submit(&transport).await.unwrap();
        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
        assert_eq!(form.fields().name, "");
    }

    #[tokio::test]
    async fn rejected_submit_settles_as_failure() {
        let transport = CountingTransport::new(false);
        let mut form = filled_form();
        let note = form.submit(&transport).await.unwrap();
        assert_eq!(note.kind, NotificationKind::Failure);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
        assert_eq!(form.fields().name, "Jane Doe");
        assert!(!form.is_in_flight());
    }

    #[tokio::test]
    async fn incomplete_form_never_posts() {
        let transport = CountingTransport::new(true);
        let mut form = EnquiryForm::new("Furniture");
        assert!(form.submit(&transport).await.is_err());
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn endpoint_transport_reads_error_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/api/send-email")
            .with_status(400)
            .with_body(r#"{"error":"Missing required fields."}"#)
            .create_async()
            .await;

        let transport = EndpointTransport::new(&server.url(), Duration::from_secs(2)).unwrap();
        let err = transport.post(&Enquiry::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Missing required fields.");
    }

    #[tokio::test]
    async fn endpoint_transport_returns_success_message() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/send-email")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "name": "Jane Doe",
                "projectType": "Furniture"
            })))
            .with_status(200)
            .with_body(r#"{"message":"Enquiry sent successfully."}"#)
            .expect(1)
            .create_async()
            .await;

        let transport = EndpointTransport::new(&server.url(), Duration::from_secs(2)).unwrap();
        let message = transport.post(&jane_doe()).await.unwrap();
        assert_eq!(message, "Enquiry sent successfully.");
        mock.assert_async().await;
    }
}
