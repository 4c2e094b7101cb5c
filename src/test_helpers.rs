//! Shared test utilities for the joinery-site test suite.
//!
//! Provides in-memory stand-ins for the two external providers plus a few
//! fixture builders, so resolver, composer, endpoint and router tests never
//! touch the network.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let content = FakeContent::empty()
//!     .with("heroSection", json!({"title": "Bespoke"}))
//!     .fail("testimonialsSection");
//! let email = RecordingEmail::default();
//!
//! let home = compose_home(&content).await;
//! assert_eq!(content.call_count("heroSection"), 1);
//! ```

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::config::{EmailConfig, SiteConfig};
use crate::content::{ContentClient, ContentError, RawEntry};
use crate::email::{EmailError, EmailMessage, EmailProvider};
use crate::enquiry::Enquiry;
use crate::server::AppState;

// =========================================================================
// Content client fake
// =========================================================================

/// Content client answering from an in-memory table.
///
/// Content types with no entries answer `Ok(None)` / `Ok(vec![])`. Types
/// marked with [`FakeContent::fail`], or every type for
/// [`FakeContent::failing`], answer with an API error. Every call is logged.
#[derive(Default)]
pub struct FakeContent {
    entries: HashMap<String, Vec<RawEntry>>,
    failing_types: HashSet<String>,
    fail_all: bool,
    calls: Mutex<Vec<(String, Option<String>)>>,
}

impl FakeContent {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every call fails, as if the CMS were unreachable.
    pub fn failing() -> Self {
        Self {
            fail_all: true,
            ..Self::default()
        }
    }

    /// Add an entry of `content_type` with the given fields.
    pub fn with(mut self, content_type: &str, fields: Value) -> Self {
        self.entries
            .entry(content_type.to_string())
            .or_default()
            .push(RawEntry::new(content_type, fields));
        self
    }

    /// Make every call for `content_type` fail.
    pub fn fail(mut self, content_type: &str) -> Self {
        self.failing_types.insert(content_type.to_string());
        self
    }

    /// `(content_type, order)` for every call, in call order.
    pub fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, content_type: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(ct, _)| ct == content_type)
            .count()
    }

    fn answer(
        &self,
        content_type: &str,
        order: Option<&str>,
    ) -> Result<Vec<RawEntry>, ContentError> {
        self.calls
            .lock()
            .unwrap()
            .push((content_type.to_string(), order.map(str::to_string)));
        if self.fail_all || self.failing_types.contains(content_type) {
            return Err(ContentError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            });
        }
        Ok(self.entries.get(content_type).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl ContentClient for FakeContent {
    async fn get_singleton(
        &self,
        content_type: &str,
        _include: u8,
    ) -> Result<Option<RawEntry>, ContentError> {
        Ok(self.answer(content_type, None)?.into_iter().next())
    }

    async fn list_entries(
        &self,
        content_type: &str,
        order: Option<&str>,
    ) -> Result<Vec<RawEntry>, ContentError> {
        self.answer(content_type, order)
    }
}

// =========================================================================
// Email provider fake
// =========================================================================

/// Email provider that records every send and optionally rejects them all.
#[derive(Default)]
pub struct RecordingEmail {
    rejection: Option<String>,
    sent: Mutex<Vec<(String, EmailMessage)>>,
}

impl RecordingEmail {
    pub fn rejecting(message: &str) -> Self {
        Self {
            rejection: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// `(api_key, message)` for every send attempt that was accepted.
    pub fn sent(&self) -> Vec<(String, EmailMessage)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailProvider for RecordingEmail {
    async fn send(&self, api_key: &str, message: &EmailMessage) -> Result<(), EmailError> {
        if let Some(rejection) = &self.rejection {
            return Err(EmailError::Rejected {
                status: 400,
                message: rejection.clone(),
            });
        }
        self.sent
            .lock()
            .unwrap()
            .push((api_key.to_string(), message.clone()));
        Ok(())
    }
}

// =========================================================================
// Fixtures
// =========================================================================

/// Email settings with a key and sender in place.
pub fn email_config() -> EmailConfig {
    EmailConfig {
        api_key: Some("test-key".to_string()),
        sender_email: Some("studio@example.com".to_string()),
        ..EmailConfig::default()
    }
}

/// Site settings with working email credentials and no CMS credentials.
pub fn site_config() -> SiteConfig {
    SiteConfig {
        email: email_config(),
        ..SiteConfig::default()
    }
}

/// The canonical valid enquiry: required fields only.
pub fn jane_doe() -> Enquiry {
    Enquiry {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        project_type: "Furniture".to_string(),
        ..Enquiry::default()
    }
}

/// Router state over the given fakes, keeping handles for assertions.
pub fn app_state(
    content: FakeContent,
    email: RecordingEmail,
    config: SiteConfig,
) -> (AppState, Arc<FakeContent>, Arc<RecordingEmail>) {
    let content = Arc::new(content);
    let email = Arc::new(email);
    let state = AppState::new(config, content.clone(), email.clone());
    (state, content, email)
}
