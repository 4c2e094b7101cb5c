//! Content Delivery API client.
//!
//! [`ContentClient`] is the narrow contract the rest of the site depends on:
//! get the one entry of a singleton content type, or list all entries of a
//! content type. Each call is a single best-effort request. Errors are
//! returned to the caller untouched; absorbing them is the section resolver's
//! job, not the client's.
//!
//! ## Wire Protocol
//!
//! ```text
//! GET {base_url}/spaces/{space}/environments/{env}/entries
//!     ?content_type=gallerySection&limit=1&include=2
//! Authorization: Bearer {access_token}
//! ```
//!
//! The response carries `items` plus an `includes` block with every linked
//! entry and asset up to the requested depth. Links are resolved in place
//! before entries leave this module (see [`Includes`]).

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use super::entry::{Includes, RawEntry};
use crate::config::ContentConfig;

/// Page size for list queries: the Delivery API's maximum.
const LIST_LIMIT: u32 = 1000;
/// Link depth for list queries, enough to reach each entry's own assets.
const LIST_INCLUDE: u8 = 1;
const DEFAULT_ERROR_MESSAGE: &str = "content API request failed";

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Content API error {status}: {message}")]
    Api { status: u16, message: String },
    #[error("Invalid content API URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("Content delivery is not configured (missing space id or access token)")]
    NotConfigured,
}

/// Read access to the content repository.
#[async_trait]
pub trait ContentClient: Send + Sync {
    /// Fetch at most one entry of `content_type`, resolving links `include`
    /// levels deep. `Ok(None)` when the type has no entries.
    async fn get_singleton(
        &self,
        content_type: &str,
        include: u8,
    ) -> Result<Option<RawEntry>, ContentError>;

    /// Fetch every entry of `content_type`, ascending by `order` when given
    /// (a leading `-` sorts descending).
    async fn list_entries(
        &self,
        content_type: &str,
        order: Option<&str>,
    ) -> Result<Vec<RawEntry>, ContentError>;
}

// ============================================================================
// HTTP implementation
// ============================================================================

#[derive(Clone)]
pub struct HttpContentClient {
    entries_url: Url,
    access_token: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for HttpContentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpContentClient")
            .field("entries_url", &self.entries_url.as_str())
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct EntriesResponse {
    #[serde(default)]
    items: Vec<Value>,
    #[serde(default)]
    includes: Value,
}

impl HttpContentClient {
    /// Build a client for the configured space and environment.
    ///
    /// Fails with [`ContentError::NotConfigured`] when the space id or access
    /// token is missing.
    pub fn new(config: &ContentConfig) -> Result<Self, ContentError> {
        let (space_id, access_token) = match (&config.space_id, &config.access_token) {
            (Some(space), Some(token)) if !space.is_empty() && !token.is_empty() => {
                (space, token)
            }
            _ => return Err(ContentError::NotConfigured),
        };

        let mut base = Url::parse(&config.base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let entries_url = base.join(&format!(
            "spaces/{space_id}/environments/{}/entries",
            config.environment
        ))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            entries_url,
            access_token: access_token.clone(),
            client,
        })
    }

    async fn query(
        &self,
        params: &[(&str, String)],
        depth: u8,
    ) -> Result<Vec<RawEntry>, ContentError> {
        let response = self
            .client
            .get(self.entries_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .header(ACCEPT, "application/json")
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContentError::Api {
                status: status.as_u16(),
                message: extract_error_message(&body)
                    .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
            });
        }

        let body: EntriesResponse = response.json().await?;
        let includes = Includes::new(&body.items, &body.includes);
        Ok(body
            .items
            .iter()
            .filter_map(|item| includes.resolve(item, depth))
            .collect())
    }
}

#[async_trait]
impl ContentClient for HttpContentClient {
    async fn get_singleton(
        &self,
        content_type: &str,
        include: u8,
    ) -> Result<Option<RawEntry>, ContentError> {
        let params = [
            ("content_type", content_type.to_string()),
            ("limit", "1".to_string()),
            ("include", include.to_string()),
        ];
        let entries = self.query(&params, include).await?;
        Ok(entries.into_iter().next())
    }

    async fn list_entries(
        &self,
        content_type: &str,
        order: Option<&str>,
    ) -> Result<Vec<RawEntry>, ContentError> {
        let mut params = vec![
            ("content_type", content_type.to_string()),
            ("limit", LIST_LIMIT.to_string()),
            ("include", LIST_INCLUDE.to_string()),
        ];
        if let Some(order) = order {
            params.push(("order", order.to_string()));
        }
        self.query(&params, LIST_INCLUDE).await
    }
}

/// Pull a human-readable message out of an API error body.
fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }
    let parsed = serde_json::from_str::<Value>(body).ok()?;
    parsed
        .get("message")
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
}

// ============================================================================
// Offline stand-in
// ============================================================================

/// Client used when no CMS credentials are configured.
///
/// Every call fails, so every section resolves to its fallback and the site
/// renders entirely from static content.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineContent;

#[async_trait]
impl ContentClient for OfflineContent {
    async fn get_singleton(
        &self,
        _content_type: &str,
        _include: u8,
    ) -> Result<Option<RawEntry>, ContentError> {
        Err(ContentError::NotConfigured)
    }

    async fn list_entries(
        &self,
        _content_type: &str,
        _order: Option<&str>,
    ) -> Result<Vec<RawEntry>, ContentError> {
        Err(ContentError::NotConfigured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    const ENTRIES_PATH: &str = "/spaces/space1/environments/master/entries";

    fn config_for(server: &mockito::ServerGuard) -> ContentConfig {
        ContentConfig {
            base_url: server.url(),
            space_id: Some("space1".to_string()),
            access_token: Some("token1".to_string()),
            environment: "master".to_string(),
            timeout_secs: 2,
        }
    }

    #[test]
    fn new_requires_credentials() {
        let config = ContentConfig::default();
        assert!(matches!(
            HttpContentClient::new(&config),
            Err(ContentError::NotConfigured)
        ));

        let blank = ContentConfig {
            space_id: Some(String::new()),
            access_token: Some("token".to_string()),
            ..ContentConfig::default()
        };
        assert!(matches!(
            HttpContentClient::new(&blank),
            Err(ContentError::NotConfigured)
        ));
    }

    #[test]
    fn debug_redacts_token() {
        let config = ContentConfig {
            space_id: Some("space1".to_string()),
            access_token: Some("secret-token".to_string()),
            ..ContentConfig::default()
        };
        let client = HttpContentClient::new(&config).unwrap();
        let debug = format!("{client:?}");
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("REDACTED"));
        assert!(debug.contains("/spaces/space1/environments/master/entries"));
    }

    #[tokio::test]
    async fn get_singleton_resolves_linked_assets() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", ENTRIES_PATH)
            .match_header("authorization", "Bearer token1")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("content_type".into(), "heroSection".into()),
                Matcher::UrlEncoded("limit".into(), "1".into()),
                Matcher::UrlEncoded("include".into(), "1".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "items": [{
                        "sys": {"id": "h1", "contentType": {"sys": {"id": "heroSection"}}},
                        "fields": {
                            "title": "Bespoke Carpentry",
                            "backgroundImage": {
                                "sys": {"type": "Link", "linkType": "Asset", "id": "a1"}
                            }
                        }
                    }],
                    "includes": {"Asset": [
                        {
                            "sys": {"id": "a1"},
                            "fields": {"file": {"url": "//images.ctfassets.net/hero.png"}}
                        }
                    ]}
                }"#,
            )
            .expect(1)
            .create_async()
            .await;

        let client = HttpContentClient::new(&config_for(&server)).unwrap();
        let entry = client.get_singleton("heroSection", 1).await.unwrap().unwrap();

        assert_eq!(entry.id, "h1");
        assert_eq!(entry.text("title"), "Bespoke Carpentry");
        assert_eq!(
            entry.asset_url("backgroundImage").as_deref(),
            Some("https://images.ctfassets.net/hero.png")
        );
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn get_singleton_without_items_is_none() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", ENTRIES_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"items": []}"#)
            .create_async()
            .await;

        let client = HttpContentClient::new(&config_for(&server)).unwrap();
        let entry = client.get_singleton("aboutSection", 1).await.unwrap();
        assert!(entry.is_none());
    }

    #[tokio::test]
    async fn list_entries_sends_order_and_keeps_response_order() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", ENTRIES_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("content_type".into(), "galleryItem".into()),
                Matcher::UrlEncoded("order".into(), "fields.order".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"items": [
                    {"sys": {"id": "1"}, "fields": {"title": "First"}},
                    {"sys": {"id": "2"}, "fields": {"title": "Second"}}
                ]}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let client = HttpContentClient::new(&config_for(&server)).unwrap();
        let entries = client
            .list_entries("galleryItem", Some("fields.order"))
            .await
            .unwrap();

        let titles: Vec<String> = entries.iter().map(|e| e.text("title")).collect();
        assert_eq!(titles, vec!["First", "Second"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn api_errors_carry_the_provider_message() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", ENTRIES_PATH)
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(
                r#"{"sys": {"type": "Error", "id": "AccessTokenInvalid"},
                    "message": "The access token you sent could not be found or is invalid."}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let client = HttpContentClient::new(&config_for(&server)).unwrap();
        let err = client.list_entries("service", None).await.unwrap_err();
        match err {
            ContentError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(
                    message,
                    "The access token you sent could not be found or is invalid."
                );
            }
            other => panic!("unexpected error variant: {other}"),
        }
        // Single attempt, no retry.
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn api_errors_without_json_use_default_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", ENTRIES_PATH)
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body("upstream unavailable")
            .create_async()
            .await;

        let client = HttpContentClient::new(&config_for(&server)).unwrap();
        let err = client.get_singleton("footerContent", 1).await.unwrap_err();
        assert!(matches!(
            err,
            ContentError::Api { status: 503, ref message } if message == DEFAULT_ERROR_MESSAGE
        ));
    }

    #[tokio::test]
    async fn offline_client_always_fails() {
        let client = OfflineContent;
        assert!(matches!(
            client.get_singleton("heroSection", 1).await,
            Err(ContentError::NotConfigured)
        ));
        assert!(matches!(
            client.list_entries("service", None).await,
            Err(ContentError::NotConfigured)
        ));
    }
}
