//! HTTP binding.
//!
//! | Route | Handler |
//! |-------|---------|
//! | `GET /`, `/about-us`, `/our-services`, `/portfolio`, `/contact-us` | compose, render |
//! | `POST /api/send-email` | [`enquiry::submit`], JSON in, JSON out |
//! | `GET /assets/{file}` | files from `server.assets_dir` |
//! | anything else | 404 page with the site layout |
//!
//! Page handlers cannot fail: every section that does not resolve has been
//! replaced by its fallback before rendering. The enquiry endpoint answers
//! `{"message": ..}` on success and `{"error": ..}` otherwise, with the
//! status from [`EnquiryError::status`]. The body is read as JSON whatever
//! its `Content-Type`. A body that is not a JSON enquiry is a 500, not a 400.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::SiteConfig;
use crate::content::{ContentClient, ContentError, HttpContentClient, OfflineContent};
use crate::email::{BrevoClient, EmailError, EmailProvider};
use crate::enquiry::{self, Enquiry, EnquiryError};
use crate::pages::{self, Route};
use crate::render::{self, Chrome};
use crate::resolve::{Origin, SectionReport};

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Content client error: {0}")]
    Content(#[from] ContentError),
    #[error("Email client error: {0}")]
    Email(#[from] EmailError),
    #[error("Invalid bind address: {0}")]
    Bind(#[from] std::net::AddrParseError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub content: Arc<dyn ContentClient>,
    pub email: Arc<dyn EmailProvider>,
    pub chrome: Arc<Chrome>,
}

impl AppState {
    pub fn new(
        config: SiteConfig,
        content: Arc<dyn ContentClient>,
        email: Arc<dyn EmailProvider>,
    ) -> Self {
        let chrome = Chrome::from_config(&config);
        Self {
            config: Arc::new(config),
            content,
            email,
            chrome: Arc::new(chrome),
        }
    }

    /// Build the production clients from config.
    ///
    /// Without CMS credentials the site still runs, serving every section
    /// from its fallback.
    pub fn from_config(config: SiteConfig) -> Result<Self, ServerError> {
        let content: Arc<dyn ContentClient> = match HttpContentClient::new(&config.content) {
            Ok(client) => Arc::new(client),
            Err(ContentError::NotConfigured) => {
                warn!("no CMS credentials configured; serving fallback content");
                Arc::new(OfflineContent)
            }
            Err(e) => return Err(e.into()),
        };
        let email = Arc::new(BrevoClient::new(&config.email)?);
        Ok(Self::new(config, content, email))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(Route::Home.path(), get(home))
        .route(Route::About.path(), get(about))
        .route(Route::Services.path(), get(services))
        .route(Route::Portfolio.path(), get(portfolio))
        .route(Route::Contact.path(), get(contact))
        .route("/api/send-email", post(send_email))
        .route("/assets/{file}", get(asset))
        .fallback(not_found)
        .with_state(state)
}

/// Bind `server.bind` and serve until Ctrl-C.
pub async fn serve(state: AppState) -> Result<(), ServerError> {
    let addr: SocketAddr = state.config.server.bind.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

// ============================================================================
// Pages
// ============================================================================

fn log_report(route: Route, report: &[SectionReport]) {
    let fallbacks: Vec<&str> = report
        .iter()
        .filter(|r| r.origin == Origin::Fallback)
        .map(|r| r.name)
        .collect();
    if !fallbacks.is_empty() {
        debug!(path = route.path(), sections = ?fallbacks, "served fallback sections");
    }
}

async fn home(State(state): State<AppState>) -> Html<String> {
    let composed = pages::compose_home(state.content.as_ref()).await;
    log_report(Route::Home, &composed.report);
    Html(render::render_home(&composed.page, &state.chrome).into_string())
}

async fn about(State(state): State<AppState>) -> Html<String> {
    let composed = pages::compose_about(state.content.as_ref()).await;
    log_report(Route::About, &composed.report);
    Html(render::render_about(&composed.page, &state.chrome).into_string())
}

async fn services(State(state): State<AppState>) -> Html<String> {
    let composed = pages::compose_services(state.content.as_ref()).await;
    log_report(Route::Services, &composed.report);
    Html(render::render_services(&composed.page, &state.chrome).into_string())
}

async fn portfolio(State(state): State<AppState>) -> Html<String> {
    let composed = pages::compose_portfolio(state.content.as_ref()).await;
    log_report(Route::Portfolio, &composed.report);
    Html(render::render_portfolio(&composed.page, &state.chrome).into_string())
}

async fn contact(State(state): State<AppState>) -> Html<String> {
    let composed = pages::compose_contact(state.content.as_ref()).await;
    log_report(Route::Contact, &composed.report);
    Html(render::render_contact(&composed.page, &state.chrome).into_string())
}

async fn not_found(State(state): State<AppState>) -> (StatusCode, Html<String>) {
    let layout = pages::compose_layout(state.content.as_ref()).await;
    let page = render::render_not_found(&layout.page, &state.chrome);
    (StatusCode::NOT_FOUND, Html(page.into_string()))
}

// ============================================================================
// Enquiry endpoint
// ============================================================================

impl IntoResponse for EnquiryError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

async fn send_email(State(state): State<AppState>, body: Bytes) -> Response {
    let enquiry: Enquiry = match serde_json::from_slice(&body) {
        Ok(enquiry) => enquiry,
        Err(e) => {
            warn!(error = %e, "unreadable enquiry body");
            return EnquiryError::Unexpected(e.to_string()).into_response();
        }
    };
    match enquiry::submit(&enquiry, &state.config.email, state.email.as_ref()).await {
        Ok(message) => (StatusCode::OK, Json(json!({ "message": message }))).into_response(),
        Err(e) => e.into_response(),
    }
}

// ============================================================================
// Assets
// ============================================================================

/// A single plain file name: no separators, no parent references, not hidden.
fn is_safe_asset_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\'])
        && !name.contains("..")
}

fn content_type(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("avif") => "image/avif",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}

async fn asset(State(state): State<AppState>, Path(file): Path<String>) -> Response {
    if !is_safe_asset_name(&file) {
        return StatusCode::NOT_FOUND.into_response();
    }
    let path = PathBuf::from(&state.config.server.assets_dir).join(&file);
    match tokio::fs::read(&path).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, content_type(&file))], bytes).into_response(),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "asset not served");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
