//! Site configuration module.
//!
//! Handles loading, validating, and layering configuration. There are three
//! layers, applied in order:
//!
//! ```text
//! stock defaults  →  config.toml (sparse overrides)  →  environment (secrets)
//! ```
//!
//! The result is one [`SiteConfig`] built in `main` and handed explicitly to
//! the content client, the email provider and the renderer. Nothing reads the
//! environment after startup.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! name = "Shay Joinery"
//! title = "Shay Joinery | Bespoke Carpentry & Joinery in London"
//! description = "..."
//!
//! [server]
//! bind = "127.0.0.1:3000"
//! assets_dir = "assets"        # Served at /assets/{file}
//!
//! [content]
//! base_url = "https://cdn.contentful.com"
//! environment = "master"
//! timeout_secs = 10
//! # space_id / access_token: usually from the environment
//!
//! [email]
//! api_url = "https://api.brevo.com/v3/smtp/email"
//! recipient_name = "Shay Joinery"
//! timeout_secs = 10
//! # api_key / sender_email: usually from the environment
//!
//! [theme]
//! primary = "#925422"          # Hero and accents
//! primary_dark = "#855024"     # Nav bar and inner-page banners
//! accent = "#d4ac29"           # Call-to-action buttons
//! accent_hover = "#c39c25"
//! green = "#5a7d2a"            # Top bar, footer, ticks
//! background = "#f5f5f0"
//! text = "#1b1b1b"
//! text_muted = "#4b5563"
//! container_width = "72rem"
//!
//! [enquiry]
//! default_project_type = "Furniture"
//! ```
//!
//! ## Environment
//!
//! | Variable | Alias | Sets |
//! |----------|-------|------|
//! | `API_KEY` | `BREVO_API_KEY` | `email.api_key` |
//! | `SENDER_EMAIL` | `BREVO_SENDER_EMAIL` | `email.sender_email` |
//! | `CONTENTFUL_SPACE_ID` | | `content.space_id` |
//! | `CONTENTFUL_ACCESS_TOKEN` | | `content.access_token` |
//!
//! Environment values win over the file. Unknown keys in the file are
//! rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Business name and page metadata.
    pub site: SiteInfo,
    /// Listen address and static asset directory.
    pub server: ServerConfig,
    /// Content Delivery API access.
    pub content: ContentConfig,
    /// Transactional email provider.
    pub email: EmailConfig,
    /// Brand palette and layout width.
    pub theme: ThemeConfig,
    /// Enquiry form behaviour.
    pub enquiry: EnquiryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    pub name: String,
    pub title: String,
    pub description: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "Shay Joinery".to_string(),
            title: "Shay Joinery | Bespoke Carpentry & Joinery in London".to_string(),
            description: "Bespoke carpentry and joinery in London: fitted furniture, kitchens, doors, windows and architectural joinery.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind: String,
    /// Directory served under `/assets/`.
    pub assets_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            assets_dir: "assets".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentConfig {
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    pub environment: String,
    /// Per-request timeout. A timed-out fetch falls back like any failure.
    pub timeout_secs: u64,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: "https://cdn.contentful.com".to_string(),
            space_id: None,
            access_token: None,
            environment: "master".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmailConfig {
    pub api_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Used as both sender and recipient of enquiry emails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_email: Option<String>,
    /// Display name on the recipient address.
    pub recipient_name: String,
    pub timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.brevo.com/v3/smtp/email".to_string(),
            api_key: None,
            sender_email: None,
            recipient_name: "Shay Joinery".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub primary: String,
    pub primary_dark: String,
    pub accent: String,
    pub accent_hover: String,
    pub green: String,
    pub background: String,
    pub text: String,
    pub text_muted: String,
    /// Max width of centred content (CSS value).
    pub container_width: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: "#925422".to_string(),
            primary_dark: "#855024".to_string(),
            accent: "#d4ac29".to_string(),
            accent_hover: "#c39c25".to_string(),
            green: "#5a7d2a".to_string(),
            background: "#f5f5f0".to_string(),
            text: "#1b1b1b".to_string(),
            text_muted: "#4b5563".to_string(),
            container_width: "72rem".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnquiryConfig {
    /// Project type preselected in a fresh form and restored after a send.
    pub default_project_type: String,
}

impl Default for EnquiryConfig {
    fn default() -> Self {
        Self {
            default_project_type: "Furniture".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "server.bind is not a socket address: {}",
                self.server.bind
            )));
        }
        for (key, value) in [
            ("content.base_url", &self.content.base_url),
            ("email.api_url", &self.email.api_url),
        ] {
            if Url::parse(value).is_err() {
                return Err(ConfigError::Validation(format!(
                    "{key} is not a valid URL: {value}"
                )));
            }
        }
        if self.content.timeout_secs == 0 || self.email.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "timeout_secs must be greater than zero".into(),
            ));
        }
        if self.enquiry.default_project_type.trim().is_empty() {
            return Err(ConfigError::Validation(
                "enquiry.default_project_type must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Overlay secrets from the environment.
    ///
    /// `lookup` is `std::env::var(..).ok()` in the binary; tests pass a map.
    /// Empty values are ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let first = |names: &[&str]| {
            names
                .iter()
                .filter_map(|name| lookup(name))
                .find(|value| !value.trim().is_empty())
        };
        if let Some(key) = first(&["API_KEY", "BREVO_API_KEY"]) {
            self.email.api_key = Some(key);
        }
        if let Some(sender) = first(&["SENDER_EMAIL", "BREVO_SENDER_EMAIL"]) {
            self.email.sender_email = Some(sender);
        }
        if let Some(space) = first(&["CONTENTFUL_SPACE_ID"]) {
            self.content.space_id = Some(space);
        }
        if let Some(token) = first(&["CONTENTFUL_ACCESS_TOKEN"]) {
            self.content.access_token = Some(token);
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from a `config.toml` path, without the environment layer.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. A missing file yields the stock defaults.
pub fn load_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Joinery Site Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Secrets are normally supplied through the environment instead:
#   API_KEY (or BREVO_API_KEY)             -> email.api_key
#   SENDER_EMAIL (or BREVO_SENDER_EMAIL)   -> email.sender_email
#   CONTENTFUL_SPACE_ID                    -> content.space_id
#   CONTENTFUL_ACCESS_TOKEN                -> content.access_token
#
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
name = "Shay Joinery"
title = "Shay Joinery | Bespoke Carpentry & Joinery in London"
description = "Bespoke carpentry and joinery in London: fitted furniture, kitchens, doors, windows and architectural joinery."

# ---------------------------------------------------------------------------
# HTTP server
# ---------------------------------------------------------------------------
[server]
bind = "127.0.0.1:3000"

# Directory served at /assets/{file}. Fallback images are looked up here.
assets_dir = "assets"

# ---------------------------------------------------------------------------
# Content Delivery API
# ---------------------------------------------------------------------------
[content]
base_url = "https://cdn.contentful.com"
environment = "master"

# Per-request timeout. A section whose fetch times out renders its fallback.
timeout_secs = 10

# Without both of these every page renders from its fallbacks.
# space_id = ""
# access_token = ""

# ---------------------------------------------------------------------------
# Enquiry email delivery
# ---------------------------------------------------------------------------
[email]
api_url = "https://api.brevo.com/v3/smtp/email"

# Display name on the recipient address (the sender address itself).
recipient_name = "Shay Joinery"
timeout_secs = 10

# api_key = ""
# sender_email = ""

# ---------------------------------------------------------------------------
# Theme (emitted as CSS custom properties)
# ---------------------------------------------------------------------------
[theme]
primary = "#925422"
primary_dark = "#855024"
accent = "#d4ac29"
accent_hover = "#c39c25"
green = "#5a7d2a"
background = "#f5f5f0"
text = "#1b1b1b"
text_muted = "#4b5563"
container_width = "72rem"

# ---------------------------------------------------------------------------
# Enquiry form
# ---------------------------------------------------------------------------
[enquiry]
# Preselected project type; the form returns to it after a successful send.
default_project_type = "Furniture"
"##
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-primary-dark: {primary_dark};
    --color-accent: {accent};
    --color-accent-hover: {accent_hover};
    --color-green: {green};
    --color-bg: {background};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --container-width: {container_width};
}}"#,
        primary = theme.primary,
        primary_dark = theme.primary_dark,
        accent = theme.accent,
        accent_hover = theme.accent_hover,
        green = theme.green,
        background = theme.background,
        text = theme.text,
        text_muted = theme.text_muted,
        container_width = theme.container_width,
    )
}
