//! # Joinery Site
//!
//! A content-driven marketing site for a carpentry and joinery business.
//! Every page is assembled from named content sections held in a headless CMS,
//! and a single endpoint relays customer enquiries to a transactional email
//! provider.
//!
//! # Architecture: Resolve, Merge, Render
//!
//! Each request for a page flows through three steps:
//!
//! ```text
//! 1. Resolve   CMS            →  Option<Section> / Vec<Section>  (one fetch per section)
//! 2. Merge     outcome        →  Resolved<Section>               (live or static fallback)
//! 3. Render    page sections  →  HTML                            (maud, fully populated)
//! ```
//!
//! Failures never cross a step boundary. A section whose fetch errors out is
//! logged and reported as absent by its resolver; the merge step swaps in that
//! section's fallback; the renderer only ever sees complete records. A page
//! therefore degrades section by section to static content, never to a blank
//! or error page.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | CMS client: singleton/list fetches, link resolution, raw entry accessors |
//! | [`sections`] | Section descriptors, typed records, resolvers and fallback tables |
//! | [`resolve`] | Fallback merge policy and the per-section origin report |
//! | [`pages`] | Page composers: fan-out every section of a route, merge each independently |
//! | [`render`] | Maud templates for the five routes plus the shared layout |
//! | [`enquiry`] | Enquiry record, validation, email composition and the submission operation |
//! | [`email`] | Email provider contract and the Brevo HTTP client |
//! | [`form`] | Client-side enquiry form state and the endpoint transport |
//! | [`server`] | Axum router binding pages, assets and the enquiry endpoint |
//! | [`config`] | Layered `config.toml` loading, environment overrides, theme CSS |
//! | [`output`] | CLI output formatting for `check` and `enquire` |
//!
//! # Design Decisions
//!
//! ## Typed Records at the Mapping Boundary
//!
//! The CMS hands back loosely shaped JSON. Each section maps it exactly once,
//! in [`sections::records`], into a fixed struct whose fields are all present:
//! strings default to empty (or to a field-specific default), lists to empty,
//! flags to `false`. Templates never null-check a leaf.
//!
//! ## Fallbacks Per Section, Not Per Page
//!
//! The merge policy in [`resolve`] is applied to each section on its own. One
//! section failing never blanks or blocks another on the same page, and the
//! origin of every section is reported so `check` can show which parts of the
//! site are currently served from the fallback tables.
//!
//! ## Join, Don't Race
//!
//! Composers start every resolver of a page together with `tokio::join!` and
//! wait for all of them. There is no early exit on the first failure and no
//! shared state between the fetches; each one writes a disjoint field of the
//! page struct.
//!
//! ## Maud Over Template Engines
//!
//! HTML is produced with [Maud](https://maud.lambda.xyz/): templates are Rust
//! code, interpolation is escaped by default, and there is no template
//! directory to deploy. The same holds for the enquiry email body, so
//! customer-supplied text cannot inject markup into the business inbox.

pub mod config;
pub mod content;
pub mod email;
pub mod enquiry;
pub mod form;
pub mod output;
pub mod pages;
pub mod render;
pub mod resolve;
pub mod sections;
pub mod server;

#[cfg(test)]
pub(crate) mod test_helpers;
