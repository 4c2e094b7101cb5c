//! Headless CMS access.
//!
//! The site reads all of its copy from a Contentful space through two narrow
//! operations: fetch the single entry of a content type, or list every entry
//! of a content type. Everything above this module works with [`RawEntry`]
//! values and never sees the wire format.
//!
//! ## Modules
//!
//! - [`client`]: the [`ContentClient`] trait, the HTTP implementation and the
//!   offline stand-in used when no credentials are configured
//! - [`entry`]: the raw entry model, typed field accessors, link resolution
//!   against the response's `includes` block, and asset URL normalization

pub mod client;
pub mod entry;

pub use client::{ContentClient, ContentError, HttpContentClient, OfflineContent};
pub use entry::RawEntry;
