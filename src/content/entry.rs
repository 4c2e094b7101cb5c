//! Raw CMS entries and their field accessors.
//!
//! A [`RawEntry`] is one content entry as the CMS returned it: an id, a content
//! type, and a JSON map of field values. Linked entries and assets have already
//! been substituted in place by [`Includes::resolve`], so a field that links a
//! list of gallery items holds those items' full objects.
//!
//! ## Defaulting Accessors
//!
//! Section mappers read fields through accessors that never fail:
//!
//! | Accessor | Missing / wrong type |
//! |----------|----------------------|
//! | [`RawEntry::text`] | `""` |
//! | [`RawEntry::text_or`] | the given default (also used for `""`) |
//! | [`RawEntry::flag`] | `false` |
//! | [`RawEntry::strings`] | `[]` |
//! | [`RawEntry::entries`] | `[]` |
//! | [`RawEntry::asset_url`] | `None` |
//!
//! ## Asset URLs
//!
//! The CMS serves asset URLs protocol-relative (`//images.ctfassets.net/...`).
//! [`normalize_asset_url`] prefixes those with `https:`; absolute URLs and
//! site-local paths such as `/assets/3.png` pass through unchanged.

use serde_json::{Map, Value};
use std::collections::HashMap;

/// One content entry with its field values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEntry {
    /// Entry id from `sys.id`; empty for inline JSON objects.
    pub id: String,
    /// Content type id from `sys.contentType.sys.id`; empty for inline objects.
    pub content_type: String,
    pub fields: Map<String, Value>,
}

impl RawEntry {
    /// Build an entry from a content type and a JSON object of fields.
    ///
    /// Non-object values yield an entry with no fields.
    pub fn new(content_type: &str, fields: Value) -> Self {
        Self {
            id: String::new(),
            content_type: content_type.to_string(),
            fields: match fields {
                Value::Object(map) => map,
                _ => Map::new(),
            },
        }
    }

    /// Interpret a JSON value as an entry.
    ///
    /// Accepts both shapes the CMS produces:
    /// - a full entry `{"sys": {...}, "fields": {...}}` (linked entries)
    /// - a plain object (JSON-typed fields such as footer link lists)
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        match object.get("fields").and_then(Value::as_object) {
            Some(fields) => Some(Self {
                id: str_at(value, "/sys/id"),
                content_type: str_at(value, "/sys/contentType/sys/id"),
                fields: fields.clone(),
            }),
            None => Some(Self {
                id: String::new(),
                content_type: String::new(),
                fields: object.clone(),
            }),
        }
    }

    /// Text value of a field. Numbers are rendered, rich-text documents are
    /// flattened to paragraphs separated by blank lines.
    pub fn text(&self, field: &str) -> String {
        match self.fields.get(field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(doc @ Value::Object(_)) if is_rich_text(doc) => flatten_rich_text(doc),
            _ => String::new(),
        }
    }

    /// Text value of a field, or `default` when it is missing or empty.
    pub fn text_or(&self, field: &str, default: &str) -> String {
        let value = self.text(field);
        if value.is_empty() {
            default.to_string()
        } else {
            value
        }
    }

    pub fn flag(&self, field: &str) -> bool {
        self.fields
            .get(field)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// String items of a list field; non-string items are skipped.
    pub fn strings(&self, field: &str) -> Vec<String> {
        self.fields
            .get(field)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Nested entries of a list field, in stored order.
    pub fn entries(&self, field: &str) -> Vec<RawEntry> {
        self.fields
            .get(field)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(RawEntry::from_value).collect())
            .unwrap_or_default()
    }

    /// Dereferenceable URL of an asset field.
    ///
    /// Handles a single asset, a list of assets (first one wins) and a bare
    /// URL string.
    pub fn asset_url(&self, field: &str) -> Option<String> {
        let value = match self.fields.get(field)? {
            Value::Array(items) => items.first()?,
            other => other,
        };
        let url = match value {
            Value::String(s) => s.as_str(),
            other => other.pointer("/fields/file/url")?.as_str()?,
        };
        if url.is_empty() {
            None
        } else {
            Some(normalize_asset_url(url))
        }
    }
}

/// Give protocol-relative CMS URLs an `https:` scheme.
pub fn normalize_asset_url(url: &str) -> String {
    if url.starts_with("//") {
        format!("https:{url}")
    } else {
        url.to_string()
    }
}

fn str_at(value: &Value, pointer: &str) -> String {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn is_rich_text(value: &Value) -> bool {
    value.get("nodeType").and_then(Value::as_str) == Some("document")
}

/// Flatten a rich-text document: one paragraph per top-level block.
fn flatten_rich_text(document: &Value) -> String {
    let blocks = document
        .get("content")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    blocks
        .iter()
        .map(|block| {
            let mut text = String::new();
            collect_text(block, &mut text);
            text
        })
        .filter(|text| !text.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn collect_text(node: &Value, out: &mut String) {
    if let Some(value) = node.get("value").and_then(Value::as_str) {
        out.push_str(value);
    }
    if let Some(children) = node.get("content").and_then(Value::as_array) {
        for child in children {
            collect_text(child, out);
        }
    }
}

// ============================================================================
// Link resolution
// ============================================================================

/// Linkable objects from one API response, keyed by `sys.id`.
///
/// Both the response's own items and its `includes.Entry` / `includes.Asset`
/// arrays can be link targets.
#[derive(Debug, Default)]
pub struct Includes {
    entries: HashMap<String, Value>,
    assets: HashMap<String, Value>,
}

impl Includes {
    pub fn new(items: &[Value], includes: &Value) -> Self {
        let mut entries = HashMap::new();
        let mut assets = HashMap::new();
        let linked_entries = includes.get("Entry").and_then(Value::as_array);
        for entry in items.iter().chain(linked_entries.into_iter().flatten()) {
            if let Some(id) = entry.pointer("/sys/id").and_then(Value::as_str) {
                entries.insert(id.to_string(), entry.clone());
            }
        }
        for asset in includes
            .get("Asset")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
        {
            if let Some(id) = asset.pointer("/sys/id").and_then(Value::as_str) {
                assets.insert(id.to_string(), asset.clone());
            }
        }
        Self { entries, assets }
    }

    /// Turn a response item into a [`RawEntry`], substituting links up to
    /// `depth` levels deep.
    pub fn resolve(&self, item: &Value, depth: u8) -> Option<RawEntry> {
        let mut entry = RawEntry::from_value(item)?;
        entry.fields = entry
            .fields
            .iter()
            .map(|(key, value)| {
                let resolved = self.resolve_value(value, depth).unwrap_or(Value::Null);
                (key.clone(), resolved)
            })
            .collect();
        Some(entry)
    }

    /// Resolve links inside a field value.
    ///
    /// Returns `None` for a link that cannot be resolved (target missing from
    /// the response, or depth exhausted). Unresolved links are dropped from
    /// arrays and become `null` in object fields.
    fn resolve_value(&self, value: &Value, depth: u8) -> Option<Value> {
        match value {
            Value::Object(map) if is_link(map) => {
                if depth == 0 {
                    return None;
                }
                let target = self.lookup(map)?;
                Some(self.resolve_target(target, depth - 1))
            }
            Value::Object(map) => Some(Value::Object(
                map.iter()
                    .map(|(key, inner)| {
                        let resolved = self.resolve_value(inner, depth).unwrap_or(Value::Null);
                        (key.clone(), resolved)
                    })
                    .collect(),
            )),
            Value::Array(items) => Some(Value::Array(
                items
                    .iter()
                    .filter_map(|item| self.resolve_value(item, depth))
                    .collect(),
            )),
            other => Some(other.clone()),
        }
    }

    /// Copy a link target, resolving the links in its own fields.
    fn resolve_target(&self, target: &Value, depth: u8) -> Value {
        let mut resolved = target.clone();
        if let Some(fields) = target.get("fields").and_then(Value::as_object) {
            let fields: Map<String, Value> = fields
                .iter()
                .map(|(key, value)| {
                    let inner = self.resolve_value(value, depth).unwrap_or(Value::Null);
                    (key.clone(), inner)
                })
                .collect();
            resolved["fields"] = Value::Object(fields);
        }
        resolved
    }

    fn lookup(&self, link: &Map<String, Value>) -> Option<&Value> {
        let sys = link.get("sys")?;
        let id = sys.get("id")?.as_str()?;
        match sys.get("linkType")?.as_str()? {
            "Entry" => self.entries.get(id),
            "Asset" => self.assets.get(id),
            _ => None,
        }
    }
}

fn is_link(map: &Map<String, Value>) -> bool {
    map.get("sys")
        .and_then(|sys| sys.get("type"))
        .and_then(Value::as_str)
        == Some("Link")
}
