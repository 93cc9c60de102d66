//! # Document
//!
//! The document is the single persisted object for a deployment. It carries:
//!
//! - **Credential**: an optional one-way hash of the admin password
//! - **Content**: the ordered snippet collection
//!
//! The whole document is the unit of atomicity: every mutation replaces it
//! entirely, and the credential hash transitions from absent to present at
//! most once (bootstrap, see [`crate::auth`]).
//!
//! ## Shape recovery
//!
//! On-disk data may predate the canonical shape: a bare JSON list of
//! snippets, an empty file, or unreadable bytes. [`Document::decode`]
//! collapses all of those into the canonical shape instead of failing, so
//! the load path never becomes permanently unreadable.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Default cap on the number of tags a snippet may carry.
pub const DEFAULT_MAX_TAGS: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// One-way salted hash of the admin password; `None` until bootstrap.
    /// Accepts the snake_case key older deployments wrote.
    #[serde(rename = "passwordHash", alias = "password_hash", default)]
    pub password_hash: Option<String>,
}

/// The single persisted object: credential metadata plus the ordered
/// snippet collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub scripts: Vec<Snippet>,
}

/// Optional attribution for a snippet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// One stored command entry.
///
/// `command` is opaque payload text: the core never parses or executes it.
/// `wrap_code` is a rendering hint carried through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    /// Opaque unique id, generated at creation, never reused.
    pub id: String,
    pub title: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(default)]
    pub wrap_code: bool,
    /// Milliseconds since the Unix epoch, set once at creation.
    #[serde(default)]
    pub created_at: i64,
}

impl Snippet {
    /// Create a new snippet with a fresh id and creation timestamp.
    pub fn new(title: impl Into<String>, command: impl Into<String>) -> Self {
        let now_ms = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            command: command.into(),
            description: None,
            tags: Vec::new(),
            image: None,
            source: None,
            wrap_code: false,
            created_at: now_ms as i64,
        }
    }
}

/// On-disk shapes we accept. Anything else collapses to the empty document.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDocument {
    Canonical(Document),
    Legacy(Vec<serde_json::Value>),
}

impl Document {
    /// Decode persisted bytes into the canonical shape.
    ///
    /// A bare list is treated as legacy data and salvaged into `scripts`
    /// (entries that don't decode as snippets are dropped); empty or
    /// unreadable payloads yield the canonical empty document. This never
    /// fails: the document is the sole source of truth and must stay
    /// loadable after a partial or legacy write.
    pub fn decode(bytes: &[u8]) -> Self {
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Self::default();
        }
        match serde_json::from_slice::<RawDocument>(bytes) {
            Ok(RawDocument::Canonical(document)) => document,
            Ok(RawDocument::Legacy(items)) => {
                let total = items.len();
                let scripts: Vec<Snippet> = items
                    .into_iter()
                    .filter_map(|item| serde_json::from_value(item).ok())
                    .collect();
                tracing::warn!(
                    salvaged = scripts.len(),
                    total = total,
                    "recovered legacy bare-list document"
                );
                Self {
                    meta: Meta::default(),
                    scripts,
                }
            }
            Err(e) => {
                tracing::warn!("undecodable document, recovering empty: {}", e);
                Self::default()
            }
        }
    }
}

/// Write-time validation limits. Kept configurable rather than hard-coded;
/// the tag cap in particular is a product constraint, not a storage one.
#[derive(Debug, Clone, Copy)]
pub struct SnippetLimits {
    pub max_tags: usize,
}

impl Default for SnippetLimits {
    fn default() -> Self {
        Self {
            max_tags: DEFAULT_MAX_TAGS,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("snippet at position {0} has an empty id")]
    EmptyId(usize),
    #[error("snippet '{0}' has an empty title")]
    EmptyTitle(String),
    #[error("snippet '{id}' carries {count} tags (limit is {max})")]
    TooManyTags { id: String, count: usize, max: usize },
    #[error("duplicate snippet id '{0}'")]
    DuplicateId(String),
}

/// Validate a replacement collection before it reaches the store.
pub fn validate_scripts(
    scripts: &[Snippet],
    limits: &SnippetLimits,
) -> Result<(), ValidationError> {
    let mut seen = std::collections::HashSet::new();
    for (index, snippet) in scripts.iter().enumerate() {
        if snippet.id.trim().is_empty() {
            return Err(ValidationError::EmptyId(index));
        }
        if snippet.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle(snippet.id.clone()));
        }
        if snippet.tags.len() > limits.max_tags {
            return Err(ValidationError::TooManyTags {
                id: snippet.id.clone(),
                count: snippet.tags.len(),
                max: limits.max_tags,
            });
        }
        if !seen.insert(snippet.id.as_str()) {
            return Err(ValidationError::DuplicateId(snippet.id.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(id: &str, title: &str) -> Snippet {
        Snippet {
            id: id.to_string(),
            title: title.to_string(),
            ..Snippet::new(title, "true")
        }
    }

    #[test]
    fn decode_canonical_round_trip() {
        let mut document = Document::default();
        document.meta.password_hash = Some("v1$00$11".to_string());
        document.scripts.push(snippet("a", "first"));
        let bytes = serde_json::to_vec(&document).unwrap();
        assert_eq!(Document::decode(&bytes), document);
    }

    #[test]
    fn decode_bare_list_salvages_snippets() {
        let bytes = br#"[
            {"id": "a", "title": "first", "command": "ls"},
            {"this is": "not a snippet"},
            {"id": "b", "title": "second", "command": "pwd"}
        ]"#;
        let document = Document::decode(bytes);
        assert_eq!(document.meta.password_hash, None);
        let ids: Vec<&str> = document.scripts.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn decode_empty_and_garbage_recover_empty() {
        assert_eq!(Document::decode(b""), Document::default());
        assert_eq!(Document::decode(b"   \n"), Document::default());
        assert_eq!(Document::decode(b"null"), Document::default());
        assert_eq!(Document::decode(b"{not json"), Document::default());
    }

    #[test]
    fn decode_accepts_legacy_snake_case_hash_key() {
        let bytes = br#"{"meta": {"password_hash": "v1$aa$bb"}, "scripts": []}"#;
        let document = Document::decode(bytes);
        assert_eq!(document.meta.password_hash.as_deref(), Some("v1$aa$bb"));
    }

    #[test]
    fn snippet_wire_form_is_camel_case() {
        let mut s = snippet("a", "first");
        s.wrap_code = true;
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["wrapCode"], serde_json::json!(true));
        assert!(json.get("createdAt").is_some());
        assert!(json.get("wrap_code").is_none());
    }

    #[test]
    fn fourth_tag_rejected() {
        let mut s = snippet("a", "first");
        s.tags = vec!["x", "y", "z", "w"].into_iter().map(String::from).collect();
        let err = validate_scripts(&[s], &SnippetLimits::default()).unwrap_err();
        assert!(matches!(err, ValidationError::TooManyTags { count: 4, max: 3, .. }));
    }

    #[test]
    fn duplicate_and_empty_fields_rejected() {
        let a = snippet("a", "first");
        let also_a = snippet("a", "second");
        assert!(matches!(
            validate_scripts(&[a.clone(), also_a], &SnippetLimits::default()),
            Err(ValidationError::DuplicateId(_))
        ));

        let mut untitled = snippet("b", "x");
        untitled.title = "  ".to_string();
        assert!(matches!(
            validate_scripts(&[untitled], &SnippetLimits::default()),
            Err(ValidationError::EmptyTitle(_))
        ));

        let mut blank = snippet("", "x");
        blank.id = String::new();
        assert!(matches!(
            validate_scripts(&[a, blank], &SnippetLimits::default()),
            Err(ValidationError::EmptyId(1))
        ));
    }
}
