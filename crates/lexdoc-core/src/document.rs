//! The document abstraction.
//!
//! A [`Document`] keeps its raw text, the normalized text derived once at
//! construction, and two lazily derived views:
//!
//! - **terms** — the whitespace-delimited words of the normalized text,
//!   sorted ascending so exact lookups can binary search;
//! - **metadata** — universal facts (line count, size, creation timestamp,
//!   type tag) plus per-kind extras.
//!
//! Both views are computed on first access and never recomputed. They sit
//! in [`OnceLock`]s, so concurrent first access still computes them once.
//!
//! # Kinds
//!
//! | Kind | Normalization | Extra metadata |
//! |------|---------------|----------------|
//! | [`DocumentKind::Text`] | `Clean` | — |
//! | [`DocumentKind::Java`] | `Java`, then `Clean` | `IMPORTS`, `AUTHOR` |
//!
//! # Example
//!
//! ```rust
//! use lexdoc_core::document::Document;
//!
//! let doc = Document::text("notes", "A happy house is a beautiful house").unwrap();
//! assert_eq!(doc.terms(), ["beautiful", "happy", "house", "house"]);
//! assert_eq!(doc.metadata()["TYPE"], "txt");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::{Arc, OnceLock};

use serde::Serialize;

use crate::clock::{Clock, SystemClock};
use crate::error::{Error, Result};
use crate::normalize::{transform, Algorithm};
use crate::validate::validate_id;

/// Metadata key → value, ordered by key.
pub type Metadata = BTreeMap<String, String>;

/// Metadata keys written by [`Document::metadata`].
pub mod keys {
    /// Number of newline characters in the original text.
    pub const LINES: &str = "LINES";
    /// Character length of the normalized text.
    pub const SIZE: &str = "SIZE";
    /// Epoch milliseconds at which the metadata was computed.
    pub const METADATA_DATE: &str = "METADATADATE";
    /// Document type tag (`txt`, `java`).
    pub const TYPE: &str = "TYPE";
    /// Java only: number of `import ` statements.
    pub const IMPORTS: &str = "IMPORTS";
    /// Java only: `TRUE` when the source carries an `@author` tag.
    pub const AUTHOR: &str = "AUTHOR";
}

/// Closed set of document variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DocumentKind {
    #[serde(rename = "txt")]
    Text,
    #[serde(rename = "java")]
    Java,
}

impl DocumentKind {
    /// The type tag stored under [`keys::TYPE`].
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Text => "txt",
            DocumentKind::Java => "java",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "txt" | "text" => Ok(DocumentKind::Text),
            "java" => Ok(DocumentKind::Java),
            other => Err(Error::Validation(format!(
                "unknown document kind: '{}'. Use txt or java.",
                other
            ))),
        }
    }
}

/// An identified unit of text with derived terms and metadata.
pub struct Document {
    id: String,
    kind: DocumentKind,
    original: String,
    normalized: String,
    clock: Arc<dyn Clock>,
    terms: OnceLock<Vec<String>>,
    metadata: OnceLock<Metadata>,
}

impl Document {
    /// Build a document of `kind`, reading metadata time from the system clock.
    pub fn new(id: impl Into<String>, raw: impl Into<String>, kind: DocumentKind) -> Result<Self> {
        Self::with_clock(id, raw, kind, Arc::new(SystemClock))
    }

    /// Build a document of `kind` whose metadata timestamp comes from `clock`.
    ///
    /// Fails with [`Error::Validation`] when `id` is empty.
    pub fn with_clock(
        id: impl Into<String>,
        raw: impl Into<String>,
        kind: DocumentKind,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let id = id.into();
        validate_id(&id)?;
        let original = raw.into();

        let normalized = match kind {
            DocumentKind::Text => transform(Algorithm::Clean, &original),
            DocumentKind::Java => {
                let stripped = transform(Algorithm::Java, &original);
                transform(Algorithm::Clean, &stripped)
            }
        }
        .trim()
        .to_string();

        Ok(Self {
            id,
            kind,
            original,
            normalized,
            clock,
            terms: OnceLock::new(),
            metadata: OnceLock::new(),
        })
    }

    /// Shorthand for a plain-text document.
    pub fn text(id: impl Into<String>, raw: impl Into<String>) -> Result<Self> {
        Self::new(id, raw, DocumentKind::Text)
    }

    /// Shorthand for a Java source document.
    pub fn java(id: impl Into<String>, raw: impl Into<String>) -> Result<Self> {
        Self::new(id, raw, DocumentKind::Java)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Share of the original characters that survive normalization,
    /// ignoring whitespace.
    ///
    /// Fails with [`Error::DegenerateInput`] when the original text is empty.
    pub fn useful_text_ratio(&self) -> Result<f64> {
        let original_len = self.original.chars().count();
        if original_len == 0 {
            return Err(Error::DegenerateInput(format!(
                "document '{}' has an empty original text",
                self.id
            )));
        }
        let useful = transform(Algorithm::CleanSpaces, &self.normalized)
            .chars()
            .count();
        Ok(useful as f64 / original_len as f64)
    }

    /// Sorted terms of the normalized text. Never contains empty strings.
    pub fn terms(&self) -> &[String] {
        self.terms.get_or_init(|| {
            let mut terms: Vec<String> = transform(Algorithm::CleanLines, &self.normalized)
                .split(' ')
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect();
            terms.sort();
            terms
        })
    }

    /// Exact-match lookup of `term` by binary search over [`terms`](Self::terms).
    pub fn contains_term(&self, term: &str) -> bool {
        self.terms()
            .binary_search_by(|probe| probe.as_str().cmp(term))
            .is_ok()
    }

    /// Universal and kind-specific metadata, computed on first call.
    pub fn metadata(&self) -> &Metadata {
        self.metadata.get_or_init(|| self.compute_metadata())
    }

    fn compute_metadata(&self) -> Metadata {
        let mut meta = match self.kind {
            DocumentKind::Text => Metadata::new(),
            DocumentKind::Java => self.java_metadata(),
        };
        meta.insert(
            keys::LINES.to_string(),
            self.original.matches('\n').count().to_string(),
        );
        meta.insert(
            keys::SIZE.to_string(),
            self.normalized.chars().count().to_string(),
        );
        meta.insert(
            keys::METADATA_DATE.to_string(),
            self.clock.now_millis().to_string(),
        );
        meta.insert(keys::TYPE.to_string(), self.kind.as_str().to_string());
        meta
    }

    fn java_metadata(&self) -> Metadata {
        let mut meta = Metadata::new();
        meta.insert(
            keys::IMPORTS.to_string(),
            self.normalized.matches("import ").count().to_string(),
        );
        let has_author = self.original.contains("@author");
        meta.insert(
            keys::AUTHOR.to_string(),
            if has_author { "TRUE" } else { "FALSE" }.to_string(),
        );
        meta
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.id == other.id
    }
}

impl Eq for Document {}

impl Hash for Document {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("normalized", &self.normalized)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "==={}\n{}", self.id, self.normalized)
    }
}
