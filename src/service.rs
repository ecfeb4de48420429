//! Application-facing document service.
//!
//! [`DocumentService`] owns an in-memory store and the clock used for
//! document metadata, and exposes the operations the CLI (or any other
//! front end) needs: add a document, run a metadata search, look up a term,
//! compare two documents, and inspect one.
//!
//! Errors stay [`lexdoc_core::Error`] so callers can branch on the kind.

use std::collections::BTreeMap;
use std::sync::Arc;

use lexdoc_core::clock::{Clock, SystemClock};
use lexdoc_core::document::{Document, DocumentKind};
use lexdoc_core::normalize::{transform, Algorithm};
use lexdoc_core::predicate::Predicate;
use lexdoc_core::query::{ranked, DescriptionRow, MetadataSearch, Query};
use lexdoc_core::similarity::SimilarityService;
use lexdoc_core::store::memory::InMemoryStore;
use lexdoc_core::store::Store;
use lexdoc_core::{Error, Result};
use serde::Serialize;

/// One scored search match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub kind: DocumentKind,
    pub score: u32,
}

/// Ranked hits plus the query description rows.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub hits: Vec<SearchHit>,
    pub description: Vec<DescriptionRow>,
}

/// Summary of a stored document.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentView {
    pub id: String,
    pub kind: DocumentKind,
    pub useful_text_ratio: f64,
    pub term_count: usize,
    pub metadata: BTreeMap<String, String>,
    pub normalized: String,
}

pub struct DocumentService {
    store: InMemoryStore,
    clock: Arc<dyn Clock>,
}

impl Default for DocumentService {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentService {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            store: InMemoryStore::new(),
            clock,
        }
    }

    pub fn store(&self) -> &dyn Store {
        &self.store
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    pub fn ids(&self) -> Vec<String> {
        self.store.ids()
    }

    /// Build a document of `kind` and store it, replacing any previous one
    /// with the same id.
    pub fn add_document(&mut self, id: &str, raw: &str, kind: DocumentKind) -> Result<()> {
        let doc = Document::with_clock(id, raw, kind, self.clock.clone())?;
        self.store.add(doc)
    }

    /// Run a metadata-predicate search and rank the hits.
    pub fn search(&self, predicate: Predicate) -> Result<SearchOutcome> {
        let query = MetadataSearch::new(predicate)?;
        let scores = query.execute(&self.store);
        let hits = ranked(&scores)
            .into_iter()
            .map(|(doc, score)| SearchHit {
                id: doc.id().to_string(),
                kind: doc.kind(),
                score,
            })
            .collect();
        Ok(SearchOutcome {
            hits,
            description: query.describe(),
        })
    }

    /// Ids of documents containing `term`, sorted.
    ///
    /// The term goes through the same cleaning as document text, so case and
    /// punctuation do not matter. A term that cleans to nothing (a stop word
    /// or pure punctuation) matches nothing.
    pub fn search_term(&self, term: &str) -> Vec<String> {
        let cleaned = transform(Algorithm::Clean, term);
        let Some(word) = cleaned.split_whitespace().next() else {
            return Vec::new();
        };
        let mut ids: Vec<String> = self
            .store
            .search_by_term(word)
            .iter()
            .map(|d| d.id().to_string())
            .collect();
        ids.sort();
        ids
    }

    pub fn similarity(&self, id_a: &str, id_b: &str) -> Result<f64> {
        SimilarityService::new(&self.store).similarity(id_a, id_b)
    }

    pub fn inspect(&self, id: &str) -> Result<DocumentView> {
        let doc = self
            .store
            .get(id)?
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        Ok(DocumentView {
            id: doc.id().to_string(),
            kind: doc.kind(),
            useful_text_ratio: doc.useful_text_ratio()?,
            term_count: doc.terms().len(),
            metadata: doc.metadata().clone(),
            normalized: doc.normalized().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexdoc_core::clock::FixedClock;
    use lexdoc_core::document::keys;
    use lexdoc_core::ErrorKind;

    fn service() -> DocumentService {
        let mut svc = DocumentService::with_clock(Arc::new(FixedClock::new(1_234)));
        svc.add_document("house", "a happy house is a beautiful house", DocumentKind::Text)
            .unwrap();
        svc.add_document("day", "a happy day is a good day", DocumentKind::Text)
            .unwrap();
        svc.add_document(
            "Main.java",
            "import java.util.List;\nclass Main {}\n",
            DocumentKind::Java,
        )
        .unwrap();
        svc
    }

    #[test]
    fn test_add_and_count() {
        let svc = service();
        assert_eq!(svc.count(), 3);
        assert_eq!(svc.ids(), vec!["Main.java", "day", "house"]);
    }

    #[test]
    fn test_add_empty_id_leaves_count() {
        let mut svc = service();
        let err = svc
            .add_document("", "some words", DocumentKind::Text)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(svc.count(), 3);
    }

    #[test]
    fn test_search_outcome() {
        let svc = service();
        let outcome = svc
            .search(Predicate::new().with(keys::TYPE, "txt"))
            .unwrap();
        let ids: Vec<&str> = outcome.hits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["day", "house"]);
        assert!(outcome.hits.iter().all(|h| h.score == 1));
        assert_eq!(
            outcome.description,
            vec![["TYPE".to_string(), "txt".to_string()]]
        );
    }

    #[test]
    fn test_search_empty_predicate() {
        let svc = service();
        let err = svc.search(Predicate::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_search_term_normalizes_input() {
        let svc = service();
        assert_eq!(svc.search_term("HAPPY!"), vec!["day", "house"]);
        assert_eq!(svc.search_term("beautiful"), vec!["house"]);
        assert!(svc.search_term("the").is_empty());
        assert!(svc.search_term("...").is_empty());
    }

    #[test]
    fn test_similarity() {
        let svc = service();
        assert_eq!(svc.similarity("house", "day").unwrap(), 0.2);
        let err = svc.similarity("house", "missing").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_inspect() {
        let svc = service();
        let view = svc.inspect("Main.java").unwrap();
        assert_eq!(view.kind, DocumentKind::Java);
        assert_eq!(view.metadata[keys::IMPORTS], "1");
        assert_eq!(view.metadata[keys::METADATA_DATE], "1234");
        assert!(view.useful_text_ratio > 0.0 && view.useful_text_ratio <= 1.0);

        let err = svc.inspect("absent").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
