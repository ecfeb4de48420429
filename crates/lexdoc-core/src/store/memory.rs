//! In-memory [`Store`] implementation.
//!
//! Uses a `HashMap` keyed by document id. Term search binary-searches each
//! document's sorted term list; metadata search checks every document's
//! cached metadata against the predicate.

use std::collections::HashMap;
use std::sync::Arc;

use crate::document::Document;
use crate::error::Result;
use crate::predicate::Predicate;
use crate::validate::{validate_document, validate_id};

use super::{DocumentSet, Store};

/// In-memory document store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    docs: HashMap<String, Arc<Document>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            docs: HashMap::new(),
        }
    }
}

impl Store for InMemoryStore {
    fn add(&mut self, doc: Document) -> Result<()> {
        validate_document(doc.id(), doc.terms())?;
        let id = doc.id().to_string();
        let terms = doc.terms().len();
        if self.docs.insert(id.clone(), Arc::new(doc)).is_some() {
            tracing::warn!(id = %id, "replaced existing document");
        } else {
            tracing::debug!(id = %id, terms, "added document");
        }
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<Arc<Document>>> {
        validate_id(id)?;
        Ok(self.docs.get(id).cloned())
    }

    fn count(&self) -> usize {
        self.docs.len()
    }

    fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.docs.keys().cloned().collect();
        ids.sort();
        ids
    }

    fn search_by_term(&self, term: &str) -> DocumentSet {
        let found: DocumentSet = self
            .docs
            .values()
            .filter(|d| d.contains_term(term))
            .cloned()
            .collect();
        tracing::debug!(term, matches = found.len(), "term search");
        found
    }

    fn search_by_metadata(&self, predicate: &Predicate) -> DocumentSet {
        let found: DocumentSet = self
            .docs
            .values()
            .filter(|d| predicate.matches(d.metadata()))
            .cloned()
            .collect();
        tracing::debug!(
            pairs = predicate.len(),
            matches = found.len(),
            "metadata search"
        );
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::keys;
    use crate::error::ErrorKind;

    fn ids_of(set: &DocumentSet) -> Vec<String> {
        let mut ids: Vec<String> = set.iter().map(|d| d.id().to_string()).collect();
        ids.sort();
        ids
    }

    fn sample_store() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store
            .add(Document::text("notes", "apple banana cherry").unwrap())
            .unwrap();
        store
            .add(Document::text("list", "banana split\nsecond line").unwrap())
            .unwrap();
        store
            .add(
                Document::java(
                    "Main.java",
                    "import java.io.File;\n/** @author Bo */\nclass Main {}",
                )
                .unwrap(),
            )
            .unwrap();
        store
    }

    #[test]
    fn test_add_and_get() {
        let store = sample_store();
        assert_eq!(store.count(), 3);
        let doc = store.get("notes").unwrap().unwrap();
        assert_eq!(doc.id(), "notes");
        assert!(store.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_get_empty_id_rejected() {
        let store = sample_store();
        let err = store.get("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_add_without_terms_rejected() {
        let mut store = sample_store();
        let err = store
            .add(Document::text("noise", "?! ... the a").unwrap())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(store.count(), 3);
        assert!(store.get("noise").unwrap().is_none());
    }

    #[test]
    fn test_reinsert_overwrites() {
        let mut store = sample_store();
        store
            .add(Document::text("notes", "completely different words").unwrap())
            .unwrap();
        assert_eq!(store.count(), 3);
        let doc = store.get("notes").unwrap().unwrap();
        assert!(doc.contains_term("different"));
        assert!(!doc.contains_term("apple"));
    }

    #[test]
    fn test_ids_sorted() {
        let store = sample_store();
        assert_eq!(store.ids(), vec!["Main.java", "list", "notes"]);
    }

    #[test]
    fn test_search_by_term() {
        let store = sample_store();
        assert_eq!(ids_of(&store.search_by_term("banana")), vec!["list", "notes"]);
        assert!(store.search_by_term("durian").is_empty());
    }

    #[test]
    fn test_search_by_term_matches_first_sorted_term() {
        let store = sample_store();
        // "apple" sorts first in "notes"; "banana" sorts first in "list".
        assert_eq!(ids_of(&store.search_by_term("apple")), vec!["notes"]);
        let list = store.get("list").unwrap().unwrap();
        assert_eq!(list.terms()[0], "banana");
        assert!(store
            .search_by_term("banana")
            .iter()
            .any(|d| d.id() == "list"));
    }

    #[test]
    fn test_search_by_metadata_and_semantics() {
        let store = sample_store();
        let txt = Predicate::new().with(keys::TYPE, "txt");
        assert_eq!(ids_of(&store.search_by_metadata(&txt)), vec!["list", "notes"]);

        let txt_one_line = txt.clone().with(keys::LINES, "1");
        assert_eq!(
            ids_of(&store.search_by_metadata(&txt_one_line)),
            vec!["list"]
        );

        let java = Predicate::new()
            .with(keys::TYPE, "java")
            .with(keys::AUTHOR, "TRUE")
            .with(keys::IMPORTS, "1");
        assert_eq!(ids_of(&store.search_by_metadata(&java)), vec!["Main.java"]);
    }

    #[test]
    fn test_search_by_metadata_missing_key_excludes() {
        let store = sample_store();
        let p = Predicate::new().with(keys::AUTHOR, "TRUE");
        assert_eq!(ids_of(&store.search_by_metadata(&p)), vec!["Main.java"]);

        let p = Predicate::new().with("NOT_A_KEY", "x");
        assert!(store.search_by_metadata(&p).is_empty());
    }
}
