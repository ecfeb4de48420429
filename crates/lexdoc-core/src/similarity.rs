//! Lexical similarity between stored documents.
//!
//! # Algorithm
//!
//! 1. Fetch both documents from the [`Store`].
//! 2. Collect each document's terms into a set.
//! 3. Count the intersection and the union of the two sets.
//! 4. Return `|intersection| / |union|` (the Jaccard index).
//!
//! The score is symmetric, lies in `[0, 1]`, and is `1.0` for a document
//! compared with itself.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::store::Store;

/// Jaccard index of two term lists, ignoring duplicates.
///
/// Fails with [`Error::DegenerateInput`] when both lists are empty.
pub fn jaccard<T: AsRef<str>>(a: &[T], b: &[T]) -> Result<f64> {
    let set_a: HashSet<&str> = a.iter().map(|t| t.as_ref()).collect();
    let set_b: HashSet<&str> = b.iter().map(|t| t.as_ref()).collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.union(&set_b).count();

    if union == 0 {
        return Err(Error::DegenerateInput("both term sets are empty".to_string()));
    }
    Ok(intersection as f64 / union as f64)
}

/// Computes similarity between documents held by a store.
pub struct SimilarityService<'a> {
    store: &'a dyn Store,
}

impl<'a> SimilarityService<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Jaccard similarity of the documents `id_a` and `id_b`.
    ///
    /// Fails with [`Error::NotFound`] when either id is not stored, and with
    /// [`Error::Validation`] when either id is empty.
    pub fn similarity(&self, id_a: &str, id_b: &str) -> Result<f64> {
        let doc_a = self
            .store
            .get(id_a)?
            .ok_or_else(|| Error::NotFound(id_a.to_string()))?;
        let doc_b = self
            .store
            .get(id_b)?
            .ok_or_else(|| Error::NotFound(id_b.to_string()))?;

        let score = jaccard(doc_a.terms(), doc_b.terms())?;
        tracing::debug!(a = id_a, b = id_b, score, "similarity computed");
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::error::ErrorKind;
    use crate::store::memory::InMemoryStore;

    fn store_with(docs: &[(&str, &str)]) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        for (id, text) in docs {
            store.add(Document::text(*id, *text).unwrap()).unwrap();
        }
        store
    }

    #[test]
    fn test_happy_house_happy_day() {
        let store = store_with(&[
            ("house", "a happy house is a beautiful house"),
            ("day", "a happy day is a good day"),
        ]);
        let service = SimilarityService::new(&store);
        assert_eq!(service.similarity("house", "day").unwrap(), 0.2);
    }

    #[test]
    fn test_portuguese_fixture() {
        let store = store_with(&[
            ("texto1", "Uma casa feliz é uma casa bonita"),
            ("texto2", "Um dia feliz é um bom dia"),
        ]);
        let service = SimilarityService::new(&store);
        assert_eq!(service.similarity("texto1", "texto2").unwrap(), 0.2);
    }

    #[test]
    fn test_symmetric_and_reflexive() {
        let store = store_with(&[
            ("x", "rust borrow checker lifetimes"),
            ("y", "rust lifetimes traits generics macros"),
        ]);
        let service = SimilarityService::new(&store);
        let xy = service.similarity("x", "y").unwrap();
        let yx = service.similarity("y", "x").unwrap();
        assert_eq!(xy, yx);
        assert!((0.0..=1.0).contains(&xy));
        assert_eq!(service.similarity("x", "x").unwrap(), 1.0);
    }

    #[test]
    fn test_disjoint_is_zero() {
        let store = store_with(&[("x", "alpha beta"), ("y", "gamma delta")]);
        let service = SimilarityService::new(&store);
        assert_eq!(service.similarity("x", "y").unwrap(), 0.0);
    }

    #[test]
    fn test_missing_document() {
        let store = store_with(&[("x", "alpha beta")]);
        let service = SimilarityService::new(&store);
        let err = service.similarity("nope", "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let err = service.similarity("x", "nope").unwrap_err();
        assert_eq!(err, Error::NotFound("nope".to_string()));
    }

    #[test]
    fn test_empty_id_is_validation_error() {
        let store = store_with(&[("x", "alpha beta")]);
        let service = SimilarityService::new(&store);
        let err = service.similarity("", "x").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_jaccard_empty_sets() {
        let empty: [&str; 0] = [];
        let err = jaccard(&empty, &empty).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DegenerateInput);
        assert_eq!(jaccard(&empty, &["a"]).unwrap(), 0.0);
    }

    #[test]
    fn test_jaccard_ignores_duplicates() {
        assert_eq!(jaccard(&["a", "a", "b"], &["a", "b", "b"]).unwrap(), 1.0);
    }
}
