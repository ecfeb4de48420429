//! Query strategies: turn search parameters into scored result sets.
//!
//! A [`Query`] runs against any [`Store`] and returns a [`Scores`] map from
//! document to a non-negative score. Documents that do not match are absent
//! from the map; a score of zero is never written.
//!
//! [`MetadataSearch`] is the metadata-predicate strategy: one store lookup,
//! one point per returned document.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use crate::document::Document;
use crate::error::{Error, Result};
use crate::predicate::Predicate;
use crate::store::Store;

/// Document → relevance score.
pub type Scores = HashMap<Arc<Document>, u32>;

/// One `[parameter, detail]` row of a query description.
pub type DescriptionRow = [String; 2];

/// A search strategy over a [`Store`].
pub trait Query {
    /// Run the query and score every matching document.
    fn execute(&self, store: &dyn Store) -> Scores;

    /// Describe the query parameters, one row per parameter.
    fn describe(&self) -> Vec<DescriptionRow>;
}

/// Order scored documents by score (desc), then id (asc).
pub fn ranked(scores: &Scores) -> Vec<(Arc<Document>, u32)> {
    let mut ranked: Vec<(Arc<Document>, u32)> =
        scores.iter().map(|(d, s)| (d.clone(), *s)).collect();
    ranked.sort_by(|a, b| match b.1.cmp(&a.1) {
        Ordering::Equal => a.0.id().cmp(b.0.id()),
        other => other,
    });
    ranked
}

/// Find documents whose metadata holds every pair of a predicate.
#[derive(Debug, Clone)]
pub struct MetadataSearch {
    predicate: Predicate,
}

impl MetadataSearch {
    /// Build the search from `predicate`.
    ///
    /// Pairs with an empty key or empty value are ignored. Fails with
    /// [`Error::Validation`] when no usable pair remains.
    pub fn new(predicate: Predicate) -> Result<Self> {
        let predicate: Predicate = predicate
            .iter()
            .filter(|(k, v)| !k.is_empty() && !v.is_empty())
            .collect();
        if predicate.is_empty() {
            return Err(Error::Validation(
                "metadata search needs at least one non-empty key/value pair".to_string(),
            ));
        }
        Ok(Self { predicate })
    }

    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }
}

impl Query for MetadataSearch {
    fn execute(&self, store: &dyn Store) -> Scores {
        let mut scores = Scores::new();
        for doc in store.search_by_metadata(&self.predicate) {
            *scores.entry(doc).or_insert(0) += 1;
        }
        tracing::debug!(matches = scores.len(), "metadata query executed");
        scores
    }

    fn describe(&self) -> Vec<DescriptionRow> {
        self.predicate
            .iter()
            .map(|(k, v)| [k.to_string(), v.to_string()])
            .collect()
    }
}
