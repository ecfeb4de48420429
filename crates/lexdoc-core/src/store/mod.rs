//! Storage abstraction for lexdoc.
//!
//! The [`Store`] trait defines the lookups that queries and the similarity
//! service need, so they run against any backend. [`memory::InMemoryStore`]
//! is the only implementation.
//!
//! Stores hand out [`Arc<Document>`] so result sets and score maps can hold
//! documents without copying them.

pub mod memory;

use std::collections::HashSet;
use std::sync::Arc;

use crate::document::Document;
use crate::error::Result;
use crate::predicate::Predicate;

/// An unordered set of matching documents.
pub type DocumentSet = HashSet<Arc<Document>>;

/// Abstract document store.
///
/// Mutation takes `&mut self` and there is no internal locking: to share a
/// store across threads, wrap it (for example in a `Mutex`).
///
/// # Operations
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`add`](Store::add) | Validate and insert (or overwrite) a document |
/// | [`get`](Store::get) | Look up a document by id |
/// | [`count`](Store::count) | Number of distinct ids stored |
/// | [`ids`](Store::ids) | Stored ids, sorted |
/// | [`search_by_term`](Store::search_by_term) | Documents containing an exact term |
/// | [`search_by_metadata`](Store::search_by_metadata) | Documents matching every predicate pair |
pub trait Store {
    /// Insert `doc`, replacing any document with the same id.
    ///
    /// Fails with [`Error::Validation`](crate::Error::Validation) when the
    /// id is empty or the document has no terms; the store is unchanged.
    fn add(&mut self, doc: Document) -> Result<()>;

    /// Fails with [`Error::Validation`](crate::Error::Validation) on an empty id.
    fn get(&self, id: &str) -> Result<Option<Arc<Document>>>;

    fn count(&self) -> usize;

    fn ids(&self) -> Vec<String>;

    fn search_by_term(&self, term: &str) -> DocumentSet;

    fn search_by_metadata(&self, predicate: &Predicate) -> DocumentSet;
}
