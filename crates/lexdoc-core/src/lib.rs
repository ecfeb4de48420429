//! # lexdoc core
//!
//! In-memory document indexing and comparison: data model, normalization,
//! store abstraction, metadata queries, and Jaccard similarity.
//!
//! This crate performs no I/O. The application crate layers configuration,
//! logging, file loading, and the CLI on top of it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`normalize`] | Text normalization algorithms |
//! | [`validate`] | Id and term-list validation |
//! | [`clock`] | Injectable time source for metadata |
//! | [`document`] | `Document`, `DocumentKind`, metadata keys |
//! | [`predicate`] | Metadata predicates |
//! | [`store`] | `Store` trait and `InMemoryStore` |
//! | [`query`] | `Query` trait and `MetadataSearch` |
//! | [`similarity`] | Jaccard similarity service |

pub mod clock;
pub mod document;
pub mod error;
pub mod normalize;
pub mod predicate;
pub mod query;
pub mod similarity;
pub mod store;
pub mod validate;

pub use error::{Error, ErrorKind, Result};
