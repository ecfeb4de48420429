//! Error taxonomy shared by every core operation.
//!
//! Every failure is a deterministic function of its inputs: there is no
//! I/O and nothing to retry. Callers branch on [`Error::kind`] (or match
//! the enum directly) to tell the three failure classes apart.

/// Errors raised by document construction, the store, queries, and
/// similarity.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Empty identifier, empty term list, or an unusable predicate.
    #[error("validation failed: {0}")]
    Validation(String),
    /// A referenced document id is not in the store.
    #[error("document not found: {0}")]
    NotFound(String),
    /// The input makes a ratio undefined (zero-length text, zero-union term sets).
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

/// Fieldless discriminant of [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    NotFound,
    DegenerateInput,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::DegenerateInput(_) => ErrorKind::DegenerateInput,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
