//! Input validation for document ids and term lists.

use crate::error::{Error, Result};

/// Reject an empty document id.
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::Validation("document id must not be empty".to_string()));
    }
    Ok(())
}

/// Reject a document that has an empty id or no terms.
pub fn validate_document<T: AsRef<str>>(id: &str, terms: &[T]) -> Result<()> {
    validate_id(id)?;
    if terms.is_empty() {
        return Err(Error::Validation(format!("document '{}' has no terms", id)));
    }
    Ok(())
}
