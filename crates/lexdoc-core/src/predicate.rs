//! Metadata predicates: required key/value equalities.

use crate::document::Metadata;

/// Insertion-ordered set of required metadata equalities.
///
/// Inserting a key that is already present replaces its value in place,
/// so iteration order stays the order in which keys were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Predicate {
    entries: Vec<(String, String)>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace a required pair, returning the replaced value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when `metadata` holds every pair with an equal value.
    pub fn matches(&self, metadata: &Metadata) -> bool {
        self.entries
            .iter()
            .all(|(k, v)| metadata.get(k).is_some_and(|actual| actual == v))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Predicate {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut predicate = Predicate::new();
        for (k, v) in iter {
            predicate.insert(k, v);
        }
        predicate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(pairs: &[(&str, &str)]) -> Metadata {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut p = Predicate::new().with("TYPE", "txt").with("LINES", "3");
        assert_eq!(p.insert("TYPE", "java"), Some("txt".to_string()));
        let rows: Vec<_> = p.iter().collect();
        assert_eq!(rows, vec![("TYPE", "java"), ("LINES", "3")]);
    }

    #[test]
    fn test_matches_requires_every_pair() {
        let p: Predicate = [("TYPE", "java"), ("AUTHOR", "TRUE")].into_iter().collect();
        assert!(p.matches(&meta(&[("TYPE", "java"), ("AUTHOR", "TRUE"), ("LINES", "9")])));
        assert!(!p.matches(&meta(&[("TYPE", "java"), ("AUTHOR", "FALSE")])));
        assert!(!p.matches(&meta(&[("TYPE", "java")])));
    }

    #[test]
    fn test_empty_predicate_matches_everything() {
        assert!(Predicate::new().matches(&meta(&[("TYPE", "txt")])));
    }
}
