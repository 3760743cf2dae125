//! Field filters over flattened records.
//!
//! A `SearchFilter` is an ordered map from term to expected value. A record
//! matches when every term is satisfied:
//! 1. Candidate leaves are those whose path starts with `term`, ignoring case
//! 2. The term is satisfied by the first candidate whose value equals
//!    `expected`, ignoring case
//! 3. The first unsatisfied term rejects the record without looking further
//!
//! So `director=frank miller` matches `Director.0 = "Frank Miller"`, and
//! `ratings=3.0/5.0` matches `Ratings.1.Value = "3.0/5.0"`.

use crate::flatten::FlatRecord;
use std::fmt;

/// Ordered `(term, expected)` pairs with unique terms, all of which must match.
///
/// Adding a term that is already present replaces its expected value and
/// keeps its original position, so `title=a` then `title=b` filters on `b`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    terms: Vec<(String, String)>,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a term (builder pattern). Terms are evaluated in insertion order.
    pub fn with_term(mut self, term: impl Into<String>, expected: impl Into<String>) -> Self {
        self.insert(term, expected);
        self
    }

    /// Set the expected value of a term, replacing any previous value
    pub fn insert(&mut self, term: impl Into<String>, expected: impl Into<String>) {
        let term = term.into();
        let expected = expected.into();
        match self.terms.iter_mut().find(|(existing, _)| *existing == term) {
            Some((_, value)) => *value = expected,
            None => self.terms.push((term, expected)),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn terms(&self) -> impl Iterator<Item = (&str, &str)> {
        self.terms
            .iter()
            .map(|(term, expected)| (term.as_str(), expected.as_str()))
    }

    /// Check a flattened record against every term
    pub fn matches(&self, record: &FlatRecord) -> bool {
        self.terms()
            .all(|(term, expected)| term_matches(record, term, expected))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SearchFilter {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filter = Self::new();
        for (term, expected) in iter {
            filter.insert(term, expected);
        }
        filter
    }
}

impl fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .terms()
            .map(|(term, expected)| format!("{}={}", term, expected))
            .collect();
        write!(f, "{}", rendered.join(" & "))
    }
}

/// Does any leaf under `term` carry `expected`?
fn term_matches(record: &FlatRecord, term: &str, expected: &str) -> bool {
    let term = term.to_lowercase();
    let expected = expected.to_lowercase();

    record
        .iter()
        .filter(|(path, _)| path.to_lowercase().starts_with(&term))
        .any(|(_, value)| value.to_lowercase() == expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flatten::flatten_value;
    use serde_json::json;

    fn record() -> FlatRecord {
        flatten_value(&json!({
            "title": "Sin City",
            "productionYear": 2005,
            "Director": ["Frank Miller", "Robert Rodriguez"],
            "Ratings": [
                {"Source": "Internet Movie Database", "Value": "8.0/10"},
                {"Source": "Joyn", "Value": "3.0/5.0"}
            ]
        }))
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        assert!(SearchFilter::new().matches(&record()));
        assert!(SearchFilter::new().matches(&FlatRecord::default()));
    }

    #[test]
    fn test_case_insensitive_path_and_value() {
        let filter = SearchFilter::new().with_term("director", "frank miller");
        assert!(filter.matches(&record()));

        let filter = SearchFilter::new().with_term("DIRECTOR", "ROBERT RODRIGUEZ");
        assert!(filter.matches(&record()));
    }

    #[test]
    fn test_prefix_term_reaches_nested_leaves() {
        let filter = SearchFilter::new().with_term("ratings", "3.0/5.0");
        assert!(filter.matches(&record()));

        let filter = SearchFilter::new().with_term("Ratings.0.Source", "joyn");
        assert!(!filter.matches(&record()));
    }

    #[test]
    fn test_values_must_match_exactly() {
        let filter = SearchFilter::new().with_term("title", "sin");
        assert!(!filter.matches(&record()));
    }

    #[test]
    fn test_numbers_match_as_text() {
        let filter = SearchFilter::new().with_term("productionyear", "2005");
        assert!(filter.matches(&record()));
    }

    #[test]
    fn test_all_terms_must_match() {
        let filter = SearchFilter::new()
            .with_term("director", "Frank Miller")
            .with_term("title", "Sin City");
        assert!(filter.matches(&record()));

        let filter = SearchFilter::new()
            .with_term("director", "Frank Miller")
            .with_term("title", "Heat");
        assert!(!filter.matches(&record()));
    }

    #[test]
    fn test_unknown_field_never_matches() {
        let filter = SearchFilter::new().with_term("budget", "2005");
        assert!(!filter.matches(&record()));
    }

    #[test]
    fn test_from_iterator_keeps_order() {
        let filter: SearchFilter = vec![("b", "2"), ("a", "1")].into_iter().collect();
        let terms: Vec<(&str, &str)> = filter.terms().collect();
        assert_eq!(terms, vec![("b", "2"), ("a", "1")]);
        assert_eq!(filter.to_string(), "b=2 & a=1");
    }

    #[test]
    fn test_repeated_term_keeps_last_value() {
        let filter = SearchFilter::new()
            .with_term("title", "Heat")
            .with_term("director", "Frank Miller")
            .with_term("title", "Sin City");
        assert_eq!(filter.len(), 2);
        assert!(filter.matches(&record()));

        let terms: Vec<(&str, &str)> = filter.terms().collect();
        assert_eq!(terms, vec![("title", "Sin City"), ("director", "Frank Miller")]);

        let filter: SearchFilter = vec![("title", "sin city"), ("title", "heat")]
            .into_iter()
            .collect();
        assert_eq!(filter.len(), 1);
        assert!(!filter.matches(&record()));
    }
}
