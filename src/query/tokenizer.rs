use serde::Serialize;

use super::error::QueryParserError;
use super::parser::{parse_expression, split_query};

/// Raw value tokens grouped by field token, produced by [`tokenize_query`].
///
/// Clause order is preserved both within a field and across fields, and
/// duplicate values are kept as typed. Field tokens are stored raw: a
/// malformed `__` path only surfaces when the consumer resolves it with
/// [`parse_field`](super::parse_field).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryTokens {
    entries: Vec<(String, Vec<String>)>,
}

impl QueryTokens {
    pub fn new() -> Self {
        Self::default()
    }

    fn append(&mut self, field: &str, value: &str) {
        if let Some((_, values)) = self.entries.iter_mut().find(|(name, _)| name == field) {
            values.push(value.to_string());
        } else {
            self.entries
                .push((field.to_string(), vec![value.to_string()]));
        }
    }

    /// The raw value tokens recorded for a field, in clause order.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, values)| values.as_slice())
    }

    /// Field tokens in first-occurrence order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate `(field, values)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Number of distinct field tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Tokenize a raw query into per-field value token lists.
///
/// Composes [`split_query`] and [`parse_expression`]; any clause failure
/// aborts the whole query with no partial result.
pub fn tokenize_query(query: &str) -> Result<QueryTokens, QueryParserError> {
    let mut tokens = QueryTokens::new();
    for clause in split_query(query)? {
        let (field, value) = parse_expression(clause)?;
        tokens.append(field, value);
    }
    Ok(tokens)
}
