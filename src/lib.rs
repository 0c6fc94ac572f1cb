//! A small filter-query language.
//!
//! Parses human-typed filter strings such as
//! `name:~tag1 | tag2, metric__loss:>=0.1` into structured, typed operation
//! specs that a downstream query builder can turn into storage predicates.
//! See the [`query`] module for the syntax and the parsing pipeline.

pub mod query;

pub use query::{
    ComparisonOp, FieldKind, Operand, QueryOp, QueryOpSpec, QueryParserError, QueryTokens,
    parse_datetime_operation, parse_expression, parse_field, parse_negation_operation,
    parse_operation, parse_scalar_operation, parse_value_operation, split_query, tokenize_query,
};
