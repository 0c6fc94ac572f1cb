//! Filter query parsing
//!
//! This module turns a human-typed filter string into structured, typed
//! operation specs. It knows nothing about the schema of the objects being
//! filtered: field tokens stay opaque strings and the caller picks the
//! operation parser matching the field's known type.
//!
//! # Syntax
//!
//! ```text
//! field:value, other:value          Clauses separated by commas
//! metric__loss:>=0.1                Sub-field access with '__', comparison markers
//! name:~tag1 | tag2                 '~' negates, '|' builds an or-list
//! created_at:2018-01-01..2018-02-01 '..' builds a range
//! ```
//!
//! # Pipeline
//!
//! [`tokenize_query`] splits the raw string into clauses and groups the raw
//! value tokens per field token. A consumer then resolves each field token
//! with [`parse_field`] and parses each value with the operation parser
//! matching the field's [`FieldKind`]. All functions are pure, synchronous,
//! and independently callable.
//!
//! # Examples
//!
//! ```
//! use filterql::query::{FieldKind, parse_operation, tokenize_query};
//!
//! let tokens = tokenize_query("metric__loss:>=0.1").unwrap();
//! let values = tokens.get("metric__loss").unwrap();
//! let spec = parse_operation(FieldKind::Scalar, &values[0]).unwrap();
//! assert!(!spec.negated);
//! assert_eq!(spec.op.symbol(), ">=");
//! ```

pub mod error;
pub mod ops;
pub mod parser;
pub mod tokenizer;

pub use error::QueryParserError;
pub use ops::{ComparisonOp, FieldKind, Operand, QueryOp, QueryOpSpec};
pub use parser::{
    parse_datetime_operation, parse_expression, parse_field, parse_negation_operation,
    parse_operation, parse_scalar_operation, parse_value_operation, split_query,
};
pub use tokenizer::{QueryTokens, tokenize_query};
