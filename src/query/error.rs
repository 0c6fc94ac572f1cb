use thiserror::Error;

use super::ops::FieldKind;

/// Errors that can occur when parsing filter queries
///
/// Every variant carries the offending substring so the message can be shown
/// to the user as-is. A malformed query is a permanent condition: callers
/// should reject the request or re-prompt rather than retry.
#[derive(Debug, Error)]
pub enum QueryParserError {
    #[error("query contains no usable clause: '{0}'")]
    EmptyQuery(String),

    #[error("expected a single 'field:value' expression, got: '{0}'")]
    InvalidExpression(String),

    #[error("empty field name in expression: '{0}'")]
    EmptyField(String),

    #[error("empty value in expression: '{0}'")]
    EmptyValue(String),

    #[error("invalid field path '{0}': expected 'name' or 'name__subfield'")]
    InvalidFieldPath(String),

    #[error("invalid range '{0}': expected exactly two non-empty bounds around '..'")]
    InvalidRange(String),

    #[error("operator '{operator}' is not allowed for {kind} fields: '{value}'")]
    DisallowedOperator {
        operator: &'static str,
        kind: FieldKind,
        value: String,
    },

    #[error("expected a numeric value, got: '{0}'")]
    NonNumericValue(String),
}
