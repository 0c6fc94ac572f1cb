use std::sync::LazyLock;

use regex::Regex;

use super::error::QueryParserError;
use super::ops::{ComparisonOp, FieldKind, Operand, QueryOpSpec};

static COMPARISON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(<=|>=|<|>)").expect("valid comparison regex"));

/// Separator between a field name and its sub-field path.
const FIELD_PATH_SEPARATOR: &str = "__";
/// Separator between the two bounds of a range value.
const RANGE_SEPARATOR: &str = "..";
/// Separator between the alternatives of an or-list value.
const OR_SEPARATOR: char = '|';
/// Leading marker that negates an operation.
const NEGATION_MARKER: char = '~';

/// Split a raw query into its comma-separated clauses.
///
/// Clauses are trimmed and empty ones dropped; a query that yields no usable
/// clause at all is rejected.
pub fn split_query(query: &str) -> Result<Vec<&str>, QueryParserError> {
    let clauses: Vec<&str> = query
        .split(',')
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .collect();

    if clauses.is_empty() {
        return Err(QueryParserError::EmptyQuery(query.to_string()));
    }
    Ok(clauses)
}

/// Split a single clause into its field token and value token.
///
/// The clause must contain exactly one `:`; both sides must be non-empty
/// after trimming. The value token is left uninterpreted.
pub fn parse_expression(clause: &str) -> Result<(&str, &str), QueryParserError> {
    let parts: Vec<&str> = clause.split(':').collect();
    let &[field, value] = parts.as_slice() else {
        return Err(QueryParserError::InvalidExpression(clause.to_string()));
    };

    let field = field.trim();
    let value = value.trim();
    if field.is_empty() {
        return Err(QueryParserError::EmptyField(clause.to_string()));
    }
    if value.is_empty() {
        return Err(QueryParserError::EmptyValue(clause.to_string()));
    }
    Ok((field, value))
}

/// Resolve a field token into a name and an optional sub-field.
///
/// `__` is the only path separator; a single underscore is part of a bare
/// name. At most one `__` may appear and neither side may be empty.
pub fn parse_field(field: &str) -> Result<(&str, Option<&str>), QueryParserError> {
    let field = field.trim();
    if field.is_empty() {
        return Err(QueryParserError::EmptyField(field.to_string()));
    }

    let parts: Vec<&str> = field.split(FIELD_PATH_SEPARATOR).collect();
    match parts.as_slice() {
        &[name] => Ok((name, None)),
        &[name, sub] if !name.is_empty() && !sub.is_empty() => Ok((name, Some(sub))),
        _ => Err(QueryParserError::InvalidFieldPath(field.to_string())),
    }
}

/// Strip an optional leading `~` marker from a value token.
///
/// Total over any input: an empty remainder is passed through and rejected
/// by the operation parser that receives it.
pub fn parse_negation_operation(value: &str) -> (bool, &str) {
    let value = value.trim();
    match value.strip_prefix(NEGATION_MARKER) {
        Some(rest) => (true, rest.trim()),
        None => (false, value),
    }
}

/// Parse a datetime value token: range, comparison, or equality.
///
/// Bounds stay opaque strings; this parser never interprets dates. Or-lists
/// are not allowed for datetime fields.
pub fn parse_datetime_operation(value: &str) -> Result<QueryOpSpec, QueryParserError> {
    let (negated, value) = parse_negation_operation(value);
    if value.is_empty() {
        return Err(QueryParserError::EmptyValue(value.to_string()));
    }
    if value.contains(OR_SEPARATOR) {
        return Err(QueryParserError::DisallowedOperator {
            operator: "|",
            kind: FieldKind::Datetime,
            value: value.to_string(),
        });
    }

    if value.contains(RANGE_SEPARATOR) {
        let bounds: Vec<&str> = value.split(RANGE_SEPARATOR).map(str::trim).collect();
        let &[lo, hi] = bounds.as_slice() else {
            return Err(QueryParserError::InvalidRange(value.to_string()));
        };
        if lo.is_empty() || hi.is_empty() {
            return Err(QueryParserError::InvalidRange(value.to_string()));
        }
        return Ok(QueryOpSpec::range(negated, lo, hi));
    }

    if let Some((op, rest)) = split_comparison(value) {
        let rest = rest.trim();
        if rest.is_empty() {
            return Err(QueryParserError::EmptyValue(value.to_string()));
        }
        return Ok(QueryOpSpec::cmp(negated, op, rest));
    }

    Ok(QueryOpSpec::eq(negated, value))
}

/// Parse a numeric value token: comparison or equality over a number.
///
/// Ranges and or-lists are not allowed for scalar fields, and the operand
/// must parse as an integer (no decimal point) or a float.
pub fn parse_scalar_operation(value: &str) -> Result<QueryOpSpec, QueryParserError> {
    let (negated, value) = parse_negation_operation(value);
    if value.is_empty() {
        return Err(QueryParserError::EmptyValue(value.to_string()));
    }
    if value.contains(OR_SEPARATOR) {
        return Err(QueryParserError::DisallowedOperator {
            operator: "|",
            kind: FieldKind::Scalar,
            value: value.to_string(),
        });
    }
    if value.contains(RANGE_SEPARATOR) {
        return Err(QueryParserError::DisallowedOperator {
            operator: "..",
            kind: FieldKind::Scalar,
            value: value.to_string(),
        });
    }

    if let Some((op, rest)) = split_comparison(value) {
        let rest = rest.trim();
        if rest.is_empty() {
            return Err(QueryParserError::EmptyValue(value.to_string()));
        }
        return Ok(QueryOpSpec::cmp(negated, op, parse_numeric(rest)?));
    }

    Ok(QueryOpSpec::eq(negated, parse_numeric(value)?))
}

/// Parse a string/tag value token: or-list or equality.
///
/// Comparison markers and ranges are not allowed for value fields.
pub fn parse_value_operation(value: &str) -> Result<QueryOpSpec, QueryParserError> {
    let (negated, value) = parse_negation_operation(value);
    if value.is_empty() {
        return Err(QueryParserError::EmptyValue(value.to_string()));
    }
    if value.contains(RANGE_SEPARATOR) {
        return Err(QueryParserError::DisallowedOperator {
            operator: "..",
            kind: FieldKind::Value,
            value: value.to_string(),
        });
    }
    if let Some((op, _)) = split_comparison(value) {
        return Err(QueryParserError::DisallowedOperator {
            operator: op.symbol(),
            kind: FieldKind::Value,
            value: value.to_string(),
        });
    }

    if value.contains(OR_SEPARATOR) {
        let parts: Vec<&str> = value.split(OR_SEPARATOR).map(str::trim).collect();
        if parts.iter().any(|part| part.is_empty()) {
            return Err(QueryParserError::EmptyValue(value.to_string()));
        }
        return Ok(QueryOpSpec::in_list(negated, parts));
    }

    Ok(QueryOpSpec::eq(negated, value))
}

/// Parse a value token with the operation parser matching the field kind.
pub fn parse_operation(kind: FieldKind, value: &str) -> Result<QueryOpSpec, QueryParserError> {
    match kind {
        FieldKind::Datetime => parse_datetime_operation(value),
        FieldKind::Scalar => parse_scalar_operation(value),
        FieldKind::Value => parse_value_operation(value),
    }
}

/// Split a leading comparison marker off a value token, longest marker first.
fn split_comparison(value: &str) -> Option<(ComparisonOp, &str)> {
    let marker = COMPARISON_RE.find(value)?;
    let op = match marker.as_str() {
        ">=" => ComparisonOp::Gte,
        "<=" => ComparisonOp::Lte,
        ">" => ComparisonOp::Gt,
        _ => ComparisonOp::Lt,
    };
    Some((op, &value[marker.end()..]))
}

fn parse_numeric(token: &str) -> Result<Operand, QueryParserError> {
    if token.contains('.') {
        token
            .parse::<f64>()
            .map(Operand::Float)
            .map_err(|_| QueryParserError::NonNumericValue(token.to_string()))
    } else {
        token
            .parse::<i64>()
            .map(Operand::Int)
            .map_err(|_| QueryParserError::NonNumericValue(token.to_string()))
    }
}
