use std::fmt;

use serde::Serialize;

/// The type of field a value token is parsed against.
///
/// The parser never infers a field's type from the value text; the caller
/// resolves the field against its own schema and picks the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Date/time fields: equality, comparison, and ranges
    Datetime,
    /// Numeric fields: equality and comparison over integers/floats
    Scalar,
    /// String/tag fields: equality and or-lists
    Value,
}

impl FieldKind {
    /// Get the canonical name of this field kind
    pub fn canonical_name(&self) -> &'static str {
        match self {
            FieldKind::Datetime => "datetime",
            FieldKind::Scalar => "scalar",
            FieldKind::Value => "value",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Comparison markers accepted by the datetime and scalar parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComparisonOp {
    /// `>` greater than
    #[serde(rename = ">")]
    Gt,
    /// `>=` greater or equal
    #[serde(rename = ">=")]
    Gte,
    /// `<` less than
    #[serde(rename = "<")]
    Lt,
    /// `<=` less or equal
    #[serde(rename = "<=")]
    Lte,
}

impl ComparisonOp {
    /// The marker as it appears in query syntax.
    pub fn symbol(&self) -> &'static str {
        match self {
            ComparisonOp::Gt => ">",
            ComparisonOp::Gte => ">=",
            ComparisonOp::Lt => "<",
            ComparisonOp::Lte => "<=",
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A single typed operand inside an operation spec.
///
/// Datetime and value operands stay opaque strings; only the scalar parser
/// produces numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Operand {
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::Str(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::Str(value)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Operand::Int(value)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(value) => write!(f, "{value}"),
            Operand::Float(value) => write!(f, "{value}"),
            Operand::Str(value) => f.write_str(value),
        }
    }
}

/// The operator and operand shape of a parsed value token.
///
/// The operand shape is fixed per operator: single operand for equality and
/// comparisons, an ordered pair for ranges, an ordered list for or-lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum QueryOp {
    /// `=` equality against a single operand
    Eq(Operand),
    /// `>`, `>=`, `<`, `<=` against a single operand
    Cmp(ComparisonOp, Operand),
    /// `..` inclusive range between two bounds
    Range(Operand, Operand),
    /// `|` membership in an ordered list of alternatives
    In(Vec<Operand>),
}

impl QueryOp {
    /// The operator symbol as it appears in query syntax (`=` for equality).
    pub fn symbol(&self) -> &'static str {
        match self {
            QueryOp::Eq(_) => "=",
            QueryOp::Cmp(op, _) => op.symbol(),
            QueryOp::Range(..) => "..",
            QueryOp::In(_) => "|",
        }
    }
}

impl fmt::Display for QueryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOp::Eq(operand) => write!(f, "{operand}"),
            QueryOp::Cmp(op, operand) => write!(f, "{op}{operand}"),
            QueryOp::Range(lo, hi) => write!(f, "{lo}..{hi}"),
            QueryOp::In(operands) => {
                let parts: Vec<String> = operands.iter().map(ToString::to_string).collect();
                f.write_str(&parts.join("|"))
            }
        }
    }
}

/// A fully parsed value token: an operation plus the negation flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOpSpec {
    /// Whether the value carried a leading `~` marker
    pub negated: bool,
    /// The operation to apply
    pub op: QueryOp,
}

impl QueryOpSpec {
    pub fn eq(negated: bool, operand: impl Into<Operand>) -> Self {
        QueryOpSpec {
            negated,
            op: QueryOp::Eq(operand.into()),
        }
    }

    pub fn cmp(negated: bool, op: ComparisonOp, operand: impl Into<Operand>) -> Self {
        QueryOpSpec {
            negated,
            op: QueryOp::Cmp(op, operand.into()),
        }
    }

    pub fn range(negated: bool, lo: impl Into<Operand>, hi: impl Into<Operand>) -> Self {
        QueryOpSpec {
            negated,
            op: QueryOp::Range(lo.into(), hi.into()),
        }
    }

    pub fn in_list<I, T>(negated: bool, operands: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Operand>,
    {
        QueryOpSpec {
            negated,
            op: QueryOp::In(operands.into_iter().map(Into::into).collect()),
        }
    }
}

impl fmt::Display for QueryOpSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("~")?;
        }
        write!(f, "{}", self.op)
    }
}
