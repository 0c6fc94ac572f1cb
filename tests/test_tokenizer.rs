use filterql::query::{
    ComparisonOp, FieldKind, QueryOpSpec, parse_field, parse_operation, parse_value_operation,
    tokenize_query,
};
use serde_json::json;

#[test]
fn test_tokenize_query_rejects_empty_queries() {
    assert!(tokenize_query("").is_err());
    assert!(tokenize_query(",").is_err());
    assert!(tokenize_query(", , ").is_err());
}

#[test]
fn test_tokenize_query_single_field() {
    let tokens = tokenize_query("name:~tag1 | tag2| tag23").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens.get("name").unwrap(), ["~tag1 | tag2| tag23"]);
}

#[test]
fn test_tokenize_query_preserves_order_and_duplicates() {
    let tokens =
        tokenize_query("name1:~tag1 | tag2| tag23, name1:foo, name2:sdf..dsf").unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens.get("name1").unwrap(), ["~tag1 | tag2| tag23", "foo"]);
    assert_eq!(tokens.get("name2").unwrap(), ["sdf..dsf"]);
    assert_eq!(tokens.fields().collect::<Vec<_>>(), ["name1", "name2"]);

    let tokens = tokenize_query("f:a, f:a").unwrap();
    assert_eq!(tokens.get("f").unwrap(), ["a", "a"]);
}

#[test]
fn test_tokenize_query_returns_nothing_on_failure() {
    assert!(tokenize_query("name:foo, broken").is_err());
    assert!(tokenize_query("name:foo, f:b:c").is_err());
}

#[test]
fn test_full_consumer_pipeline() {
    let tokens = tokenize_query(
        "metric__loss:>=0.1, name:~tag1 | tag2, created_at:2018-01-01..2018-02-01",
    )
    .unwrap();

    // The consumer resolves each field and dispatches on its known kind.
    assert_eq!(parse_field("metric__loss").unwrap(), ("metric", Some("loss")));
    let spec = parse_operation(FieldKind::Scalar, &tokens.get("metric__loss").unwrap()[0]).unwrap();
    assert_eq!(spec, QueryOpSpec::cmp(false, ComparisonOp::Gte, 0.1));

    assert_eq!(parse_field("name").unwrap(), ("name", None));
    let spec = parse_operation(FieldKind::Value, &tokens.get("name").unwrap()[0]).unwrap();
    assert_eq!(spec, QueryOpSpec::in_list(true, ["tag1", "tag2"]));

    let spec = parse_operation(FieldKind::Datetime, &tokens.get("created_at").unwrap()[0]).unwrap();
    assert_eq!(spec, QueryOpSpec::range(false, "2018-01-01", "2018-02-01"));
}

#[test]
fn test_specs_serialize_to_json() {
    let spec = parse_value_operation("~tag1 | tag2").unwrap();
    assert_eq!(
        serde_json::to_value(&spec).unwrap(),
        json!({"negated": true, "op": {"In": ["tag1", "tag2"]}})
    );

    let spec = parse_operation(FieldKind::Scalar, ">=1").unwrap();
    assert_eq!(
        serde_json::to_value(&spec).unwrap(),
        json!({"negated": false, "op": {"Cmp": [">=", 1]}})
    );
}

#[test]
fn test_tokens_serialize_in_clause_order() {
    let tokens = tokenize_query("b:1, a:2, b:3").unwrap();
    assert_eq!(
        serde_json::to_value(&tokens).unwrap(),
        json!({"entries": [["b", ["1", "3"]], ["a", ["2"]]]})
    );
}
