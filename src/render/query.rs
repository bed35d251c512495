/// JMESPath filtering of decoded JSON trees.
use serde_json::Value;

use super::RenderError;

/// Evaluate `expression` against `tree` and return the projected value.
///
/// The source tree is left untouched; the result may be any JSON value,
/// including `null` when the path selects nothing.
///
/// # Errors
///
/// Returns `RenderError::Query` if the expression does not compile or fails
/// at runtime (e.g. a function applied to the wrong type).
pub fn apply(expression: &str, tree: &Value) -> Result<Value, RenderError> {
    let query_err = |err: jmespath::JmespathError| RenderError::Query {
        expression: expression.to_owned(),
        message: err.to_string(),
    };

    let compiled = jmespath::compile(expression).map_err(query_err)?;
    let result = compiled.search(tree).map_err(query_err)?;

    Ok(serde_json::to_value(&*result)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn accounts() -> Value {
        json!([
            {"id": 1, "email": "a@x.com"},
            {"id": 2, "email": "b@y.com"}
        ])
    }

    #[test]
    fn test_projection() {
        assert_eq!(apply("[].id", &accounts()).unwrap(), json!([1, 2]));
    }

    #[test]
    fn test_index_and_field() {
        let tree = json!({"data": [{"email": "a@x.com"}]});
        assert_eq!(apply("data[0].email", &tree).unwrap(), json!("a@x.com"));
    }

    #[test]
    fn test_filter_expression() {
        assert_eq!(
            apply("[?id > `1`].email", &accounts()).unwrap(),
            json!(["b@y.com"])
        );
    }

    #[test]
    fn test_missing_path_is_null() {
        assert_eq!(apply("nope", &accounts()).unwrap(), Value::Null);
    }

    #[test]
    fn test_field_on_scalar_is_null() {
        assert_eq!(apply("foo.bar", &json!(42)).unwrap(), Value::Null);
    }

    #[test]
    fn test_source_tree_unchanged() {
        let tree = accounts();
        let before = tree.clone();
        let _ = apply("[0]", &tree).unwrap();
        assert_eq!(tree, before);
    }

    #[test]
    fn test_syntax_error() {
        let err = apply("[].id[", &accounts()).unwrap_err();
        match err {
            RenderError::Query { expression, .. } => assert_eq!(expression, "[].id["),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_runtime_type_error() {
        let err = apply("length(`1`)", &accounts()).unwrap_err();
        assert!(matches!(err, RenderError::Query { .. }));
    }
}
