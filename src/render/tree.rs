/// The shared JSON/YAML pipeline: build tree → optional query → encode.
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::{RenderError, query};

/// Values whose data can be rendered as JSON or YAML.
pub trait TreeView {
    /// The value's data as a generic JSON tree.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Encoding` if the data cannot be serialized.
    fn tree(&self) -> Result<Value, RenderError>;
}

/// Serialize any data payload into a JSON tree.
///
/// # Errors
///
/// Returns `RenderError::Encoding` if serialization fails.
pub fn to_tree<T: Serialize + ?Sized>(data: &T) -> Result<Value, RenderError> {
    Ok(serde_json::to_value(data)?)
}

/// Build the tree and apply `query` if present.
///
/// # Errors
///
/// Propagates serialization and query errors.
pub fn filtered_tree(view: &dyn TreeView, query: Option<&str>) -> Result<Value, RenderError> {
    let tree = view.tree()?;
    match query {
        Some(expression) => {
            debug!(expression, "applying query");
            query::apply(expression, &tree)
        }
        None => Ok(tree),
    }
}

/// Encode as 2-space indented JSON with a trailing newline.
///
/// # Errors
///
/// Returns `RenderError::Encoding` on serialization failure.
pub fn encode_json(tree: &Value) -> Result<String, RenderError> {
    let mut out = serde_json::to_string_pretty(tree)?;
    out.push('\n');
    Ok(out)
}

/// Encode as a YAML document.
///
/// # Errors
///
/// Returns `RenderError::Encoding` on serialization failure.
pub fn encode_yaml(tree: &Value) -> Result<String, RenderError> {
    Ok(serde_yaml::to_string(tree)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_json_is_two_space_indented() {
        let out = encode_json(&json!({"b": 1, "a": [true]})).unwrap();
        assert_eq!(out, "{\n  \"a\": [\n    true\n  ],\n  \"b\": 1\n}\n");
    }

    #[test]
    fn test_yaml_scalar() {
        assert_eq!(encode_yaml(&json!("a@x.com")).unwrap(), "a@x.com\n");
        assert_eq!(encode_yaml(&Value::Null).unwrap(), "null\n");
    }

    #[test]
    fn test_yaml_sequence() {
        assert_eq!(encode_yaml(&json!([1, 2])).unwrap(), "- 1\n- 2\n");
    }

    #[test]
    fn test_json_and_yaml_decode_to_same_tree() {
        let tree = json!({"id": 1, "name": "example.com", "tags": [], "expires_at": null});
        let from_json: Value = serde_json::from_str(&encode_json(&tree).unwrap()).unwrap();
        let from_yaml: Value = serde_yaml::from_str(&encode_yaml(&tree).unwrap()).unwrap();
        assert_eq!(from_json, from_yaml);
    }
}
