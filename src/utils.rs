use serde_json::{Map, Value};

/// `key` at the root, `prefix{delimiter}key` below it.
pub(crate) fn join_path(prefix: &str, key: &str, delimiter: &str) -> String {
    if prefix.is_empty() {
        key.to_owned()
    } else {
        format!("{prefix}{delimiter}{key}")
    }
}

/// `{"type": "object", "properties": {}, "required": []}`
pub(crate) fn object_node() -> Map<String, Value> {
    let mut node = Map::new();
    node.insert("type".to_owned(), Value::String("object".to_owned()));
    node.insert("properties".to_owned(), Value::Object(Map::new()));
    node.insert("required".to_owned(), Value::Array(Vec::new()));
    node
}

pub(crate) fn is_object_type(node: &Value) -> bool {
    node.get("type").and_then(Value::as_str) == Some("object")
}
