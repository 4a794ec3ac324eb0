//! Runtime shape of structured values
//!
//! A value is a mapping, a sequence, or a scalar. The shape is resolved once
//! per value and carries the children in document order.

/// The three shapes a structured value can take
#[derive(Debug)]
pub enum Shape<'a, T: ?Sized> {
    /// Entries keyed by their stringified key
    Mapping(Vec<(String, &'a T)>),
    /// Elements by position
    Sequence(Vec<&'a T>),
    /// No children: null, text, numbers, booleans and anything else
    Scalar,
}

/// Values that expose their shape
pub trait Shaped {
    fn shape(&self) -> Shape<'_, Self>;
}

impl Shaped for serde_json::Value {
    fn shape(&self) -> Shape<'_, Self> {
        use serde_json::Value;
        match self {
            Value::Object(map) => Shape::Mapping(map.iter().map(|(k, v)| (k.clone(), v)).collect()),
            Value::Array(items) => Shape::Sequence(items.iter().collect()),
            _ => Shape::Scalar,
        }
    }
}

impl Shaped for serde_yaml::Value {
    fn shape(&self) -> Shape<'_, Self> {
        use serde_yaml::Value;
        match self {
            Value::Mapping(map) => {
                Shape::Mapping(map.iter().map(|(k, v)| (yaml_key(k), v)).collect())
            }
            Value::Sequence(items) => Shape::Sequence(items.iter().collect()),
            Value::Tagged(tagged) => tagged.value.shape(),
            _ => Shape::Scalar,
        }
    }
}

impl Shaped for toml::Value {
    fn shape(&self) -> Shape<'_, Self> {
        use toml::Value;
        match self {
            Value::Table(table) => {
                Shape::Mapping(table.iter().map(|(k, v)| (k.clone(), v)).collect())
            }
            Value::Array(items) => Shape::Sequence(items.iter().collect()),
            _ => Shape::Scalar,
        }
    }
}

/// YAML allows any value as a key; render it as text.
fn yaml_key(key: &serde_yaml::Value) -> String {
    use serde_yaml::Value;
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn keys<T: Shaped>(value: &T) -> Vec<String> {
        match value.shape() {
            Shape::Mapping(entries) => entries.into_iter().map(|(k, _)| k).collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn test_json_shapes() {
        assert!(matches!(json!({}).shape(), Shape::Mapping(e) if e.is_empty()));
        assert!(matches!(json!([1, 2]).shape(), Shape::Sequence(e) if e.len() == 2));
        assert!(matches!(json!(null).shape(), Shape::Scalar));
        assert!(matches!(json!("abc").shape(), Shape::Scalar));
    }

    #[test]
    fn test_json_preserves_document_order() {
        let value: serde_json::Value =
            serde_json::from_str(r#"{"name": "Alice", "age": 37, "deceased": false}"#).unwrap();
        assert_eq!(keys(&value), vec!["name", "age", "deceased"]);
    }

    #[test]
    fn test_yaml_non_string_keys() {
        let value: serde_yaml::Value = serde_yaml::from_str("1: one\ntrue: yes\n~: nothing\n").unwrap();
        assert_eq!(keys(&value), vec!["1", "true", "null"]);
    }

    #[test]
    fn test_toml_table_and_array() {
        let value: toml::Value = toml::from_str("b = [1, 2]\na = \"x\"\n").unwrap();
        assert_eq!(keys(&value), vec!["b", "a"]);
        let toml::Value::Table(table) = &value else {
            panic!("expected a table");
        };
        assert!(matches!(table["b"].shape(), Shape::Sequence(e) if e.len() == 2));
        assert!(matches!(table["a"].shape(), Shape::Scalar));
    }
}
