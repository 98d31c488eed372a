//! Generic document tree and the loader that produces it.
//!
//! The input document is deserialized once into a [`Node`] tree. The walker
//! only ever reads it through the optional-returning accessors below, so a
//! document of an unexpected shape degrades to "field not found" instead of
//! a failed cast.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::LoadError;

/// One value of a dynamically shaped document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Key/value pairs in document order.
    Mapping(Vec<(String, Node)>),
    /// Ordered list of values.
    Sequence(Vec<Node>),
    /// A string scalar.
    String(String),
    /// A boolean scalar.
    Bool(bool),
    /// A numeric scalar.
    Number(f64),
    /// `null`, or a value with no representation in this tree.
    Absent,
}

impl Node {
    /// Look up `key` in a mapping. Returns `None` for non-mappings.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_mapping()?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Entries of a mapping, in document order.
    pub fn as_mapping(&self) -> Option<&[(String, Node)]> {
        match self {
            Node::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Items of a sequence.
    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// String scalar value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    /// Boolean scalar value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric scalar value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// True for `null` and unrepresentable values.
    pub fn is_absent(&self) -> bool {
        matches!(self, Node::Absent)
    }

    /// Shorthand for `get(key)` followed by `as_str()`.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Node::as_str)
    }

    /// Shorthand for `get(key)` followed by `as_bool()`.
    pub fn bool_field(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Node::as_bool)
    }
}

impl From<serde_yaml::Value> for Node {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => Node::Absent,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => n.as_f64().map_or(Node::Absent, Node::Number),
            Value::String(s) => Node::String(s),
            Value::Sequence(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Mapping(map) => Node::Mapping(
                map.into_iter()
                    .filter_map(|(k, v)| yaml_key(k).map(|k| (k, Node::from(v))))
                    .collect(),
            ),
            Value::Tagged(tagged) => Node::from(tagged.value),
        }
    }
}

/// Mapping keys in YAML may be any scalar; response codes (`200:`) parse as numbers.
fn yaml_key(key: serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value;

    match key {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => yaml_key(tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

impl From<serde_json::Value> for Node {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Node::Absent,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => n.as_f64().map_or(Node::Absent, Node::Number),
            Value::String(s) => Node::String(s),
            Value::Array(items) => Node::Sequence(items.into_iter().map(Node::from).collect()),
            Value::Object(map) => {
                Node::Mapping(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
        }
    }
}

/// Parse YAML text into a node tree.
pub fn from_yaml_str(text: &str) -> Result<Node, serde_yaml::Error> {
    serde_yaml::from_str::<serde_yaml::Value>(text).map(Node::from)
}

/// Parse JSON text into a node tree.
pub fn from_json_str(text: &str) -> Result<Node, serde_json::Error> {
    serde_json::from_str::<serde_json::Value>(text).map(Node::from)
}

/// Read and deserialize the document at `path`.
///
/// Files with a `.json` extension are parsed as JSON, everything else as YAML.
/// No partial tree is returned on failure.
pub fn load(path: &Path) -> Result<Node, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let node = if is_json(path) {
        serde_json::from_slice::<serde_json::Value>(&bytes)
            .map(Node::from)
            .map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                source,
            })?
    } else {
        serde_yaml::from_slice::<serde_yaml::Value>(&bytes)
            .map(Node::from)
            .map_err(|source| LoadError::Yaml {
                path: path.to_path_buf(),
                source,
            })?
    };

    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        "Loaded document."
    );
    Ok(node)
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_yaml_keys_keep_document_order() {
        let node = from_yaml_str("b: 1\na: 2\nc: 3\n").unwrap();
        let keys: Vec<_> = node
            .as_mapping()
            .unwrap()
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn test_json_keys_keep_document_order() {
        let node = from_json_str(r#"{"b": 1, "a": {"z": true, "y": false}, "c": 3}"#).unwrap();
        let keys: Vec<_> = node
            .as_mapping()
            .unwrap()
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, ["b", "a", "c"]);

        let inner: Vec<_> = node
            .get("a")
            .and_then(Node::as_mapping)
            .unwrap()
            .iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(inner, ["z", "y"]);
    }

    #[test]
    fn test_numeric_yaml_keys_become_strings() {
        let node = from_yaml_str("responses:\n  200:\n    description: OK\n").unwrap();
        let responses = node.get("responses").unwrap();
        assert_eq!(
            responses.get("200").and_then(|r| r.str_field("description")),
            Some("OK")
        );
    }

    #[test]
    fn test_null_is_absent() {
        let node = from_yaml_str("summary: ~\n").unwrap();
        assert!(node.get("summary").unwrap().is_absent());
        assert_eq!(node.str_field("summary"), None);
    }

    #[test]
    fn test_accessors_reject_wrong_shapes() {
        let node = from_json_str(r#"{"name": 7, "required": "yes", "list": [1, 2]}"#).unwrap();
        assert_eq!(node.str_field("name"), None);
        assert_eq!(node.get("name").and_then(Node::as_f64), Some(7.0));
        assert_eq!(node.bool_field("required"), None);
        assert_eq!(node.get("list").and_then(Node::as_sequence).map(<[_]>::len), Some(2));
        assert!(node.get("list").unwrap().get("anything").is_none());
        assert!(Node::String("x".into()).as_mapping().is_none());
    }

    #[test]
    fn test_load_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "paths:\n  /a/b/c:\n    get:\n      operationId: A").unwrap();

        let node = load(file.path()).unwrap();
        assert!(node.get("paths").is_some());
    }

    #[test]
    fn test_load_json_file_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"paths": {{}}, "definitions": {{}}}}"#).unwrap();

        let node = load(file.path()).unwrap();
        assert!(node.get("definitions").is_some());
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains("nope.yml"));
    }

    #[test]
    fn test_load_malformed_yaml_is_parse_error() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "paths: [unclosed").unwrap();

        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Yaml { .. }));
    }
}
