//! Scalar type translation from specification type names to Go type names.

/// Go type used for `integer` values.
pub const GO_INT: &str = "int64";
/// Go type used for `boolean` values.
pub const GO_BOOL: &str = "bool";
/// Go type used for `string` values, untyped values and request bodies.
pub const GO_STRING: &str = "string";
/// Go type used for `array` values.
pub const GO_STRING_SLICE: &str = "[]string";
/// Go type used for `object` values.
pub const GO_MAP: &str = "map[string]interface{}";

/// Translate a specification scalar type into the Go type emitted for it.
///
/// Total: unknown names pass through unchanged.
pub fn translate(spec_type: &str) -> String {
    match spec_type {
        "" | "body" => GO_STRING,
        "integer" => GO_INT,
        "boolean" => GO_BOOL,
        "array" => GO_STRING_SLICE,
        "object" => GO_MAP,
        other => other,
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translation_table() {
        assert_eq!(translate(""), "string");
        assert_eq!(translate("integer"), "int64");
        assert_eq!(translate("boolean"), "bool");
        assert_eq!(translate("array"), "[]string");
        assert_eq!(translate("object"), "map[string]interface{}");
        assert_eq!(translate("body"), "string");
    }

    #[test]
    fn test_unknown_types_pass_through() {
        assert_eq!(translate("unknown_x"), "unknown_x");
        assert_eq!(translate("string"), "string");
        assert_eq!(translate("number"), "number");
    }
}
