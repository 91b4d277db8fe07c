//! Java type mapping.

use super::MappedType;

/// Map an abstract type token to its Java rendering and default literal.
///
/// Pointer-marker tokens drop the marker (every Java object reference is
/// already nullable) and default to `null`.
pub fn map_type(token: &str) -> MappedType {
    let rendered = match token {
        "int" => "int".to_string(),
        "float" => "float".to_string(),
        "double" => "double".to_string(),
        "char*" | "const char*" | "string" => "String".to_string(),
        "bool" => "boolean".to_string(),
        other => {
            if other.contains('*') {
                other.strip_suffix('*').unwrap_or(other).to_string()
            } else {
                other.to_string()
            }
        }
    };
    let default_literal = match rendered.as_str() {
        "int" => "0",
        "float" => "0.0f",
        "double" => "0.0",
        "String" => "\"\"",
        "boolean" => "false",
        _ => "null",
    };
    MappedType::new(rendered, default_literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_types() {
        assert_eq!(map_type("int"), MappedType::new("int", "0"));
        // float and double keep distinct literal suffixes
        assert_eq!(map_type("float"), MappedType::new("float", "0.0f"));
        assert_eq!(map_type("double"), MappedType::new("double", "0.0"));
        assert_eq!(map_type("bool"), MappedType::new("boolean", "false"));
    }

    #[test]
    fn test_string_types() {
        assert_eq!(map_type("string"), MappedType::new("String", "\"\""));
        assert_eq!(map_type("const char*"), MappedType::new("String", "\"\""));
    }

    #[test]
    fn test_pointer_drops_marker() {
        assert_eq!(map_type("Point*"), MappedType::new("Point", "null"));
    }

    #[test]
    fn test_unknown_passes_through() {
        assert_eq!(map_type("Widget"), MappedType::new("Widget", "null"));
    }
}
