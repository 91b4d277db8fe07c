//! Go type mapping.

use super::MappedType;

/// Map an abstract type token to its Go rendering and default literal.
///
/// Pointer-marker tokens become Go pointers (`Foo*` -> `*Foo`); unmapped
/// tokens pass through unchanged and default to `nil`.
pub fn map_type(token: &str) -> MappedType {
    let rendered = match token {
        "int" => "int".to_string(),
        "float" | "double" => "float64".to_string(),
        "char*" | "const char*" | "string" => "string".to_string(),
        "bool" => "bool".to_string(),
        other => {
            if other.contains('*') {
                format!("*{}", other.strip_suffix('*').unwrap_or(other))
            } else {
                other.to_string()
            }
        }
    };
    let default_literal = match rendered.as_str() {
        "int" => "0",
        "float64" => "0.0",
        "string" => "\"\"",
        "bool" => "false",
        _ => "nil",
    };
    MappedType::new(rendered, default_literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_types() {
        assert_eq!(map_type("int"), MappedType::new("int", "0"));
        assert_eq!(map_type("float"), MappedType::new("float64", "0.0"));
        assert_eq!(map_type("double"), MappedType::new("float64", "0.0"));
        assert_eq!(map_type("bool"), MappedType::new("bool", "false"));
    }

    #[test]
    fn test_string_types() {
        assert_eq!(map_type("string"), MappedType::new("string", "\"\""));
        assert_eq!(map_type("char*"), MappedType::new("string", "\"\""));
        assert_eq!(map_type("const char*"), MappedType::new("string", "\"\""));
    }

    #[test]
    fn test_pointer_fallback() {
        assert_eq!(map_type("Point*"), MappedType::new("*Point", "nil"));
    }

    #[test]
    fn test_unknown_passes_through() {
        assert_eq!(map_type("Widget"), MappedType::new("Widget", "nil"));
    }
}
