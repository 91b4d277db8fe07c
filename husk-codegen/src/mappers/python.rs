//! Python type mapping.

use super::MappedType;

/// Map an abstract type token to its Python annotation and default literal.
///
/// Pointer-marker tokens become `Optional[...]` and default to `None`;
/// unmapped tokens become `Any`.
pub fn map_type(token: &str) -> MappedType {
    let rendered = match token {
        "int" => "int".to_string(),
        "float" | "double" => "float".to_string(),
        "char*" | "const char*" | "string" => "str".to_string(),
        "bool" => "bool".to_string(),
        other => {
            if other.contains('*') {
                format!("Optional[{}]", other.strip_suffix('*').unwrap_or(other))
            } else {
                "Any".to_string()
            }
        }
    };
    let default_literal = match rendered.as_str() {
        "int" => "0",
        "float" => "0.0",
        "str" => "\"\"",
        "bool" => "False",
        _ => "None",
    };
    MappedType::new(rendered, default_literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_types() {
        assert_eq!(map_type("int"), MappedType::new("int", "0"));
        assert_eq!(map_type("float"), MappedType::new("float", "0.0"));
        assert_eq!(map_type("double"), MappedType::new("float", "0.0"));
        // Python spells its boolean default with a capital F
        assert_eq!(map_type("bool"), MappedType::new("bool", "False"));
    }

    #[test]
    fn test_string_types() {
        assert_eq!(map_type("string"), MappedType::new("str", "\"\""));
        assert_eq!(map_type("char*"), MappedType::new("str", "\"\""));
    }

    #[test]
    fn test_pointer_becomes_optional() {
        assert_eq!(
            map_type("Point*"),
            MappedType::new("Optional[Point]", "None")
        );
    }

    #[test]
    fn test_unknown_becomes_any() {
        assert_eq!(map_type("Widget"), MappedType::new("Any", "None"));
    }
}
