//! JavaScript type mapping.
//!
//! Rendered types are JSDoc annotations; JavaScript itself is untyped, so
//! they only appear in comments.

use super::MappedType;

/// Map an abstract type token to its JSDoc annotation and default literal.
pub fn map_type(token: &str) -> MappedType {
    let rendered = match token {
        "int" | "float" | "double" => "number".to_string(),
        "char*" | "const char*" | "string" => "string".to_string(),
        "bool" => "boolean".to_string(),
        other => {
            if other.contains('*') {
                format!("{}|null", other.strip_suffix('*').unwrap_or(other))
            } else {
                other.to_string()
            }
        }
    };
    let default_literal = match rendered.as_str() {
        "number" => "0",
        "string" => "''",
        "boolean" => "false",
        _ => "null",
    };
    MappedType::new(rendered, default_literal)
}
