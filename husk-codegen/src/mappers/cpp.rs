//! C++ type mapping.
//!
//! Like C, tokens are rendered verbatim. The default literal is chosen by
//! exact raw-token match, with `{}` (value initialization) as the
//! fallback for everything else, including `float`.

use super::MappedType;

/// Map an abstract type token to its C++ rendering and default literal.
pub fn map_type(token: &str) -> MappedType {
    let default_literal = match token {
        "int" => "0",
        "double" => "0.0",
        "string" => "\"\"",
        "bool" => "false",
        _ => "{}",
    };
    MappedType::new(token, default_literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_pass_through() {
        assert_eq!(map_type("int").rendered, "int");
        assert_eq!(map_type("std::vector<int>").rendered, "std::vector<int>");
    }

    #[test]
    fn test_default_by_exact_token() {
        assert_eq!(map_type("int").default_literal, "0");
        assert_eq!(map_type("double").default_literal, "0.0");
        assert_eq!(map_type("string").default_literal, "\"\"");
        assert_eq!(map_type("bool").default_literal, "false");
        // No substring matching here: float falls to the brace fallback.
        assert_eq!(map_type("float").default_literal, "{}");
        assert_eq!(map_type("Point*").default_literal, "{}");
    }
}
