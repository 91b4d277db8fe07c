//! C type mapping.
//!
//! C source receives the blueprint token verbatim; only the default
//! literal is derived, by substring match on the raw token. Match order
//! matters: "char*" contains "char" and so defaults to `'\0'`, not `NULL`.

use super::MappedType;

/// Map an abstract type token to its C rendering and default literal.
pub fn map_type(token: &str) -> MappedType {
    let default_literal = if token.contains("int") {
        "0"
    } else if token.contains("char") {
        "'\\0'"
    } else if token.contains('*') {
        "NULL"
    } else {
        "0"
    };
    MappedType::new(token, default_literal)
}
