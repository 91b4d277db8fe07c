//! Per-target type-mapping tables.
//!
//! Each target language maps an abstract type token (e.g., "int", "char*")
//! to its own spelling of the type and a default-value literal. Mappings
//! are pure and total: unknown tokens fall through to a language-specific
//! fallback instead of failing.
//!
//! Default-literal selection is deliberately not uniform across targets.
//! C picks the literal by substring match on the raw token, C++ by exact
//! raw-token match, and the remaining targets by the mapped type. This
//! mirrors how each target's literal syntax is actually chosen and must
//! not be collapsed into one shared table.

pub mod c;
pub mod cpp;
pub mod go;
pub mod java;
pub mod javascript;
pub mod python;

/// A target-language rendering of one abstract type token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    /// The target language's spelling of the type.
    pub rendered: String,
    /// Literal used to initialize or return a value of the type.
    pub default_literal: String,
}

impl MappedType {
    pub(crate) fn new(rendered: impl Into<String>, default_literal: impl Into<String>) -> Self {
        Self {
            rendered: rendered.into(),
            default_literal: default_literal.into(),
        }
    }
}
