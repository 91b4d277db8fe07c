//! Blueprint parsing for the husk stub generator.
//!
//! A blueprint (`husk.toml`) declares a target language, a project name,
//! and ordered lists of data types and files. This crate owns the
//! deserialization into the read-only [`Project`] model consumed by the
//! emitters; it performs no semantic validation of user-supplied names.

mod error;
mod language;
mod project;

pub use error::{Error, Result};
pub use language::Language;
pub use project::{Access, Field, FileSpec, FunctionDef, Parameter, Project, TypeDef};
