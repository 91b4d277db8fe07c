//! The blueprint model: a read-only description of types, fields, and
//! functions to stub out.
//!
//! Entities are constructed once at load time and never mutated by the
//! emitters. Declaration order of types, files, fields, methods, and
//! parameters is preserved exactly; it is the only ordering signal the
//! emitters have.

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{Error, Language, Result};

/// Root blueprint for a generated project.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    /// Target language; defaults to C when unspecified.
    #[serde(default)]
    pub language: Language,

    /// Project name, used as the output root directory and package name.
    #[serde(rename = "project")]
    pub name: String,

    /// Data types to emit, in declaration order.
    #[serde(default)]
    pub types: Vec<TypeDef>,

    /// Files to emit, in declaration order.
    #[serde(default)]
    pub files: Vec<FileSpec>,
}

impl Project {
    /// Read and parse a blueprint file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse blueprint content, reporting errors against `filename`.
    pub fn from_str_with_filename(src: &str, filename: &str) -> Result<Self> {
        toml::from_str(src).map_err(|e| Error::parse(e, src, filename))
    }
}

impl FromStr for Project {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "husk.toml")
    }
}

/// One user-declared data type (becomes a struct or class in the target).
#[derive(Debug, Clone, Deserialize)]
pub struct TypeDef {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<Field>,
    #[serde(default)]
    pub methods: Vec<FunctionDef>,
}

/// A typed field on a [`TypeDef`].
#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    pub name: String,
    /// Abstract type token (e.g., "int", "char*"), rendered per target.
    #[serde(rename = "type")]
    pub ty: String,
    /// Visibility qualifier; absence means the target's field default.
    #[serde(default)]
    pub access: Option<Access>,
}

/// A function signature, used both as a method and as a standalone
/// file-level function.
#[derive(Debug, Clone, Deserialize)]
pub struct FunctionDef {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Abstract return type token; empty or "void" means no value.
    #[serde(default, rename = "return")]
    pub return_type: String,
    /// Visibility qualifier; absence means the target's method default.
    #[serde(default)]
    pub access: Option<Access>,
}

impl FunctionDef {
    /// Whether the function produces a value.
    pub fn returns_value(&self) -> bool {
        !self.return_type.is_empty() && self.return_type != "void"
    }

    /// The return type token, with the void sentinel substituted for
    /// an empty token.
    pub fn return_type_or_void(&self) -> &str {
        if self.return_type.is_empty() {
            "void"
        } else {
            &self.return_type
        }
    }
}

/// A named function parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// Standalone functions grouped into one output file.
#[derive(Debug, Clone, Deserialize)]
pub struct FileSpec {
    pub name: String,
    #[serde(default)]
    pub functions: Vec<FunctionDef>,
}

/// Field and method visibility.
///
/// How an unspecified qualifier resolves is target-specific: fields fall
/// back to private, methods to public, and convention-based targets treat
/// anything but an explicit `public` as unexported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Public,
    Protected,
    Private,
}

impl Access {
    /// The qualifier keyword as spelled in the blueprint.
    pub fn as_str(&self) -> &'static str {
        match self {
            Access::Public => "public",
            Access::Protected => "protected",
            Access::Private => "private",
        }
    }
}
