//! Core traits and utilities for the husk stub generator.
//!
//! This crate provides the language-agnostic pieces shared by every
//! target-language emitter: the [`LanguageCodegen`] trait, the
//! [`PreviewFile`] representation of a rendered file, and file-write
//! helpers.

mod codegen;
mod file;
mod naming;

pub use codegen::{LanguageCodegen, PreviewFile};
pub use file::write_file;
pub use naming::capitalize;
