//! Language-agnostic code generation traits.

use std::path::Path;

use eyre::Result;

use crate::file::write_file;

/// Trait for language-specific stub emitters.
///
/// Implement this trait to add support for emitting stubs in a new target
/// language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "c", "go", "python")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "c", "go", "py")
    fn file_extension(&self) -> &'static str;

    /// Render all files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Write every rendered file under `output_dir`.
    ///
    /// Files are written in declaration order. A failed write aborts the
    /// remaining files and leaves previously written ones in place.
    fn generate(&self, output_dir: &Path) -> Result<()> {
        for file in self.preview() {
            write_file(&output_dir.join(&file.path), &file.content)?;
        }
        Ok(())
    }
}

/// A rendered file, addressed relative to the output directory.
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from the output directory
    pub path: String,
    /// File content
    pub content: String,
}
