//! Target-language dispatch and the shared output layout.

use std::path::Path;

use eyre::Result;
use husk_core::{LanguageCodegen, PreviewFile};
use husk_manifest::{Language, Project};

use crate::languages::{
    CGenerator, CppGenerator, GoGenerator, JavaGenerator, JavaScriptGenerator, PythonGenerator,
};

/// Entry point for stub generation.
///
/// Selects the per-language emitter from the configured target language
/// and owns the baseline directory layout created before emission.
pub struct Generator<'a> {
    project: &'a Project,
}

impl<'a> Generator<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    /// The language-specific emitter for the configured target.
    pub fn emitter(&self) -> Box<dyn LanguageCodegen + 'a> {
        match self.project.language {
            Language::C => Box::new(CGenerator::new(self.project)),
            Language::Cpp => Box::new(CppGenerator::new(self.project)),
            Language::Go => Box::new(GoGenerator::new(self.project)),
            Language::Python => Box::new(PythonGenerator::new(self.project)),
            Language::JavaScript => Box::new(JavaScriptGenerator::new(self.project)),
            Language::Java => Box::new(JavaGenerator::new(self.project)),
        }
    }

    /// Render all files without touching the filesystem.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.emitter().preview()
    }

    /// Create the baseline directories and write every generated file
    /// under `output_dir`.
    pub fn generate(&self, output_dir: &Path) -> Result<()> {
        self.create_directories(output_dir)?;
        self.emitter().generate(output_dir)
    }

    /// Both baseline directories exist for every target; single-file
    /// targets simply leave `include/` empty.
    fn create_directories(&self, output_dir: &Path) -> Result<()> {
        let source = output_dir.join(&self.project.name).join("source");
        std::fs::create_dir_all(source.join("src"))?;
        std::fs::create_dir_all(source.join("include"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use husk_manifest::Project;

    use super::*;

    #[test]
    fn test_emitter_matches_language() {
        for (language, id, ext) in [
            ("c", "c", "c"),
            ("c++", "cpp", "cpp"),
            ("go", "go", "go"),
            ("python", "python", "py"),
            ("javascript", "javascript", "js"),
            ("java", "java", "java"),
        ] {
            let project = Project::from_str(&format!(
                "language = \"{language}\"\nproject = \"demo\"\n"
            ))
            .unwrap();
            let generator = Generator::new(&project);
            let emitter = generator.emitter();
            assert_eq!(emitter.language(), id);
            assert_eq!(emitter.file_extension(), ext);
        }
    }

    #[test]
    fn test_default_language_dispatches_to_c() {
        let project = Project::from_str("project = \"demo\"\n").unwrap();
        let generator = Generator::new(&project);
        assert_eq!(generator.emitter().language(), "c");
    }
}
