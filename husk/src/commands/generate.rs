use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use husk_codegen::Generator;
use husk_manifest::{Language, Project};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the blueprint (defaults to ./husk.toml)
    #[arg(short, long, default_value = "husk.toml")]
    pub config: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Print generated files without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Target language (overrides the blueprint setting)
    #[arg(short, long)]
    pub language: Option<Language>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let mut project = Project::from_file(&self.config).unwrap_or_exit();

        // Use CLI flag if provided, otherwise use blueprint setting
        if let Some(language) = self.language {
            project.language = language;
        }

        let generator = Generator::new(&project);

        if self.dry_run {
            return Self::run_preview(&generator);
        }

        generator
            .generate(&self.output)
            .wrap_err("Failed to generate stubs")?;

        let files = generator.preview();
        println!("{} ({})", project.name, project.language);
        println!();
        for file in &files {
            println!("  {}", file.path);
        }
        println!();
        println!(
            "Generated {} file{}",
            files.len(),
            if files.len() == 1 { "" } else { "s" }
        );

        Ok(())
    }

    fn run_preview(generator: &Generator) -> Result<()> {
        for file in generator.preview() {
            println!("=== {} ===", file.path);
            println!("{}", file.content);
        }
        Ok(())
    }
}
