use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use husk_manifest::Project;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the blueprint (defaults to ./husk.toml)
    #[arg(short, long, default_value = "husk.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let project = Project::from_file(&self.config).unwrap_or_exit();

        println!("✓ {} is valid\n", self.config.display());
        println!("  {} ({})", project.name, project.language);

        let type_count = project.types.len();
        println!(
            "\n  {} type{}:",
            type_count,
            if type_count == 1 { "" } else { "s" }
        );
        for ty in &project.types {
            println!(
                "    {} ({} fields, {} methods)",
                ty.name,
                ty.fields.len(),
                ty.methods.len()
            );
        }

        let file_count = project.files.len();
        println!(
            "\n  {} file{}:",
            file_count,
            if file_count == 1 { "" } else { "s" }
        );
        for file in &project.files {
            println!("    {} ({} functions)", file.name, file.functions.len());
        }

        Ok(())
    }
}
