//! Multi-target stub emitters for the husk generator.
//!
//! Given a parsed [`Project`](husk_manifest::Project) blueprint, this crate
//! renders placeholder source files in one of six target languages. Each
//! target has its own emitter implementing [`LanguageCodegen`]; the
//! [`Generator`] picks the right one from the configured language and owns
//! the shared output directory layout.
//!
//! # Usage
//!
//! ```ignore
//! use husk_codegen::Generator;
//! use husk_manifest::Project;
//! use std::path::Path;
//!
//! let project = Project::from_file("husk.toml")?;
//! let generator = Generator::new(&project);
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Generate files to disk
//! generator.generate(Path::new("."))?;
//! ```

mod generator;

pub mod languages;
pub mod mappers;

pub use generator::Generator;
pub use husk_core::{LanguageCodegen, PreviewFile};
pub use mappers::MappedType;
