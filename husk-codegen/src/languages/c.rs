//! C stub emitter.
//!
//! Emits one header + source pair per blueprint file. Every header
//! re-emits every struct definition under its own include guard; the
//! source file includes its header and defines each standalone function
//! with a default-valued body.

use husk_core::{LanguageCodegen, PreviewFile};
use husk_manifest::{FileSpec, FunctionDef, Project};

use crate::mappers::c;

pub struct CGenerator<'a> {
    project: &'a Project,
}

impl LanguageCodegen for CGenerator<'_> {
    fn language(&self) -> &'static str {
        "c"
    }

    fn file_extension(&self) -> &'static str {
        "c"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        let mut files = Vec::new();
        for file in &self.project.files {
            files.push(PreviewFile {
                path: format!(
                    "{}/source/include/{}.h",
                    self.project.name, file.name
                ),
                content: self.render_header(file),
            });
            files.push(PreviewFile {
                path: format!("{}/source/src/{}.c", self.project.name, file.name),
                content: self.render_source(file),
            });
        }
        files
    }
}

impl<'a> CGenerator<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    fn render_header(&self, file: &FileSpec) -> String {
        let mut out = String::new();

        let guard = format!("{}_H", file.name.to_uppercase());
        out.push_str(&format!("#ifndef {}\n", guard));
        out.push_str(&format!("#define {}\n\n", guard));

        // Struct definitions
        for ty in &self.project.types {
            out.push_str(&format!("typedef struct {} {{\n", ty.name));
            for field in &ty.fields {
                out.push_str(&format!(
                    "    {} {};\n",
                    c::map_type(&field.ty).rendered,
                    field.name
                ));
            }
            out.push_str(&format!("}} {};\n\n", ty.name));
        }

        // Function declarations
        for function in &file.functions {
            out.push_str(&format!("{};\n", signature(function)));
        }

        out.push_str(&format!("\n#endif // {}\n", guard));
        out
    }

    fn render_source(&self, file: &FileSpec) -> String {
        let mut out = String::new();

        out.push_str(&format!("#include \"{}.h\"\n\n", file.name));

        for function in &file.functions {
            out.push_str(&format!("{} {{\n", signature(function)));
            if function.returns_value() {
                out.push_str(&format!(
                    "    return {};\n",
                    c::map_type(&function.return_type).default_literal
                ));
            }
            out.push_str("}\n\n");
        }

        out
    }
}

fn signature(function: &FunctionDef) -> String {
    let params: Vec<String> = function
        .parameters
        .iter()
        .map(|p| format!("{} {}", c::map_type(&p.ty).rendered, p.name))
        .collect();
    format!(
        "{} {}({})",
        c::map_type(function.return_type_or_void()).rendered,
        function.name,
        params.join(", ")
    )
}
