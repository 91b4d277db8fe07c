//! Go stub emitter.
//!
//! Emits one file per blueprint file, containing a package declaration,
//! every struct with its methods, then the file's standalone functions.
//! Visibility is convention-based: identifiers declared public are
//! capitalized (exported), everything else keeps its spelling.

use husk_core::{LanguageCodegen, PreviewFile, capitalize};
use husk_manifest::{Access, FileSpec, FunctionDef, Project};

use crate::mappers::go;

pub struct GoGenerator<'a> {
    project: &'a Project,
}

impl LanguageCodegen for GoGenerator<'_> {
    fn language(&self) -> &'static str {
        "go"
    }

    fn file_extension(&self) -> &'static str {
        "go"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.project
            .files
            .iter()
            .map(|file| PreviewFile {
                path: format!("{}/source/src/{}.go", self.project.name, file.name),
                content: self.render_file(file),
            })
            .collect()
    }
}

impl<'a> GoGenerator<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    fn render_file(&self, file: &FileSpec) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "package {}\n\n",
            self.project.name.to_lowercase()
        ));

        for ty in &self.project.types {
            out.push_str(&format!("// {} represents {}\n", ty.name, ty.name));
            out.push_str(&format!("type {} struct {{\n", ty.name));
            for field in &ty.fields {
                out.push_str(&format!(
                    "\t{} {}\n",
                    exported_name(&field.name, field.access),
                    go::map_type(&field.ty).rendered
                ));
            }
            out.push_str("}\n\n");

            for method in &ty.methods {
                out.push_str(&format!(
                    "func (t *{}) {}({}){} {{\n",
                    ty.name,
                    exported_name(&method.name, method.access),
                    render_params(method),
                    return_suffix(method)
                ));
                push_default_return(&mut out, method);
                out.push_str("}\n\n");
            }
        }

        for function in &file.functions {
            out.push_str(&format!(
                "func {}({}){} {{\n",
                exported_name(&function.name, function.access),
                render_params(function),
                return_suffix(function)
            ));
            push_default_return(&mut out, function);
            out.push_str("}\n\n");
        }

        out
    }
}

/// Capitalize identifiers declared public; leave everything else unchanged.
fn exported_name(name: &str, access: Option<Access>) -> String {
    if access == Some(Access::Public) {
        capitalize(name)
    } else {
        name.to_string()
    }
}

fn render_params(function: &FunctionDef) -> String {
    function
        .parameters
        .iter()
        .map(|p| format!("{} {}", p.name, go::map_type(&p.ty).rendered))
        .collect::<Vec<_>>()
        .join(", ")
}

fn return_suffix(function: &FunctionDef) -> String {
    if function.returns_value() {
        format!(" {}", go::map_type(&function.return_type).rendered)
    } else {
        String::new()
    }
}

fn push_default_return(out: &mut String, function: &FunctionDef) {
    if function.returns_value() {
        out.push_str(&format!(
            "\treturn {}\n",
            go::map_type(&function.return_type).default_literal
        ));
    }
}
