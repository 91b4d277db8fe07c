//! C++ stub emitter.
//!
//! Emits one header + source pair per blueprint file. Headers declare
//! every class with its visibility sections (private fields first,
//! protected only when present, then a public section with a defaulted
//! constructor, public fields, and method declarations).
//!
//! Method definitions are emitted inside the per-file source loop, so
//! with more than one blueprint file every method body appears once per
//! source file. That matches the reference output this emitter is held
//! to; deduplicating would change generated bytes.

use husk_core::{LanguageCodegen, PreviewFile};
use husk_manifest::{Access, FileSpec, FunctionDef, Project, TypeDef};

use crate::mappers::cpp;

pub struct CppGenerator<'a> {
    project: &'a Project,
}

impl LanguageCodegen for CppGenerator<'_> {
    fn language(&self) -> &'static str {
        "cpp"
    }

    fn file_extension(&self) -> &'static str {
        "cpp"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        let mut files = Vec::new();
        for file in &self.project.files {
            files.push(PreviewFile {
                path: format!(
                    "{}/source/include/{}.hpp",
                    self.project.name, file.name
                ),
                content: self.render_header(file),
            });
            files.push(PreviewFile {
                path: format!("{}/source/src/{}.cpp", self.project.name, file.name),
                content: self.render_source(file),
            });
        }
        files
    }
}

impl<'a> CppGenerator<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    fn render_header(&self, file: &FileSpec) -> String {
        let mut out = String::new();

        let guard = format!("{}_HPP", file.name.to_uppercase());
        out.push_str(&format!("#ifndef {}\n", guard));
        out.push_str(&format!("#define {}\n\n", guard));
        out.push_str("#include <string>\n\n");

        for ty in &self.project.types {
            self.render_class(&mut out, ty);
        }

        out.push_str(&format!("\n#endif // {}\n", guard));
        out
    }

    fn render_class(&self, out: &mut String, ty: &TypeDef) {
        out.push_str(&format!("class {} {{\n", ty.name));

        // Private members by default
        out.push_str("private:\n");
        for field in &ty.fields {
            if !matches!(field.access, Some(Access::Public) | Some(Access::Protected)) {
                out.push_str(&format!(
                    "    {} {};\n",
                    cpp::map_type(&field.ty).rendered,
                    field.name
                ));
            }
        }

        // Protected section only when at least one protected field exists
        let mut has_protected = false;
        for field in &ty.fields {
            if field.access == Some(Access::Protected) {
                if !has_protected {
                    out.push_str("\nprotected:\n");
                    has_protected = true;
                }
                out.push_str(&format!(
                    "    {} {};\n",
                    cpp::map_type(&field.ty).rendered,
                    field.name
                ));
            }
        }

        out.push_str("\npublic:\n");
        out.push_str(&format!("    {}() = default;\n", ty.name));

        for field in &ty.fields {
            if field.access == Some(Access::Public) {
                out.push_str(&format!(
                    "    {} {};\n",
                    cpp::map_type(&field.ty).rendered,
                    field.name
                ));
            }
        }

        for method in &ty.methods {
            out.push_str(&format!("    {};\n", signature(method)));
        }

        out.push_str("};\n\n");
    }

    fn render_source(&self, file: &FileSpec) -> String {
        let mut out = String::new();

        out.push_str(&format!("#include \"{}.hpp\"\n\n", file.name));

        // Method definitions for every class
        for ty in &self.project.types {
            for method in &ty.methods {
                let params: Vec<String> = method
                    .parameters
                    .iter()
                    .map(|p| format!("{} {}", cpp::map_type(&p.ty).rendered, p.name))
                    .collect();
                out.push_str(&format!(
                    "{} {}::{}({}) {{\n",
                    cpp::map_type(method.return_type_or_void()).rendered,
                    ty.name,
                    method.name,
                    params.join(", ")
                ));
                push_default_return(&mut out, method);
                out.push_str("}\n\n");
            }
        }

        // Standalone function definitions
        for function in &file.functions {
            out.push_str(&format!("{} {{\n", signature(function)));
            push_default_return(&mut out, function);
            out.push_str("}\n\n");
        }

        out
    }
}

fn signature(function: &FunctionDef) -> String {
    let params: Vec<String> = function
        .parameters
        .iter()
        .map(|p| format!("{} {}", cpp::map_type(&p.ty).rendered, p.name))
        .collect();
    format!(
        "{} {}({})",
        cpp::map_type(function.return_type_or_void()).rendered,
        function.name,
        params.join(", ")
    )
}

fn push_default_return(out: &mut String, function: &FunctionDef) {
    if function.returns_value() {
        out.push_str(&format!(
            "    return {};\n",
            cpp::map_type(&function.return_type).default_literal
        ));
    }
}
