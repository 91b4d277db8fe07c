//! JavaScript stub emitter.
//!
//! Emits one CommonJS file per blueprint file: a JSDoc typedef block
//! describing every type, class definitions whose constructors assign
//! defaults, the file's standalone functions, and a trailing
//! `module.exports` naming every class and function.

use husk_core::{LanguageCodegen, PreviewFile};
use husk_manifest::{FileSpec, FunctionDef, Project};

use crate::mappers::javascript;

pub struct JavaScriptGenerator<'a> {
    project: &'a Project,
}

impl LanguageCodegen for JavaScriptGenerator<'_> {
    fn language(&self) -> &'static str {
        "javascript"
    }

    fn file_extension(&self) -> &'static str {
        "js"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.project
            .files
            .iter()
            .map(|file| PreviewFile {
                path: format!("{}/source/src/{}.js", self.project.name, file.name),
                content: self.render_file(file),
            })
            .collect()
    }
}

impl<'a> JavaScriptGenerator<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    fn render_file(&self, file: &FileSpec) -> String {
        let mut out = String::new();

        // Structural typedef block for IDE support
        out.push_str("/**\n * @typedef {Object} Types\n");
        for ty in &self.project.types {
            out.push_str(&format!(" * @typedef {{Object}} {}\n", ty.name));
            for field in &ty.fields {
                out.push_str(&format!(
                    " * @property {{{}}} {}\n",
                    javascript::map_type(&field.ty).rendered,
                    field.name
                ));
            }
        }
        out.push_str(" */\n\n");

        for ty in &self.project.types {
            out.push_str(&format!("class {} {{\n", ty.name));

            out.push_str("    constructor() {\n");
            for field in &ty.fields {
                let mapped = javascript::map_type(&field.ty);
                out.push_str(&format!(
                    "        /**\n         * @type {{{}}}\n         */\n",
                    mapped.rendered
                ));
                out.push_str(&format!(
                    "        this.{} = {};\n",
                    field.name, mapped.default_literal
                ));
            }
            out.push_str("    }\n\n");

            for method in &ty.methods {
                push_doc_comment(&mut out, method, "    ");
                out.push_str(&format!(
                    "    {}({}) {{\n",
                    method.name,
                    render_params(method)
                ));
                if method.returns_value() {
                    out.push_str(&format!(
                        "        return {};\n",
                        javascript::map_type(&method.return_type).default_literal
                    ));
                }
                out.push_str("    }\n\n");
            }

            out.push_str("}\n\n");
        }

        for function in &file.functions {
            push_doc_comment(&mut out, function, "");
            out.push_str(&format!(
                "function {}({}) {{\n",
                function.name,
                render_params(function)
            ));
            if function.returns_value() {
                out.push_str(&format!(
                    "    return {};\n",
                    javascript::map_type(&function.return_type).default_literal
                ));
            }
            out.push_str("}\n\n");
        }

        // Export every class and standalone function
        out.push_str("module.exports = {\n");
        for ty in &self.project.types {
            out.push_str(&format!("    {},\n", ty.name));
        }
        for function in &file.functions {
            out.push_str(&format!("    {},\n", function.name));
        }
        out.push_str("};\n");

        out
    }
}

/// JSDoc comment listing each parameter and, for value-returning
/// functions, the return type.
fn push_doc_comment(out: &mut String, function: &FunctionDef, indent: &str) {
    out.push_str(&format!("{}/**\n", indent));
    for param in &function.parameters {
        out.push_str(&format!(
            "{} * @param {{{}}} {}\n",
            indent,
            javascript::map_type(&param.ty).rendered,
            param.name
        ));
    }
    if function.returns_value() {
        out.push_str(&format!(
            "{} * @returns {{{}}}\n",
            indent,
            javascript::map_type(&function.return_type).rendered
        ));
    }
    out.push_str(&format!("{} */\n", indent));
}

fn render_params(function: &FunctionDef) -> String {
    function
        .parameters
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use husk_manifest::Project;

    use super::*;

    fn demo_project() -> Project {
        Project::from_str(
            r#"
            language = "javascript"
            project = "demo"

            [[types]]
            name = "Point"

            [[types.fields]]
            name = "x"
            type = "int"

            [[files]]
            name = "main"

            [[files.functions]]
            name = "add"
            return = "int"

            [[files.functions.parameters]]
            name = "a"
            type = "int"

            [[files.functions.parameters]]
            name = "b"
            type = "int"
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_typedef_block_lists_types_and_fields() {
        let generator_project = demo_project();
        let generator = JavaScriptGenerator::new(&generator_project);
        let content = &generator.preview()[0].content;
        assert!(content.starts_with("/**\n * @typedef {Object} Types\n"));
        assert!(content.contains(" * @typedef {Object} Point\n * @property {number} x\n"));
    }

    #[test]
    fn test_constructor_assigns_defaults() {
        let generator_project = demo_project();
        let generator = JavaScriptGenerator::new(&generator_project);
        let content = &generator.preview()[0].content;
        assert!(content.contains("        this.x = 0;\n"));
    }

    #[test]
    fn test_function_doc_and_body() {
        let generator_project = demo_project();
        let generator = JavaScriptGenerator::new(&generator_project);
        let content = &generator.preview()[0].content;
        assert!(content.contains(
            "/**\n * @param {number} a\n * @param {number} b\n * @returns {number}\n */\n"
        ));
        assert!(content.contains("function add(a, b) {\n    return 0;\n}\n"));
    }

    #[test]
    fn test_exports_list_types_and_functions() {
        let generator_project = demo_project();
        let generator = JavaScriptGenerator::new(&generator_project);
        let content = &generator.preview()[0].content;
        assert!(content.ends_with("module.exports = {\n    Point,\n    add,\n};\n"));
    }
}
