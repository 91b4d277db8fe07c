//! Python stub emitter.
//!
//! Emits one file per blueprint file: a shebang and typing imports, every
//! class with an `__init__` assigning annotated defaults, then the file's
//! standalone functions. A class with no fields gets a `pass` placeholder
//! so the initializer body is never empty.

use husk_core::{LanguageCodegen, PreviewFile};
use husk_manifest::{FileSpec, FunctionDef, Project};

use crate::mappers::python;

pub struct PythonGenerator<'a> {
    project: &'a Project,
}

impl LanguageCodegen for PythonGenerator<'_> {
    fn language(&self) -> &'static str {
        "python"
    }

    fn file_extension(&self) -> &'static str {
        "py"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        self.project
            .files
            .iter()
            .map(|file| PreviewFile {
                path: format!("{}/source/src/{}.py", self.project.name, file.name),
                content: self.render_file(file),
            })
            .collect()
    }
}

impl<'a> PythonGenerator<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    fn render_file(&self, file: &FileSpec) -> String {
        let mut out = String::new();

        out.push_str("#!/usr/bin/env python3\n");
        out.push_str("from typing import List, Optional, Dict, Any\n\n");

        for ty in &self.project.types {
            out.push_str(&format!("class {}:\n", ty.name));

            out.push_str("    def __init__(self):\n");
            if ty.fields.is_empty() {
                out.push_str("        pass\n");
            }
            for field in &ty.fields {
                let mapped = python::map_type(&field.ty);
                out.push_str(&format!(
                    "        self.{}: {} = {}\n",
                    field.name, mapped.rendered, mapped.default_literal
                ));
            }
            out.push('\n');

            for method in &ty.methods {
                out.push_str(&format!(
                    "    def {}({}){}:\n",
                    method.name,
                    render_params(method, true),
                    return_hint(method)
                ));
                if method.returns_value() {
                    out.push_str(&format!(
                        "        return {}\n\n",
                        python::map_type(&method.return_type).default_literal
                    ));
                } else {
                    out.push_str("        pass\n\n");
                }
            }
        }

        for function in &file.functions {
            out.push_str(&format!(
                "def {}({}){}:\n",
                function.name,
                render_params(function, false),
                return_hint(function)
            ));
            if function.returns_value() {
                out.push_str(&format!(
                    "    return {}\n\n",
                    python::map_type(&function.return_type).default_literal
                ));
            } else {
                out.push_str("    pass\n\n");
            }
        }

        out
    }
}

fn render_params(function: &FunctionDef, method: bool) -> String {
    let mut params = Vec::new();
    if method {
        params.push("self".to_string());
    }
    for param in &function.parameters {
        params.push(format!(
            "{}: {}",
            param.name,
            python::map_type(&param.ty).rendered
        ));
    }
    params.join(", ")
}

fn return_hint(function: &FunctionDef) -> String {
    if function.returns_value() {
        format!(" -> {}", python::map_type(&function.return_type).rendered)
    } else {
        String::new()
    }
}
