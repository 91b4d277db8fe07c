//! Java stub emitter.
//!
//! Emits one file per type under a package directory derived from the
//! lowercased project name, plus a `<FileName>Utils.java` per blueprint
//! file that has standalone functions. Every class gets a zero-argument
//! constructor initializing each field to its default and a public
//! getter/setter pair per field, regardless of the field's own qualifier.
//!
//! The utils file keeps the blueprint file name verbatim in its path
//! while the class inside is capitalized, so a file named `main` yields
//! `mainUtils.java` containing `class MainUtils`.
//!
//! Generation pre-creates `src/main/java/<package>/` even when the
//! blueprint has no types and no functions, so an empty blueprint still
//! leaves the package directory behind.

use std::path::Path;

use eyre::Result;
use husk_core::{LanguageCodegen, PreviewFile, capitalize, write_file};
use husk_manifest::{Access, FileSpec, FunctionDef, Project, TypeDef};

use crate::mappers::java;

pub struct JavaGenerator<'a> {
    project: &'a Project,
}

impl LanguageCodegen for JavaGenerator<'_> {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        let package = self.package_name();
        let mut files = Vec::new();

        for ty in &self.project.types {
            files.push(PreviewFile {
                path: format!(
                    "{}/source/src/main/java/{}/{}.java",
                    self.project.name, package, ty.name
                ),
                content: self.render_class(ty),
            });
        }

        for file in &self.project.files {
            if !file.functions.is_empty() {
                files.push(PreviewFile {
                    path: format!(
                        "{}/source/src/main/java/{}/{}Utils.java",
                        self.project.name, package, file.name
                    ),
                    content: self.render_utils(file),
                });
            }
        }

        files
    }

    fn generate(&self, output_dir: &Path) -> Result<()> {
        // The package directory exists even for an empty blueprint
        let package_dir = output_dir
            .join(&self.project.name)
            .join("source")
            .join("src")
            .join("main")
            .join("java")
            .join(self.package_name());
        std::fs::create_dir_all(&package_dir)?;

        for file in self.preview() {
            write_file(&output_dir.join(&file.path), &file.content)?;
        }
        Ok(())
    }
}

impl<'a> JavaGenerator<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    fn package_name(&self) -> String {
        self.project.name.to_lowercase()
    }

    fn render_class(&self, ty: &TypeDef) -> String {
        let mut out = String::new();

        out.push_str(&format!("package {};\n\n", self.package_name()));
        out.push_str(&format!("/**\n * {} class\n */\n", ty.name));
        out.push_str(&format!("public class {} {{\n", ty.name));

        // Fields, private by default
        for field in &ty.fields {
            let access = field.access.unwrap_or(Access::Private);
            out.push_str(&format!(
                "    {} {} {};\n",
                access.as_str(),
                java::map_type(&field.ty).rendered,
                field.name
            ));
        }
        out.push('\n');

        // Default constructor
        out.push_str(&format!("    public {}() {{\n", ty.name));
        for field in &ty.fields {
            out.push_str(&format!(
                "        this.{} = {};\n",
                field.name,
                java::map_type(&field.ty).default_literal
            ));
        }
        out.push_str("    }\n\n");

        // Getters and setters, always public
        for field in &ty.fields {
            let capitalized = capitalize(&field.name);
            let java_type = java::map_type(&field.ty).rendered;

            out.push_str(&format!(
                "    public {} get{}() {{\n",
                java_type, capitalized
            ));
            out.push_str(&format!("        return {};\n", field.name));
            out.push_str("    }\n\n");

            out.push_str(&format!(
                "    public void set{}({} {}) {{\n",
                capitalized, java_type, field.name
            ));
            out.push_str(&format!(
                "        this.{} = {};\n",
                field.name, field.name
            ));
            out.push_str("    }\n\n");
        }

        for method in &ty.methods {
            let access = method.access.map_or("public", |a| a.as_str());
            self.render_method(&mut out, method, access);
        }

        out.push_str("}\n");
        out
    }

    fn render_utils(&self, file: &FileSpec) -> String {
        let mut out = String::new();
        let class_name = format!("{}Utils", capitalize(&file.name));

        out.push_str(&format!("package {};\n\n", self.package_name()));
        out.push_str(&format!("/**\n * Utility functions for {}\n */\n", file.name));
        out.push_str(&format!("public class {} {{\n", class_name));

        // Private constructor to prevent instantiation
        out.push_str(&format!("    private {}() {{\n", class_name));
        out.push_str("        // Utility class, no instantiation\n");
        out.push_str("    }\n\n");

        for function in &file.functions {
            self.render_method(&mut out, function, "public static");
        }

        out.push_str("}\n");
        out
    }

    fn render_method(&self, out: &mut String, function: &FunctionDef, access: &str) {
        let params: Vec<String> = function
            .parameters
            .iter()
            .map(|p| format!("{} {}", java::map_type(&p.ty).rendered, p.name))
            .collect();

        let return_type = if function.returns_value() {
            java::map_type(&function.return_type).rendered
        } else {
            "void".to_string()
        };

        // Method JavaDoc
        out.push_str("    /**\n");
        for param in &function.parameters {
            out.push_str(&format!(
                "     * @param {} the {} parameter\n",
                param.name, param.name
            ));
        }
        if return_type != "void" {
            out.push_str("     * @return the result\n");
        }
        out.push_str("     */\n");

        out.push_str(&format!(
            "    {} {} {}({}) {{\n",
            access,
            return_type,
            function.name,
            params.join(", ")
        ));
        if return_type != "void" {
            out.push_str(&format!(
                "        return {};\n",
                java::map_type(&function.return_type).default_literal
            ));
        }
        out.push_str("    }\n\n");
    }
}
