//! On-disk generation tests.

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use husk_codegen::Generator;
use husk_manifest::Project;
use tempfile::TempDir;

const C_BLUEPRINT: &str = r#"
language = "c"
project = "demo"

[[types]]
name = "Point"

[[types.fields]]
name = "x"
type = "int"
access = "public"

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
"#;

/// Collect every file under `root` as (relative path, content), sorted.
fn read_tree(root: &Path) -> Vec<(String, String)> {
    fn walk(dir: &Path, root: &Path, out: &mut Vec<(String, String)>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(&path, root, out);
            } else {
                let relative = path.strip_prefix(root).unwrap().to_path_buf();
                out.push((
                    relative.to_string_lossy().into_owned(),
                    fs::read_to_string(&path).unwrap(),
                ));
            }
        }
    }

    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort_by(|a, b| a.0.cmp(&b.0));
    out
}

#[test]
fn test_c_writes_header_and_source_pair() {
    let temp = TempDir::new().unwrap();
    let project = Project::from_str(C_BLUEPRINT).unwrap();
    Generator::new(&project).generate(temp.path()).unwrap();

    let header = temp
        .path()
        .join("demo")
        .join("source")
        .join("include")
        .join("main.h");
    let source: PathBuf = temp
        .path()
        .join("demo")
        .join("source")
        .join("src")
        .join("main.c");

    assert!(header.exists());
    assert!(source.exists());
    assert!(fs::read_to_string(&source)
        .unwrap()
        .contains("int add(int a, int b) {\n    return 0;\n}"));
}

#[test]
fn test_baseline_directories_exist_for_single_file_targets() {
    let temp = TempDir::new().unwrap();
    let project = Project::from_str(
        r#"
        language = "go"
        project = "demo"

        [[files]]
        name = "main"
        "#,
    )
    .unwrap();
    Generator::new(&project).generate(temp.path()).unwrap();

    // Go writes nothing under include/, but the directory is still created
    assert!(temp.path().join("demo/source/src").is_dir());
    assert!(temp.path().join("demo/source/include").is_dir());
    assert!(temp.path().join("demo/source/src/main.go").exists());
}

#[test]
fn test_java_package_directory_from_lowercased_project() {
    let temp = TempDir::new().unwrap();
    let project = Project::from_str(
        r#"
        language = "java"
        project = "MyApp"

        [[types]]
        name = "User"

        [[types.fields]]
        name = "id"
        type = "int"
        "#,
    )
    .unwrap();
    Generator::new(&project).generate(temp.path()).unwrap();

    assert!(temp
        .path()
        .join("MyApp/source/src/main/java/myapp/User.java")
        .exists());
}

#[test]
fn test_java_package_directory_exists_for_empty_blueprint() {
    let temp = TempDir::new().unwrap();
    let project = Project::from_str(
        r#"
        language = "java"
        project = "demo"

        [[files]]
        name = "main"
        "#,
    )
    .unwrap();
    Generator::new(&project).generate(temp.path()).unwrap();

    // No types and no functions, so nothing is emitted into the package
    // directory, but it is still created.
    let package_dir = temp.path().join("demo/source/src/main/java/demo");
    assert!(package_dir.is_dir());
    assert_eq!(fs::read_dir(&package_dir).unwrap().count(), 0);
}

#[test]
fn test_generation_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let project = Project::from_str(C_BLUEPRINT).unwrap();
    let generator = Generator::new(&project);

    generator.generate(temp.path()).unwrap();
    let first = read_tree(temp.path());

    generator.generate(temp.path()).unwrap();
    let second = read_tree(temp.path());

    assert_eq!(first, second);
}

#[test]
fn test_identical_blueprints_produce_identical_trees() {
    let temp_a = TempDir::new().unwrap();
    let temp_b = TempDir::new().unwrap();
    let project = Project::from_str(C_BLUEPRINT).unwrap();

    Generator::new(&project).generate(temp_a.path()).unwrap();
    Generator::new(&project).generate(temp_b.path()).unwrap();

    assert_eq!(read_tree(temp_a.path()), read_tree(temp_b.path()));
}

#[test]
fn test_unrecognized_language_fails_before_any_output() {
    let temp = TempDir::new().unwrap();

    // Dispatch is decided at parse time: an unregistered language never
    // reaches the generator, so nothing is created on disk.
    let result = Project::from_str(
        r#"
        language = "rust"
        project = "demo"
        "#,
    );
    assert!(result.is_err());

    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}
