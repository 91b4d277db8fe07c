//! Per-language stub emitters.
//!
//! One module per target language. Each emitter renders the whole project
//! into that target's file topology: header + source pairs for C and C++,
//! one combined file per blueprint file for Go, Python, and JavaScript,
//! and one file per class for Java.

mod c;
mod cpp;
mod go;
mod java;
mod javascript;
mod python;

pub use c::CGenerator;
pub use cpp::CppGenerator;
pub use go::GoGenerator;
pub use java::JavaGenerator;
pub use javascript::JavaScriptGenerator;
pub use python::PythonGenerator;
