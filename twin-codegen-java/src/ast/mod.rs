//! Java AST builders for classes, interfaces, fields and methods.
//!
//! Type names are passed in already spelled (see [`JavaImports`](crate::JavaImports));
//! nodes render to [`CodeFragment`](twin_codegen::builder::CodeFragment)s.

mod annotation;
mod class;
mod field;
mod method;

pub use annotation::{Annotation, string_array, string_literal};
pub use class::{ClassKind, JavaClass};
pub use field::Field;
pub use method::{Method, Param};
