//! Java renderer for the twin generator.
//!
//! Renders synthesized transfer classes as Lombok-annotated Java sources and
//! emits the fixed-shape scaffolding (repository, mapper, adapter, service
//! and controller) around them.

mod generator;
mod imports;
mod java_file;
mod naming;
mod type_mapper;

pub mod ast;
pub mod files;

pub use ast::{Annotation, ClassKind, Field, JavaClass, Method, Param};
pub use generator::JavaGenerator;
pub use imports::JavaImports;
pub use java_file::JavaFile;
pub use naming::{ArtifactNames, getter_name};
pub use twin_codegen::language::LanguageCodegen;
pub use type_mapper::JavaTypeMapper;
