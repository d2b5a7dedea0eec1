//! Java type mapper implementation.

use twin_codegen::builder::TypeMapper;
use twin_model::{Primitive, TypeName};

use crate::JavaImports;

/// Spells transfer types as Java source, consulting the file's imports for
/// every class name.
#[derive(Debug, Clone, Copy)]
pub struct JavaTypeMapper<'a> {
    imports: &'a JavaImports,
}

impl<'a> JavaTypeMapper<'a> {
    pub fn new(imports: &'a JavaImports) -> Self {
        Self { imports }
    }
}

impl TypeMapper for JavaTypeMapper<'_> {
    fn map_primitive(&self, ty: Primitive) -> String {
        ty.keyword().to_string()
    }

    fn map_named(&self, name: &TypeName) -> String {
        self.imports.spell(name)
    }
}
