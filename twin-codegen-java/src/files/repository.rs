use std::path::PathBuf;

use eyre::Result;
use twin_core::GeneratedFile;
use twin_model::TypeName;

use super::{known, source_path};
use crate::{Annotation, ArtifactNames, JavaClass, JavaFile, JavaImports};

/// `<Simple>JpaRepository`: a Spring Data repository over the persistence
/// entity, keyed by string ids.
pub struct RepositoryFile {
    name: TypeName,
    entity: TypeName,
}

impl RepositoryFile {
    pub fn new(names: &ArtifactNames<'_>) -> Result<Self> {
        Ok(Self {
            name: names.repository()?,
            entity: names.entity()?,
        })
    }
}

impl GeneratedFile for RepositoryFile {
    fn path(&self) -> PathBuf {
        source_path(&self.name)
    }

    fn render(&self) -> String {
        let mut imports = JavaImports::new(self.name.namespace());
        imports.declare(self.name.name());
        let annotation = imports.use_qualified(known::REPOSITORY);
        let base = imports.use_qualified(known::COMMON_JPA_REPOSITORY);
        let entity = imports.use_type(&self.entity);
        let string = imports.use_qualified(known::STRING);
        let long = imports.use_qualified(known::LONG);

        let repository = JavaClass::interface(self.name.name())
            .annotation(Annotation::new(annotation))
            .implements(format!("{base}<{entity}, {string}, {long}>"));

        JavaFile::new(&imports).add(repository).render()
    }
}
