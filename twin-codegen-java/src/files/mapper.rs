use std::path::PathBuf;

use eyre::Result;
use twin_core::{GeneratedFile, uncapitalize};
use twin_model::TypeName;

use super::{known, source_path};
use crate::{Annotation, ArtifactNames, JavaClass, JavaFile, JavaImports, Method, Param};

/// `<Simple>PersistenceMapper`: converts between the domain class and its
/// persistence entity.
pub struct MapperFile {
    name: TypeName,
    domain: TypeName,
    entity: TypeName,
}

impl MapperFile {
    pub fn new(names: &ArtifactNames<'_>) -> Result<Self> {
        Ok(Self {
            name: names.mapper()?,
            domain: names.domain().clone(),
            entity: names.entity()?,
        })
    }
}

impl GeneratedFile for MapperFile {
    fn path(&self) -> PathBuf {
        source_path(&self.name)
    }

    fn render(&self) -> String {
        let mut imports = JavaImports::new(self.name.namespace());
        imports.declare(self.name.name());
        let component = imports.use_qualified(known::COMPONENT);
        let contract = imports.use_qualified(known::ENTITY_PERSISTENCE_MAPPER);
        let domain = imports.use_type(&self.domain);
        let entity = imports.use_type(&self.entity);

        let mapper = JavaClass::new(self.name.name())
            .annotation(Annotation::new(component).value_str(&uncapitalize(self.name.name())))
            .implements(format!("{contract}<{domain}, {entity}>"))
            .method(
                Method::new("toEntity")
                    .overrides()
                    .returns(&entity)
                    .param(Param::new("entity", &domain))
                    .line(format!("return {entity}.fromDomain(entity);")),
            )
            .method(
                Method::new("toDomain")
                    .overrides()
                    .returns(&domain)
                    .param(Param::new("entity", &entity))
                    .line("return entity.toDomain();"),
            );

        JavaFile::new(&imports).add(mapper).render()
    }
}
