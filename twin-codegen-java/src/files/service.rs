use std::path::PathBuf;

use eyre::Result;
use twin_codegen::builder::CodeFragment;
use twin_core::GeneratedFile;
use twin_model::TypeName;

use super::{known, source_path};
use crate::{Annotation, ArtifactNames, Field, JavaClass, JavaFile, JavaImports, Method, Param};

/// `<Simple>Service`: the create/update/remove use case of the domain class.
/// Validates entities, stamps the acting user through the security adapter
/// and delegates to the persistence adapter.
pub struct ServiceFile {
    name: TypeName,
    domain: TypeName,
    transfer: TypeName,
    adapter: TypeName,
    security_adapter: TypeName,
}

impl ServiceFile {
    pub fn new(names: &ArtifactNames<'_>) -> Result<Self> {
        Ok(Self {
            name: names.service()?,
            domain: names.domain().clone(),
            transfer: names.transfer().clone(),
            adapter: names.adapter()?,
            security_adapter: names.security_adapter()?,
        })
    }
}

impl GeneratedFile for ServiceFile {
    fn path(&self) -> PathBuf {
        source_path(&self.name)
    }

    fn render(&self) -> String {
        let mut imports = JavaImports::new(self.name.namespace());
        imports.declare(self.name.name());
        let component = imports.use_qualified(known::COMPONENT);
        let use_case = imports.use_qualified(known::USE_CASE);
        let query = imports.use_qualified(known::FIND_WITH_FILTER_QUERY);
        let result = imports.use_qualified(known::VALIDATION_RESULT);
        let invalid = imports.use_qualified(known::VALIDATION_EXCEPTION);
        let domain = imports.use_type(&self.domain);
        let transfer = imports.use_type(&self.transfer);
        let adapter = imports.use_type(&self.adapter);
        let security = imports.use_type(&self.security_adapter);
        let string = imports.use_qualified(known::STRING);
        let page = imports.use_qualified(known::PAGE);
        let list = imports.use_qualified(known::LIST);
        let optional = imports.use_qualified(known::OPTIONAL);

        let page_of_transfers = format!("{page}<{transfer}>");
        let validated_save = |name: &str, stamp: &str| {
            Method::new(name)
                .overrides()
                .returns(&domain)
                .param(Param::new("entity", &domain))
                .line(format!("{result} validationResult = entity.validar();"))
                .control(
                    "if (!validationResult.isValid())",
                    vec![CodeFragment::line(format!(
                        "throw new {invalid}(validationResult.getErrors());"
                    ))],
                )
                .line(format!("entity.{stamp}(securityAdapter.buscarUsuarioLogado());"))
                .line("return persistenceAdapter.saveEntity(entity);")
        };
        let delegate = |method: Method, call: &str| {
            method
                .overrides()
                .line(format!("return persistenceAdapter.{call};"))
        };

        let service = JavaClass::new(self.name.name())
            .annotation(Annotation::new(component))
            .implements(format!("{use_case}<{domain}, {domain}>"))
            .implements(format!("{query}<{string}, {transfer}>"))
            .field(Field::new("persistenceAdapter", &adapter).final_())
            .field(Field::new("securityAdapter", &security).final_())
            .method(
                Method::constructor(self.name.name())
                    .param(Param::new("persistenceAdapter", &adapter))
                    .param(Param::new("securityAdapter", &security))
                    .line("this.persistenceAdapter = persistenceAdapter;")
                    .line("this.securityAdapter = securityAdapter;"),
            )
            .method(validated_save("createEntity", "criadoPor"))
            .method(validated_save("updateEntity", "alteradoPor"))
            .method(delegate(
                Method::new("getEntityById")
                    .returns(format!("{optional}<{domain}>"))
                    .param(Param::new("id", &string)),
                "getEntityById(id)",
            ))
            .method(delegate(
                Method::new("findById")
                    .returns(&transfer)
                    .param(Param::new("id", &string)),
                "findById(id)",
            ))
            .method(delegate(
                Method::new("findAll")
                    .returns(&page_of_transfers)
                    .param(Param::new("page", "int"))
                    .param(Param::new("size", "int")),
                "findAll(page, size)",
            ))
            .method(delegate(
                Method::new("findAll")
                    .returns(&page_of_transfers)
                    .param(Param::new("page", "int"))
                    .param(Param::new("size", "int"))
                    .param(Param::new("sort", format!("{string}[]"))),
                "findAll(page, size, sort)",
            ))
            .method(delegate(
                Method::new("findAll")
                    .returns(format!("{list}<{transfer}>"))
                    .param(Param::new("ids", format!("{list}<{string}>"))),
                "findAll(ids)",
            ))
            .method(delegate(
                Method::new("findWithFilter")
                    .returns(&page_of_transfers)
                    .param(Param::new("filter", &string))
                    .param(Param::new("page", "int"))
                    .param(Param::new("size", "int")),
                "findWithFilter(filter, page, size)",
            ))
            .method(delegate(
                Method::new("findWithFilter")
                    .returns(&page_of_transfers)
                    .param(Param::new("filter", &string))
                    .param(Param::new("page", "int"))
                    .param(Param::new("size", "int"))
                    .param(Param::new("sort", format!("{string}[]"))),
                "findWithFilter(filter, page, size, sort)",
            ))
            .method(
                Method::new("removeEntity")
                    .overrides()
                    .returns(&domain)
                    .param(Param::new("id", &string))
                    .line(format!(
                        "{optional}<{domain}> entityOptional = persistenceAdapter.getEntityById(id);"
                    ))
                    .control(
                        "if (entityOptional.isEmpty())",
                        vec![CodeFragment::line(format!(
                            "throw new {invalid}({string}.format(\"Entity with id %s was not found.\", id));"
                        ))],
                    )
                    .line("return persistenceAdapter.removeEntity(entityOptional.get());"),
            );

        JavaFile::new(&imports).add(service).render()
    }
}
