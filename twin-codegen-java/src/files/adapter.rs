use std::path::PathBuf;

use eyre::Result;
use twin_core::GeneratedFile;
use twin_model::TypeName;

use super::{known, source_path};
use crate::{Annotation, ArtifactNames, Field, JavaClass, JavaFile, JavaImports, Method, Param};

const PAGE_ENTITY: &str = "PageEntity";
const LIST_ENTITY: &str = "ListEntity";

/// `<Simple>PersistenceAdapter`: the persistence port of the domain class,
/// backed by the JPA repository and answering paged queries with transfer
/// objects.
pub struct AdapterFile {
    name: TypeName,
    domain: TypeName,
    transfer: TypeName,
    entity: TypeName,
    repository: TypeName,
    to_transfer: String,
}

impl AdapterFile {
    pub fn new(names: &ArtifactNames<'_>) -> Result<Self> {
        Ok(Self {
            name: names.adapter()?,
            domain: names.domain().clone(),
            transfer: names.transfer().clone(),
            entity: names.entity()?,
            repository: names.repository()?,
            to_transfer: names.to_transfer_method(),
        })
    }
}

/// Spellings shared by every method of the adapter.
struct Spelled {
    domain: String,
    transfer: String,
    entity: String,
    string: String,
    page: String,
    pageable: String,
    page_request: String,
    sort: String,
    sort_utils: String,
    list: String,
    optional: String,
    to_transfer: String,
}

impl Spelled {
    fn page_of_transfers(&self) -> String {
        format!("{}<{}>", self.page, self.transfer)
    }

    fn list_of_transfers(&self) -> String {
        format!("{}<{}>", self.list, self.transfer)
    }

    fn pageable(&self, sorted: bool) -> String {
        if sorted {
            format!(
                "{} pageable = {}.of(page, size, {}.by({}.convertSortToJpa(sort)));",
                self.pageable, self.page_request, self.sort, self.sort_utils
            )
        } else {
            format!(
                "{} pageable = {}.of(page, size);",
                self.pageable, self.page_request
            )
        }
    }

    /// Query a page of entities and wrap it as a page of transfer objects.
    fn paged(&self, method: Method, query: &str, sorted: bool) -> Method {
        method
            .overrides()
            .returns(self.page_of_transfers())
            .line(self.pageable(sorted))
            .line(format!(
                "{}<{}> result = repository.{query};",
                self.page, self.entity
            ))
            .line(format!(
                "{} list = result.stream().map({}::{}).toList();",
                self.list_of_transfers(),
                self.entity,
                self.to_transfer
            ))
            .line(format!(
                "return new {PAGE_ENTITY}(list, pageable, result.getTotalElements());"
            ))
    }

    fn paging_params(&self, method: Method) -> Method {
        method
            .param(Param::new("page", "int"))
            .param(Param::new("size", "int"))
    }

    fn sort_param(&self, method: Method) -> Method {
        method.param(Param::new("sort", format!("{}[]", self.string)))
    }
}

impl AdapterFile {
    fn spell(&self, imports: &mut JavaImports) -> Spelled {
        Spelled {
            domain: imports.use_type(&self.domain),
            transfer: imports.use_type(&self.transfer),
            entity: imports.use_type(&self.entity),
            string: imports.use_qualified(known::STRING),
            page: imports.use_qualified(known::PAGE),
            pageable: imports.use_qualified(known::PAGEABLE),
            page_request: imports.use_qualified(known::PAGE_REQUEST),
            sort: imports.use_qualified(known::SORT),
            sort_utils: imports.use_qualified(known::SORT_UTILS),
            list: imports.use_qualified(known::LIST),
            optional: imports.use_qualified(known::OPTIONAL),
            to_transfer: self.to_transfer.clone(),
        }
    }

    fn crud_methods(&self, s: &Spelled) -> Vec<Method> {
        vec![
            Method::new("saveEntity")
                .overrides()
                .returns(&s.domain)
                .param(Param::new("entity", &s.domain))
                .line(format!(
                    "{} persistenceEntity = mapper.toEntity(entity);",
                    s.entity
                ))
                .line(format!(
                    "{} savedEntity = repository.save(persistenceEntity);",
                    s.entity
                ))
                .line("return mapper.toDomain(savedEntity);"),
            Method::new("removeEntity")
                .overrides()
                .returns(&s.domain)
                .param(Param::new("entity", &s.domain))
                .line("repository.deleteById(entity.getId().toString());")
                .line("return entity;"),
            Method::new("getEntityById")
                .overrides()
                .returns(format!("{}<{}>", s.optional, s.domain))
                .param(Param::new("id", &s.string))
                .line(format!(
                    "{}<{}> entityOptional = repository.findById(id);",
                    s.optional, s.entity
                ))
                .line("return entityOptional.map(mapper::toDomain);"),
            Method::new("getEntityByName")
                .overrides()
                .returns(format!("{}<{}>", s.optional, s.domain))
                .param(Param::new("name", &s.string))
                .line(format!("return {}.empty();", s.optional)),
            Method::new("existsEntityByName")
                .overrides()
                .returns("boolean")
                .param(Param::new("name", &s.string))
                .line("return false;"),
            Method::new("findById")
                .overrides()
                .returns(&s.transfer)
                .param(Param::new("id", &s.string))
                .line(format!(
                    "{}<{}> byId = repository.findById(id);",
                    s.optional, s.entity
                ))
                .line(format!(
                    "return byId.map({}::{}).orElse(null);",
                    s.entity, s.to_transfer
                )),
        ]
    }

    fn query_methods(&self, s: &Spelled) -> Vec<Method> {
        let filter = |m: Method| m.param(Param::new("filter", &s.string));
        vec![
            s.paged(
                s.paging_params(Method::new("findAll")),
                "findAll(pageable)",
                false,
            ),
            s.paged(
                s.sort_param(s.paging_params(Method::new("findAll"))),
                "findAll(pageable)",
                true,
            ),
            Method::new("findAll")
                .overrides()
                .returns(s.list_of_transfers())
                .param(Param::new("ids", format!("{}<{}>", s.list, s.string)))
                .line(format!(
                    "{}<{}> result = repository.findAllById(ids);",
                    s.list, s.entity
                ))
                .line(format!(
                    "return result.stream().map({}::{}).toList();",
                    s.entity, s.to_transfer
                )),
            s.paged(
                s.paging_params(filter(Method::new("findWithFilter"))),
                "findAll(filter, pageable)",
                false,
            ),
            s.paged(
                s.sort_param(s.paging_params(filter(Method::new("findWithFilter")))),
                "findAll(filter, pageable)",
                true,
            ),
        ]
    }

    fn inner_classes(&self, s: &Spelled, imports: &mut JavaImports) -> [JavaClass; 2] {
        let page_impl = imports.use_qualified(known::PAGE_IMPL);
        let array_list = imports.use_qualified(known::ARRAY_LIST);
        let collection = imports.use_qualified(known::COLLECTION);
        let content = Param::new("content", s.list_of_transfers());

        let page = JavaClass::new(PAGE_ENTITY)
            .static_()
            .extends(format!("{page_impl}<{}>", s.transfer))
            .method(
                Method::constructor(PAGE_ENTITY)
                    .param(content.clone())
                    .line("super(content);"),
            )
            .method(
                Method::constructor(PAGE_ENTITY)
                    .param(content)
                    .param(Param::new("pageable", &s.pageable))
                    .param(Param::new("total", "long"))
                    .line("super(content, pageable, total);"),
            );

        let list = JavaClass::new(LIST_ENTITY)
            .static_()
            .extends(format!("{array_list}<{}>", s.transfer))
            .method(
                Method::constructor(LIST_ENTITY)
                    .param(Param::new(
                        "c",
                        format!("{collection}<? extends {}>", s.transfer),
                    ))
                    .line("super(c);"),
            );

        [page, list]
    }
}

impl GeneratedFile for AdapterFile {
    fn path(&self) -> PathBuf {
        source_path(&self.name)
    }

    fn render(&self) -> String {
        let mut imports = JavaImports::new(self.name.namespace());
        imports.declare(self.name.name());
        imports.declare(PAGE_ENTITY);
        imports.declare(LIST_ENTITY);

        let component = imports.use_qualified(known::COMPONENT);
        let autowired = imports.use_qualified(known::AUTOWIRED);
        let port = imports.use_qualified(known::ENTITY_PERSISTENCE_PORT);
        let query = imports.use_qualified(known::FIND_WITH_FILTER_QUERY);
        let mapper = imports.use_qualified(known::ENTITY_PERSISTENCE_MAPPER);
        let repository = imports.use_type(&self.repository);
        let s = self.spell(&mut imports);
        let [page, list] = self.inner_classes(&s, &mut imports);

        let mut adapter = JavaClass::new(self.name.name())
            .annotation(Annotation::new(component))
            .implements(format!("{port}<{}, {}>", s.domain, s.domain))
            .implements(format!("{query}<{}, {}>", s.string, s.transfer))
            .field(Field::new("repository", repository).annotation(Annotation::new(&autowired)))
            .field(
                Field::new("mapper", format!("{mapper}<{}, {}>", s.domain, s.entity))
                    .annotation(Annotation::new(&autowired)),
            );
        for method in self.crud_methods(&s).into_iter().chain(self.query_methods(&s)) {
            adapter = adapter.method(method);
        }
        let adapter = adapter.inner(page).inner(list);

        JavaFile::new(&imports).add(adapter).render()
    }
}
