use std::path::PathBuf;

use eyre::Result;
use twin_codegen::builder::CodeFragment;
use twin_core::{GeneratedFile, uncapitalize};
use twin_model::TypeName;

use super::{known, source_path};
use crate::{
    Annotation, ArtifactNames, Field, JavaClass, JavaFile, JavaImports, Method, Param,
    ast::string_array,
};

/// `<Simple>Controller`: REST endpoints under `/api/v1/<simple>` exchanging
/// transfer objects with the service.
pub struct ControllerFile {
    name: TypeName,
    domain: TypeName,
    transfer: TypeName,
    service: TypeName,
}

impl ControllerFile {
    pub fn new(names: &ArtifactNames<'_>) -> Result<Self> {
        Ok(Self {
            name: names.controller()?,
            domain: names.domain().clone(),
            transfer: names.transfer().clone(),
            service: names.service()?,
        })
    }

    pub fn base_path(&self) -> String {
        format!("/api/v1/{}", uncapitalize(self.domain.name()))
    }
}

/// Spellings used by the endpoint builders.
struct Web {
    transfer: String,
    domain: String,
    string: String,
    invalid: String,
    assert: String,
    optional: String,
    response: String,
    status: String,
    page: String,
    list: String,
    request_body: String,
    path_variable: String,
    request_param: String,
    response_body: String,
    response_status: String,
    get: String,
    post: String,
    put: String,
    delete: String,
}

impl Web {
    fn new(imports: &mut JavaImports, transfer: &TypeName, domain: &TypeName) -> Self {
        let mut web = |annotation: &str| imports.use_qualified(&known::web(annotation));
        let request_body = web("RequestBody");
        let path_variable = web("PathVariable");
        let request_param = web("RequestParam");
        let response_body = web("ResponseBody");
        let response_status = web("ResponseStatus");
        let get = web("GetMapping");
        let post = web("PostMapping");
        let put = web("PutMapping");
        let delete = web("DeleteMapping");
        Self {
            transfer: imports.use_type(transfer),
            domain: imports.use_type(domain),
            string: imports.use_qualified(known::STRING),
            invalid: imports.use_qualified(known::VALIDATION_EXCEPTION),
            assert: imports.use_qualified(known::ASSERT),
            optional: imports.use_qualified(known::OPTIONAL),
            response: imports.use_qualified(known::RESPONSE_ENTITY),
            status: imports.use_qualified(known::HTTP_STATUS),
            page: imports.use_qualified(known::PAGE),
            list: imports.use_qualified(known::LIST),
            request_body,
            path_variable,
            request_param,
            response_body,
            response_status,
            get,
            post,
            put,
            delete,
        }
    }

    fn response_of_transfer(&self) -> String {
        format!("{}<{}>", self.response, self.transfer)
    }

    fn id_param(&self) -> Param {
        Param::new("id", &self.string).annotated(Annotation::new(&self.path_variable))
    }

    fn body_param(&self) -> Param {
        Param::new("entity", &self.transfer).annotated(Annotation::new(&self.request_body))
    }

    fn query_param(&self, name: &str, ty: impl Into<String>) -> Param {
        Param::new(name, ty).annotated(Annotation::new(&self.request_param).value_str(name))
    }

    fn throw(&self, message: &str, args: &str) -> CodeFragment {
        CodeFragment::line(format!(
            "throw new {}({}.format(\"{message}\", {args}));",
            self.invalid, self.string
        ))
    }

    fn lookup(&self) -> String {
        format!(
            "{}<{}> entityOptional = service.getEntityById(id);",
            self.optional, self.domain
        )
    }

    fn create(&self) -> Method {
        Method::new("createEntity")
            .annotation(Annotation::new(&self.post))
            .returns(self.response_of_transfer())
            .param(self.body_param())
            .line(format!("{}.notNull(entity);", self.assert))
            .control(
                "if (entity.getId() != null)",
                vec![
                    CodeFragment::line(format!(
                        "{}<{}> entityOptional = service.getEntityById(entity.getId());",
                        self.optional, self.domain
                    )),
                    CodeFragment::braced(
                        "if (entityOptional.isPresent())",
                        vec![self.throw(
                            "An entity with id %s already exists and cannot be created again.",
                            "entity.getId()",
                        )],
                    ),
                ],
            )
            .line(format!(
                "{} createdEntity = service.createEntity(entity.toDomain());",
                self.domain
            ))
            .line(format!(
                "return {}.ok({}.fromDomain(createdEntity));",
                self.response, self.transfer
            ))
    }

    fn update(&self) -> Method {
        Method::new("updateEntity")
            .annotation(Annotation::new(&self.put).value_str("/{id}"))
            .returns(self.response_of_transfer())
            .param(self.id_param())
            .param(self.body_param())
            .line(format!("{}.notNull(id);", self.assert))
            .line(format!("{}.notNull(entity);", self.assert))
            .control(
                "if (!id.equals(entity.getId()))",
                vec![self.throw(
                    "Id %s does not match the entity id %s.",
                    "id, entity.getId()",
                )],
            )
            .line(self.lookup())
            .control(
                "if (entityOptional.isEmpty())",
                vec![self.throw("Entity %s was not found and cannot be updated.", "id")],
            )
            .line(format!(
                "{} updatedEntity = service.updateEntity(entity.toDomain());",
                self.domain
            ))
            .line(format!(
                "return {}.ok({}.fromDomain(updatedEntity));",
                self.response, self.transfer
            ))
    }

    fn remove(&self) -> Method {
        Method::new("removeEntity")
            .annotation(Annotation::new(&self.delete).value_str("/{id}"))
            .returns(self.response_of_transfer())
            .param(self.id_param())
            .line(self.lookup())
            .control(
                "if (entityOptional.isEmpty())",
                vec![self.throw("Entity with id %s was not found.", "id")],
            )
            .line(format!(
                "{} removedEntity = service.removeEntity(id);",
                self.domain
            ))
            .line(format!(
                "return {}.ok({}.fromDomain(removedEntity));",
                self.response, self.transfer
            ))
    }

    fn get_by_id(&self) -> Method {
        Method::new("getEntityById")
            .annotation(Annotation::new(&self.get).value_str("/{id}"))
            .returns(self.response_of_transfer())
            .param(self.id_param())
            .fragment(CodeFragment::block(
                "try {",
                vec![
                    CodeFragment::line(self.lookup()),
                    CodeFragment::line(format!(
                        "return entityOptional.map(entity -> {}.ok({}.fromDomain(entity))).orElseGet(() -> {}.notFound().build());",
                        self.response, self.transfer, self.response
                    )),
                ],
                None,
            ))
            .fragment(CodeFragment::braced(
                "} catch (Exception e)",
                vec![CodeFragment::line(format!(
                    "return {}.status({}.INTERNAL_SERVER_ERROR).build();",
                    self.response, self.status
                ))],
            ))
    }

    /// A `GET` query endpoint answering `200 OK` with a response body.
    fn query(&self, name: &str, path: &str, params: &[&str], returns: String) -> Method {
        let mapping = Annotation::new(&self.get)
            .value_str(path)
            .member("params", string_array(params));
        let method = Method::new(name)
            .annotation(mapping)
            .annotation(
                Annotation::new(&self.response_status).member("value", format!("{}.OK", self.status)),
            )
            .annotation(Annotation::new(&self.response_body))
            .returns(returns);
        params.iter().fold(method, |method, param| {
            let ty = match *param {
                "page" | "size" => "int".to_string(),
                "sort" => format!("{}[]", self.string),
                _ => self.string.clone(),
            };
            method.param(self.query_param(param, ty))
        })
    }

    fn queries(&self) -> Vec<Method> {
        let page = format!("{}<{}>", self.page, self.transfer);
        vec![
            self.query("findAll", "/findAll", &["page", "size"], page.clone())
                .line("return service.findAll(page, size);"),
            self.query("findAll", "/findAll", &["page", "size", "sort"], page.clone())
                .line("return service.findAll(page, size, sort);"),
            Method::new("findAll")
                .annotation(
                    Annotation::new(&self.get)
                        .value_str("/findAll")
                        .member("params", string_array(&["ids"])),
                )
                .annotation(
                    Annotation::new(&self.response_status)
                        .member("value", format!("{}.OK", self.status)),
                )
                .annotation(Annotation::new(&self.response_body))
                .returns(format!("{}<{}>", self.list, self.transfer))
                .param(
                    Param::new("ids", format!("{}<{}>", self.list, self.string))
                        .annotated(Annotation::new(&self.request_param).member("required", "true")),
                )
                .line("return service.findAll(ids);"),
            self.query(
                "find",
                "/findWithFilter",
                &["filter", "page", "size"],
                page.clone(),
            )
            .line("return service.findWithFilter(filter, page, size);"),
            self.query(
                "find",
                "/findWithFilterAndSort",
                &["filter", "page", "size", "sort"],
                page,
            )
            .line("return service.findWithFilter(filter, page, size, sort);"),
        ]
    }
}

impl GeneratedFile for ControllerFile {
    fn path(&self) -> PathBuf {
        source_path(&self.name)
    }

    fn render(&self) -> String {
        let mut imports = JavaImports::new(self.name.namespace());
        imports.declare(self.name.name());
        let rest_controller = imports.use_qualified(&known::web("RestController"));
        let request_mapping = imports.use_qualified(&known::web("RequestMapping"));
        let autowired = imports.use_qualified(known::AUTOWIRED);
        let service = imports.use_type(&self.service);
        let web = Web::new(&mut imports, &self.transfer, &self.domain);

        let mut controller = JavaClass::new(self.name.name())
            .annotation(Annotation::new(rest_controller))
            .annotation(Annotation::new(request_mapping).value_str(&self.base_path()))
            .field(Field::new("service", &service).final_())
            .method(
                Method::constructor(self.name.name())
                    .annotation(Annotation::new(autowired))
                    .param(Param::new("service", &service))
                    .line("this.service = service;"),
            )
            .method(web.create())
            .method(web.update())
            .method(web.remove())
            .method(web.get_by_id());
        for query in web.queries() {
            controller = controller.method(query);
        }

        JavaFile::new(&imports).add(controller).render()
    }
}
