//! One [`GeneratedFile`](twin_core::GeneratedFile) per artifact kind.

mod adapter;
mod controller;
mod mapper;
mod repository;
mod service;
mod transfer;

pub use adapter::AdapterFile;
pub use controller::ControllerFile;
pub use mapper::MapperFile;
pub use repository::RepositoryFile;
pub use service::ServiceFile;
pub use transfer::TransferFile;

use std::path::PathBuf;

use twin_core::package_path;
use twin_model::TypeName;

/// `com/acme/Foo.java` for `com.acme.Foo`.
fn source_path(name: &TypeName) -> PathBuf {
    package_path(name.namespace()).join(format!("{}.java", name.name()))
}

/// Framework types the generated sources bind to.
pub(crate) mod known {
    pub const GETTER: &str = "lombok.Getter";
    pub const BUILDER: &str = "lombok.Builder";
    pub const JSON_IDENTITY_INFO: &str = "com.fasterxml.jackson.annotation.JsonIdentityInfo";
    pub const OBJECT_ID_GENERATORS: &str = "com.fasterxml.jackson.annotation.ObjectIdGenerators";

    pub const ARRAYS: &str = "java.util.Arrays";
    pub const ARRAY_LIST: &str = "java.util.ArrayList";
    pub const COLLECTION: &str = "java.util.Collection";
    pub const COLLECTORS: &str = "java.util.stream.Collectors";
    pub const LIST: &str = "java.util.List";
    pub const OPTIONAL: &str = "java.util.Optional";
    pub const STRING: &str = "java.lang.String";
    pub const LONG: &str = "java.lang.Long";

    pub const AUTOWIRED: &str = "org.springframework.beans.factory.annotation.Autowired";
    pub const COMPONENT: &str = "org.springframework.stereotype.Component";
    pub const REPOSITORY: &str = "org.springframework.stereotype.Repository";
    pub const PAGE: &str = "org.springframework.data.domain.Page";
    pub const PAGE_IMPL: &str = "org.springframework.data.domain.PageImpl";
    pub const PAGEABLE: &str = "org.springframework.data.domain.Pageable";
    pub const PAGE_REQUEST: &str = "org.springframework.data.domain.PageRequest";
    pub const SORT: &str = "org.springframework.data.domain.Sort";
    pub const HTTP_STATUS: &str = "org.springframework.http.HttpStatus";
    pub const RESPONSE_ENTITY: &str = "org.springframework.http.ResponseEntity";

    const WEB: &str = "org.springframework.web.bind.annotation";
    pub fn web(annotation: &str) -> String {
        format!("{WEB}.{annotation}")
    }

    pub const COMMON_JPA_REPOSITORY: &str =
        "br.com.archbase.ddd.infraestructure.persistence.jpa.repository.ArchbaseCommonJpaRepository";
    pub const ENTITY_PERSISTENCE_MAPPER: &str =
        "br.com.archbase.ddd.domain.contracts.EntityPersistenceMapper";
    pub const ENTITY_PERSISTENCE_PORT: &str =
        "br.com.archbase.ddd.domain.contracts.EntityPersistencePort";
    pub const FIND_WITH_FILTER_QUERY: &str =
        "br.com.archbase.ddd.domain.contracts.FindDataWithFilterQuery";
    pub const USE_CASE: &str =
        "br.com.archbase.ddd.domain.contracts.CreateOrUpdateOrRemoveEntityUseCase";
    pub const SORT_UTILS: &str = "br.com.archbase.query.rsql.jpa.SortUtils";
    pub const VALIDATION_RESULT: &str =
        "br.com.archbase.validation.fluentvalidator.context.ArchbaseValidationResult";
    pub const VALIDATION_EXCEPTION: &str =
        "br.com.archbase.validation.exception.ArchbaseValidationException";
    pub const ASSERT: &str = "br.com.archbase.shared.kernel.utils.ArchbaseAssert";
}
