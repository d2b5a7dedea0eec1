//! Core operations.
//!
//! The business logic behind each command, separated from argument parsing
//! and output rendering.

pub mod check;
pub mod generate;
pub mod plan;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use plan::plan;

use twin_codegen::pipeline::Diagnostic;

/// A diagnostic as one line, with its location when it has one.
fn describe(diagnostic: &Diagnostic) -> String {
    match &diagnostic.location {
        Some(location) => format!("{} (at {location})", diagnostic.message),
        None => diagnostic.message.clone(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use twin_manifest::{Manifest, ModelFile};
    use twin_model::ClassModel;

    /// `Customer` synthesizes; `Ghost` is configured but never modelled.
    pub fn fixtures() -> (Manifest, ClassModel) {
        let manifest: Manifest = r#"
[generator]
domain_namespace = "com.acme.domain"
transfer_namespace = "com.acme.transfer"

[[classes]]
name = "com.acme.domain.Customer"

[[classes]]
name = "com.acme.domain.Ghost"
"#
        .parse()
        .unwrap();
        let model = r#"
[[classes]]
name = "com.acme.domain.Customer"
fields = [
  { name = "id", type = "ArchbaseIdentifier" },
  { name = "name", type = "String" },
  { name = "tags", type = "List" },
]
"#
        .parse::<ModelFile>()
        .unwrap()
        .into_model();
        (manifest, model)
    }
}
