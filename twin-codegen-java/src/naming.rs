//! Java naming conventions for transfer fields and scaffolding artifacts.

use eyre::{Result, eyre};
use twin_codegen::language::ClassUnit;
use twin_core::capitalize;
use twin_manifest::{Layer, Manifest};
use twin_model::{Primitive, TransferType, TypeName};

/// Lombok getter name for a field: `getName`, or `isActive` for a primitive
/// `boolean` (kept as is when the field already reads `isActive`).
pub fn getter_name(field: &str, ty: &TransferType) -> String {
    if ty.is_primitive(Primitive::Boolean) {
        if is_prefixed(field) {
            field.to_string()
        } else {
            format!("is{}", capitalize(field))
        }
    } else {
        format!("get{}", capitalize(field))
    }
}

fn is_prefixed(field: &str) -> bool {
    field
        .strip_prefix("is")
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_uppercase)
}

/// Names of everything generated or referenced around one domain class.
///
/// Every scaffolding type lives in `<layer package><package_suffix>`.
#[derive(Debug, Clone, Copy)]
pub struct ArtifactNames<'a> {
    domain: &'a TypeName,
    transfer: &'a TypeName,
    suffix: &'a str,
    transfer_suffix: &'a str,
    manifest: &'a Manifest,
}

impl<'a> ArtifactNames<'a> {
    pub fn new(unit: &ClassUnit<'a>) -> Self {
        Self {
            domain: &unit.class.domain,
            transfer: &unit.class.name,
            suffix: &unit.entry.package_suffix,
            transfer_suffix: &unit.manifest.generator.transfer_suffix,
            manifest: unit.manifest,
        }
    }

    pub fn domain(&self) -> &'a TypeName {
        self.domain
    }

    pub fn transfer(&self) -> &'a TypeName {
        self.transfer
    }

    /// Simple name of the domain class.
    pub fn simple(&self) -> &'a str {
        self.domain.name()
    }

    /// Method a persistence entity exposes to build a transfer object,
    /// e.g. `toTransfer`.
    pub fn to_transfer_method(&self) -> String {
        format!("to{}", capitalize(self.transfer_suffix))
    }

    /// `<persistence>.<Simple>Entity`, written by hand and only referenced.
    pub fn entity(&self) -> Result<TypeName> {
        self.in_layer(Layer::Persistence, "Entity")
    }

    pub fn repository(&self) -> Result<TypeName> {
        self.in_layer(Layer::Repository, "JpaRepository")
    }

    pub fn mapper(&self) -> Result<TypeName> {
        self.in_layer(Layer::Mapper, "PersistenceMapper")
    }

    pub fn adapter(&self) -> Result<TypeName> {
        self.in_layer(Layer::Adapter, "PersistenceAdapter")
    }

    pub fn service(&self) -> Result<TypeName> {
        self.in_layer(Layer::Service, "Service")
    }

    pub fn controller(&self) -> Result<TypeName> {
        self.in_layer(Layer::Controller, "Controller")
    }

    /// The configured security adapter class. It is a class name, not a
    /// package, so the package suffix does not apply.
    pub fn security_adapter(&self) -> Result<TypeName> {
        self.layer(Layer::SecurityAdapter).map(TypeName::parse)
    }

    fn in_layer(&self, layer: Layer, suffix: &str) -> Result<TypeName> {
        let package = self.layer(layer)?;
        Ok(TypeName::new(
            format!("{}{}", package, self.suffix),
            format!("{}{}", self.simple(), suffix),
        ))
    }

    fn layer(&self, layer: Layer) -> Result<&'a str> {
        self.manifest
            .layer(layer)
            .ok_or_else(|| eyre!("layer '{}' is not configured in [layers]", layer.key()))
    }
}
