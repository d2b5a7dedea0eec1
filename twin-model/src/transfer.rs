//! Transfer-side IR: conversion plans and synthesized transfer classes.
//!
//! Everything a renderer needs lives here, so no renderer ever has to
//! classify a type again.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::{CollectionType, DeclaredType, Primitive, TypeClassification, TypeName};

/// Type of a field on the transfer side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransferType {
    Primitive(Primitive),
    Named(TypeName),
    Array(Box<TransferType>),
    Collection {
        container: TypeName,
        element: Box<TransferType>,
    },
    /// A collection container without a type argument.
    RawCollection(TypeName),
}

impl TransferType {
    /// Every class name the type mentions, in visiting order.
    pub fn names(&self) -> Vec<&TypeName> {
        let mut out = Vec::new();
        self.collect_names(&mut out);
        out
    }

    fn collect_names<'a>(&'a self, out: &mut Vec<&'a TypeName>) {
        match self {
            Self::Primitive(_) => {}
            Self::Named(name) | Self::RawCollection(name) => out.push(name),
            Self::Array(element) => element.collect_names(out),
            Self::Collection { container, element } => {
                out.push(container);
                element.collect_names(out);
            }
        }
    }

    pub fn is_primitive(&self, primitive: Primitive) -> bool {
        matches!(self, Self::Primitive(p) if *p == primitive)
    }
}

impl fmt::Display for TransferType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(f, "{p}"),
            Self::Named(name) | Self::RawCollection(name) => write!(f, "{name}"),
            Self::Array(element) => write!(f, "{element}[]"),
            Self::Collection { container, element } => write!(f, "{container}<{element}>"),
        }
    }
}

impl Serialize for TransferType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// What a collection conversion yields when its source is null.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NullPolicy {
    /// Null stays null.
    Propagate,
    /// Null becomes a fresh, empty collection.
    EmptyCollection,
}

/// A conversion expression for one field in one direction.
///
/// The expression always reads the same-named field of the source object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum Expr {
    /// Copy the value unchanged.
    Read,
    /// Convert the identifier wrapper to its string form.
    Stringify,
    /// Null-guarded conversion of a single nested value.
    Nested { domain: TypeName, transfer: TypeName },
    /// Element-wise conversion of a collection.
    Each {
        domain: TypeName,
        transfer: TypeName,
        collection: CollectionType,
        on_null: NullPolicy,
    },
    /// Element-wise conversion of an array; null propagates.
    EachArray { domain: TypeName, transfer: TypeName },
    /// No conversion exists; the field is left unset.
    Unsupported { reason: String },
}

impl Expr {
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported { .. })
    }

    fn collect_names<'a>(&'a self, out: &mut Vec<&'a TypeName>) {
        match self {
            Self::Read | Self::Stringify | Self::Unsupported { .. } => {}
            Self::Nested { domain, transfer } | Self::EachArray { domain, transfer } => {
                out.push(domain);
                out.push(transfer);
            }
            Self::Each {
                domain,
                transfer,
                collection,
                ..
            } => {
                out.push(domain);
                out.push(transfer);
                out.push(&collection.implementation);
            }
        }
    }
}

/// Classification and conversions for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPlan {
    pub field: String,
    #[serde(serialize_with = "display")]
    pub declared: DeclaredType,
    pub classification: TypeClassification,
    pub transfer_type: TransferType,
    pub to_transfer: Expr,
    pub to_domain: Expr,
    pub inherited: bool,
}

/// Per-field conversion plans of one domain class, in field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionPlan {
    pub domain: TypeName,
    pub fields: Vec<FieldPlan>,
}

/// A field of the transfer class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TransferType,
    #[serde(serialize_with = "display")]
    pub declared: DeclaredType,
    pub classification: TypeClassification,
}

/// One `field = expr` step of a conversion routine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub field: String,
    pub expr: Expr,
}

/// A synthesized transfer class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedClass {
    /// Qualified transfer class name.
    pub name: TypeName,
    /// Qualified domain class name.
    pub domain: TypeName,
    pub fields: Vec<TransferField>,
    /// Steps of the domain → transfer routine.
    pub from_domain: Vec<Assignment>,
    /// Steps of the transfer → domain routine.
    pub to_domain: Vec<Assignment>,
}

impl GeneratedClass {
    pub fn field(&self, name: &str) -> Option<&TransferField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields whose reverse conversion is left out.
    pub fn unsupported_reverse(&self) -> impl Iterator<Item = &Assignment> {
        self.to_domain.iter().filter(|a| !a.expr.is_supported())
    }

    /// Every class name referenced by field types or conversions, sorted.
    pub fn referenced_types(&self) -> BTreeSet<&TypeName> {
        let mut names = Vec::new();
        for field in &self.fields {
            field.ty.collect_names(&mut names);
        }
        for assignment in self.from_domain.iter().chain(&self.to_domain) {
            assignment.expr.collect_names(&mut names);
        }
        names.into_iter().collect()
    }
}

fn display<T: fmt::Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection_type;

    fn role() -> TypeName {
        TypeName::new("com.acme.domain", "Role")
    }

    fn role_transfer() -> TypeName {
        TypeName::new("com.acme.transfer", "RoleTransfer")
    }

    #[test]
    fn test_transfer_type_display() {
        let roles = TransferType::Collection {
            container: TypeName::new("java.util", "List"),
            element: Box::new(TransferType::Named(role_transfer())),
        };
        assert_eq!(
            roles.to_string(),
            "java.util.List<com.acme.transfer.RoleTransfer>"
        );
        let bytes = TransferType::Array(Box::new(TransferType::Primitive(Primitive::Byte)));
        assert_eq!(bytes.to_string(), "byte[]");
        assert!(bytes.names().is_empty());
    }

    #[test]
    fn test_referenced_types() {
        let list = collection_type(&TypeName::new("java.util", "List")).unwrap();
        let class = GeneratedClass {
            name: TypeName::new("com.acme.transfer", "UserTransfer"),
            domain: TypeName::new("com.acme.domain", "User"),
            fields: vec![TransferField {
                name: "roles".into(),
                ty: TransferType::Collection {
                    container: list.container.clone(),
                    element: Box::new(TransferType::Named(role_transfer())),
                },
                declared: DeclaredType::class(role()),
                classification: TypeClassification::ComplexCollection {
                    collection: list.clone(),
                    element: role(),
                },
            }],
            from_domain: vec![],
            to_domain: vec![Assignment {
                field: "roles".into(),
                expr: Expr::Each {
                    domain: role(),
                    transfer: role_transfer(),
                    collection: list,
                    on_null: NullPolicy::EmptyCollection,
                },
            }],
        };

        let names: Vec<String> = class
            .referenced_types()
            .into_iter()
            .map(TypeName::qualified)
            .collect();
        assert_eq!(
            names,
            vec![
                "com.acme.domain.Role",
                "com.acme.transfer.RoleTransfer",
                "java.util.ArrayList",
                "java.util.List",
            ]
        );
        assert_eq!(class.unsupported_reverse().count(), 0);
    }

    #[test]
    fn test_expr_serializes_tagged() {
        let json = serde_json::to_value(Expr::Nested {
            domain: role(),
            transfer: role_transfer(),
        })
        .unwrap();
        assert_eq!(json["op"], "nested");
        assert_eq!(json["transfer"], "com.acme.transfer.RoleTransfer");
    }
}
