//! Field type classifications.

use std::fmt;

use serde::Serialize;

use crate::{CollectionType, Primitive, TypeName};

/// Why a collection's element type could not be determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "count")]
pub enum Ambiguity {
    /// The container was declared without a type argument.
    MissingArgument,
    /// The type argument is a wildcard.
    Wildcard,
    /// The container carries the wrong number of type arguments.
    Arity(usize),
}

impl fmt::Display for Ambiguity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArgument => f.write_str("no type argument"),
            Self::Wildcard => f.write_str("wildcard type argument"),
            Self::Arity(n) => write!(f, "{n} type arguments, expected 1"),
        }
    }
}

/// Element shapes the conversion engine has no rule for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedShape {
    /// A collection or array of identifier wrappers.
    IdentifierElement,
    /// A collection or array whose element is itself a collection or array.
    NestedContainer,
}

impl fmt::Display for UnsupportedShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdentifierElement => f.write_str("identifier wrapper used as an element type"),
            Self::NestedContainer => f.write_str("nested collection or array element"),
        }
    }
}

/// How a declared type maps across the domain/transfer boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TypeClassification {
    /// The identifier wrapper; a string on the transfer side.
    Identifier,
    Primitive { primitive: Primitive },
    /// Boxed primitive or string.
    BoxedOrString { ty: TypeName },
    /// Date, time and arbitrary-precision number types.
    KnownSimple { ty: TypeName },
    Enumeration { ty: TypeName },
    /// `byte[]`, copied by reference.
    ByteBlob,
    /// A reference to another domain class.
    ComplexSingle { ty: TypeName },
    /// A collection of domain class references.
    ComplexCollection {
        collection: CollectionType,
        element: TypeName,
    },
    /// A collection whose elements pass through unchanged.
    Collection {
        collection: CollectionType,
        element: Box<TypeClassification>,
    },
    /// A collection whose element type could not be determined.
    RawCollection {
        collection: CollectionType,
        ambiguity: Ambiguity,
    },
    /// An array of a non-byte element.
    Array { element: Box<TypeClassification> },
    /// A shape with no conversion rule.
    Unsupported { shape: UnsupportedShape },
}

impl TypeClassification {
    /// Whether values of this classification are copied unchanged in both
    /// directions.
    pub fn is_pass_through(&self) -> bool {
        match self {
            Self::Primitive { .. }
            | Self::BoxedOrString { .. }
            | Self::KnownSimple { .. }
            | Self::Enumeration { .. }
            | Self::ByteBlob
            | Self::Collection { .. }
            | Self::RawCollection { .. } => true,
            Self::Array { element } => element.is_pass_through(),
            Self::Identifier
            | Self::ComplexSingle { .. }
            | Self::ComplexCollection { .. }
            | Self::Unsupported { .. } => false,
        }
    }

    /// Whether the type is a collection or array.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Self::ByteBlob
                | Self::ComplexCollection { .. }
                | Self::Collection { .. }
                | Self::RawCollection { .. }
                | Self::Array { .. }
        )
    }

    /// Short label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Primitive { .. } => "primitive",
            Self::BoxedOrString { .. } => "boxed-or-string",
            Self::KnownSimple { .. } => "known-simple",
            Self::Enumeration { .. } => "enumeration",
            Self::ByteBlob => "byte-blob",
            Self::ComplexSingle { .. } => "complex",
            Self::ComplexCollection { .. } => "complex-collection",
            Self::Collection { .. } => "collection",
            Self::RawCollection { .. } => "raw-collection",
            Self::Array { .. } => "array",
            Self::Unsupported { .. } => "unsupported",
        }
    }
}

impl fmt::Display for TypeClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier | Self::ByteBlob => f.write_str(self.label()),
            Self::Primitive { primitive } => write!(f, "primitive({primitive})"),
            Self::BoxedOrString { ty }
            | Self::KnownSimple { ty }
            | Self::Enumeration { ty }
            | Self::ComplexSingle { ty } => write!(f, "{}({})", self.label(), ty.name()),
            Self::ComplexCollection {
                collection,
                element,
            } => write!(
                f,
                "complex-collection({}<{}>)",
                collection.container.name(),
                element.name()
            ),
            Self::Collection {
                collection,
                element,
            } => write!(f, "collection({}<{}>)", collection.container.name(), element),
            Self::RawCollection {
                collection,
                ambiguity,
            } => write!(
                f,
                "raw-collection({}, {})",
                collection.container.name(),
                ambiguity
            ),
            Self::Array { element } => write!(f, "array({element})"),
            Self::Unsupported { shape } => write!(f, "unsupported({shape})"),
        }
    }
}
