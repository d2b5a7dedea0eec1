//! Type Classifier: decides how a declared field type crosses the
//! domain/transfer boundary.
//!
//! Rules apply in a fixed order and the first match wins:
//!
//! 1. the configured identifier wrapper
//! 2. primitives
//! 3. enums
//! 4. `byte[]`
//! 5. other arrays
//! 6. known collection containers
//! 7. boxed primitives and `String`
//! 8. known simple value types
//! 9. anything else is a reference to another domain class

use twin_model::{
    Ambiguity, DeclaredType, Primitive, TypeArg, TypeClassification, TypeKind, TypeName,
    UnsupportedShape, collection_type, is_boxed_or_string, is_known_simple,
};

/// Classifies declared types. Pure; the same input always yields the same
/// classification.
#[derive(Debug, Clone)]
pub struct Classifier {
    identifier: String,
}

impl Classifier {
    /// `identifier_type` is either a simple name, matched case-insensitively
    /// against the simple name of a type, or a dotted name matched exactly
    /// against the qualified name.
    pub fn new(identifier_type: impl Into<String>) -> Self {
        Self {
            identifier: identifier_type.into(),
        }
    }

    pub fn is_identifier(&self, name: &TypeName) -> bool {
        if self.identifier.contains('.') {
            name.qualified() == self.identifier
        } else {
            name.name().eq_ignore_ascii_case(&self.identifier)
        }
    }

    pub fn classify(&self, ty: &DeclaredType) -> TypeClassification {
        match ty {
            DeclaredType::Class { name, .. } if self.is_identifier(name) => {
                TypeClassification::Identifier
            }
            DeclaredType::Primitive(primitive) => TypeClassification::Primitive {
                primitive: *primitive,
            },
            DeclaredType::Class {
                name,
                kind: TypeKind::Enum,
                ..
            } => TypeClassification::Enumeration { ty: name.clone() },
            DeclaredType::Array(element) => match element.as_ref() {
                DeclaredType::Primitive(Primitive::Byte) => TypeClassification::ByteBlob,
                element => self.classify_array(element),
            },
            DeclaredType::Class { name, args, .. } => {
                if let Some(collection) = collection_type(name) {
                    return match single_argument(args) {
                        Ok(element) => self.classify_collection(collection, element),
                        Err(ambiguity) => TypeClassification::RawCollection {
                            collection,
                            ambiguity,
                        },
                    };
                }
                if is_boxed_or_string(name) {
                    TypeClassification::BoxedOrString { ty: name.clone() }
                } else if is_known_simple(name) {
                    TypeClassification::KnownSimple { ty: name.clone() }
                } else {
                    TypeClassification::ComplexSingle { ty: name.clone() }
                }
            }
        }
    }

    fn classify_array(&self, element: &DeclaredType) -> TypeClassification {
        match self.classify(element) {
            TypeClassification::Identifier => unsupported(UnsupportedShape::IdentifierElement),
            element if element.is_container() => unsupported(UnsupportedShape::NestedContainer),
            element => TypeClassification::Array {
                element: Box::new(element),
            },
        }
    }

    fn classify_collection(
        &self,
        collection: twin_model::CollectionType,
        element: &DeclaredType,
    ) -> TypeClassification {
        match self.classify(element) {
            TypeClassification::Identifier => unsupported(UnsupportedShape::IdentifierElement),
            element if element.is_container() => unsupported(UnsupportedShape::NestedContainer),
            TypeClassification::ComplexSingle { ty } => TypeClassification::ComplexCollection {
                collection,
                element: ty,
            },
            element => TypeClassification::Collection {
                collection,
                element: Box::new(element),
            },
        }
    }
}

fn unsupported(shape: UnsupportedShape) -> TypeClassification {
    TypeClassification::Unsupported { shape }
}

fn single_argument(args: &[TypeArg]) -> Result<&DeclaredType, Ambiguity> {
    match args {
        [] => Err(Ambiguity::MissingArgument),
        [TypeArg::Type(ty)] => Ok(ty),
        [TypeArg::Wildcard(_)] => Err(Ambiguity::Wildcard),
        _ => Err(Ambiguity::Arity(args.len())),
    }
}
