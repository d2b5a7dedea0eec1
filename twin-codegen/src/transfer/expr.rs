//! Conversion Expression Builder.

use twin_model::{
    Expr, FieldDescriptor, FieldPlan, NullPolicy, Primitive, TransferType, TypeClassification,
    TypeName, UnsupportedShape,
};

use super::NamespaceRewriter;

const STRING: (&str, &str) = ("java.lang", "String");

/// Derives transfer types and the two conversion expressions of a field
/// from its classification.
#[derive(Debug, Clone, Copy)]
pub struct ExpressionBuilder<'a> {
    rewriter: &'a NamespaceRewriter,
    suffix: &'a str,
}

impl<'a> ExpressionBuilder<'a> {
    pub fn new(rewriter: &'a NamespaceRewriter, suffix: &'a str) -> Self {
        Self { rewriter, suffix }
    }

    fn transfer_name(&self, domain: &TypeName) -> TypeName {
        self.rewriter.transfer_name(domain, self.suffix)
    }

    /// The transfer-side type, or the offending shape for unsupported
    /// classifications.
    pub fn transfer_type(
        &self,
        classification: &TypeClassification,
    ) -> Result<TransferType, UnsupportedShape> {
        Ok(match classification {
            TypeClassification::Identifier => {
                TransferType::Named(TypeName::new(STRING.0, STRING.1))
            }
            TypeClassification::Primitive { primitive } => TransferType::Primitive(*primitive),
            TypeClassification::BoxedOrString { ty }
            | TypeClassification::KnownSimple { ty }
            | TypeClassification::Enumeration { ty } => TransferType::Named(ty.clone()),
            TypeClassification::ByteBlob => {
                TransferType::Array(Box::new(TransferType::Primitive(Primitive::Byte)))
            }
            TypeClassification::ComplexSingle { ty } => TransferType::Named(self.transfer_name(ty)),
            TypeClassification::ComplexCollection {
                collection,
                element,
            } => TransferType::Collection {
                container: collection.container.clone(),
                element: Box::new(TransferType::Named(self.transfer_name(element))),
            },
            TypeClassification::Collection {
                collection,
                element,
            } => TransferType::Collection {
                container: collection.container.clone(),
                element: Box::new(self.transfer_type(element)?),
            },
            TypeClassification::RawCollection { collection, .. } => {
                TransferType::RawCollection(collection.container.clone())
            }
            TypeClassification::Array { element } => {
                TransferType::Array(Box::new(self.transfer_type(element)?))
            }
            TypeClassification::Unsupported { shape } => return Err(*shape),
        })
    }

    /// `(to_transfer, to_domain)` expressions for a classification.
    pub fn build_pair(
        &self,
        classification: &TypeClassification,
    ) -> Result<(Expr, Expr), UnsupportedShape> {
        Ok(match classification {
            TypeClassification::Identifier => (
                Expr::Stringify,
                Expr::Unsupported {
                    reason: "identifier wrapper has no conversion from its string form"
                        .to_string(),
                },
            ),
            TypeClassification::ComplexSingle { ty } => {
                let nested = Expr::Nested {
                    domain: ty.clone(),
                    transfer: self.transfer_name(ty),
                };
                (nested.clone(), nested)
            }
            TypeClassification::ComplexCollection {
                collection,
                element,
            } => {
                let each = |on_null| Expr::Each {
                    domain: element.clone(),
                    transfer: self.transfer_name(element),
                    collection: collection.clone(),
                    on_null,
                };
                (each(NullPolicy::Propagate), each(NullPolicy::EmptyCollection))
            }
            TypeClassification::Array { element } => match element.as_ref() {
                TypeClassification::ComplexSingle { ty } => {
                    let each = Expr::EachArray {
                        domain: ty.clone(),
                        transfer: self.transfer_name(ty),
                    };
                    (each.clone(), each)
                }
                TypeClassification::Unsupported { shape } => return Err(*shape),
                _ => (Expr::Read, Expr::Read),
            },
            TypeClassification::Unsupported { shape } => return Err(*shape),
            TypeClassification::Primitive { .. }
            | TypeClassification::BoxedOrString { .. }
            | TypeClassification::KnownSimple { .. }
            | TypeClassification::Enumeration { .. }
            | TypeClassification::ByteBlob
            | TypeClassification::Collection { .. }
            | TypeClassification::RawCollection { .. } => (Expr::Read, Expr::Read),
        })
    }

    /// The complete plan for one field.
    pub fn plan_field(
        &self,
        field: &FieldDescriptor,
        classification: TypeClassification,
    ) -> Result<FieldPlan, UnsupportedShape> {
        let transfer_type = self.transfer_type(&classification)?;
        let (to_transfer, to_domain) = self.build_pair(&classification)?;
        Ok(FieldPlan {
            field: field.name.clone(),
            declared: field.declared.clone(),
            classification,
            transfer_type,
            to_transfer,
            to_domain,
            inherited: field.inherited,
        })
    }
}

#[cfg(test)]
mod tests {
    use twin_model::{CollectionKind, collection_type};

    use super::*;

    fn rewriter() -> NamespaceRewriter {
        NamespaceRewriter::new("com.acme.domain", "com.acme.transfer")
    }

    fn role() -> TypeName {
        TypeName::parse("com.acme.domain.Role")
    }

    #[test]
    fn test_pass_through_reads_both_ways() {
        let r = rewriter();
        let b = ExpressionBuilder::new(&r, "Transfer");
        for classification in [
            TypeClassification::Primitive {
                primitive: Primitive::Long,
            },
            TypeClassification::BoxedOrString {
                ty: TypeName::parse("java.lang.String"),
            },
            TypeClassification::ByteBlob,
        ] {
            assert_eq!(b.build_pair(&classification), Ok((Expr::Read, Expr::Read)));
        }
    }

    #[test]
    fn test_identifier_is_one_way() {
        let r = rewriter();
        let b = ExpressionBuilder::new(&r, "Transfer");
        let (to_transfer, to_domain) = b.build_pair(&TypeClassification::Identifier).unwrap();
        assert_eq!(to_transfer, Expr::Stringify);
        assert!(!to_domain.is_supported());
        assert_eq!(
            b.transfer_type(&TypeClassification::Identifier).unwrap().to_string(),
            "java.lang.String"
        );
    }

    #[test]
    fn test_complex_collection_null_policies() {
        let r = rewriter();
        let b = ExpressionBuilder::new(&r, "Transfer");
        let set = collection_type(&TypeName::new("java.util", "Set")).unwrap();
        let classification = TypeClassification::ComplexCollection {
            collection: set,
            element: role(),
        };

        let (to_transfer, to_domain) = b.build_pair(&classification).unwrap();
        match (to_transfer, to_domain) {
            (
                Expr::Each {
                    on_null: NullPolicy::Propagate,
                    transfer,
                    collection,
                    ..
                },
                Expr::Each {
                    on_null: NullPolicy::EmptyCollection,
                    ..
                },
            ) => {
                assert_eq!(transfer.qualified(), "com.acme.transfer.RoleTransfer");
                assert_eq!(collection.kind, CollectionKind::Set);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(
            b.transfer_type(&classification).unwrap().to_string(),
            "java.util.Set<com.acme.transfer.RoleTransfer>"
        );
    }

    #[test]
    fn test_arrays() {
        let r = rewriter();
        let b = ExpressionBuilder::new(&r, "Transfer");
        let roles = TypeClassification::Array {
            element: Box::new(TypeClassification::ComplexSingle { ty: role() }),
        };
        assert!(matches!(
            b.build_pair(&roles).unwrap().0,
            Expr::EachArray { .. }
        ));
        assert_eq!(
            b.transfer_type(&roles).unwrap().to_string(),
            "com.acme.transfer.RoleTransfer[]"
        );

        let numbers = TypeClassification::Array {
            element: Box::new(TypeClassification::Primitive {
                primitive: Primitive::Int,
            }),
        };
        assert_eq!(b.build_pair(&numbers), Ok((Expr::Read, Expr::Read)));
    }

    #[test]
    fn test_unsupported_shape_is_reported() {
        let r = rewriter();
        let b = ExpressionBuilder::new(&r, "Transfer");
        let classification = TypeClassification::Unsupported {
            shape: UnsupportedShape::NestedContainer,
        };
        assert_eq!(
            b.transfer_type(&classification),
            Err(UnsupportedShape::NestedContainer)
        );
        assert_eq!(
            b.build_pair(&classification),
            Err(UnsupportedShape::NestedContainer)
        );
    }
}
