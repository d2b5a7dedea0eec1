//! Rendering transfer-side types into a target language.

use twin_model::{Primitive, TransferType, TypeName};

/// Maps [`TransferType`]s to type expressions of a target language.
///
/// Only [`map_primitive`](TypeMapper::map_primitive) and
/// [`map_named`](TypeMapper::map_named) are required; containers default to
/// `T[]` and `Base<Arg>`.
pub trait TypeMapper {
    fn map_primitive(&self, ty: Primitive) -> String;

    /// How a class name is spelled, e.g. simple or fully qualified.
    fn map_named(&self, name: &TypeName) -> String;

    fn map_array(&self, inner: &str) -> String {
        format!("{inner}[]")
    }

    fn map_generic(&self, base: &str, args: &[String]) -> String {
        if args.is_empty() {
            base.to_string()
        } else {
            format!("{}<{}>", base, args.join(", "))
        }
    }

    fn render_type(&self, ty: &TransferType) -> String {
        match ty {
            TransferType::Primitive(p) => self.map_primitive(*p),
            TransferType::Named(name) | TransferType::RawCollection(name) => self.map_named(name),
            TransferType::Array(inner) => {
                let inner = self.render_type(inner);
                self.map_array(&inner)
            }
            TransferType::Collection { container, element } => {
                let base = self.map_named(container);
                let arg = self.render_type(element);
                self.map_generic(&base, &[arg])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Simple;

    impl TypeMapper for Simple {
        fn map_primitive(&self, ty: Primitive) -> String {
            ty.keyword().to_string()
        }

        fn map_named(&self, name: &TypeName) -> String {
            name.name().to_string()
        }
    }

    #[test]
    fn test_render_nested_types() {
        let ty = TransferType::Collection {
            container: TypeName::new("java.util", "List"),
            element: Box::new(TransferType::Named(TypeName::new("com.acme", "RoleTransfer"))),
        };
        assert_eq!(Simple.render_type(&ty), "List<RoleTransfer>");

        let bytes = TransferType::Array(Box::new(TransferType::Primitive(Primitive::Byte)));
        assert_eq!(Simple.render_type(&bytes), "byte[]");

        let raw = TransferType::RawCollection(TypeName::new("java.util", "Set"));
        assert_eq!(Simple.render_type(&raw), "Set");
    }
}
