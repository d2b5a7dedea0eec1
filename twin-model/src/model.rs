//! The class model: domain classes declared in model files, resolved by
//! name, with inherited fields flattened on load.

use std::collections::HashSet;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use thiserror::Error;

use crate::{
    ArgExpr, Bound, DeclaredType, TypeArg, TypeExpr, TypeKind, TypeName, WildcardBound, resolve_alias,
};

const ROOT_CLASS: &str = "java.lang.Object";

/// A field as written in a model file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub ty: TypeExpr,
}

/// A class as written in a model file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDef {
    pub name: TypeName,
    /// Superclass name, qualified or simple.
    pub extends: Option<String>,
    pub fields: Vec<FieldDef>,
}

/// Error raised when loading a class from the model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("class '{0}' is not declared in any model file")]
    UnknownClass(TypeName),

    #[error("'{0}' is an enum, not a class")]
    NotAClass(TypeName),

    #[error("superclass '{superclass}' of '{class}' is not declared in any model file")]
    UnknownSuperclass { class: TypeName, superclass: TypeName },

    #[error("inheritance cycle through '{0}'")]
    InheritanceCycle(TypeName),
}

/// A field of a loaded class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(serialize_with = "serialize_display")]
    pub declared: DeclaredType,
    /// Whether the field is declared by a superclass.
    pub inherited: bool,
    pub declared_in: TypeName,
}

/// A class with its full field set, sorted by field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedClass {
    pub name: TypeName,
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Clone)]
struct ResolvedClass {
    superclass: Option<TypeName>,
    fields: Vec<(String, DeclaredType)>,
}

/// Builder collecting class and enum declarations before name resolution.
#[derive(Debug, Default)]
pub struct ClassModelBuilder {
    classes: Vec<ClassDef>,
    enums: Vec<TypeName>,
}

impl ClassModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a class.
    pub fn class(mut self, class: ClassDef) -> Self {
        self.classes.push(class);
        self
    }

    /// Declare an enum.
    pub fn enumeration(mut self, name: TypeName) -> Self {
        self.enums.push(name);
        self
    }

    /// Resolve every type name and freeze the model.
    ///
    /// A simple name resolves, in order, to a well-known library type, a
    /// declaration in the owning class's package, a declaration with a
    /// unique simple name anywhere in the model, and finally to the owning
    /// class's package.
    pub fn build(self) -> ClassModel {
        let enums: IndexSet<TypeName> = self.enums.into_iter().collect();
        let mut declared: IndexSet<TypeName> = enums.clone();
        declared.extend(self.classes.iter().map(|c| c.name.clone()));

        let resolver = Resolver {
            declared: &declared,
            enums: &enums,
        };

        let classes = self
            .classes
            .iter()
            .map(|class| {
                let owner = class.name.namespace();
                let superclass = class
                    .extends
                    .as_deref()
                    .map(|name| resolver.name(name, owner))
                    .filter(|name| name.qualified() != ROOT_CLASS);
                let fields = class
                    .fields
                    .iter()
                    .map(|f| (f.name.clone(), resolver.declared(&f.ty, owner)))
                    .collect();
                (class.name.clone(), ResolvedClass { superclass, fields })
            })
            .collect();

        ClassModel { classes, enums }
    }
}

struct Resolver<'a> {
    declared: &'a IndexSet<TypeName>,
    enums: &'a IndexSet<TypeName>,
}

impl Resolver<'_> {
    fn name(&self, written: &str, owner: &str) -> TypeName {
        if written.contains('.') {
            return TypeName::parse(written);
        }
        if let Some(alias) = resolve_alias(written) {
            return alias;
        }
        let local = TypeName::new(owner, written);
        if self.declared.contains(&local) {
            return local;
        }
        let mut matches = self.declared.iter().filter(|d| d.name() == written);
        if let (Some(only), None) = (matches.next(), matches.next()) {
            return only.clone();
        }
        local
    }

    fn declared(&self, expr: &TypeExpr, owner: &str) -> DeclaredType {
        let base = match expr.primitive() {
            Some(p) => DeclaredType::Primitive(p),
            None => self.class(expr, owner),
        };
        (0..expr.dims).fold(base, |ty, _| DeclaredType::array(ty))
    }

    fn class(&self, expr: &TypeExpr, owner: &str) -> DeclaredType {
        let name = self.name(&expr.name, owner);
        let kind = if self.enums.contains(&name) {
            TypeKind::Enum
        } else {
            TypeKind::Class
        };
        let args = expr
            .args
            .iter()
            .map(|arg| match arg {
                ArgExpr::Type(ty) => TypeArg::Type(self.declared(ty, owner)),
                ArgExpr::Wildcard(None) => TypeArg::Wildcard(None),
                ArgExpr::Wildcard(Some((bound, ty))) => {
                    let ty = Box::new(self.declared(ty, owner));
                    TypeArg::Wildcard(Some(match bound {
                        Bound::Extends => WildcardBound::Extends(ty),
                        Bound::Super => WildcardBound::Super(ty),
                    }))
                }
            })
            .collect();
        DeclaredType::Class { name, kind, args }
    }
}

/// The resolved class model.
#[derive(Debug, Clone, Default)]
pub struct ClassModel {
    classes: IndexMap<TypeName, ResolvedClass>,
    enums: IndexSet<TypeName>,
}

impl ClassModel {
    pub fn builder() -> ClassModelBuilder {
        ClassModelBuilder::new()
    }

    /// Declared class names, in declaration order.
    pub fn classes(&self) -> impl Iterator<Item = &TypeName> {
        self.classes.keys()
    }

    pub fn contains(&self, name: &TypeName) -> bool {
        self.classes.contains_key(name)
    }

    pub fn is_enum(&self, name: &TypeName) -> bool {
        self.enums.contains(name)
    }

    /// Load a class with every inherited field, sorted by field name.
    ///
    /// The sort is stable: when a subclass redeclares a superclass field
    /// the subclass's field comes first.
    pub fn load(&self, name: &TypeName) -> Result<LoadedClass, ModelError> {
        if self.enums.contains(name) {
            return Err(ModelError::NotAClass(name.clone()));
        }
        let mut current = self
            .classes
            .get(name)
            .ok_or_else(|| ModelError::UnknownClass(name.clone()))?;
        let mut current_name = name;
        let mut visited = HashSet::from([name]);
        let mut fields = Vec::new();

        loop {
            fields.extend(current.fields.iter().map(|(field, declared)| FieldDescriptor {
                name: field.clone(),
                declared: declared.clone(),
                inherited: current_name != name,
                declared_in: current_name.clone(),
            }));

            let Some(superclass) = &current.superclass else {
                break;
            };
            if !visited.insert(superclass) {
                return Err(ModelError::InheritanceCycle(superclass.clone()));
            }
            current = self
                .classes
                .get(superclass)
                .ok_or_else(|| ModelError::UnknownSuperclass {
                    class: current_name.clone(),
                    superclass: superclass.clone(),
                })?;
            current_name = superclass;
        }

        fields.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(LoadedClass {
            name: name.clone(),
            fields,
        })
    }
}

fn serialize_display<S: serde::Serializer>(
    value: &DeclaredType,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_type;

    fn field(name: &str, ty: &str) -> FieldDef {
        FieldDef {
            name: name.to_string(),
            ty: parse_type(ty).unwrap(),
        }
    }

    fn class(name: &str, extends: Option<&str>, fields: Vec<FieldDef>) -> ClassDef {
        ClassDef {
            name: TypeName::parse(name),
            extends: extends.map(str::to_string),
            fields,
        }
    }

    fn sample() -> ClassModel {
        ClassModel::builder()
            .class(class(
                "com.acme.domain.shared.Entity",
                None,
                vec![field("id", "ArchbaseIdentifier"), field("version", "Long")],
            ))
            .class(class(
                "com.acme.domain.customer.Customer",
                Some("com.acme.domain.shared.Entity"),
                vec![
                    field("name", "String"),
                    field("address", "Address"),
                    field("status", "Status"),
                    field("roles", "List<Role>"),
                ],
            ))
            .class(class("com.acme.domain.customer.Address", None, vec![]))
            .class(class("com.acme.domain.security.Role", Some("Object"), vec![]))
            .enumeration(TypeName::parse("com.acme.domain.customer.Status"))
            .build()
    }

    #[test]
    fn test_load_flattens_and_sorts() {
        let loaded = sample()
            .load(&TypeName::parse("com.acme.domain.customer.Customer"))
            .unwrap();
        let names: Vec<_> = loaded.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["address", "id", "name", "roles", "status", "version"]
        );

        let id = &loaded.fields[1];
        assert!(id.inherited);
        assert_eq!(id.declared_in.name(), "Entity");
        assert!(!loaded.fields[0].inherited);
    }

    #[test]
    fn test_name_resolution() {
        let loaded = sample()
            .load(&TypeName::parse("com.acme.domain.customer.Customer"))
            .unwrap();
        let ty = |name: &str| {
            loaded
                .fields
                .iter()
                .find(|f| f.name == name)
                .map(|f| f.declared.to_string())
                .unwrap()
        };
        assert_eq!(ty("name"), "java.lang.String");
        assert_eq!(ty("address"), "com.acme.domain.customer.Address");
        assert_eq!(ty("roles"), "java.util.List<com.acme.domain.security.Role>");
        // Undeclared simple names fall back to the owner's package.
        assert_eq!(ty("id"), "com.acme.domain.shared.ArchbaseIdentifier");
    }

    #[test]
    fn test_enum_kind() {
        let loaded = sample()
            .load(&TypeName::parse("com.acme.domain.customer.Customer"))
            .unwrap();
        let status = loaded.fields.iter().find(|f| f.name == "status").unwrap();
        assert!(matches!(
            status.declared,
            DeclaredType::Class {
                kind: TypeKind::Enum,
                ..
            }
        ));
    }

    #[test]
    fn test_object_superclass_is_root() {
        let loaded = sample()
            .load(&TypeName::parse("com.acme.domain.security.Role"))
            .unwrap();
        assert!(loaded.fields.is_empty());
    }

    #[test]
    fn test_load_errors() {
        let model = ClassModel::builder()
            .class(class("a.A", Some("a.B"), vec![]))
            .class(class("a.B", Some("A"), vec![]))
            .class(class("a.C", Some("a.Missing"), vec![]))
            .enumeration(TypeName::parse("a.E"))
            .build();

        assert_eq!(
            model.load(&TypeName::parse("a.Nope")),
            Err(ModelError::UnknownClass(TypeName::parse("a.Nope")))
        );
        assert_eq!(
            model.load(&TypeName::parse("a.E")),
            Err(ModelError::NotAClass(TypeName::parse("a.E")))
        );
        assert_eq!(
            model.load(&TypeName::parse("a.A")),
            Err(ModelError::InheritanceCycle(TypeName::parse("a.A")))
        );
        assert_eq!(
            model.load(&TypeName::parse("a.C")),
            Err(ModelError::UnknownSuperclass {
                class: TypeName::parse("a.C"),
                superclass: TypeName::parse("a.Missing"),
            })
        );
    }

    #[test]
    fn test_redeclared_field_keeps_both() {
        let model = ClassModel::builder()
            .class(class("a.Base", None, vec![field("name", "String")]))
            .class(class("a.Child", Some("Base"), vec![field("name", "String")]))
            .build();
        let loaded = model.load(&TypeName::parse("a.Child")).unwrap();
        assert_eq!(loaded.fields.len(), 2);
        assert!(!loaded.fields[0].inherited);
        assert!(loaded.fields[1].inherited);
    }
}
