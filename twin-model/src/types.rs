//! Resolved declared types of domain fields.

use std::fmt;

use serde::Serialize;

use crate::TypeName;

/// Primitive value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl Primitive {
    /// All primitive types, in declaration order.
    pub const ALL: [Primitive; 8] = [
        Self::Boolean,
        Self::Byte,
        Self::Char,
        Self::Short,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
    ];

    /// The source keyword (e.g. `int`).
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    /// Look up a primitive by keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// What kind of declaration a class-like type refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeKind {
    /// A class or interface.
    #[default]
    Class,
    /// An enumeration.
    Enum,
}

/// Bound of a wildcard type argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WildcardBound {
    Extends(Box<DeclaredType>),
    Super(Box<DeclaredType>),
}

/// A type argument of a parameterized type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeArg {
    /// A concrete type argument.
    Type(DeclaredType),
    /// `?`, optionally bounded.
    Wildcard(Option<WildcardBound>),
}

/// The declared type of a field, with every name resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    /// A primitive value type.
    Primitive(Primitive),
    /// An array of the element type.
    Array(Box<DeclaredType>),
    /// A class, interface or enum, possibly parameterized.
    Class {
        name: TypeName,
        kind: TypeKind,
        args: Vec<TypeArg>,
    },
}

impl DeclaredType {
    /// A non-generic class type.
    pub fn class(name: TypeName) -> Self {
        Self::Class {
            name,
            kind: TypeKind::Class,
            args: Vec::new(),
        }
    }

    /// An enum type.
    pub fn enumeration(name: TypeName) -> Self {
        Self::Class {
            name,
            kind: TypeKind::Enum,
            args: Vec::new(),
        }
    }

    /// A parameterized class type.
    pub fn generic(name: TypeName, args: Vec<TypeArg>) -> Self {
        Self::Class {
            name,
            kind: TypeKind::Class,
            args,
        }
    }

    /// An array of `element`.
    pub fn array(element: DeclaredType) -> Self {
        Self::Array(Box::new(element))
    }

    /// The class name, if this is a class-like type.
    pub fn class_name(&self) -> Option<&TypeName> {
        match self {
            Self::Class { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Render with simple names only (e.g. `List<Role>`), for reports.
    pub fn short(&self) -> String {
        let mut out = String::new();
        self.write(&mut out, false);
        out
    }

    fn write(&self, out: &mut String, qualified: bool) {
        match self {
            Self::Primitive(p) => out.push_str(p.keyword()),
            Self::Array(element) => {
                element.write(out, qualified);
                out.push_str("[]");
            }
            Self::Class { name, args, .. } => {
                if qualified {
                    out.push_str(&name.qualified());
                } else {
                    out.push_str(name.name());
                }
                if !args.is_empty() {
                    out.push('<');
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            out.push_str(", ");
                        }
                        match arg {
                            TypeArg::Type(ty) => ty.write(out, qualified),
                            TypeArg::Wildcard(None) => out.push('?'),
                            TypeArg::Wildcard(Some(WildcardBound::Extends(ty))) => {
                                out.push_str("? extends ");
                                ty.write(out, qualified);
                            }
                            TypeArg::Wildcard(Some(WildcardBound::Super(ty))) => {
                                out.push_str("? super ");
                                ty.write(out, qualified);
                            }
                        }
                    }
                    out.push('>');
                }
            }
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write(&mut out, true);
        f.write_str(&out)
    }
}
