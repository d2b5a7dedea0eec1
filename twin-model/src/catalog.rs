//! Catalog of well-known library types.
//!
//! The classifier treats these by name: boxed values and strings pass
//! through, known simple value types pass through, and collection
//! containers carry a collection kind plus the concrete type used to
//! build a fresh instance.

use serde::Serialize;

use crate::TypeName;

const BOXED_OR_STRING: &[&str] = &[
    "java.lang.Boolean",
    "java.lang.Byte",
    "java.lang.Character",
    "java.lang.Short",
    "java.lang.Integer",
    "java.lang.Long",
    "java.lang.Float",
    "java.lang.Double",
    "java.lang.String",
];

const KNOWN_SIMPLE: &[&str] = &[
    "java.time.LocalDate",
    "java.time.LocalDateTime",
    "java.util.Date",
    "java.math.BigInteger",
    "java.math.BigDecimal",
    "java.sql.Timestamp",
    "java.sql.Date",
    "java.sql.Time",
];

/// Shape of a collection container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    /// Ordered, duplicates allowed.
    List,
    /// Unordered, unique elements.
    Set,
    /// Sorted, unique elements.
    SortedSet,
}

/// A known collection container.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CollectionType {
    /// The container as declared, e.g. `java.util.List`.
    pub container: TypeName,
    pub kind: CollectionKind,
    /// Concrete type used to build an instance, e.g. `java.util.ArrayList`.
    pub implementation: TypeName,
}

impl CollectionType {
    /// Whether the declared container is an abstract interface rather than
    /// a concrete type.
    pub fn is_interface(&self) -> bool {
        self.container != self.implementation
    }
}

const COLLECTIONS: &[(&str, CollectionKind, &str)] = &[
    ("java.util.Collection", CollectionKind::List, "java.util.ArrayList"),
    ("java.util.List", CollectionKind::List, "java.util.ArrayList"),
    ("java.util.ArrayList", CollectionKind::List, "java.util.ArrayList"),
    ("java.util.LinkedList", CollectionKind::List, "java.util.LinkedList"),
    ("java.util.Set", CollectionKind::Set, "java.util.HashSet"),
    ("java.util.HashSet", CollectionKind::Set, "java.util.HashSet"),
    ("java.util.LinkedHashSet", CollectionKind::Set, "java.util.LinkedHashSet"),
    ("java.util.SortedSet", CollectionKind::SortedSet, "java.util.TreeSet"),
    ("java.util.NavigableSet", CollectionKind::SortedSet, "java.util.TreeSet"),
    ("java.util.TreeSet", CollectionKind::SortedSet, "java.util.TreeSet"),
];

/// Simple names that resolve to library types without an explicit package.
const ALIASES: &[&str] = &[
    "java.lang.Object",
    "java.lang.Boolean",
    "java.lang.Byte",
    "java.lang.Character",
    "java.lang.Short",
    "java.lang.Integer",
    "java.lang.Long",
    "java.lang.Float",
    "java.lang.Double",
    "java.lang.String",
    "java.time.LocalDate",
    "java.time.LocalDateTime",
    "java.util.Date",
    "java.math.BigInteger",
    "java.math.BigDecimal",
    "java.sql.Timestamp",
    "java.sql.Time",
    "java.util.Collection",
    "java.util.List",
    "java.util.ArrayList",
    "java.util.LinkedList",
    "java.util.Set",
    "java.util.HashSet",
    "java.util.LinkedHashSet",
    "java.util.SortedSet",
    "java.util.NavigableSet",
    "java.util.TreeSet",
    "java.util.Map",
    "java.util.HashMap",
    "java.util.UUID",
];

/// Resolve a simple name to a well-known library type.
///
/// `Date` resolves to `java.util.Date`; the SQL date has to be spelled out.
pub fn resolve_alias(simple: &str) -> Option<TypeName> {
    ALIASES
        .iter()
        .map(|q| TypeName::parse(q))
        .find(|name| name.name() == simple)
}

/// Whether `name` is a boxed primitive or `String`.
pub fn is_boxed_or_string(name: &TypeName) -> bool {
    contains(BOXED_OR_STRING, name)
}

/// Whether `name` is one of the fixed simple value types.
pub fn is_known_simple(name: &TypeName) -> bool {
    contains(KNOWN_SIMPLE, name)
}

/// Look up a collection container.
pub fn collection_type(name: &TypeName) -> Option<CollectionType> {
    let qualified = name.qualified();
    COLLECTIONS
        .iter()
        .find(|(container, _, _)| *container == qualified)
        .map(|(container, kind, implementation)| CollectionType {
            container: TypeName::parse(container),
            kind: *kind,
            implementation: TypeName::parse(implementation),
        })
}

fn contains(table: &[&str], name: &TypeName) -> bool {
    let qualified = name.qualified();
    table.iter().any(|entry| *entry == qualified)
}
