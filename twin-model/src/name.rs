//! Qualified type names.

use std::fmt;

use serde::{Serialize, Serializer};

/// A type name split into its namespace and simple name.
///
/// The namespace may be empty, which denotes the default namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeName {
    namespace: String,
    name: String,
}

impl TypeName {
    /// Create a type name from a namespace and a simple name.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Split a dotted name at its last segment.
    ///
    /// `"com.acme.Customer"` becomes namespace `com.acme`, name `Customer`;
    /// an undotted name lands in the default namespace.
    pub fn parse(qualified: &str) -> Self {
        match qualified.rsplit_once('.') {
            Some((namespace, name)) => Self::new(namespace, name),
            None => Self::new("", qualified),
        }
    }

    /// The namespace (package) part.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The simple name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the name lives in a non-default namespace.
    pub fn is_qualified(&self) -> bool {
        !self.namespace.is_empty()
    }

    /// The dotted, fully qualified form.
    pub fn qualified(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    /// Same namespace, different simple name.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self::new(self.namespace.clone(), name)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}.{}", self.namespace, self.name)
        }
    }
}

impl Serialize for TypeName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_qualified() {
        let name = TypeName::parse("com.acme.domain.Customer");
        assert_eq!(name.namespace(), "com.acme.domain");
        assert_eq!(name.name(), "Customer");
        assert!(name.is_qualified());
    }

    #[test]
    fn test_parse_simple() {
        let name = TypeName::parse("Customer");
        assert_eq!(name.namespace(), "");
        assert!(!name.is_qualified());
        assert_eq!(name.qualified(), "Customer");
    }

    #[test]
    fn test_display_and_serialize() {
        let name = TypeName::new("com.acme", "Role");
        assert_eq!(name.to_string(), "com.acme.Role");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"com.acme.Role\"");
    }

    #[test]
    fn test_with_name() {
        let name = TypeName::new("com.acme", "Role").with_name("RoleTransfer");
        assert_eq!(name.qualified(), "com.acme.RoleTransfer");
    }
}
