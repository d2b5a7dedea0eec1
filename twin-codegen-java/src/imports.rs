//! Import resolution for one Java compilation unit.

use std::collections::HashMap;

use twin_codegen::generation::ImportCollector;
use twin_model::TypeName;

const IMPLICIT_PACKAGE: &str = "java.lang";

/// Decides how each referenced type is spelled inside one Java file.
///
/// The first type to claim a simple name owns it: it is imported (unless it
/// lives in `java.lang`, the file's own package or the default package) and
/// written by its simple name. Any later type with the same simple name is
/// written fully qualified. Types declared in the file itself claim their
/// names before anything else is registered.
#[derive(Debug, Clone)]
pub struct JavaImports {
    package: String,
    owners: HashMap<String, String>,
    imports: ImportCollector,
}

impl JavaImports {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            owners: HashMap::new(),
            imports: ImportCollector::new(),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    /// Claim a simple name for a type declared in this file.
    pub fn declare(&mut self, simple: &str) {
        let owner = TypeName::new(self.package.clone(), simple).qualified();
        self.owners.entry(simple.to_string()).or_insert(owner);
    }

    /// Register a referenced type. Registration order decides who wins a
    /// simple-name clash.
    pub fn register(&mut self, name: &TypeName) {
        let qualified = name.qualified();
        if self.owners.contains_key(name.name()) {
            return;
        }
        self.owners.insert(name.name().to_string(), qualified);
        if self.needs_import(name) {
            self.imports.add_type(name);
        }
    }

    /// Register a type and return its spelling.
    pub fn use_type(&mut self, name: &TypeName) -> String {
        self.register(name);
        self.spell(name)
    }

    /// Same as [`use_type`](Self::use_type) for a dotted name.
    pub fn use_qualified(&mut self, qualified: &str) -> String {
        self.use_type(&TypeName::parse(qualified))
    }

    /// How `name` is written in this file. Unregistered names are written
    /// fully qualified.
    pub fn spell(&self, name: &TypeName) -> String {
        match self.owners.get(name.name()) {
            Some(owner) if *owner == name.qualified() => name.name().to_string(),
            _ => name.qualified(),
        }
    }

    /// Sorted `import` statements.
    pub fn lines(&self) -> Vec<String> {
        self.imports
            .qualified()
            .map(|qualified| format!("import {qualified};"))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    fn needs_import(&self, name: &TypeName) -> bool {
        name.is_qualified()
            && name.namespace() != IMPLICIT_PACKAGE
            && name.namespace() != self.package
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implicit_and_same_package_types_are_not_imported() {
        let mut imports = JavaImports::new("com.acme.transfer");
        assert_eq!(imports.use_qualified("java.lang.String"), "String");
        assert_eq!(
            imports.use_qualified("com.acme.transfer.AddressTransfer"),
            "AddressTransfer"
        );
        assert_eq!(imports.use_qualified("MoneyTransfer"), "MoneyTransfer");
        assert!(imports.is_empty());
    }

    #[test]
    fn test_imports_are_sorted_and_deduplicated() {
        let mut imports = JavaImports::new("com.acme.transfer");
        imports.use_qualified("lombok.Getter");
        imports.use_qualified("java.util.List");
        imports.use_qualified("java.util.List");
        imports.use_qualified("com.acme.domain.Customer");

        assert_eq!(
            imports.lines(),
            [
                "import com.acme.domain.Customer;",
                "import java.util.List;",
                "import lombok.Getter;",
            ]
        );
    }

    #[test]
    fn test_later_clash_is_fully_qualified() {
        let mut imports = JavaImports::new("com.acme.transfer");
        assert_eq!(imports.use_qualified("java.sql.Date"), "Date");
        assert_eq!(imports.use_qualified("java.util.Date"), "java.util.Date");
        assert_eq!(imports.lines(), ["import java.sql.Date;"]);
    }

    #[test]
    fn test_declared_names_win() {
        let mut imports = JavaImports::new("com.acme.infra.adapter");
        imports.declare("PageEntity");

        let foreign = TypeName::parse("com.acme.paging.PageEntity");
        assert_eq!(imports.use_type(&foreign), "com.acme.paging.PageEntity");
        assert!(imports.is_empty());
    }

    #[test]
    fn test_unregistered_names_are_qualified() {
        let imports = JavaImports::new("com.acme");
        assert_eq!(
            imports.spell(&TypeName::parse("java.util.Set")),
            "java.util.Set"
        );
    }
}
