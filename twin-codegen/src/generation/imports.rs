//! Import collection.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use twin_model::TypeName;

/// Tracks imported symbols per module, deduplicated.
///
/// Modules keep insertion order; symbols within a module are sorted.
///
/// ```
/// use twin_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("java.util", "List");
/// imports.add("java.util", "ArrayList");
/// imports.add("lombok", "Getter");
///
/// let lines: Vec<String> = imports.qualified().collect();
/// assert_eq!(lines, ["java.util.ArrayList", "java.util.List", "lombok.Getter"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: IndexMap<String, BTreeSet<String>>,
}

impl ImportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, module: &str, symbol: &str) {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string());
    }

    /// Add a qualified type name. Names in the default namespace are ignored.
    pub fn add_type(&mut self, name: &TypeName) {
        if name.is_qualified() {
            self.add(name.namespace(), name.name());
        }
    }

    pub fn merge(&mut self, other: &ImportCollector) {
        for (module, symbols) in &other.imports {
            let entry = self.imports.entry(module.clone()).or_default();
            entry.extend(symbols.iter().cloned());
        }
    }

    pub fn has_module(&self, module: &str) -> bool {
        self.imports.contains_key(module)
    }

    pub fn has_symbol(&self, module: &str, symbol: &str) -> bool {
        self.imports
            .get(module)
            .is_some_and(|symbols| symbols.contains(symbol))
    }

    /// Drop every symbol of `module`.
    pub fn remove_module(&mut self, module: &str) {
        self.imports.shift_remove(module);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// `module.Symbol` strings, sorted.
    pub fn qualified(&self) -> impl Iterator<Item = String> {
        let all: BTreeSet<String> = self
            .imports
            .iter()
            .flat_map(|(module, symbols)| symbols.iter().map(move |s| format!("{module}.{s}")))
            .collect();
        all.into_iter()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.values().all(BTreeSet::is_empty)
    }

    /// Number of modules.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}
